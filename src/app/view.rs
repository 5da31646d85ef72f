// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::Localizer;
use crate::ui::blog::{self, ViewContext as BlogViewContext};
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::footer;
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::post::{self, ViewContext as PostViewContext};
use crate::ui::projects::{self, ViewContext as ProjectsViewContext};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub contact: &'a contact::State,
    pub open_post: Option<&'a post::State>,
    /// Translation key of a transient status line, if any.
    pub notice_key: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        localizer: ctx.localizer,
        screen: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(HomeViewContext {
            localizer: ctx.localizer,
        }),
        Screen::Projects => projects::view(ProjectsViewContext {
            localizer: ctx.localizer,
        })
        .map(Message::Projects),
        Screen::Blog => blog::view(BlogViewContext {
            localizer: ctx.localizer,
        })
        .map(Message::Blog),
        Screen::Post => view_post(ctx.localizer, ctx.open_post),
        Screen::Contact => contact::view(ContactViewContext {
            localizer: ctx.localizer,
            state: ctx.contact,
        })
        .map(Message::Contact),
    };

    let mut column = Column::new().push(navbar_view);
    if let Some(key) = ctx.notice_key {
        column = column.push(
            Container::new(Text::new(ctx.localizer.tr(key)).size(13))
                .width(Length::Fill)
                .padding([2, 12]),
        );
    }
    column = column
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer::view(ctx.localizer));

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_post<'a>(
    localizer: &'a Localizer,
    open_post: Option<&'a post::State>,
) -> Element<'a, Message> {
    if let Some(state) = open_post {
        post::view(PostViewContext { localizer, state }).map(Message::Post)
    } else {
        // Body still loading; the header arrives with it.
        Container::new(Text::new(localizer.tr("blog.title")))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .into()
    }
}
