// SPDX-License-Identifier: MPL-2.0
//! Single-post screen: renders a loaded markdown body.
//!
//! The body arrives asynchronously after the post is selected on the blog
//! screen; until then the screen shows nothing but the metadata header.

use crate::content::PostMeta;
use crate::i18n::Localizer;
use iced::{
    widget::{button, markdown, scrollable, Column, Text},
    Element, Length,
};

/// State of the currently open post.
#[derive(Debug)]
pub struct State {
    pub meta: &'static PostMeta,
    items: Vec<markdown::Item>,
}

impl State {
    /// Parses a markdown body for display. Parsing is total; malformed
    /// markdown degrades to plain paragraphs.
    #[must_use]
    pub fn new(meta: &'static PostMeta, body: &str) -> Self {
        Self {
            meta,
            items: markdown::parse(body).collect(),
        }
    }

    /// Whether the body has arrived yet.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Contextual data needed to render the post screen.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
    pub state: &'a State,
}

/// Messages emitted by the post screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToList,
    /// A link inside the body was clicked; the URL is copied to the
    /// clipboard.
    LinkClicked(markdown::Uri),
}

/// Render the open post.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = button(Text::new(ctx.localizer.tr("blog.back"))).on_press(Message::BackToList);

    let date = ctx.state.meta.date.format("%Y-%m-%d").to_string();
    let published = ctx
        .localizer
        .tr_with("blog.published_on", &[("date", date.as_str())]);

    let body = markdown::view(&ctx.state.items, markdown::Settings::from(iced::Theme::Light))
        .map(Message::LinkClicked);

    let column = Column::new()
        .spacing(16)
        .padding(24)
        .push(back)
        .push(Text::new(ctx.state.meta.title).size(28))
        .push(Text::new(published).size(14))
        .push(body);

    scrollable(column).width(Length::Fill).into()
}
