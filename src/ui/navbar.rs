// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown at the top of every screen: screen links, the
//! language picker, and the dark-mode toggle.

use crate::app::Screen;
use crate::i18n::{Locale, Localizer};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, space, Button, Row, Text},
    Element,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ScreenSelected(Screen),
    LocaleSelected(Locale),
    ToggleTheme,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(8).padding(12).align_y(Vertical::Center);

    for screen in Screen::ALL {
        row = row.push(screen_link(ctx.localizer, screen, ctx.screen));
    }

    row = row.push(space::horizontal());

    let theme_label = ctx.localizer.tr(ctx.theme_mode.toggled().label_key());
    row = row.push(button(Text::new(theme_label)).on_press(Message::ToggleTheme));

    let locales: Vec<Locale> = crate::i18n::registry::all().to_vec();
    let picker = pick_list(
        locales,
        Some(*ctx.localizer.active_locale()),
        Message::LocaleSelected,
    );
    row = row.push(picker);

    row.into()
}

fn screen_link<'a>(
    localizer: &'a Localizer,
    screen: Screen,
    current: Screen,
) -> Button<'a, Message> {
    let link = button(Text::new(localizer.tr(screen.label_key())));
    if screen == current {
        // The active screen link stays rendered but inert.
        link
    } else {
        link.on_press(Message::ScreenSelected(screen))
    }
}
