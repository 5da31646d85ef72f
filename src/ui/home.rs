// SPDX-License-Identifier: MPL-2.0
//! Home screen: biography and skill tags.

use crate::i18n::{Direction, Localizer};
use iced::{
    alignment::Horizontal,
    widget::{container, scrollable, Column, Row, Text},
    Element, Length,
};

/// Display name interpolated into the localized greeting.
const AUTHOR_NAME: &str = "Bawycle";

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
}

/// Render the home screen. Text aligns to the reading direction of the
/// active locale.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let align = match ctx.localizer.direction() {
        Direction::LeftToRight => Horizontal::Left,
        Direction::RightToLeft => Horizontal::Right,
    };

    let greeting = Text::new(ctx.localizer.tr_with("home.greeting", &[("name", AUTHOR_NAME)]))
        .size(32)
        .width(Length::Fill)
        .align_x(align);
    let role = Text::new(ctx.localizer.tr("home.role"))
        .size(20)
        .width(Length::Fill)
        .align_x(align);
    let intro = Text::new(ctx.localizer.tr("home.intro"))
        .width(Length::Fill)
        .align_x(align);

    let mut tags = Row::new().spacing(8);
    for tag in ctx.localizer.tr_list("home.tags") {
        tags = tags.push(container(Text::new(tag).size(14)).padding([2, 8]));
    }

    let column = Column::new()
        .spacing(16)
        .padding(24)
        .push(greeting)
        .push(role)
        .push(intro)
        .push(tags);

    scrollable(column).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn home_renders_in_every_locale() {
        let dir = tempdir().expect("create temp dir");
        let mut localizer = Localizer::new(None, Some(dir.path().to_path_buf()));

        for locale in crate::i18n::registry::all() {
            localizer.switch_locale(locale.code);
            let _element: Element<'_, ()> = view(ViewContext {
                localizer: &localizer,
            });
        }
    }

    #[test]
    fn greeting_interpolates_the_author_name() {
        let dir = tempdir().expect("create temp dir");
        let localizer = Localizer::new(Some("en".to_string()), Some(dir.path().to_path_buf()));

        let greeting = localizer.tr_with("home.greeting", &[("name", AUTHOR_NAME)]);
        assert!(greeting.contains(AUTHOR_NAME));
        assert!(!greeting.contains("{{name}}"));
    }
}
