// SPDX-License-Identifier: MPL-2.0
//! Footer line shown under every screen.

use crate::i18n::Localizer;
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    widget::{container, Text},
    Element, Length,
};

/// Render the copyright footer with the current year interpolated.
pub fn view<'a, Message: 'a>(localizer: &'a Localizer) -> Element<'a, Message> {
    let year = chrono::Utc::now().year().to_string();
    let text = localizer.tr_with("footer.copyright", &[("year", year.as_str())]);

    container(Text::new(text).size(13))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(8)
        .into()
}
