// SPDX-License-Identifier: MPL-2.0
//! Blog screen: the post list.

use crate::content::{PostMeta, POSTS};
use crate::i18n::Localizer;
use iced::{
    widget::{button, container, scrollable, Column, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the blog screen.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
}

/// Messages emitted by the blog screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A post was selected; the slug identifies the body to load.
    PostSelected(&'static str),
}

/// Render the post list, newest first.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.localizer.tr("blog.title")).size(28);

    let mut column = Column::new().spacing(16).padding(24).push(title);
    for post in &POSTS {
        column = column.push(entry(ctx.localizer, post));
    }

    scrollable(column).width(Length::Fill).into()
}

fn entry<'a>(localizer: &'a Localizer, post: &'static PostMeta) -> Element<'a, Message> {
    let date = post.date.format("%Y-%m-%d").to_string();
    let published = localizer.tr_with("blog.published_on", &[("date", date.as_str())]);

    let mut tags = Row::new().spacing(8);
    for tag in post.tags {
        tags = tags.push(Text::new(*tag).size(13));
    }

    let read = button(Text::new(localizer.tr("blog.read_post")))
        .on_press(Message::PostSelected(post.slug));

    container(
        Column::new()
            .spacing(6)
            .push(Text::new(post.title).size(20))
            .push(Text::new(published).size(14))
            .push(tags)
            .push(read),
    )
    .padding(16)
    .width(Length::Fill)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: theme.extended_palette().background.strong.color,
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn blog_screen_renders_in_every_locale() {
        let dir = tempdir().expect("create temp dir");
        let mut localizer = Localizer::new(None, Some(dir.path().to_path_buf()));

        for locale in crate::i18n::registry::all() {
            localizer.switch_locale(locale.code);
            let _element = view(ViewContext {
                localizer: &localizer,
            });
        }
    }

    #[test]
    fn published_line_carries_the_formatted_date() {
        let dir = tempdir().expect("create temp dir");
        let localizer = Localizer::new(Some("en".to_string()), Some(dir.path().to_path_buf()));

        let published = localizer.tr_with("blog.published_on", &[("date", "2025-11-03")]);
        assert!(published.contains("2025-11-03"));
    }
}
