// SPDX-License-Identifier: MPL-2.0
//! Projects screen: one card per catalog entry.

use crate::content::{Project, PROJECTS};
use crate::i18n::Localizer;
use iced::{
    widget::{button, container, scrollable, Column, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the projects screen.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
}

/// Messages emitted by the projects screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The repository link of a project was clicked; the URL is copied to
    /// the clipboard.
    RepositoryClicked(&'static str),
}

/// Render the projects screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.localizer.tr("projects.title")).size(28);

    let mut column = Column::new().spacing(16).padding(24).push(title);
    for project in &PROJECTS {
        column = column.push(card(ctx.localizer, project));
    }

    scrollable(column).width(Length::Fill).into()
}

fn card<'a>(localizer: &'a Localizer, project: &'static Project) -> Element<'a, Message> {
    let name = Text::new(project.name).size(20);
    let description = Text::new(localizer.tr(project.description_key));

    let mut tags = Row::new().spacing(8);
    tags = tags.push(Text::new(localizer.tr("projects.technologies")).size(14));
    for tag in project.tags {
        tags = tags.push(Text::new(*tag).size(14));
    }

    let repo = button(Text::new(localizer.tr("projects.view_repository")))
        .on_press(Message::RepositoryClicked(project.repo_url));

    container(
        Column::new()
            .spacing(8)
            .push(name)
            .push(description)
            .push(tags)
            .push(repo),
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
    fn projects_screen_renders() {
        let dir = tempdir().expect("create temp dir");
        let localizer = Localizer::new(None, Some(dir.path().to_path_buf()));
        let _element = view(ViewContext {
            localizer: &localizer,
        });
    }

    #[test]
    fn descriptions_resolve_in_the_reference_locale() {
        let dir = tempdir().expect("create temp dir");
        let localizer = Localizer::new(Some("en".to_string()), Some(dir.path().to_path_buf()));

        for project in &PROJECTS {
            let description = localizer.tr(project.description_key);
            assert_ne!(
                description, project.description_key,
                "missing catalog entry for {}",
                project.name
            );
        }
    }

    #[test]
    fn partial_locales_fall_back_to_english_descriptions() {
        let dir = tempdir().expect("create temp dir");
        let mut localizer = Localizer::new(None, Some(dir.path().to_path_buf()));
        localizer.switch_locale("ar");

        for project in &PROJECTS {
            let description = localizer.tr(project.description_key);
            assert_ne!(description, project.description_key);
        }
    }
}
