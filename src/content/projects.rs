// SPDX-License-Identifier: MPL-2.0
//! The project catalog shown on the Projects screen.

/// One portfolio entry. The description is a translation key path so project
/// blurbs localize like the rest of the UI; names and URLs stay literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description_key: &'static str,
    pub tags: &'static [&'static str],
    pub repo_url: &'static str,
}

/// Projects, in display order.
pub static PROJECTS: [Project; 3] = [
    Project {
        name: "IcedLens",
        description_key: "projects.descriptions.iced_lens",
        tags: &["Rust", "Iced", "FFmpeg"],
        repo_url: "https://codeberg.org/Bawycle/iced_lens",
    },
    Project {
        name: "IcedFolio",
        description_key: "projects.descriptions.iced_folio",
        tags: &["Rust", "Iced", "i18n"],
        repo_url: "https://codeberg.org/Bawycle/iced_folio",
    },
    Project {
        name: "ftl-audit",
        description_key: "projects.descriptions.ftl_audit",
        tags: &["Rust", "CLI", "Fluent"],
        repo_url: "https://codeberg.org/Bawycle/ftl-audit",
    },
];
