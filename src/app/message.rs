// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{blog, contact, navbar, post, projects};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Projects(projects::Message),
    Blog(blog::Message),
    Post(post::Message),
    Contact(contact::Message),
    /// Result of loading a post body by slug. `None` means the embedded
    /// document is missing and the localized fallback body is shown.
    PostBodyLoaded {
        slug: &'static str,
        body: Option<String>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (a registered code, e.g. `tr`).
    pub lang: Option<String>,
    /// Optional config directory override (for `settings.toml` and the
    /// `preferred-language` file). Takes precedence over
    /// `ICED_FOLIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
