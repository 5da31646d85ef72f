// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between. `Post` is reached from the blog
/// list, not from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Projects,
    Blog,
    Post,
    Contact,
}

impl Screen {
    /// Screens linked from the navbar, in display order.
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Projects, Screen::Blog, Screen::Contact];

    /// Translation key for the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Home => "nav.home",
            Screen::Projects => "nav.projects",
            Screen::Blog | Screen::Post => "nav.blog",
            Screen::Contact => "nav.contact",
        }
    }
}
