// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (localization, theming,
//! content) and translates messages into side effects like preference
//! persistence or post-body loading. Policy decisions (window size, what
//! gets persisted where, how locale switching behaves) live close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::content;
use crate::i18n::Localizer;
use crate::ui::{contact, navbar, post};
use iced::{clipboard, window, Element, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 450;

/// Root Iced application state that bridges the screens, localization, and
/// persisted preferences.
#[derive(Debug)]
pub struct App {
    localizer: Localizer,
    screen: Screen,
    theme_mode: crate::ui::theming::ThemeMode,
    contact: contact::State,
    open_post: Option<post::State>,
    /// Translation key of a transient status line (persistence warnings,
    /// clipboard confirmations).
    notice_key: Option<String>,
    /// Config directory override carried for preference writes.
    config_dir: Option<PathBuf>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default()).0
    }
}

impl App {
    /// Initializes application state from CLI flags and persisted
    /// preferences.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let localizer = Localizer::new(flags.lang, config_dir.clone());
        let (config, config_warning) = config::load(config_dir.clone());

        let app = App {
            localizer,
            screen: Screen::Home,
            theme_mode: config.theme_mode,
            contact: contact::State::default(),
            open_post: None,
            notice_key: config_warning,
            config_dir,
        };

        (app, Task::none())
    }

    /// Test constructor with an isolated config directory.
    #[cfg(test)]
    fn with_config_dir(dir: PathBuf) -> Self {
        Self::new(Flags {
            lang: None,
            config_dir: Some(dir.to_string_lossy().into_owned()),
        })
        .0
    }

    fn title(&self) -> String {
        self.localizer.tr("app.title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => self.handle_navbar_message(navbar_message),
            Message::Projects(projects_message) => match projects_message {
                crate::ui::projects::Message::RepositoryClicked(url) => {
                    self.notice_key = Some("post.link_copied".to_string());
                    clipboard::write(url.to_string())
                }
            },
            Message::Blog(blog_message) => match blog_message {
                crate::ui::blog::Message::PostSelected(slug) => {
                    self.screen = Screen::Post;
                    self.open_post = None;
                    self.notice_key = None;
                    Task::perform(async move { content::load_body(slug) }, move |body| {
                        Message::PostBodyLoaded { slug, body }
                    })
                }
            },
            Message::PostBodyLoaded { slug, body } => {
                if let Some(meta) = content::find(slug) {
                    let body =
                        body.unwrap_or_else(|| self.localizer.tr("blog.missing_body"));
                    self.open_post = Some(post::State::new(meta, &body));
                }
                Task::none()
            }
            Message::Post(post_message) => match post_message {
                post::Message::BackToList => {
                    self.screen = Screen::Blog;
                    self.open_post = None;
                    Task::none()
                }
                post::Message::LinkClicked(url) => {
                    self.notice_key = Some("post.link_copied".to_string());
                    clipboard::write(url.to_string())
                }
            },
            Message::Contact(contact_message) => {
                match contact::update(&mut self.contact, contact_message) {
                    contact::Event::None => Task::none(),
                    contact::Event::CopyMailto(url) => clipboard::write(url),
                }
            }
        }
    }

    fn handle_navbar_message(&mut self, message: navbar::Message) -> Task<Message> {
        match message {
            navbar::Message::ScreenSelected(screen) => {
                self.screen = screen;
                self.notice_key = None;
                Task::none()
            }
            navbar::Message::LocaleSelected(locale) => {
                self.notice_key = self.localizer.switch_locale(locale.code);
                Task::none()
            }
            navbar::Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                let config = config::Config {
                    theme_mode: self.theme_mode,
                };
                if config::save(&config, self.config_dir.clone()).is_err() {
                    self.notice_key = Some("notification.settings.saveError".to_string());
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            localizer: &self.localizer,
            screen: self.screen,
            theme_mode: self.theme_mode,
            contact: &self.contact,
            open_post: self.open_post.as_ref(),
            notice_key: self.notice_key.as_deref(),
        })
    }
}
