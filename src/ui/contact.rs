// SPDX-License-Identifier: MPL-2.0
//! Contact screen: a small form that composes a `mailto:` URL.
//!
//! A desktop application has no navigation target for `mailto:`, so
//! submitting copies the composed URL to the clipboard and confirms with a
//! localized status line.

use crate::i18n::Localizer;
use iced::{
    widget::{button, scrollable, text_input, Column, Text},
    Element, Length,
};
use url::Url;

/// Recipient address the form composes messages for.
const CONTACT_ADDRESS: &str = "hello@bawycle.dev";

/// Form state. Owned by the application root and kept across screen
/// switches so a half-written message is not lost.
#[derive(Debug, Default, Clone)]
pub struct State {
    pub name: String,
    pub email: String,
    pub message: String,
    status_key: Option<&'static str>,
}

/// Messages emitted by the contact screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The form validated; the composed `mailto:` URL should be copied to
    /// the clipboard.
    CopyMailto(String),
}

impl State {
    /// Translation key of the current status line, if any.
    #[must_use]
    pub fn status_key(&self) -> Option<&'static str> {
        self.status_key
    }

    /// All fields present and the email looks like an address.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.message.trim().is_empty()
            && is_plausible_email(&self.email)
    }

    /// Composes the `mailto:` URL for the current form content.
    #[must_use]
    pub fn mailto_url(&self) -> String {
        let mut url =
            Url::parse(&format!("mailto:{CONTACT_ADDRESS}")).expect("literal mailto URL");
        let body = format!("{}\n\n{} <{}>", self.message, self.name, self.email);
        url.query_pairs_mut()
            .append_pair("subject", &format!("Portfolio contact from {}", self.name))
            .append_pair("body", &body);
        url.to_string()
    }
}

fn is_plausible_email(email: &str) -> bool {
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// Process a contact message and return the corresponding event. Editing
/// any field clears the status line.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(name) => {
            state.name = name;
            state.status_key = None;
            Event::None
        }
        Message::EmailChanged(email) => {
            state.email = email;
            state.status_key = None;
            Event::None
        }
        Message::MessageChanged(text) => {
            state.message = text;
            state.status_key = None;
            Event::None
        }
        Message::Submit => {
            if state.is_valid() {
                state.status_key = Some("contact.form.copied");
                Event::CopyMailto(state.mailto_url())
            } else {
                state.status_key = Some("contact.form.invalid");
                Event::None
            }
        }
    }
}

/// Contextual data needed to render the contact screen.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
    pub state: &'a State,
}

/// Render the contact form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.localizer.tr("contact.title")).size(28);
    let lead = Text::new(ctx.localizer.tr("contact.lead"));

    let name = text_input(
        &ctx.localizer.tr("contact.form.placeholder.name"),
        &ctx.state.name,
    )
    .on_input(Message::NameChanged);

    let email = text_input(
        &ctx.localizer.tr("contact.form.placeholder.email"),
        &ctx.state.email,
    )
    .on_input(Message::EmailChanged);

    let body = text_input(
        &ctx.localizer.tr("contact.form.placeholder.message"),
        &ctx.state.message,
    )
    .on_input(Message::MessageChanged);

    let send = button(Text::new(ctx.localizer.tr("contact.form.send"))).on_press(Message::Submit);

    let mut column = Column::new()
        .spacing(12)
        .padding(24)
        .push(title)
        .push(lead)
        .push(name)
        .push(email)
        .push(body)
        .push(send);

    if let Some(key) = ctx.state.status_key() {
        column = column.push(Text::new(ctx.localizer.tr(key)).size(14));
    }

    scrollable(column).width(Length::Fill).into()
}
