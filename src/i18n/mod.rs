// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations live in nested JSON catalogs bundled at build time, one per
//! supported locale. The [`Localizer`] owns the active locale for a running
//! application instance: it resolves it once at startup (persisted choice,
//! then host language, then English), persists every change, and resolves
//! dotted key paths with an English fallback so the UI always has something
//! displayable to render.

pub mod catalog;
pub mod localizer;
pub mod registry;
pub mod store;

pub use localizer::{DocumentAttributes, Localizer, Translated};
pub use registry::{Direction, Locale, DEFAULT_LOCALE};
