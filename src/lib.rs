// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio and technical blog built with the
//! Iced GUI framework.
//!
//! It demonstrates a translation-resolution mechanism over nested JSON
//! catalogs (dotted key paths, English fallback, `{{name}}` interpolation),
//! persisted user preferences, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
