// SPDX-License-Identifier: MPL-2.0
//! Per-screen view modules.
//!
//! Every module follows the same shape: a `ViewContext` carrying borrowed
//! state, a local `Message` enum, and a `view` function. Stateful screens
//! (contact form, open post) also own a `State` and an `update` that
//! translates messages into events for the application root.

pub mod blog;
pub mod contact;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod post;
pub mod projects;
pub mod theming;
