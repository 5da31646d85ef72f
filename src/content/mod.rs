// SPDX-License-Identifier: MPL-2.0
//! Static site content: the project catalog and the blog posts.
//!
//! Content is data, not behavior — it is consumed by the UI and never reads
//! or writes application state.

pub mod posts;
pub mod projects;

pub use posts::{find, load_body, PostMeta, POSTS};
pub use projects::{Project, PROJECTS};
