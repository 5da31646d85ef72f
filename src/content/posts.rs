// SPDX-License-Identifier: MPL-2.0
//! Blog-post metadata and markdown bodies.
//!
//! Metadata is a static catalog; bodies are markdown documents bundled under
//! `assets/posts/` and loaded by slug. A slug with no matching document gets
//! a fallback body instead of an error, so opening a post can never fail.

use chrono::NaiveDate;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/posts/"]
struct Asset;

/// Catalog entry for one post. The body is intentionally not part of the
/// metadata; it is loaded on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostMeta {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub tags: &'static [&'static str],
}

/// Posts, newest first.
pub static POSTS: [PostMeta; 3] = [
    PostMeta {
        slug: "total-translation-lookups",
        title: "Total translation lookups",
        date: match NaiveDate::from_ymd_opt(2025, 11, 3) {
            Some(date) => date,
            None => panic!("invalid post date"),
        },
        tags: &["rust", "i18n"],
    },
    PostMeta {
        slug: "rtl-in-a-ltr-world",
        title: "RTL in a LTR world",
        date: match NaiveDate::from_ymd_opt(2025, 7, 19) {
            Some(date) => date,
            None => panic!("invalid post date"),
        },
        tags: &["i18n", "design"],
    },
    PostMeta {
        slug: "why-iced-for-small-tools",
        title: "Why Iced for small tools",
        date: match NaiveDate::from_ymd_opt(2025, 2, 8) {
            Some(date) => date,
            None => panic!("invalid post date"),
        },
        tags: &["rust", "iced"],
    },
];

/// Looks up a post by slug.
#[must_use]
pub fn find(slug: &str) -> Option<&'static PostMeta> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Loads the markdown body for a slug. Missing or non-UTF-8 documents yield
/// `None`; the caller substitutes a localized fallback body.
#[must_use]
pub fn load_body(slug: &str) -> Option<String> {
    let asset = Asset::get(&format!("{slug}.md"))?;
    String::from_utf8(asset.data.into_owned()).ok()
}
