// SPDX-License-Identifier: MPL-2.0
//! Bundled translation catalogs and dotted key-path lookup.
//!
//! Each locale has one JSON document under `assets/i18n/` whose nesting
//! mirrors the key paths used by the UI (`nav.home`, `contact.form.send`,
//! ...). Catalogs are parsed once at startup and never mutated afterwards.

use crate::i18n::registry;
use rust_embed::RustEmbed;
use serde_json::Value;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Parsed catalogs, keyed by locale code.
#[derive(Debug, Default)]
pub struct Catalogs {
    roots: HashMap<String, Value>,
}

impl Catalogs {
    /// Loads every embedded `<code>.json` whose code is registered. A file
    /// that fails to parse is skipped; lookups against that locale then fall
    /// back as if every key were missing.
    #[must_use]
    pub fn load() -> Self {
        let mut roots = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(code) = filename.strip_suffix(".json") {
                if registry::find(code).is_none() {
                    continue;
                }
                if let Some(content) = Asset::get(filename) {
                    if let Ok(root) = serde_json::from_slice::<Value>(content.data.as_ref()) {
                        roots.insert(code.to_string(), root);
                    }
                }
            }
        }

        Self { roots }
    }

    /// Builds catalogs from in-memory JSON roots. Test seam.
    #[cfg(test)]
    pub fn from_roots(roots: HashMap<String, Value>) -> Self {
        Self { roots }
    }

    /// Resolves a dotted key path against one locale's tree. Traversal stops
    /// early when a segment is missing or the current node is not an object;
    /// that is an absent result, never an error.
    #[must_use]
    pub fn lookup(&self, code: &str, key_path: &str) -> Option<&Value> {
        let mut node = self.roots.get(code)?;
        for segment in key_path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Catalogs {
        let mut roots = HashMap::new();
        roots.insert(
            "en".to_string(),
            json!({
                "nav": { "home": "Home" },
                "home": { "tags": ["Rust", "Iced"] }
            }),
        );
        roots.insert("tr".to_string(), json!({ "nav": { "home": "Ana Sayfa" } }));
        Catalogs::from_roots(roots)
    }

    #[test]
    fn lookup_descends_nested_objects() {
        let catalogs = sample();
        assert_eq!(
            catalogs.lookup("tr", "nav.home"),
            Some(&Value::String("Ana Sayfa".to_string()))
        );
    }

    #[test]
    fn lookup_returns_none_for_missing_segment() {
        let catalogs = sample();
        assert!(catalogs.lookup("en", "nav.missing").is_none());
        assert!(catalogs.lookup("en", "missing.home").is_none());
    }

    #[test]
    fn lookup_stops_when_intermediate_is_not_an_object() {
        let catalogs = sample();
        // "nav.home" is a string; descending further must fail quietly.
        assert!(catalogs.lookup("en", "nav.home.deeper").is_none());
    }

    #[test]
    fn lookup_returns_structured_values() {
        let catalogs = sample();
        let tags = catalogs.lookup("en", "home.tags").expect("tags");
        assert!(tags.is_array());
    }

    #[test]
    fn lookup_returns_none_for_unknown_locale() {
        let catalogs = sample();
        assert!(catalogs.lookup("de", "nav.home").is_none());
    }

    #[test]
    fn embedded_catalogs_cover_every_registered_locale() {
        let catalogs = Catalogs::load();
        for locale in registry::all() {
            assert!(
                catalogs.lookup(locale.code, "nav.home").is_some(),
                "catalog for {} should at least contain nav.home",
                locale.code
            );
        }
    }
}
