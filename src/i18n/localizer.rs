// SPDX-License-Identifier: MPL-2.0
//! Active-locale lifecycle and translation resolution.
//!
//! The [`Localizer`] is constructed once by the application root and passed
//! by reference to every view. It is the single owner of the active locale:
//! everything else reads it through accessors, and mutation happens only
//! through [`Localizer::switch_locale`].
//!
//! Resolution is total. A missing key falls back to the English catalog, and
//! a key missing there too resolves to the key path itself, so the worst a
//! user ever sees is an untranslated key string, never a crash or a blank.

use crate::i18n::catalog::Catalogs;
use crate::i18n::registry::{self, Direction, Locale, DEFAULT_LOCALE};
use crate::i18n::store::LanguageStore;
use serde_json::Value;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Locale used as the fallback source for missing keys. Its catalog is
/// assumed complete.
const REFERENCE_LOCALE: &str = "en";

/// Document-level attributes the host surface applies on every locale
/// change: the language code and the reading direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub lang: String,
    pub direction: Direction,
}

/// Result of a translation lookup: either a display string (interpolated
/// when applicable) or a structured catalog value passed through untouched,
/// e.g. a tag-label array.
#[derive(Debug, Clone, PartialEq)]
pub enum Translated<'a> {
    Text(String),
    Structured(&'a Value),
}

/// Owns the active locale, its persistence, and the bundled catalogs.
#[derive(Debug)]
pub struct Localizer {
    catalogs: Catalogs,
    store: LanguageStore,
    active: &'static Locale,
    attributes: DocumentAttributes,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Localizer {
    /// Initializes the active locale, in order: explicit CLI override,
    /// persisted choice, host-reported language, fixed default (`en`).
    /// The initial choice triggers the same side effects as a switch: the
    /// code is persisted and the document attributes are applied.
    #[must_use]
    pub fn new(cli_lang: Option<String>, config_dir: Option<PathBuf>) -> Self {
        let store = LanguageStore::new(config_dir);
        let persisted = store.load();
        let host = sys_locale::get_locale();
        let active = resolve_initial(cli_lang.as_deref(), persisted.as_deref(), host.as_deref());

        let mut localizer = Self {
            catalogs: Catalogs::load(),
            store,
            active,
            attributes: DocumentAttributes {
                lang: active.code.to_string(),
                direction: active.direction(),
            },
        };
        localizer.apply_document_attributes();
        let _ = localizer.store.save(active.code);
        localizer
    }

    /// The currently active locale.
    #[must_use]
    pub fn active_locale(&self) -> &'static Locale {
        self.active
    }

    /// Document attributes derived from the active locale.
    #[must_use]
    pub fn attributes(&self) -> &DocumentAttributes {
        &self.attributes
    }

    /// Reading direction of the active locale.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.attributes.direction
    }

    /// Switches the active locale. An unregistered code is a silent no-op:
    /// no state change, no storage write. A registered code updates the
    /// state, persists the bare code, and refreshes the document attributes.
    /// Returns a notification key when persisting failed.
    pub fn switch_locale(&mut self, code: &str) -> Option<String> {
        let Some(locale) = registry::find(code) else {
            return None;
        };

        self.active = locale;
        self.apply_document_attributes();
        self.store.save(locale.code)
    }

    fn apply_document_attributes(&mut self) {
        self.attributes = DocumentAttributes {
            lang: self.active.code.to_string(),
            direction: self.active.direction(),
        };
    }

    /// Resolves a dotted key path for the active locale, falling back to the
    /// reference catalog and finally to the key path itself. Interpolation
    /// runs only on string results and only when `params` is non-empty;
    /// structured values pass through untouched.
    #[must_use]
    pub fn translate<'a>(&'a self, key_path: &str, params: &[(&str, &str)]) -> Translated<'a> {
        let resolved = self
            .catalogs
            .lookup(self.active.code, key_path)
            .or_else(|| self.catalogs.lookup(REFERENCE_LOCALE, key_path));

        match resolved {
            Some(Value::String(template)) => Translated::Text(interpolate(template, params)),
            Some(value) => Translated::Structured(value),
            None => Translated::Text(key_path.to_string()),
        }
    }

    /// Convenience lookup returning a display string. Structured values
    /// render as their JSON text so the result is always displayable.
    #[must_use]
    pub fn tr(&self, key_path: &str) -> String {
        self.tr_with(key_path, &[])
    }

    /// Like [`Localizer::tr`], with `{{name}}` parameter substitution.
    #[must_use]
    pub fn tr_with(&self, key_path: &str, params: &[(&str, &str)]) -> String {
        match self.translate(key_path, params) {
            Translated::Text(text) => text,
            Translated::Structured(value) => value.to_string(),
        }
    }

    /// Resolves a key path expected to hold an array of strings (skill tags,
    /// post tag labels). Non-array results yield an empty list.
    #[must_use]
    pub fn tr_list(&self, key_path: &str) -> Vec<String> {
        match self.translate(key_path, &[]) {
            Translated::Structured(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Picks the initial locale. Pure so the whole chain is testable without
/// touching the host environment.
fn resolve_initial(
    cli: Option<&str>,
    persisted: Option<&str>,
    host: Option<&str>,
) -> &'static Locale {
    if let Some(locale) = cli.and_then(registry::find) {
        return locale;
    }

    if let Some(locale) = persisted.and_then(registry::find) {
        return locale;
    }

    // Host languages arrive as full tags (`tr-TR`); only the primary subtag
    // matters for registry membership.
    if let Some(locale) = host
        .and_then(|tag| tag.parse::<LanguageIdentifier>().ok())
        .and_then(|id| registry::find(id.language.as_str()))
    {
        return locale;
    }

    registry::find(DEFAULT_LOCALE).unwrap_or(&registry::LOCALES[0])
}

/// Replaces every `{{name}}` occurrence for which a param named `name`
/// exists. Placeholders without a matching param stay literal. An empty
/// param list skips interpolation entirely.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut value = template.to_string();
    for (name, replacement) in params {
        value = value.replace(&format!("{{{{{name}}}}}"), replacement);
    }
    value
}
