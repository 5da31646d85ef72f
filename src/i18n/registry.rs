// SPDX-License-Identifier: MPL-2.0
//! Static registry of the locales the application ships catalogs for.

use std::fmt;

/// Reading direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// A supported language with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Short language code (primary subtag, e.g. `en`).
    pub code: &'static str,
    /// Name of the language, written in that language.
    pub display_name: &'static str,
    /// Decorative flag glyph shown next to the name in the picker.
    pub flag: &'static str,
}

/// Code adopted when nothing usable is persisted or reported by the host.
pub const DEFAULT_LOCALE: &str = "en";

/// Supported locales, in the order they appear in the language picker.
/// Codes are unique; the reference catalog (`en`) is complete, the others
/// may be partial.
pub static LOCALES: [Locale; 4] = [
    Locale {
        code: "en",
        display_name: "English",
        flag: "\u{1F1EC}\u{1F1E7}",
    },
    Locale {
        code: "tr",
        display_name: "Türkçe",
        flag: "\u{1F1F9}\u{1F1F7}",
    },
    Locale {
        code: "ar",
        display_name: "العربية",
        flag: "\u{1F1F8}\u{1F1E6}",
    },
    Locale {
        code: "it",
        display_name: "Italiano",
        flag: "\u{1F1EE}\u{1F1F9}",
    },
];

impl Locale {
    /// Reading direction of this locale. Arabic is the only right-to-left
    /// language in the registry.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.code == "ar" {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.display_name)
    }
}

/// All registered locales, in picker order.
#[must_use]
pub fn all() -> &'static [Locale] {
    &LOCALES
}

/// Looks up a locale by its code. Unknown codes are not an error, just
/// absent.
#[must_use]
pub fn find(code: &str) -> Option<&'static Locale> {
    LOCALES.iter().find(|locale| locale.code == code)
}
