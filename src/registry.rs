//! Language registry: single source of truth for all supported languages.
//!
//! The registry is a fixed, ordered catalog of the languages the page can be
//! displayed in. Insertion order defines display order in the switcher
//! widget. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access; the catalog itself is immutable.

use crate::error::I18nError;
use std::sync::OnceLock;

/// Display metadata for a supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// Canonical lowercase language code (e.g., "en", "pt-br")
    pub code: &'static str,

    /// Native display name of the language (e.g., "Português (Brasil)")
    pub name: &'static str,

    /// Flag glyph shown next to the name in the switcher
    pub flag: &'static str,
}

impl LanguageDescriptor {
    /// The switcher label for this language: flag glyph followed by name.
    pub fn label(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageDescriptor>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// List all supported languages, in registry (display) order.
    pub fn list(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    /// Look up a language descriptor by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageDescriptor)` if the code is in the catalog
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check whether a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Look up a descriptor, failing with `UnknownLanguage` for codes
    /// outside the catalog.
    pub fn describe(&self, code: &str) -> Result<&LanguageDescriptor, I18nError> {
        self.get_by_code(code)
            .ok_or_else(|| I18nError::UnknownLanguage(code.to_string()))
    }
}

/// The fixed language catalog.
///
/// Codes, names and flags are part of the page contract: the code doubles as
/// the dictionary resource name (`<base>/<code>.json`) and the `data-lang`
/// attribute value on switcher options.
fn default_languages() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor {
            code: "en",
            name: "English",
            flag: "\u{1F1FA}\u{1F1F8}",
        },
        LanguageDescriptor {
            code: "pt-br",
            name: "Português (Brasil)",
            flag: "\u{1F1E7}\u{1F1F7}",
        },
        LanguageDescriptor {
            code: "es",
            name: "Español",
            flag: "\u{1F1EA}\u{1F1F8}",
        },
        LanguageDescriptor {
            code: "it",
            name: "Italiano",
            flag: "\u{1F1EE}\u{1F1F9}",
        },
        LanguageDescriptor {
            code: "fr",
            name: "Français",
            flag: "\u{1F1EB}\u{1F1F7}",
        },
        LanguageDescriptor {
            code: "de",
            name: "Deutsch",
            flag: "\u{1F1E9}\u{1F1EA}",
        },
    ]
}
