//! Language type: flexible, validated language representation.
//!
//! A `Language` can only be constructed from a code that exists in the
//! registry, so holding one is proof the code is supported. This is the
//! invariant behind the engine's current-language state: it is always a
//! registry entry.

use crate::error::I18nError;
use crate::registry::{LanguageDescriptor, LanguageRegistry};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Canonical lowercase language code (e.g., "en", "pt-br")
    code: &'static str,
}

impl Language {
    /// The fixed default language used when no preference or locale matches
    /// and as the bootstrap fallback target.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The canonical language code (e.g., "en", "pt-br")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err(I18nError::UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        match LanguageRegistry::get().get_by_code(code) {
            // Use the static str from the registry
            Some(descriptor) => Ok(Language {
                code: descriptor.code,
            }),
            None => Err(I18nError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Get the canonical language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full descriptor from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This cannot happen
    /// for a `Language` constructed via `from_code` or the constants.
    pub fn descriptor(&self) -> &'static LanguageDescriptor {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the native display name (e.g., "Español").
    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Get the flag glyph.
    pub fn flag(&self) -> &'static str {
        self.descriptor().flag
    }

    /// Get the switcher label: "{flag} {name}".
    pub fn label(&self) -> String {
        self.descriptor().label()
    }
}
