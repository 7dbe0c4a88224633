//! Translation dictionary: the loaded key→text mapping for one language.
//!
//! Flat, unordered, replaced wholesale on every language change. A key
//! missing from the dictionary falls back to the key itself, never to
//! another language.

use serde::Deserialize;
use std::collections::HashMap;

/// The key→translated-text mapping for one language.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TranslationDictionary {
    entries: HashMap<String, String>,
}

impl TranslationDictionary {
    /// An empty dictionary: every lookup misses, `translate` echoes keys.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the translation for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Translate a key, falling back to the key itself when absent.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for TranslationDictionary {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
