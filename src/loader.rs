//! Translation loader: fetches and parses one language's dictionary.
//!
//! A single `GET <base>/<code>.json` per call, no retries. The loader does
//! not touch any shared state; the caller decides whether to install the
//! returned dictionary.

use crate::dictionary::TranslationDictionary;
use crate::error::I18nError;
use crate::language::Language;
use tracing::debug;

/// Fetches translation dictionaries over HTTP.
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    client: reqwest::Client,
    base_url: String,
}

impl TranslationLoader {
    /// Create a loader fetching from `<base_url>/<code>.json`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The resource URL for a language's dictionary.
    pub fn resource_url(&self, language: Language) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            language.code()
        )
    }

    /// Load the dictionary for a language.
    ///
    /// # Returns
    /// * `Ok(TranslationDictionary)` on a success status with a flat
    ///   string-map body
    /// * `Err(I18nError::LoadFailed)` on transport errors or non-success
    ///   status
    /// * `Err(I18nError::ParseFailed)` when the body is not a flat JSON
    ///   string map
    pub async fn load(&self, language: Language) -> Result<TranslationDictionary, I18nError> {
        let url = self.resource_url(language);
        debug!("Loading translations from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| I18nError::LoadFailed {
                status: e.status().map(|s| s.as_u16()),
            })?;

        if !response.status().is_success() {
            return Err(I18nError::LoadFailed {
                status: Some(response.status().as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| I18nError::LoadFailed {
            status: e.status().map(|s| s.as_u16()),
        })?;

        let dictionary: TranslationDictionary =
            serde_json::from_str(&body).map_err(I18nError::ParseFailed)?;

        debug!(
            "Loaded {} translations for {}",
            dictionary.len(),
            language.code()
        );
        Ok(dictionary)
    }
}
