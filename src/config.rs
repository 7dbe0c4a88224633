use crate::language::Language;
use std::path::PathBuf;

/// Engine configuration: where dictionaries live, which language to fall
/// back to, and where the preference is persisted.
#[derive(Debug, Clone)]
pub struct I18nConfig {
    /// Base URL for dictionary resources; `<base>/<code>.json` per language.
    pub base_url: String,

    /// The fixed default language (bootstrap fallback target).
    pub default_language: Language,

    /// Location of the persisted language preference.
    pub preference_path: PathBuf,
}

impl I18nConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_language: Language::ENGLISH,
            preference_path: default_preference_path(),
        }
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub fn with_preference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preference_path = path.into();
        self
    }

    /// Build the configuration from the environment.
    ///
    /// `I18N_BASE_URL` is required; `I18N_DEFAULT_LANGUAGE` and
    /// `I18N_PREFERENCE_FILE` have defaults (`en`;
    /// `<config dir>/page-i18n/language`).
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;

        let base_url = std::env::var("I18N_BASE_URL").context("I18N_BASE_URL not set")?;

        let default_language = match std::env::var("I18N_DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(&code)
                .with_context(|| format!("I18N_DEFAULT_LANGUAGE '{}' is not supported", code))?,
            Err(_) => Language::ENGLISH,
        };

        let preference_path = std::env::var("I18N_PREFERENCE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_preference_path());

        Ok(Self {
            base_url,
            default_language,
            preference_path,
        })
    }
}

fn default_preference_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("page-i18n")
        .join("language")
}
