use thiserror::Error;

/// Errors surfaced by the i18n engine.
///
/// All variants are recoverable by the caller; none are fatal to the host
/// page. A failed load leaves the previous (or raw-key) content in place.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A language code that is not present in the registry was looked up.
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    /// A language change was requested for a code outside the registry.
    /// Rejected before any state mutation, persistence or load.
    #[error("Language {0} is not supported")]
    UnsupportedLanguage(String),

    /// The dictionary fetch did not return a success status, or the
    /// request itself failed at the transport level.
    #[error("Failed to load translations")]
    LoadFailed {
        /// HTTP status of the response, if one was received at all.
        status: Option<u16>,
    },

    /// The dictionary response body was not a flat JSON string map.
    #[error("Failed to parse translations")]
    ParseFailed(#[source] serde_json::Error),

    /// The preference store could not persist the selected language.
    #[error("Failed to persist language preference")]
    StoreWrite(#[source] std::io::Error),
}
