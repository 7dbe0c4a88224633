//! Client-side internationalization engine for a static page.
//!
//! The engine loads a language-specific dictionary of key→text mappings,
//! applies it to directive-tagged elements of the page model, persists and
//! detects the user's language preference, and renders a language-selection
//! widget.
//!
//! # Architecture
//!
//! - `registry`: fixed catalog of supported languages and display metadata
//! - `language`: validated language value, always a registry entry
//! - `resolver`: initial-language resolution (preference → locale → default)
//! - `store`: durable single-value preference store
//! - `dictionary` / `loader`: the key→text mapping and its HTTP fetch
//! - `document` / `applier`: the retained page model and directive bindings
//! - `switcher`: the button+dropdown language widget
//! - `events`: observer registry for language-change notifications
//! - `orchestrator`: the owned `I18n` context tying it all together
//!
//! # Example
//!
//! ```rust,ignore
//! let mut page = Document::new();
//! // ... build the page, tagging elements with data-i18n attributes ...
//!
//! let config = I18nConfig::new("https://example.com/lib/i18n");
//! let store = FilePreferenceStore::new(config.preference_path.clone());
//! let mut i18n = I18n::new(page, &config, Box::new(store));
//! i18n.initialize().await;
//!
//! i18n.change_language("pt-br").await?;
//! assert_eq!(i18n.current_language().code(), "pt-br");
//! ```

pub mod applier;
pub mod config;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod events;
pub mod language;
pub mod loader;
pub mod orchestrator;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod switcher;

pub use applier::{Bindings, DirectiveKind};
pub use config::I18nConfig;
pub use dictionary::TranslationDictionary;
pub use document::{Document, ElementId};
pub use error::I18nError;
pub use events::{LanguageChanged, ObserverId};
pub use language::Language;
pub use loader::TranslationLoader;
pub use orchestrator::I18n;
pub use registry::{LanguageDescriptor, LanguageRegistry};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use switcher::Switcher;
