//! The engine context: current-language state, the active dictionary, and
//! the `change_language` state machine.
//!
//! All mutable state lives in one owned `I18n` value instead of globals, so
//! independent instances can coexist (one per page, one per test) and all
//! mutation is serialized through `&mut self` without locks.

use crate::applier::Bindings;
use crate::config::I18nConfig;
use crate::dictionary::TranslationDictionary;
use crate::document::{Document, ElementId};
use crate::error::I18nError;
use crate::events::{LanguageChanged, ObserverId, Observers};
use crate::language::Language;
use crate::loader::TranslationLoader;
use crate::registry::LanguageRegistry;
use crate::resolver::{self, resolve_initial_language};
use crate::store::PreferenceStore;
use crate::switcher::Switcher;
use tracing::{debug, error, info, warn};

/// The i18n engine for one page.
pub struct I18n {
    document: Document,
    loader: TranslationLoader,
    store: Box<dyn PreferenceStore>,
    current: Language,
    dictionary: TranslationDictionary,
    bindings: Bindings,
    observers: Observers,
    switcher: Option<Switcher>,
    default_language: Language,
    /// Monotonic per-change counter. A load that finishes after a newer
    /// change has been issued is stale and its result is discarded.
    generation: u64,
    initialized: bool,
}

impl I18n {
    /// Wire an engine around a host-built document.
    ///
    /// Nothing is fetched or mounted yet; call `initialize` once the page
    /// structure is complete.
    pub fn new(document: Document, config: &I18nConfig, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            document,
            loader: TranslationLoader::new(reqwest::Client::new(), config.base_url.clone()),
            store,
            current: config.default_language,
            dictionary: TranslationDictionary::empty(),
            bindings: Bindings::default(),
            observers: Observers::new(),
            switcher: None,
            default_language: config.default_language,
            generation: 0,
            initialized: false,
        }
    }

    // ==================== Bootstrap ====================

    /// One-time startup: mount the switcher, inject its style, resolve the
    /// initial language, collect bindings and perform the first load/apply.
    ///
    /// Uses the platform locale signal; see `initialize_with_locale` for
    /// the injectable variant.
    pub async fn initialize(&mut self) {
        let locale = resolver::platform_locale();
        self.initialize_with_locale(locale.as_deref()).await;
    }

    /// `initialize` with an explicit locale signal (tests, embedding hosts).
    ///
    /// On a failed first load the engine falls back to the default
    /// language, once; if that load fails too the page simply stays
    /// untranslated. Subsequent calls are no-ops.
    pub async fn initialize_with_locale(&mut self, locale: Option<&str>) {
        if self.initialized {
            warn!("i18n engine already initialized; ignoring");
            return;
        }
        self.initialized = true;

        let switcher = Switcher::mount(&mut self.document, self.current);
        Switcher::inject_style(&mut self.document);
        self.switcher = Some(switcher);

        self.current = resolve_initial_language(self.store.as_ref(), locale, self.default_language);
        info!("Initial language: {}", self.current.code());

        self.bindings = Bindings::collect(&self.document);

        match self.loader.load(self.current).await {
            Ok(dictionary) => {
                self.install_and_apply(dictionary);
                self.refresh_switcher_label();
            }
            Err(e) => {
                error!("Failed to load initial translations: {}", e);
                if self.current != self.default_language {
                    self.current = self.default_language;
                    if let Ok(dictionary) = self.loader.load(self.current).await {
                        self.install_and_apply(dictionary);
                        self.refresh_switcher_label();
                    }
                    // A failed fallback leaves the page untranslated
                }
            }
        }
    }

    // ==================== Change Orchestrator ====================

    /// Switch the page to another language.
    ///
    /// Validation happens before any mutation; state commit, persistence
    /// and the widget label update happen synchronously before the load is
    /// issued; the dictionary install, apply and notification happen only
    /// after this call's load resolves and only if no newer change has
    /// superseded it.
    ///
    /// # Returns
    /// * `Ok(code)` once the change has been processed (even if a newer
    ///   change won the race for the page content)
    /// * `Err(I18nError::UnsupportedLanguage)` for codes outside the
    ///   registry, with no state touched
    /// * `Err` with the load error when the fetch or parse fails; the
    ///   committed state and preference are not rolled back
    pub async fn change_language(&mut self, code: &str) -> Result<&'static str, I18nError> {
        let language = Language::from_code(code).map_err(|e| {
            error!("Language {} is not supported", code);
            e
        })?;

        self.current = language;

        if let Err(e) = self.store.save(language.code()) {
            // Preference persistence is best-effort; the change proceeds
            warn!("Failed to persist language preference: {}", e);
        }

        self.refresh_switcher_label();

        self.generation += 1;
        let generation = self.generation;

        match self.loader.load(language).await {
            Ok(dictionary) => {
                if generation != self.generation {
                    debug!(
                        "Discarding stale dictionary for {} (superseded)",
                        language.code()
                    );
                    return Ok(language.code());
                }
                self.install_and_apply(dictionary);
                self.observers.emit(&LanguageChanged {
                    language: language.code(),
                });
                info!("Language changed to {}", language.code());
                Ok(language.code())
            }
            Err(e) => {
                error!("Failed to change language: {}", e);
                Err(e)
            }
        }
    }

    fn install_and_apply(&mut self, dictionary: TranslationDictionary) {
        self.dictionary = dictionary;
        self.bindings
            .apply(&mut self.document, &self.dictionary, self.current);
    }

    fn refresh_switcher_label(&mut self) {
        if let Some(switcher) = &self.switcher {
            switcher.refresh_label(&mut self.document, self.current);
        }
    }

    // ==================== UI Events ====================

    /// Route a page click. Clicks on switcher options drive
    /// `change_language`; its errors are logged and swallowed since a
    /// click has no caller to report to.
    pub async fn handle_click(&mut self, target: Option<ElementId>) {
        let Some(switcher) = &self.switcher else {
            return;
        };
        if let Some(code) = switcher.handle_click(&mut self.document, target) {
            if let Err(e) = self.change_language(code).await {
                error!("Failed to change language from switcher: {}", e);
            }
        }
    }

    // ==================== Page Entry Points ====================

    /// Translate a key, falling back to the key itself when absent.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.dictionary.translate(key)
    }

    /// The active language.
    pub fn current_language(&self) -> Language {
        self.current
    }

    /// All supported language codes, in registry order.
    pub fn supported_languages(&self) -> Vec<&'static str> {
        LanguageRegistry::get()
            .list()
            .iter()
            .map(|descriptor| descriptor.code)
            .collect()
    }

    /// Register an observer for successful language changes.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: Fn(&LanguageChanged) + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.unsubscribe(id);
    }

    /// Re-collect directive bindings after the host has added elements,
    /// then re-apply the active dictionary so the new elements catch up.
    pub fn rebind(&mut self) {
        self.bindings = Bindings::collect(&self.document);
        self.bindings
            .apply(&mut self.document, &self.dictionary, self.current);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn switcher(&self) -> Option<&Switcher> {
        self.switcher.as_ref()
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("dictionary_entries", &self.dictionary.len())
            .field("bindings", &self.bindings.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}
