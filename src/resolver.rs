//! Initial-language resolution: stored preference, then platform locale,
//! then the fixed default.
//!
//! This never fails; whatever the inputs look like, the result is a valid
//! registry entry.

use crate::language::Language;
use crate::registry::LanguageRegistry;
use crate::store::PreferenceStore;
use tracing::debug;

/// Read the platform's reported user locale, if any.
///
/// Read once at bootstrap; BCP-47-like shape (`language[-REGION]`).
pub fn platform_locale() -> Option<String> {
    sys_locale::get_locale()
}

/// Determine the language to start in.
///
/// Precedence, first matching rule wins:
/// 1. A persisted preference that names a supported language.
/// 2. The full locale string, lower-cased, exactly matching a supported
///    code. This is what distinguishes a Brazilian Portuguese locale
///    (`pt-BR` → `pt-br`) from generic Portuguese.
/// 3. The primary subtag of the locale (text before the first hyphen).
/// 4. The fixed default.
///
/// # Arguments
/// * `store` - The durable preference store, read once here
/// * `locale` - The platform locale signal, if the platform reports one
/// * `default` - The configured default language
pub fn resolve_initial_language(
    store: &dyn PreferenceStore,
    locale: Option<&str>,
    default: Language,
) -> Language {
    let registry = LanguageRegistry::get();

    if let Some(saved) = store.load() {
        if let Ok(language) = Language::from_code(&saved) {
            debug!("Using stored language preference: {}", language.code());
            return language;
        }
        debug!("Ignoring stored preference '{}': not supported", saved);
    }

    if let Some(locale) = locale {
        let full = locale.to_lowercase();

        if registry.is_supported(&full) {
            debug!("Matched platform locale '{}' exactly", locale);
            return Language::from_code(&full).expect("supported code is constructible");
        }

        let primary = full.split('-').next().unwrap_or(&full);
        if registry.is_supported(primary) {
            debug!("Matched platform locale '{}' by primary subtag", locale);
            return Language::from_code(primary).expect("supported code is constructible");
        }
    }

    debug!("Falling back to default language: {}", default.code());
    default
}
