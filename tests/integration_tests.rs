//! Integration tests for the page i18n engine.
//!
//! These tests exercise complete flows across modules: bootstrap against a
//! mock dictionary server, user-driven language switching through the
//! widget, and the persistence round-trip across engine restarts.

use page_i18n::{
    document::{ATTR_I18N, ATTR_I18N_ALT, ATTR_I18N_HTML, ATTR_I18N_PLACEHOLDER, ATTR_I18N_TITLE},
    Document, ElementId, FilePreferenceStore, I18n, I18nConfig, I18nError, MemoryPreferenceStore,
};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ==================== Test Helpers ====================

/// Opt-in log output for debugging test runs (RUST_LOG=page_i18n=debug).
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

struct Page {
    heading: ElementId,
    input: ElementId,
    icon: ElementId,
    blurb: ElementId,
}

/// Build a page exercising every directive kind.
fn build_page() -> (Document, Page) {
    init_logging();
    let mut doc = Document::new();
    let root = doc.root();

    let heading = doc.create_element("h1");
    doc.set_text(heading, "home.title");
    doc.set_attribute(heading, ATTR_I18N, "home.title");
    doc.append_child(root, heading);

    let input = doc.create_element("input");
    doc.set_attribute(input, "placeholder", "form.name");
    doc.set_attribute(input, ATTR_I18N_PLACEHOLDER, "form.name");
    doc.append_child(root, input);

    let icon = doc.create_element("img");
    doc.set_attribute(icon, "alt", "logo.alt");
    doc.set_attribute(icon, ATTR_I18N_ALT, "logo.alt");
    doc.set_attribute(icon, ATTR_I18N_TITLE, "logo.title");
    doc.append_child(root, icon);

    let blurb = doc.create_element("div");
    doc.set_attribute(blurb, ATTR_I18N_HTML, "home.blurb");
    doc.append_child(root, blurb);

    (
        doc,
        Page {
            heading,
            input,
            icon,
            blurb,
        },
    )
}

async fn mount_dictionary(server: &MockServer, code: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/lib/i18n/{}.json", code)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn spanish_dictionary() -> serde_json::Value {
    serde_json::json!({
        "home.title": "Bienvenido",
        "form.name": "Tu nombre",
        "logo.alt": "El logotipo",
        "logo.title": "Inicio",
        "home.blurb": "<p>Hola <b>mundo</b></p>"
    })
}

fn english_dictionary() -> serde_json::Value {
    serde_json::json!({
        "home.title": "Welcome",
        "form.name": "Your name",
        "logo.alt": "The logo",
        "logo.title": "Home",
        "home.blurb": "<p>Hello <b>world</b></p>"
    })
}

// ==================== Bootstrap Flow ====================

#[tokio::test]
async fn test_bootstrap_detects_locale_and_translates_whole_page() {
    let server = MockServer::start().await;
    mount_dictionary(&server, "es", spanish_dictionary()).await;

    let (doc, page) = build_page();
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));

    i18n.initialize_with_locale(Some("es-MX")).await;

    assert_eq!(i18n.current_language().code(), "es");
    let doc = i18n.document();
    assert_eq!(doc.lang(), "es");
    assert_eq!(doc.text(page.heading), "Bienvenido");
    assert_eq!(doc.attribute(page.input, "placeholder"), Some("Tu nombre"));
    assert_eq!(doc.attribute(page.icon, "alt"), Some("El logotipo"));
    assert_eq!(doc.attribute(page.icon, "title"), Some("Inicio"));
    assert_eq!(doc.html(page.blurb), Some("<p>Hola <b>mundo</b></p>"));
    // Widget mounted and styled
    assert!(i18n.switcher().is_some());
    assert!(!doc.styles().is_empty());
}

#[tokio::test]
async fn test_bootstrap_regional_locale_beats_primary_subtag() {
    let server = MockServer::start().await;
    mount_dictionary(
        &server,
        "pt-br",
        serde_json::json!({"home.title": "Bem-vindo"}),
    )
    .await;

    let (doc, page) = build_page();
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));

    i18n.initialize_with_locale(Some("pt-BR")).await;

    assert_eq!(i18n.current_language().code(), "pt-br");
    assert_eq!(i18n.document().text(page.heading), "Bem-vindo");
}

#[tokio::test]
async fn test_bootstrap_unsupported_locale_falls_back_to_default() {
    let server = MockServer::start().await;
    mount_dictionary(&server, "en", english_dictionary()).await;

    let (doc, page) = build_page();
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));

    i18n.initialize_with_locale(Some("zz-ZZ")).await;

    assert_eq!(i18n.current_language().code(), "en");
    assert_eq!(i18n.document().text(page.heading), "Welcome");
}

#[tokio::test]
async fn test_bootstrap_total_failure_leaves_page_untranslated() {
    let server = MockServer::start().await;
    // No dictionaries at all

    let (doc, page) = build_page();
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));

    i18n.initialize_with_locale(Some("fr-FR")).await;

    // Degraded but intact: raw key text and original attributes remain
    let doc = i18n.document();
    assert_eq!(doc.text(page.heading), "home.title");
    assert_eq!(doc.attribute(page.input, "placeholder"), Some("form.name"));
    assert_eq!(doc.html(page.blurb), None);
}

// ==================== User Switching Flow ====================

#[tokio::test]
async fn test_switching_through_widget_updates_page_and_label() {
    let server = MockServer::start().await;
    mount_dictionary(&server, "en", english_dictionary()).await;
    mount_dictionary(&server, "es", spanish_dictionary()).await;

    let (doc, page) = build_page();
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));
    i18n.initialize_with_locale(None).await;

    assert_eq!(i18n.document().text(page.heading), "Welcome");

    // Open the dropdown, pick Spanish
    let button = i18n.switcher().unwrap().button();
    i18n.handle_click(Some(button)).await;
    let dropdown = i18n.switcher().unwrap().dropdown();
    assert!(i18n.document().has_class(dropdown, "show"));

    let option = i18n.switcher().unwrap().option_for("es").unwrap();
    i18n.handle_click(Some(option)).await;

    let doc = i18n.document();
    assert_eq!(doc.text(page.heading), "Bienvenido");
    assert_eq!(doc.lang(), "es");
    assert!(!doc.has_class(dropdown, "show"));
    assert_eq!(doc.text(button), "🇪🇸 Español");
}

#[tokio::test]
async fn test_round_trip_greeting_example() {
    let server = MockServer::start().await;
    mount_dictionary(&server, "es", serde_json::json!({"greeting": "Hola"})).await;

    let mut doc = Document::new();
    let root = doc.root();
    let el = doc.create_element("span");
    doc.set_text(el, "greeting");
    doc.set_attribute(el, ATTR_I18N, "greeting");
    doc.append_child(root, el);

    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));
    i18n.initialize_with_locale(Some("zz")).await; // default load 404s, swallowed

    i18n.change_language("es").await.expect("Should succeed");
    assert_eq!(i18n.document().text(el), "Hola");
    assert_eq!(i18n.t("greeting"), "Hola");
}

#[tokio::test]
async fn test_unsupported_change_is_rejected_cleanly() {
    let server = MockServer::start().await;
    mount_dictionary(&server, "en", english_dictionary()).await;

    let (doc, page) = build_page();
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));
    i18n.initialize_with_locale(None).await;

    let err = i18n.change_language("xx").await.unwrap_err();
    assert!(matches!(err, I18nError::UnsupportedLanguage(_)));
    assert_eq!(err.to_string(), "Language xx is not supported");

    // Nothing moved
    assert_eq!(i18n.current_language().code(), "en");
    assert_eq!(i18n.document().lang(), "en");
    assert_eq!(i18n.document().text(page.heading), "Welcome");
}

// ==================== Persistence Round-Trip ====================

#[tokio::test]
async fn test_preference_survives_engine_restart() {
    let server = MockServer::start().await;
    mount_dictionary(&server, "en", english_dictionary()).await;
    mount_dictionary(&server, "de", serde_json::json!({"home.title": "Willkommen"})).await;

    let temp = TempDir::new().expect("Failed to create temp dir");
    let pref_path = temp.path().join("language");
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()))
        .with_preference_path(&pref_path);

    // First session: user switches to German
    let (doc, _) = build_page();
    let store = FilePreferenceStore::new(&pref_path);
    let mut i18n = I18n::new(doc, &config, Box::new(store));
    i18n.initialize_with_locale(None).await;
    i18n.change_language("de").await.expect("Should succeed");
    drop(i18n);

    assert_eq!(
        std::fs::read_to_string(&pref_path).expect("Preference file should exist"),
        "de"
    );

    // Second session: stored preference wins over the locale signal
    let (doc, page) = build_page();
    let store = FilePreferenceStore::new(&pref_path);
    let mut i18n = I18n::new(doc, &config, Box::new(store));
    i18n.initialize_with_locale(Some("es-ES")).await;

    assert_eq!(i18n.current_language().code(), "de");
    assert_eq!(i18n.document().text(page.heading), "Willkommen");
}

// ==================== Degraded Loading ====================

#[tokio::test]
async fn test_malformed_dictionary_is_a_parse_failure() {
    let server = MockServer::start().await;
    mount_dictionary(&server, "en", english_dictionary()).await;
    Mock::given(method("GET"))
        .and(path("/lib/i18n/it.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>surprise</html>"))
        .mount(&server)
        .await;

    let (doc, page) = build_page();
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));
    i18n.initialize_with_locale(None).await;

    let err = i18n.change_language("it").await.unwrap_err();
    assert!(matches!(err, I18nError::ParseFailed(_)));

    // Previous content survives; a later successful change recovers
    assert_eq!(i18n.document().text(page.heading), "Welcome");
    i18n.change_language("en").await.expect("Should recover");
    assert_eq!(i18n.document().text(page.heading), "Welcome");
}

#[tokio::test]
async fn test_partial_dictionary_misses_never_blank() {
    let server = MockServer::start().await;
    mount_dictionary(&server, "en", english_dictionary()).await;
    // fr.json translates the title only
    mount_dictionary(&server, "fr", serde_json::json!({"home.title": "Bienvenue"})).await;

    let (doc, page) = build_page();
    let config = I18nConfig::new(format!("{}/lib/i18n", server.uri()));
    let mut i18n = I18n::new(doc, &config, Box::new(MemoryPreferenceStore::new()));
    i18n.initialize_with_locale(None).await;

    i18n.change_language("fr").await.expect("Should succeed");

    let doc = i18n.document();
    assert_eq!(doc.text(page.heading), "Bienvenue");
    // Keys missing from the French dictionary keep their English content
    assert_eq!(doc.attribute(page.input, "placeholder"), Some("Your name"));
    assert_eq!(doc.html(page.blurb), Some("<p>Hello <b>world</b></p>"));
}
