//! Dictionary application: rewriting directive-tagged elements.
//!
//! Instead of re-querying the whole document on every apply, the directive
//! bindings are collected once into a table of (element, slot, key)
//! targets. The orchestrator rebuilds the table on demand when the host has
//! added elements; an element created after the last collection is not
//! translated until then.

use crate::dictionary::TranslationDictionary;
use crate::document::{
    Document, ElementId, ATTR_I18N, ATTR_I18N_ALT, ATTR_I18N_HTML, ATTR_I18N_PLACEHOLDER,
    ATTR_I18N_TITLE,
};
use crate::language::Language;
use tracing::debug;

/// The five translation directive kinds and the slot each one rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Visible text content.
    Text,
    /// `placeholder` attribute.
    Placeholder,
    /// `title` attribute.
    Title,
    /// `alt` attribute.
    Alt,
    /// Raw markup content, installed unescaped. Dictionary values reaching
    /// this slot are trusted markup.
    Html,
}

impl DirectiveKind {
    /// All kinds, in application order.
    pub const ALL: [DirectiveKind; 5] = [
        DirectiveKind::Text,
        DirectiveKind::Placeholder,
        DirectiveKind::Title,
        DirectiveKind::Alt,
        DirectiveKind::Html,
    ];

    /// The directive attribute carrying this kind's dictionary key.
    pub fn attribute(&self) -> &'static str {
        match self {
            DirectiveKind::Text => ATTR_I18N,
            DirectiveKind::Placeholder => ATTR_I18N_PLACEHOLDER,
            DirectiveKind::Title => ATTR_I18N_TITLE,
            DirectiveKind::Alt => ATTR_I18N_ALT,
            DirectiveKind::Html => ATTR_I18N_HTML,
        }
    }
}

/// One translation target: an element slot bound to a dictionary key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    element: ElementId,
    kind: DirectiveKind,
    key: String,
}

/// The collected directive bindings of a document.
#[derive(Debug, Default)]
pub struct Bindings {
    bindings: Vec<Binding>,
}

impl Bindings {
    /// Scan the document once and collect every directive binding,
    /// grouped by kind in application order, document order within a kind.
    pub fn collect(document: &Document) -> Self {
        let mut bindings = Vec::new();
        for kind in DirectiveKind::ALL {
            for element in document.elements_with_attribute(kind.attribute()) {
                if let Some(key) = document.attribute(element, kind.attribute()) {
                    bindings.push(Binding {
                        element,
                        kind,
                        key: key.to_string(),
                    });
                }
            }
        }
        debug!("Collected {} translation bindings", bindings.len());
        Self { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Apply a dictionary to the document.
    ///
    /// Sets the document language, then rewrites every bound slot whose key
    /// is present in the dictionary. A key absent from the dictionary
    /// leaves its target untouched. Idempotent: re-applying the same
    /// dictionary produces the same document state.
    pub fn apply(
        &self,
        document: &mut Document,
        dictionary: &TranslationDictionary,
        language: Language,
    ) {
        document.set_lang(language.code());

        for binding in &self.bindings {
            let Some(value) = dictionary.get(&binding.key) else {
                continue;
            };
            match binding.kind {
                DirectiveKind::Text => document.set_text(binding.element, value),
                DirectiveKind::Placeholder => {
                    document.set_attribute(binding.element, "placeholder", value)
                }
                DirectiveKind::Title => document.set_attribute(binding.element, "title", value),
                DirectiveKind::Alt => document.set_attribute(binding.element, "alt", value),
                DirectiveKind::Html => document.set_html(binding.element, value),
            }
        }
    }
}
