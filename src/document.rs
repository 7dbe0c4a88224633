//! Retained page model.
//!
//! The engine does not run inside a browser, so the page it translates is an
//! explicit element tree owned by the host. Elements carry a tag, text
//! content, optional raw-HTML content, and a flat attribute map; the five
//! translation directives are ordinary attributes on these elements.
//! Element handles are indices into an arena, so they stay valid for the
//! document's lifetime (elements are never removed).

use std::collections::HashMap;

/// Directive attribute: translate the element's visible text content.
pub const ATTR_I18N: &str = "data-i18n";
/// Directive attribute: translate the element's `placeholder` attribute.
pub const ATTR_I18N_PLACEHOLDER: &str = "data-i18n-placeholder";
/// Directive attribute: translate the element's `title` attribute.
pub const ATTR_I18N_TITLE: &str = "data-i18n-title";
/// Directive attribute: translate the element's `alt` attribute.
pub const ATTR_I18N_ALT: &str = "data-i18n-alt";
/// Directive attribute: install the translation as raw markup.
pub const ATTR_I18N_HTML: &str = "data-i18n-html";

/// Stable handle to an element in a `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// One element of the page model.
#[derive(Debug)]
pub struct Element {
    tag: String,
    text: String,
    /// Raw markup content, if any. Kept separate from `text`: the html
    /// directive installs unescaped markup, not text.
    html: Option<String>,
    attributes: HashMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: String::new(),
            html: None,
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The page: an element arena plus document-level state.
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    root: ElementId,
    /// Document language attribute (`<html lang>` equivalent).
    lang: String,
    /// Injected style sheets, in injection order.
    styles: Vec<String>,
}

impl Document {
    /// Create a document with an empty `body` root element.
    pub fn new() -> Self {
        let mut doc = Self {
            elements: Vec::new(),
            root: ElementId(0),
            lang: String::new(),
            styles: Vec::new(),
        };
        doc.root = doc.create_element("body");
        doc
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Create a detached element. Attach it with `append_child`.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag));
        id
    }

    /// Attach `child` under `parent`, at the end of its child list.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    // ==================== Content ====================

    pub fn text(&self, id: ElementId) -> &str {
        &self.elements[id.0].text
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.elements[id.0].text = text.to_string();
    }

    pub fn html(&self, id: ElementId) -> Option<&str> {
        self.elements[id.0].html.as_deref()
    }

    /// Install raw markup content. The value is trusted markup and is not
    /// escaped.
    pub fn set_html(&mut self, id: ElementId, markup: &str) {
        self.elements[id.0].html = Some(markup.to_string());
    }

    pub fn tag(&self, id: ElementId) -> &str {
        &self.elements[id.0].tag
    }

    // ==================== Attributes ====================

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements[id.0].attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        self.elements[id.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    // ==================== Classes ====================

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.attribute(id, "class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let classes = match self.attribute(id, "class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attribute(id, "class", &classes);
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(existing) = self.attribute(id, "class") {
            let classes: Vec<&str> = existing
                .split_whitespace()
                .filter(|c| *c != class)
                .collect();
            let joined = classes.join(" ");
            self.set_attribute(id, "class", &joined);
        }
    }

    pub fn toggle_class(&mut self, id: ElementId, class: &str) {
        if self.has_class(id, class) {
            self.remove_class(id, class);
        } else {
            self.add_class(id, class);
        }
    }

    // ==================== Structure ====================

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id.0].parent
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.elements[id.0].children
    }

    /// Whether `id` is `ancestor` or lies inside its subtree.
    pub fn is_within(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// All elements carrying an attribute, in creation order.
    pub fn elements_with_attribute(&self, name: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.attributes.contains_key(name))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    // ==================== Document-level state ====================

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    /// Append a style sheet to the document head.
    pub fn inject_style(&mut self, css: &str) {
        self.styles.push(css.to_string());
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
