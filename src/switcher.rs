//! Language switcher widget: a button showing the active language and a
//! dropdown listing every registry entry.
//!
//! The widget holds only element handles and has no subscription of its
//! own; the orchestrator refreshes its label imperatively after a language
//! change.

use crate::document::{Document, ElementId};
use crate::language::Language;
use crate::registry::LanguageRegistry;

/// Stylesheet injected once at bootstrap. Visual design is the page's
/// concern; this is the baseline the original shipped with.
const SWITCHER_STYLE: &str = "\
.language-switcher-container { position: fixed; top: 20px; right: 20px; z-index: 9999; }\n\
.language-switcher { position: relative; display: inline-block; }\n\
.current-language { background-color: #fff; border: 1px solid #ccc; border-radius: 4px; \
padding: 8px 12px; cursor: pointer; font-size: 14px; }\n\
.language-dropdown { display: none; position: absolute; right: 0; top: 100%; \
background-color: #fff; min-width: 160px; border-radius: 4px; margin-top: 5px; }\n\
.language-dropdown.show { display: block; }\n\
.language-option { color: #333; padding: 12px 16px; text-decoration: none; display: block; \
font-size: 14px; border-bottom: 1px solid #eee; }\n";

/// The mounted switcher: element handles plus the option→language mapping.
#[derive(Debug)]
pub struct Switcher {
    container: ElementId,
    switcher: ElementId,
    button: ElementId,
    dropdown: ElementId,
    options: Vec<(ElementId, &'static str)>,
}

impl Switcher {
    /// Build the widget subtree under the document root.
    ///
    /// Structure: container > switcher > (button, dropdown > options),
    /// options in registry order.
    pub fn mount(document: &mut Document, current: Language) -> Self {
        let container = document.create_element("div");
        document.set_attribute(container, "id", "language-switcher-container");
        document.add_class(container, "language-switcher-container");

        let switcher = document.create_element("div");
        document.set_attribute(switcher, "id", "language-switcher");
        document.add_class(switcher, "language-switcher");

        let button = document.create_element("button");
        document.add_class(button, "current-language");
        document.set_text(button, &current.label());

        let dropdown = document.create_element("div");
        document.add_class(dropdown, "language-dropdown");

        let mut options = Vec::new();
        for descriptor in LanguageRegistry::get().list() {
            let option = document.create_element("a");
            document.set_attribute(option, "href", "#");
            document.add_class(option, "language-option");
            document.set_attribute(option, "data-lang", descriptor.code);
            document.set_text(option, &descriptor.label());
            document.append_child(dropdown, option);
            options.push((option, descriptor.code));
        }

        document.append_child(switcher, button);
        document.append_child(switcher, dropdown);
        document.append_child(container, switcher);
        let root = document.root();
        document.append_child(root, container);

        Self {
            container,
            switcher,
            button,
            dropdown,
            options,
        }
    }

    /// Install the widget stylesheet.
    pub fn inject_style(document: &mut Document) {
        document.inject_style(SWITCHER_STYLE);
    }

    /// Update the button to show the current language's flag and name.
    pub fn refresh_label(&self, document: &mut Document, current: Language) {
        document.set_text(self.button, &current.label());
    }

    /// Whether the dropdown is currently open.
    pub fn is_open(&self, document: &Document) -> bool {
        document.has_class(self.dropdown, "show")
    }

    /// Route a click.
    ///
    /// * On the button: toggle the dropdown.
    /// * On an option: close the dropdown and return the selected code for
    ///   the orchestrator to act on.
    /// * Anywhere outside the widget subtree (including "nowhere",
    ///   `target = None`): close the dropdown.
    pub fn handle_click(
        &self,
        document: &mut Document,
        target: Option<ElementId>,
    ) -> Option<&'static str> {
        let Some(target) = target else {
            document.remove_class(self.dropdown, "show");
            return None;
        };

        if target == self.button {
            document.toggle_class(self.dropdown, "show");
            return None;
        }

        if let Some(&(_, code)) = self.options.iter().find(|(option, _)| *option == target) {
            document.remove_class(self.dropdown, "show");
            return Some(code);
        }

        if !document.is_within(target, self.switcher) {
            document.remove_class(self.dropdown, "show");
        }
        None
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn button(&self) -> ElementId {
        self.button
    }

    pub fn dropdown(&self) -> ElementId {
        self.dropdown
    }

    /// The option element for a language code, if it exists.
    pub fn option_for(&self, code: &str) -> Option<ElementId> {
        self.options
            .iter()
            .find(|(_, option_code)| *option_code == code)
            .map(|(option, _)| *option)
    }
}
