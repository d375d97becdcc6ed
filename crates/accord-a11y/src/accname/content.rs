//! Name from content

use super::{NameEngine, normalize};
use crate::tree::{ElementId, ElementNode, FrameState, NodeRef};

/// State of one content traversal
pub(super) struct Walk {
    /// Element being named; never entered
    target: ElementId,
}

impl Walk {
    pub(super) fn new(target: ElementId) -> Self {
        Self { target }
    }
}

/// Hidden state an element declares for itself, `None` when it takes its
/// parent's. An `aria-hidden` value other than `true` forces the element
/// visible, even under `display: none`.
fn own_hidden(node: &ElementNode) -> Option<bool> {
    if node.has_attr("hidden") {
        return Some(true);
    }
    if let Some(value) = node.attrs.get_lower("aria-hidden") {
        return Some(value.trim() == "true");
    }
    node.style.is_display_none().then_some(true)
}

impl NameEngine<'_> {
    /// Hidden for naming: decided by the nearest inclusive ancestor in the
    /// same document that declares a state
    pub(super) fn is_hidden(&self, id: ElementId) -> bool {
        let document = self.tree.element(id).document;
        std::iter::once(id)
            .chain(self.tree.ancestors(id))
            .take_while(|&a| self.tree.element(a).document == document)
            .find_map(|a| own_hidden(self.tree.element(a)))
            .unwrap_or(false)
    }

    /// Normalized text of the children of `id`, with generated content
    pub(super) fn content(&self, id: ElementId, walk: &Walk) -> String {
        self.content_within(id, walk, false)
    }

    /// Content of `id` when its own hidden state is `hidden`. Text always
    /// contributes unless `visibility` hides it; child elements without a
    /// state of their own take `hidden`.
    pub(super) fn content_within(&self, id: ElementId, walk: &Walk, hidden: bool) -> String {
        let node = self.tree.element(id);
        let mut parts: Vec<String> = Vec::new();
        if let Some(before) = &node.before {
            parts.push(before.clone());
        }
        if !matches!(node.frame, FrameState::Document(_)) {
            let text_hidden = node.style.is_visibility_hidden();
            for child in &node.children {
                match *child {
                    NodeRef::Text(t) => {
                        if !text_hidden {
                            parts.push(self.tree.text(t).text.clone());
                        }
                    }
                    NodeRef::Element(c) => {
                        if c != walk.target && !own_hidden(self.tree.element(c)).unwrap_or(hidden) {
                            parts.push(self.fragment(c, walk));
                        }
                    }
                }
            }
        }
        if let Some(after) = &node.after {
            parts.push(after.clone());
        }
        normalize(&parts.join(" "))
    }

    /// Contribution of one element reached during traversal: its own
    /// label, its current value, its alternative text, or its content
    pub(super) fn fragment(&self, id: ElementId, walk: &Walk) -> String {
        let node = self.tree.element(id);
        if let Some(label) = node.attr("aria-label").map(normalize).filter(|l| !l.is_empty()) {
            return label;
        }
        if let Some(value) = self.embedded_value(id) {
            return normalize(&value);
        }
        let is_image = matches!(node.tag.as_str(), "img" | "area") || node.input_type().as_deref() == Some("image");
        if is_image {
            return normalize(node.attr("alt").unwrap_or_default());
        }
        self.content(id, walk)
    }
}
