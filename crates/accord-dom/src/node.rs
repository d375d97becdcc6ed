//! Styled nodes
//!
//! An owned tree describing what the host rendered. Hosts build it once per
//! evaluation, either directly through the builder methods or via an adapter.

use crate::{Attributes, ResolvedStyle};

/// A node of the styled snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum StyledNode {
    Element(StyledElement),
    Text(String),
    Comment(String),
}

impl StyledNode {
    pub fn as_element(&self) -> Option<&StyledElement> {
        match self {
            StyledNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Character data of a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyledNode::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<StyledElement> for StyledNode {
    fn from(el: StyledElement) -> Self {
        StyledNode::Element(el)
    }
}

impl From<&str> for StyledNode {
    fn from(text: &str) -> Self {
        StyledNode::Text(text.to_string())
    }
}

/// Shadow tree attached to a custom element
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowRoot {
    /// Open shadow root contents
    Open(Vec<StyledNode>),
    /// Closed shadow root, not inspectable
    Closed,
}

/// Nodes distributed into a `slot`
#[derive(Debug, Clone, PartialEq)]
pub struct SlotAssignment {
    pub nodes: Vec<StyledNode>,
    /// True when the nodes come from the host's light tree rather than the
    /// slot's own fallback content
    pub from_light_tree: bool,
}

/// Content of an embedded document (`iframe`, `frame`)
#[derive(Debug, Clone, PartialEq)]
pub enum FrameContent {
    Document(Vec<StyledNode>),
    /// Cross-origin or otherwise unreachable
    Inaccessible,
}

/// An element with its resolved style
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledElement {
    /// Lowercase local name
    pub tag: String,
    pub attrs: Attributes,
    pub children: Vec<StyledNode>,
    pub style: ResolvedStyle,
    /// Generated `::before` content, `None` when the pseudo-element is absent
    pub before: Option<String>,
    /// Generated `::after` content
    pub after: Option<String>,
    pub shadow_root: Option<ShadowRoot>,
    pub slot: Option<SlotAssignment>,
    pub frame: Option<FrameContent>,
}

impl StyledElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<StyledNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(StyledNode::Text(text.to_string()));
        self
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        if !self.style.set(property, value) {
            tracing::debug!("ignoring unsupported style property {}", property);
        }
        self
    }

    pub fn with_before(mut self, content: &str) -> Self {
        self.before = Some(content.to_string());
        self
    }

    pub fn with_after(mut self, content: &str) -> Self {
        self.after = Some(content.to_string());
        self
    }

    pub fn with_shadow_root(mut self, root: ShadowRoot) -> Self {
        self.shadow_root = Some(root);
        self
    }

    pub fn with_slot(mut self, assignment: SlotAssignment) -> Self {
        self.slot = Some(assignment);
        self
    }

    pub fn with_frame(mut self, content: FrameContent) -> Self {
        self.frame = Some(content);
        self
    }

    /// Attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Custom elements have a hyphen in their name
    pub fn is_custom_element(&self) -> bool {
        self.tag.contains('-')
    }

    /// Child elements, skipping text and comments
    pub fn child_elements(&self) -> impl Iterator<Item = &StyledElement> {
        self.children.iter().filter_map(StyledNode::as_element)
    }

    /// Depth-first search of descendants (excluding self)
    pub fn find_descendant(&self, pred: &dyn Fn(&StyledElement) -> bool) -> Option<&StyledElement> {
        for child in self.child_elements() {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(pred) {
                return Some(found);
            }
        }
        None
    }
}

/// A whole document as handed over by the host
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledDocument {
    /// Top-level nodes, usually a single `html` element
    pub children: Vec<StyledNode>,
}

impl StyledDocument {
    pub fn new(root: StyledElement) -> Self {
        Self {
            children: vec![StyledNode::Element(root)],
        }
    }

    /// Document element
    pub fn root(&self) -> Option<&StyledElement> {
        self.children.iter().find_map(StyledNode::as_element)
    }

    /// The `body` element, or the document element when there is none
    pub fn body(&self) -> Option<&StyledElement> {
        let root = self.root()?;
        if root.tag == "body" {
            return Some(root);
        }
        root.child_elements().find(|el| el.tag == "body").or(Some(root))
    }
}
