//! Node arena
//!
//! Elements and merged text runs stored in pre-order, with owning child
//! indices and a non-owning parent index. Each node is tagged with the
//! document scope it belongs to so id lookups never cross a frame or
//! shadow boundary.

use std::collections::HashMap;

use accord_dom::{Attributes, FrameContent, ResolvedStyle, ShadowRoot, StyledElement, StyledNode};
use serde::Serialize;

/// Element identifier (index into the arena, tree order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based position in tree order
    #[inline]
    pub fn ordinal(self) -> u32 {
        self.0 + 1
    }
}

/// Text run identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TextId(pub(crate) u32);

/// Document scope identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct DocumentId(pub(crate) u32);

impl DocumentId {
    /// The evaluated top-level document
    pub const TOP: DocumentId = DocumentId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Child reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeRef {
    Element(ElementId),
    Text(TextId),
}

/// What started a document scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Top,
    Frame,
    ShadowRoot,
}

/// One document scope and its id index
#[derive(Debug, Clone, Serialize)]
pub struct DocumentScope {
    pub id: DocumentId,
    pub kind: DocumentKind,
    /// Element hosting the scope (`iframe` or shadow host)
    pub host: Option<ElementId>,
    ids: HashMap<String, Vec<ElementId>>,
}

impl DocumentScope {
    fn new(id: DocumentId, kind: DocumentKind, host: Option<ElementId>) -> Self {
        Self {
            id,
            kind,
            host,
            ids: HashMap::new(),
        }
    }

    /// First element carrying the id, as `getElementById` would return
    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.ids.get(id).and_then(|els| els.first().copied())
    }

    /// Number of elements sharing the id
    pub fn id_count(&self, id: &str) -> usize {
        self.ids.get(id).map_or(0, Vec::len)
    }

    /// Ids used more than once, sorted
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = self
            .ids
            .iter()
            .filter(|(_, els)| els.len() > 1)
            .map(|(id, _)| id.as_str())
            .collect();
        dups.sort_unstable();
        dups
    }

    /// Every id with its elements
    pub fn ids(&self) -> impl Iterator<Item = (&str, &[ElementId])> {
        self.ids.iter().map(|(id, els)| (id.as_str(), els.as_slice()))
    }
}

/// Shadow tree state of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowState {
    None,
    Open(DocumentId),
    /// Closed shadow root: existence recorded, contents not inspectable
    Closed,
}

/// Embedded document state of a frame element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameState {
    None,
    Document(DocumentId),
    Inaccessible,
}

/// Element node
#[derive(Debug, Clone, Serialize)]
pub struct ElementNode {
    pub id: ElementId,
    pub tag: String,
    pub attrs: Attributes,
    pub style: ResolvedStyle,
    pub before: Option<String>,
    pub after: Option<String>,
    pub parent: Option<ElementId>,
    pub children: Vec<NodeRef>,
    pub document: DocumentId,
    pub shadow: ShadowState,
    pub frame: FrameState,
    /// Inside an `svg` element
    pub in_svg: bool,
    /// One past the last descendant index
    subtree_end: u32,
}

impl ElementNode {
    /// Attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has(name)
    }

    #[inline]
    pub fn ordinal(&self) -> u32 {
        self.id.ordinal()
    }

    /// `type` of an `input`, defaulting to `text`
    pub fn input_type(&self) -> Option<String> {
        if self.tag != "input" {
            return None;
        }
        Some(self.attrs.get_lower("type").unwrap_or_else(|| "text".to_string()))
    }

    /// Child elements in order
    pub fn child_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.children.iter().filter_map(|c| match c {
            NodeRef::Element(id) => Some(*id),
            NodeRef::Text(_) => None,
        })
    }
}

/// Merged text run
#[derive(Debug, Clone, Serialize)]
pub struct TextNode {
    pub id: TextId,
    pub text: String,
    pub parent: ElementId,
    pub document: DocumentId,
}

/// Arena of elements and text runs
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tree {
    elements: Vec<ElementNode>,
    texts: Vec<TextNode>,
    documents: Vec<DocumentScope>,
}

impl Tree {
    /// Build the arena from a styled root
    pub fn build(root: &StyledElement) -> Self {
        let mut builder = TreeBuilder {
            tree: Tree {
                documents: vec![DocumentScope::new(DocumentId::TOP, DocumentKind::Top, None)],
                ..Tree::default()
            },
        };
        builder.visit_element(root, None, DocumentId::TOP, false);
        tracing::debug!(
            "built tree: {} elements, {} text runs, {} documents",
            builder.tree.elements.len(),
            builder.tree.texts.len(),
            builder.tree.documents.len()
        );
        builder.tree
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Root element, if anything was allocated
    pub fn root(&self) -> Option<ElementId> {
        (!self.elements.is_empty()).then_some(ElementId(0))
    }

    #[inline]
    pub fn element(&self, id: ElementId) -> &ElementNode {
        &self.elements[id.index()]
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementNode> {
        self.elements.get(id.index())
    }

    #[inline]
    pub fn text(&self, id: TextId) -> &TextNode {
        &self.texts[id.0 as usize]
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.elements.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.texts.iter()
    }

    pub fn document(&self, id: DocumentId) -> &DocumentScope {
        &self.documents[id.index()]
    }

    pub fn documents(&self) -> &[DocumentScope] {
        &self.documents
    }

    /// `getElementById` scoped to one document
    pub fn element_by_id(&self, document: DocumentId, id: &str) -> Option<ElementId> {
        self.documents.get(document.index())?.element_by_id(id)
    }

    /// Ancestors from the parent upward, crossing document boundaries
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.element(id).parent,
        }
    }

    /// Nearest inclusive ancestor in the same document matching `pred`
    pub fn closest(&self, id: ElementId, pred: impl Fn(&ElementNode) -> bool) -> Option<ElementId> {
        let document = self.element(id).document;
        std::iter::once(id)
            .chain(self.ancestors(id))
            .take_while(|&a| self.element(a).document == document)
            .find(|&a| pred(self.element(a)))
    }

    /// Descendant element ids in tree order, all documents included
    pub fn descendants(&self, id: ElementId) -> impl Iterator<Item = ElementId> {
        let end = self.element(id).subtree_end;
        (id.0 + 1..end).map(ElementId)
    }

    /// First descendant in the same document matching `pred`
    pub fn find_descendant(&self, id: ElementId, pred: impl Fn(&ElementNode) -> bool) -> Option<ElementId> {
        let document = self.element(id).document;
        self.descendants(id)
            .find(|&d| self.element(d).document == document && pred(self.element(d)))
    }

    /// Is `id` inside the subtree rooted at `ancestor` (exclusive)
    pub fn is_descendant_of(&self, id: ElementId, ancestor: ElementId) -> bool {
        id.0 > ancestor.0 && id.0 < self.element(ancestor).subtree_end
    }

    /// Concatenated text of all text runs in the subtree
    pub fn text_content(&self, id: ElementId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, &mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, id: ElementId, parts: &mut Vec<&'a str>) {
        for child in &self.element(id).children {
            match *child {
                NodeRef::Text(t) => parts.push(&self.text(t).text),
                NodeRef::Element(e) => self.collect_text(e, parts),
            }
        }
    }
}

/// Iterator over ancestors
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<ElementId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let current = self.next?;
        self.next = self.tree.element(current).parent;
        Some(current)
    }
}

/// Elements that never get a node
fn is_skippable(el: &StyledElement, in_svg: bool) -> bool {
    match el.tag.as_str() {
        "base" | "content" | "link" | "meta" | "noscript" | "script" | "style" | "template" | "shadow" => true,
        "title" => !in_svg,
        "input" => el.attrs.get_lower("type").as_deref() == Some("hidden"),
        _ => false,
    }
}

struct TreeBuilder {
    tree: Tree,
}

impl TreeBuilder {
    fn visit_node(&mut self, node: &StyledNode, parent: ElementId, document: DocumentId, in_svg: bool) {
        match node {
            StyledNode::Element(el) => self.visit_element(el, Some(parent), document, in_svg),
            StyledNode::Text(text) => self.add_text(text, parent, document),
            StyledNode::Comment(_) => {}
        }
    }

    fn add_text(&mut self, text: &str, parent: ElementId, document: DocumentId) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if let Some(&NodeRef::Text(last)) = self.tree.elements[parent.index()].children.last() {
            let run = &mut self.tree.texts[last.0 as usize].text;
            run.push(' ');
            run.push_str(text);
            return;
        }
        let id = TextId(self.tree.texts.len() as u32);
        self.tree.texts.push(TextNode {
            id,
            text: text.to_string(),
            parent,
            document,
        });
        self.tree.elements[parent.index()].children.push(NodeRef::Text(id));
    }

    fn visit_element(&mut self, el: &StyledElement, parent: Option<ElementId>, document: DocumentId, in_svg: bool) {
        if is_skippable(el, in_svg) {
            return;
        }

        if let (Some(parent), "slot") = (parent, el.tag.as_str()) {
            self.visit_slot(el, parent, document, in_svg);
            return;
        }

        let id = ElementId(self.tree.elements.len() as u32);
        self.tree.elements.push(ElementNode {
            id,
            tag: el.tag.clone(),
            attrs: el.attrs.clone(),
            style: el.style.clone(),
            before: el.before.clone(),
            after: el.after.clone(),
            parent,
            children: Vec::new(),
            document,
            shadow: ShadowState::None,
            frame: FrameState::None,
            in_svg,
            subtree_end: id.0 + 1,
        });
        if let Some(parent) = parent {
            self.tree.elements[parent.index()].children.push(NodeRef::Element(id));
        }
        if let Some(value) = el.attrs.get("id").map(str::trim).filter(|v| !v.is_empty()) {
            self.tree.documents[document.index()]
                .ids
                .entry(value.to_string())
                .or_default()
                .push(id);
        }

        let child_svg = in_svg || el.tag == "svg";
        match (&el.shadow_root, &el.frame) {
            (Some(ShadowRoot::Open(children)), _) => {
                let scope = self.new_document(DocumentKind::ShadowRoot, id);
                self.tree.elements[id.index()].shadow = ShadowState::Open(scope);
                for child in children {
                    self.visit_node(child, id, scope, child_svg);
                }
            }
            (Some(ShadowRoot::Closed), _) => {
                self.tree.elements[id.index()].shadow = ShadowState::Closed;
            }
            (None, Some(FrameContent::Document(children))) => {
                let scope = self.new_document(DocumentKind::Frame, id);
                self.tree.elements[id.index()].frame = FrameState::Document(scope);
                tracing::debug!("entering embedded document {} of <{}>", scope.0, el.tag);
                for child in children {
                    self.visit_node(child, id, scope, false);
                }
            }
            (None, Some(FrameContent::Inaccessible)) => {
                tracing::debug!("embedded document of <{}> is not inspectable", el.tag);
                self.tree.elements[id.index()].frame = FrameState::Inaccessible;
            }
            (None, None) => {
                for child in &el.children {
                    self.visit_node(child, id, document, child_svg);
                }
            }
        }

        self.tree.elements[id.index()].subtree_end = self.tree.elements.len() as u32;
    }

    /// Assigned nodes replace the slot; light-tree nodes belong to the
    /// host's document
    fn visit_slot(&mut self, el: &StyledElement, parent: ElementId, document: DocumentId, in_svg: bool) {
        match &el.slot {
            Some(assignment) if !assignment.nodes.is_empty() => {
                let scope = if assignment.from_light_tree {
                    self.host_document(document)
                } else {
                    document
                };
                for node in &assignment.nodes {
                    self.visit_node(node, parent, scope, in_svg);
                }
            }
            _ => {
                for child in &el.children {
                    self.visit_node(child, parent, document, in_svg);
                }
            }
        }
    }

    fn host_document(&self, document: DocumentId) -> DocumentId {
        self.tree.documents[document.index()]
            .host
            .map_or(document, |host| self.tree.elements[host.index()].document)
    }

    fn new_document(&mut self, kind: DocumentKind, host: ElementId) -> DocumentId {
        let id = DocumentId(self.tree.documents.len() as u32);
        self.tree.documents.push(DocumentScope::new(id, kind, Some(host)));
        id
    }
}
