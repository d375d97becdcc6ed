//! Engine: builds a [`NodeModel`] from a styled tree

use accord_aria::Role;
use accord_dom::{StyledDocument, StyledElement};

use crate::accname::{AccessibleName, NameEngine};
use crate::aria_info::{AriaInfo, has_native_checked_state};
use crate::collect::Collections;
use crate::config::EngineConfig;
use crate::contrast::ColorContrast;
use crate::model::{ElementFacts, NativeState, NodeModel};
use crate::role::{ResolvedRole, is_focusable, is_interactive, resolve_roles, tab_index};
use crate::table::{CellRef, TableElement, TableId, build_table, is_table_root};
use crate::tree::{ElementId, ElementNode, FrameState, NodeRef, ShadowState, Tree};
use crate::visibility::Visibility;

/// Semantics engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a document; an empty document yields an empty model
    pub fn evaluate_document(&self, document: &StyledDocument) -> NodeModel {
        match document.root() {
            Some(root) => self.evaluate(root),
            None => NodeModel {
                config: self.config.clone(),
                tree: Tree::default(),
                roles: Vec::new(),
                facts: Vec::new(),
                tables: Vec::new(),
                collections: Collections::default(),
            },
        }
    }

    /// Evaluate the tree rooted at `root`
    pub fn evaluate(&self, root: &StyledElement) -> NodeModel {
        let version = self.config.aria_version;
        let tree = Tree::build(root);
        let roles = resolve_roles(&tree, version);

        let names = NameEngine::new(&tree, &roles, version);
        let mut computed: Vec<(AccessibleName, AccessibleName)> = Vec::with_capacity(tree.len());
        for node in tree.elements() {
            let name = names.name(node.id);
            let description = names.description(node.id, &name);
            computed.push((name, description));
        }

        let (tables, cells) = build_tables(&tree, &roles, &computed);
        let (owners, owned) = resolve_owns(&tree);
        let mut table_of = vec![None; tree.len()];
        for (index, table) in tables.iter().enumerate() {
            table_of[table.element.index()] = Some(TableId(index));
        }
        let content = content_flags(&tree);

        let mut facts: Vec<ElementFacts> = Vec::with_capacity(tree.len());
        for node in tree.elements() {
            let index = node.id.index();
            let parent = node.parent.map(|p| &facts[p.index()]);
            let resolved = &roles[index];
            let (name, description) = computed[index].clone();
            let element = build_facts(
                &tree,
                node,
                parent,
                resolved,
                name,
                description,
                &names,
                &self.config,
            );
            let element = ElementFacts {
                table: table_of[index],
                has_content: content[index],
                table_cell: cells[index],
                owner: owners[index],
                owned: owned[index].clone(),
                ..element
            };
            if self.config.trace_nodes {
                tracing::trace!(
                    ordinal = node.ordinal(),
                    tag = %node.tag,
                    role = %element.role.role,
                    name = %element.name.text,
                    on_screen = element.visibility.is_visible_on_screen,
                    to_at = element.visibility.is_visible_to_at,
                    "element facts"
                );
            }
            facts.push(element);
        }

        drop(names);

        let collections = Collections::collect(&tree, &facts);
        tracing::debug!("evaluated {} elements, {} tables", facts.len(), tables.len());
        NodeModel {
            config: self.config.clone(),
            tree,
            roles,
            facts,
            tables,
            collections,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build_facts(
    tree: &Tree,
    node: &ElementNode,
    parent: Option<&ElementFacts>,
    resolved: &ResolvedRole,
    name: AccessibleName,
    description: AccessibleName,
    names: &NameEngine<'_>,
    config: &EngineConfig,
) -> ElementFacts {
    let role = resolved.role;
    let visibility = Visibility::classify(node, parent.map(|p| &p.visibility));
    let contrast = ColorContrast::compute(node, parent.map(|p| &p.contrast), config);
    let aria = AriaInfo::compute(
        tree,
        node,
        role,
        resolved.pattern,
        resolved.has_role(),
        config.aria_version,
    );
    let state = native_state(tree, node);
    let tab_index = tab_index(node);
    let is_landmark = role.is_landmark() && (!matches!(role, Role::Region | Role::Form) || !name.is_empty());
    let trimmed = |attr: &str| {
        node.attr(attr)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    ElementFacts {
        id: node.id,
        role: resolved.clone(),
        error_message: names.error_message(node.id),
        grouping_labels: names.grouping_labels(node.id),
        has_text: node
            .children
            .iter()
            .any(|c| matches!(c, NodeRef::Text(_))),
        is_focusable: is_focusable(node),
        is_tab_stop: tab_index.is_some_and(|t| t >= 0) && visibility.is_visible_on_screen && !state.disabled,
        tab_index,
        is_interactive: is_interactive(node),
        is_landmark,
        is_heading: role == Role::Heading,
        is_link: role == Role::Link,
        is_in_dialog: matches!(role, Role::Dialog | Role::AlertDialog) || parent.is_some_and(|p| p.is_in_dialog),
        has_content: false,
        role_description: trimmed("aria-roledescription"),
        accesskey: trimmed("accesskey"),
        table: None,
        table_cell: None,
        owner: None,
        owned: Vec::new(),
        shadow_closed: node.shadow == ShadowState::Closed,
        frame_inaccessible: node.frame == FrameState::Inaccessible,
        aria,
        name,
        description,
        visibility,
        contrast,
        state,
    }
}

fn native_state(tree: &Tree, node: &ElementNode) -> NativeState {
    let is_checkable = has_native_checked_state(node);
    let required = node.has_attr("required");
    let missing_value = match node.tag.as_str() {
        "input" if is_checkable => !node.has_attr("checked"),
        "input" => {
            !matches!(node.input_type().as_deref(), Some("button" | "image" | "reset" | "submit"))
                && node.attr("value").is_none_or(str::is_empty)
        }
        "textarea" => tree.text_content(node.id).is_empty(),
        "select" => tree
            .find_descendant(node.id, |o| o.tag == "option" && o.has_attr("selected"))
            .is_none(),
        _ => false,
    };
    NativeState {
        checked: is_checkable.then(|| node.has_attr("checked")),
        selected: node.tag == "option" && node.has_attr("selected"),
        disabled: node.has_attr("disabled")
            && matches!(
                node.tag.as_str(),
                "button" | "fieldset" | "input" | "optgroup" | "option" | "select" | "textarea"
            ),
        required,
        readonly: node.has_attr("readonly"),
        invalid: required && missing_value,
    }
}

/// Per element: text, generated content or replaced content somewhere in
/// the subtree. Filled bottom-up in one reverse pass; text counts across
/// documents, replaced elements only within the element's own document.
fn content_flags(tree: &Tree) -> Vec<bool> {
    let mut text = vec![false; tree.len()];
    let mut replaced = vec![false; tree.len()];
    let mut content = vec![false; tree.len()];
    for node in (0..tree.len()).rev().map(|i| tree.element(ElementId(i as u32))) {
        let index = node.id.index();
        for child in &node.children {
            match *child {
                NodeRef::Text(t) => text[index] |= !tree.text(t).text.is_empty(),
                NodeRef::Element(c) => {
                    text[index] |= text[c.index()];
                    let inner = tree.element(c);
                    if inner.document == node.document {
                        replaced[index] |= replaced[c.index()] || is_replaced(inner);
                    }
                }
            }
        }
        content[index] = node.before.is_some() || node.after.is_some() || text[index] || replaced[index];
    }
    content
}

fn is_replaced(node: &ElementNode) -> bool {
    matches!(
        node.tag.as_str(),
        "audio" | "canvas" | "embed" | "iframe" | "img" | "input" | "object" | "select" | "svg" | "textarea" | "video"
    )
}

/// Build, classify and resolve headers for every table; returns the
/// tables and a cell back-reference per element
fn build_tables(
    tree: &Tree,
    roles: &[ResolvedRole],
    names: &[(AccessibleName, AccessibleName)],
) -> (Vec<TableElement>, Vec<Option<CellRef>>) {
    let mut tables = Vec::new();
    let mut cells = vec![None; tree.len()];
    for node in tree.elements().filter(|n| is_table_root(tree, roles, n.id)) {
        let mut table = build_table(tree, roles, node.id);
        table.classify(roles[node.id.index()].explicit, !names[node.id.index()].0.is_empty());
        let document = node.document;
        table.compute_headers(
            |id| tree.element_by_id(document, id),
            |el| names[el.index()].0.text.clone(),
        );
        let table_id = TableId(tables.len());
        for (index, cell) in table.cells.iter().enumerate() {
            cells[cell.element.index()] = Some(CellRef {
                table: table_id,
                cell: index,
            });
        }
        tables.push(table);
    }
    (tables, cells)
}

/// Map `aria-owns` relations. An element has at most one owner; the first
/// claim in tree order wins, and an element cannot own itself or one of its
/// ancestors.
fn resolve_owns(tree: &Tree) -> (Vec<Option<ElementId>>, Vec<Vec<ElementId>>) {
    let mut owners = vec![None; tree.len()];
    let mut owned = vec![Vec::new(); tree.len()];
    for node in tree.elements() {
        for reference in node.attrs.tokens("aria-owns") {
            let Some(target) = tree.element_by_id(node.document, reference) else {
                continue;
            };
            if target == node.id || tree.is_descendant_of(node.id, target) || owners[target.index()].is_some() {
                continue;
            }
            owners[target.index()] = Some(node.id);
            owned[node.id.index()].push(target);
        }
    }
    (owners, owned)
}
