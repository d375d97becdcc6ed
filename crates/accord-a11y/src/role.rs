//! Role resolution
//!
//! Default role from host semantics, overridden by the first defined,
//! non-abstract token of an explicit `role` attribute, then narrowed to a
//! context-dependent design pattern variant.

use accord_aria::{
    AriaVersion, HostContext, PatternVariant, Role, RoleDesignPattern, default_role, design_pattern,
};
use serde::Serialize;

use crate::tree::{ElementNode, Tree};

/// Ancestor facts that influence role resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleContext {
    pub host: HostContext,
    /// Role of the nearest enclosing table, grid or treegrid
    pub table_role: Option<Role>,
}

/// Outcome of role resolution for one element
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRole {
    pub role: Role,
    /// Implicit role of the tag
    pub default_role: Role,
    /// Trimmed `role` attribute, if present and non-empty
    pub role_attr: Option<String>,
    /// Explicit role that overrode the default
    pub explicit: Option<Role>,
    #[serde(skip)]
    pub pattern: &'static RoleDesignPattern,
}

impl ResolvedRole {
    /// Role came from a valid `role` attribute
    pub fn has_role(&self) -> bool {
        self.explicit.is_some()
    }

    /// A `role` attribute was present but named nothing usable
    pub fn has_invalid_role_attr(&self) -> bool {
        self.role_attr.is_some() && self.explicit.is_none()
    }
}

/// Resolve the role of an element
pub fn resolve_role(node: &ElementNode, ctx: &RoleContext, version: AriaVersion) -> ResolvedRole {
    let default_role = default_role(&node.tag, &node.attrs, &ctx.host);
    let role_attr = node
        .attrs
        .get_trimmed("role")
        .filter(|r| !r.is_empty())
        .map(str::to_string);
    let explicit = role_attr.as_deref().and_then(|value| {
        value
            .split_ascii_whitespace()
            .filter_map(|token| Role::parse_for(token, version))
            .find(|role| !role.is_abstract())
    });
    let role = explicit.unwrap_or(default_role);

    let variant = match role {
        Role::Separator if is_focusable(node) => PatternVariant::FocusableSeparator,
        Role::Row => match ctx.table_role {
            Some(Role::Grid) => PatternVariant::GridRow,
            Some(Role::TreeGrid) => PatternVariant::TreegridRow,
            _ => PatternVariant::Standard,
        },
        _ => PatternVariant::Standard,
    };

    ResolvedRole {
        role,
        default_role,
        role_attr,
        explicit,
        pattern: design_pattern(role, variant),
    }
}

/// Resolve every element of the tree in order
///
/// Context is carried from the parent; it resets at document boundaries.
pub fn resolve_roles(tree: &Tree, version: AriaVersion) -> Vec<ResolvedRole> {
    let mut contexts: Vec<RoleContext> = Vec::with_capacity(tree.len());
    let mut roles: Vec<ResolvedRole> = Vec::with_capacity(tree.len());
    for node in tree.elements() {
        let ctx = match node.parent {
            Some(parent) if tree.element(parent).document == node.document => {
                child_context(tree.element(parent), &contexts[parent.index()], roles[parent.index()].role)
            }
            _ => RoleContext::default(),
        };
        roles.push(resolve_role(node, &ctx, version));
        contexts.push(ctx);
    }
    roles
}

fn child_context(parent: &ElementNode, ctx: &RoleContext, parent_role: Role) -> RoleContext {
    let table_role = match parent_role {
        Role::Table | Role::Grid | Role::TreeGrid => Some(parent_role),
        _ if parent.tag == "table" => None,
        _ => ctx.table_role,
    };
    RoleContext {
        host: HostContext {
            in_sectioning_content: ctx.host.in_sectioning_content
                || matches!(parent.tag.as_str(), "article" | "aside" | "main" | "nav" | "section"),
            in_grid: matches!(table_role, Some(Role::Grid | Role::TreeGrid)),
            in_table: table_role == Some(Role::Table),
        },
        table_role,
    }
}

/// Parsed `tabindex` attribute
pub fn tab_index_attr(node: &ElementNode) -> Option<i32> {
    node.attr("tabindex").and_then(|v| v.trim().parse::<i32>().ok())
}

/// Focusable without a `tabindex` attribute
pub fn is_natively_focusable(node: &ElementNode) -> bool {
    if node.has_attr("disabled") && matches!(node.tag.as_str(), "button" | "input" | "select" | "textarea") {
        return false;
    }
    match node.tag.as_str() {
        "a" | "area" => node.has_attr("href"),
        "audio" | "video" => node.has_attr("controls"),
        "button" | "iframe" | "select" | "summary" | "textarea" => true,
        "input" => node.input_type().as_deref() != Some("hidden"),
        _ => node
            .attrs
            .get_lower("contenteditable")
            .is_some_and(|v| v.is_empty() || v == "true"),
    }
}

/// Effective tab index: the attribute, else 0 for natively focusable elements
pub fn tab_index(node: &ElementNode) -> Option<i32> {
    tab_index_attr(node).or_else(|| is_natively_focusable(node).then_some(0))
}

pub fn is_focusable(node: &ElementNode) -> bool {
    tab_index(node).is_some()
}

/// Natively interactive elements
pub fn is_interactive(node: &ElementNode) -> bool {
    match node.tag.as_str() {
        "a" | "area" => node.has_attr("href"),
        "audio" | "video" => node.has_attr("controls"),
        "button" | "output" | "select" | "textarea" => true,
        "input" => node.input_type().as_deref() != Some("hidden"),
        _ => false,
    }
}
