use std::collections::HashMap;

use accord_aria::Role;
use serde::Serialize;

use super::{CollectedNode, nest};
use crate::model::ElementFacts;
use crate::tree::{ElementId, Tree};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListNode {
    pub element: ElementId,
    pub role: Role,
    /// Links whose nearest list container is this element
    pub link_count: usize,
    pub children: Vec<ListNode>,
}

/// Lists and menus with their items
#[derive(Debug, Clone, Default, Serialize)]
pub struct Lists {
    pub lists: Vec<ListNode>,
}

fn is_container(role: Role) -> bool {
    matches!(role, Role::List | Role::Menu | Role::MenuBar | Role::Group)
}

impl Lists {
    pub fn collect(tree: &Tree, facts: &[ElementFacts]) -> Self {
        let role_of = |id: ElementId| facts[id.index()].role.role;
        let in_menu = |id: ElementId| {
            tree.ancestors(id)
                .any(|a| matches!(role_of(a), Role::Menu | Role::MenuBar))
        };
        let members: Vec<ElementId> = facts
            .iter()
            .filter(|f| f.role.role.is_list_like() || (f.role.role == Role::Group && in_menu(f.id)))
            .map(|f| f.id)
            .collect();

        let mut link_counts: HashMap<ElementId, usize> = HashMap::new();
        for link in facts.iter().filter(|f| f.is_link) {
            let container = tree
                .ancestors(link.id)
                .find(|&a| is_container(role_of(a)) && members.binary_search(&a).is_ok());
            if let Some(container) = container {
                *link_counts.entry(container).or_default() += 1;
            }
        }

        Self {
            lists: to_list_nodes(nest(tree, &members), facts, &link_counts),
        }
    }
}

fn to_list_nodes(
    nodes: Vec<CollectedNode>,
    facts: &[ElementFacts],
    counts: &HashMap<ElementId, usize>,
) -> Vec<ListNode> {
    nodes
        .into_iter()
        .map(|n| ListNode {
            element: n.element,
            role: facts[n.element.index()].role.role,
            link_count: counts.get(&n.element).copied().unwrap_or(0),
            children: to_list_nodes(n.children, facts, counts),
        })
        .collect()
}
