use accord_aria::Role;
use serde::Serialize;

use super::{CollectedNode, nest};
use crate::model::ElementFacts;
use crate::tree::{ElementId, Tree};

/// Form controls and their grouping containers
#[derive(Debug, Clone, Default, Serialize)]
pub struct Controls {
    pub tree: Vec<CollectedNode>,
    pub forms: Vec<ElementId>,
}

impl Controls {
    pub fn collect(tree: &Tree, facts: &[ElementFacts]) -> Self {
        let members: Vec<ElementId> = facts
            .iter()
            .filter(|f| {
                f.is_interactive
                    || f.role.role.is_widget()
                    || matches!(f.role.role, Role::Group | Role::Form | Role::RadioGroup)
                    || tree.element(f.id).tag == "label"
            })
            .map(|f| f.id)
            .collect();
        let forms = facts
            .iter()
            .filter(|f| tree.element(f.id).tag == "form" || f.role.role == Role::Form)
            .map(|f| f.id)
            .collect();
        Self {
            tree: nest(tree, &members),
            forms,
        }
    }

    /// Controls nested under a form
    pub fn in_form(&self, form: ElementId) -> Vec<ElementId> {
        fn find(nodes: &[CollectedNode], form: ElementId) -> Option<&CollectedNode> {
            nodes
                .iter()
                .find_map(|n| if n.element == form { Some(n) } else { find(&n.children, form) })
        }
        find(&self.tree, form)
            .map(|node| node.flatten().into_iter().skip(1).collect())
            .unwrap_or_default()
    }
}
