use accord_aria::Role;
use serde::Serialize;

use crate::model::ElementFacts;
use crate::tree::{ElementId, Tree};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkInfo {
    pub element: ElementId,
    pub href: Option<String>,
    pub name: String,
    /// Opens in a new browsing context
    pub new_window: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Links {
    pub links: Vec<LinkInfo>,
}

impl Links {
    pub fn collect(tree: &Tree, facts: &[ElementFacts]) -> Self {
        let links = facts
            .iter()
            .filter(|f| f.role.role == Role::Link)
            .map(|f| {
                let node = tree.element(f.id);
                LinkInfo {
                    element: f.id,
                    href: node.attr("href").map(str::to_string),
                    name: f.name.text.clone(),
                    new_window: node.attr("target").is_some_and(|t| t.trim() == "_blank"),
                }
            })
            .collect();
        Self { links }
    }

    /// Links sharing a name but pointing at different destinations
    pub fn ambiguous(&self) -> Vec<(&LinkInfo, &LinkInfo)> {
        let mut pairs = Vec::new();
        for (i, a) in self.links.iter().enumerate() {
            for b in &self.links[i + 1..] {
                if !a.name.is_empty() && a.name.eq_ignore_ascii_case(&b.name) && a.href != b.href {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}
