use accord_aria::Role;
use serde::Serialize;

use crate::model::ElementFacts;
use crate::tree::{DocumentId, ElementId, Tree};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingInfo {
    pub element: ElementId,
    pub level: u32,
    pub name: String,
}

/// Landmark with its nested landmarks and the headings directly inside it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandmarkNode {
    pub element: ElementId,
    pub role: Role,
    pub headings: Vec<ElementId>,
    pub children: Vec<LandmarkNode>,
}

/// Document outline: headings and landmarks
#[derive(Debug, Clone, Default, Serialize)]
pub struct Structure {
    pub headings: Vec<HeadingInfo>,
    pub landmarks: Vec<LandmarkNode>,
    /// Headings outside any landmark
    pub unlandmarked_headings: Vec<ElementId>,
    /// Indexed by document
    pub has_main_landmark: Vec<bool>,
}

impl Structure {
    pub fn collect(tree: &Tree, facts: &[ElementFacts]) -> Self {
        let mut structure = Self {
            has_main_landmark: vec![false; tree.documents().len()],
            ..Self::default()
        };
        // stack of landmark paths, innermost last
        let mut open: Vec<(ElementId, Vec<usize>)> = Vec::new();

        for f in facts {
            while open.last().is_some_and(|(lm, _)| !tree.is_descendant_of(f.id, *lm)) {
                open.pop();
            }
            if f.is_heading {
                structure.headings.push(HeadingInfo {
                    element: f.id,
                    level: f.aria.heading_level.unwrap_or(2),
                    name: f.name.text.clone(),
                });
                match open.last().and_then(|(_, path)| structure.landmark_mut(path)) {
                    Some(landmark) => landmark.headings.push(f.id),
                    None => structure.unlandmarked_headings.push(f.id),
                }
            }
            if f.is_landmark {
                if f.role.role == Role::Main {
                    structure.has_main_landmark[tree.element(f.id).document.index()] = true;
                }
                let node = LandmarkNode {
                    element: f.id,
                    role: f.role.role,
                    headings: Vec::new(),
                    children: Vec::new(),
                };
                let mut path = open.last().map(|(_, p)| p.clone()).unwrap_or_default();
                let siblings = if path.is_empty() {
                    Some(&mut structure.landmarks)
                } else {
                    structure.landmark_mut(&path).map(|parent| &mut parent.children)
                };
                if let Some(siblings) = siblings {
                    siblings.push(node);
                    path.push(siblings.len() - 1);
                    open.push((f.id, path));
                }
            }
        }
        structure
    }

    fn landmark_mut(&mut self, path: &[usize]) -> Option<&mut LandmarkNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.landmarks.get_mut(*first)?;
        for &i in rest {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }

    /// Landmarks at every depth
    pub fn landmark_count(&self) -> usize {
        fn count(nodes: &[LandmarkNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.landmarks)
    }

    pub fn has_main(&self, document: DocumentId) -> bool {
        self.has_main_landmark.get(document.index()).copied().unwrap_or(false)
    }
}
