//! Per-document groupings for the rule layer
//!
//! Built in one pass over the finished facts. Each collector only
//! aggregates; none of them computes new semantics.

mod controls;
mod frames;
mod ids;
mod images;
mod links;
mod lists;
mod media;
mod structure;

pub use controls::Controls;
pub use frames::{FrameInfo, Frames};
pub use ids::{IdIndex, Ids};
pub use images::{ImageInfo, Images, MapInfo};
pub use links::{LinkInfo, Links};
pub use lists::{ListNode, Lists};
pub use media::{Media, MediaInfo, MediaKind, TrackInfo};
pub use structure::{HeadingInfo, LandmarkNode, Structure};

use serde::Serialize;

use crate::model::ElementFacts;
use crate::tree::{ElementId, Tree};

/// Element with nested members of the same collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectedNode {
    pub element: ElementId,
    pub children: Vec<CollectedNode>,
}

impl CollectedNode {
    /// Every element of the subtree, pre-order
    pub fn flatten(&self) -> Vec<ElementId> {
        let mut out = vec![self.element];
        for child in &self.children {
            out.extend(child.flatten());
        }
        out
    }
}

/// Nest members (given in tree order) under their nearest member ancestor
pub(crate) fn nest(tree: &Tree, members: &[ElementId]) -> Vec<CollectedNode> {
    let mut index = 0;
    nest_within(tree, members, &mut index, None)
}

fn nest_within(tree: &Tree, members: &[ElementId], index: &mut usize, parent: Option<ElementId>) -> Vec<CollectedNode> {
    let mut nodes = Vec::new();
    while let Some(&element) = members.get(*index) {
        if parent.is_some_and(|p| !tree.is_descendant_of(element, p)) {
            break;
        }
        *index += 1;
        let children = nest_within(tree, members, index, Some(element));
        nodes.push(CollectedNode { element, children });
    }
    nodes
}

/// All collections of one evaluation
#[derive(Debug, Clone, Default, Serialize)]
pub struct Collections {
    pub controls: Controls,
    pub structure: Structure,
    pub lists: Lists,
    pub media: Media,
    pub images: Images,
    pub links: Links,
    pub ids: Ids,
    pub frames: Frames,
}

impl Collections {
    pub fn collect(tree: &Tree, facts: &[ElementFacts]) -> Self {
        let collections = Self {
            controls: Controls::collect(tree, facts),
            structure: Structure::collect(tree, facts),
            lists: Lists::collect(tree, facts),
            media: Media::collect(tree),
            images: Images::collect(tree, facts),
            links: Links::collect(tree, facts),
            ids: Ids::collect(tree),
            frames: Frames::collect(tree),
        };
        tracing::debug!(
            "collected {} headings, {} landmarks, {} links, {} images, {} frames",
            collections.structure.headings.len(),
            collections.structure.landmark_count(),
            collections.links.links.len(),
            collections.images.images.len(),
            collections.frames.frames.len()
        );
        collections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_dom::StyledElement;

    #[test]
    fn test_nest_by_ancestry() {
        let tree = Tree::build(
            &StyledElement::new("div")
                .with_child(StyledElement::new("ul").with_child(StyledElement::new("li")))
                .with_child(StyledElement::new("ol")),
        );
        let members = [ElementId(1), ElementId(2), ElementId(3)];
        let nested = nest(&tree, &members);
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].children[0].element, ElementId(2));
        assert!(nested[1].children.is_empty());
        assert_eq!(nested[0].flatten(), vec![ElementId(1), ElementId(2)]);
    }
}
