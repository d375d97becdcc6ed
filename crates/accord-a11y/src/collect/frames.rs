use serde::Serialize;

use crate::tree::{DocumentId, ElementId, FrameState, Tree};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameInfo {
    pub element: ElementId,
    pub src: Option<String>,
    pub title: Option<String>,
    /// Embedded document, when inspectable
    pub document: Option<DocumentId>,
    pub is_cross_domain: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Frames {
    pub frames: Vec<FrameInfo>,
}

impl Frames {
    pub fn collect(tree: &Tree) -> Self {
        let frames = tree
            .elements()
            .filter(|n| matches!(n.tag.as_str(), "iframe" | "frame"))
            .map(|n| FrameInfo {
                element: n.id,
                src: n.attr("src").map(str::to_string),
                title: n.attr("title").map(str::to_string),
                document: match n.frame {
                    FrameState::Document(doc) => Some(doc),
                    _ => None,
                },
                is_cross_domain: n.frame == FrameState::Inaccessible,
            })
            .collect();
        Self { frames }
    }

    pub fn inaccessible(&self) -> impl Iterator<Item = &FrameInfo> {
        self.frames.iter().filter(|f| f.is_cross_domain)
    }
}
