//! Visibility
//!
//! On-screen and assistive-technology visibility, derived from resolved
//! style plus the parent's already classified state.

use accord_dom::parse_px;
use serde::Serialize;

use crate::tree::ElementNode;

/// Visibility of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Visibility {
    /// `hidden` attribute on the element or an ancestor
    pub is_hidden: bool,
    /// `aria-hidden="true"` on the element or an ancestor
    pub is_aria_hidden: bool,
    /// `aria-hidden="false"` on the element itself; tracked, not honored
    pub is_aria_hidden_false: bool,
    pub is_display_none: bool,
    pub is_visibility_hidden: bool,
    /// Height of at most 1px with clipped overflow, here or above
    pub is_small_height: bool,
    /// Font size of at most 1px
    pub is_small_font: bool,
    pub is_visible_on_screen: bool,
    pub is_visible_to_at: bool,
}

impl Visibility {
    /// Classify an element given its parent's visibility (`None` at the root)
    pub fn classify(node: &ElementNode, parent: Option<&Visibility>) -> Self {
        let parent = parent.copied().unwrap_or(Visibility {
            is_visible_on_screen: true,
            is_visible_to_at: true,
            ..Visibility::default()
        });
        let style = &node.style;
        let aria_hidden = node.attrs.get_lower("aria-hidden");

        let is_hidden = parent.is_hidden || node.has_attr("hidden");
        let is_aria_hidden = parent.is_aria_hidden || aria_hidden.as_deref() == Some("true");
        let is_aria_hidden_false = aria_hidden.as_deref() == Some("false");

        let is_display_none = parent.is_display_none || style.is_display_none();
        let is_visibility_hidden = match style.visibility.trim() {
            "hidden" | "collapse" => true,
            "visible" => false,
            _ => parent.is_visibility_hidden,
        };
        let clipped = matches!(style.overflow.trim(), "hidden" | "clip");
        let is_small_height =
            parent.is_small_height || (clipped && parse_px(&style.height).is_some_and(|h| h <= 1.0));
        let is_small_font = parse_px(&style.font_size).is_some_and(|size| size <= 1.0);

        // area elements report display:none inside image maps but still render
        let style_hidden = node.tag != "area" && (is_display_none || is_visibility_hidden);

        Self {
            is_hidden,
            is_aria_hidden,
            is_aria_hidden_false,
            is_display_none,
            is_visibility_hidden,
            is_small_height,
            is_small_font,
            is_visible_on_screen: !(is_hidden || style_hidden || is_small_height || is_small_font),
            is_visible_to_at: !(is_hidden || is_aria_hidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ElementId, Tree};
    use accord_dom::StyledElement;

    fn classify_chain(root: StyledElement) -> Vec<Visibility> {
        let tree = Tree::build(&root);
        let mut out: Vec<Visibility> = Vec::new();
        for el in tree.elements() {
            let parent = el.parent.map(|p: ElementId| out[p.index()]);
            out.push(Visibility::classify(el, parent.as_ref()));
        }
        out
    }

    #[test]
    fn test_aria_hidden_is_monotonic() {
        let root = StyledElement::new("div").with_attr("aria-hidden", "true").with_child(
            StyledElement::new("span")
                .with_attr("aria-hidden", "false")
                .with_child(StyledElement::new("b")),
        );
        let vis = classify_chain(root);
        assert!(vis.iter().all(|v| !v.is_visible_to_at));
        assert!(vis[1].is_aria_hidden_false);
        assert!(vis[1].is_aria_hidden);
        // still rendered on screen
        assert!(vis[2].is_visible_on_screen);
    }

    #[test]
    fn test_display_none_keeps_at_visibility() {
        let root = StyledElement::new("div")
            .with_style("display", "none")
            .with_child(StyledElement::new("span").with_style("display", "inline"));
        let vis = classify_chain(root);
        assert!(!vis[1].is_visible_on_screen);
        assert!(vis[1].is_visible_to_at);
    }

    #[test]
    fn test_visibility_can_be_reset() {
        let root = StyledElement::new("div")
            .with_style("visibility", "hidden")
            .with_child(StyledElement::new("span").with_style("visibility", "visible"));
        let vis = classify_chain(root);
        assert!(!vis[0].is_visible_on_screen);
        assert!(vis[1].is_visible_on_screen);
    }

    #[test]
    fn test_tiny_elements() {
        let root = StyledElement::new("div")
            .with_style("height", "1px")
            .with_style("overflow", "hidden")
            .with_child(StyledElement::new("span"))
            .with_child(StyledElement::new("em").with_style("font-size", "0px"));
        let vis = classify_chain(root);
        assert!(vis[0].is_small_height);
        assert!(!vis[1].is_visible_on_screen);
        assert!(vis[2].is_small_font);
        assert!(vis.iter().all(|v| v.is_visible_to_at));
    }

    #[test]
    fn test_hidden_attribute_hides_everything() {
        let root = StyledElement::new("div").with_attr("hidden", "").with_child(StyledElement::new("p"));
        let vis = classify_chain(root);
        assert!(!vis[1].is_visible_on_screen);
        assert!(!vis[1].is_visible_to_at);
    }
}
