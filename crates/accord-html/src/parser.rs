//! HTML to styled snapshot
//!
//! Uses html5ever's RcDom and converts it to the engine's input tree,
//! resolving style on the way down.

use std::path::Path;

use accord_dom::{
    Attributes, FrameContent, ResolvedStyle, ShadowRoot, SlotAssignment, StyledDocument, StyledElement, StyledNode,
};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::HtmlError;
use crate::style::StyleResolver;

/// HTML loader
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLoader {
    styles: StyleResolver,
}

/// Light-tree children of a shadow host, waiting for slots
struct LightTree<'a> {
    nodes: &'a [(Option<String>, StyledNode)],
}

impl HtmlLoader {
    /// Lenient loader: unusable style values are ignored
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict loader: unusable style values are errors
    pub fn strict() -> Self {
        Self {
            styles: StyleResolver::new(true),
        }
    }

    /// Parse an HTML string
    pub fn parse(&self, html: &str) -> Result<StyledDocument, HtmlError> {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut children = Vec::new();
        for child in dom.document.children.borrow().iter() {
            if let Some(node) = self.convert(child, None, false, None)? {
                children.push(node);
            }
        }
        Ok(StyledDocument { children })
    }

    /// Read and parse an HTML file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<StyledDocument, HtmlError> {
        let html = std::fs::read_to_string(path.as_ref())?;
        self.parse(&html)
    }

    fn convert(
        &self,
        handle: &Handle,
        parent: Option<&ResolvedStyle>,
        in_svg: bool,
        light: Option<&LightTree<'_>>,
    ) -> Result<Option<StyledNode>, HtmlError> {
        match &handle.data {
            RcNodeData::Text { contents } => Ok(Some(StyledNode::Text(contents.borrow().to_string()))),
            RcNodeData::Comment { contents } => Ok(Some(StyledNode::Comment(contents.to_string()))),
            RcNodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                let tag = name.local.to_string().to_ascii_lowercase();
                let attrs: Attributes = attrs
                    .borrow()
                    .iter()
                    .map(|a| (a.name.local.to_string(), a.value.to_string()))
                    .collect();
                let style = self.styles.resolve(
                    &tag,
                    attrs.has("hidden"),
                    attrs.get("style"),
                    parent,
                    in_svg,
                )?;
                let child_svg = in_svg || tag == "svg";
                let mut element = StyledElement {
                    before: attrs.get("data-before").map(str::to_string),
                    after: attrs.get("data-after").map(str::to_string),
                    tag,
                    attrs,
                    style,
                    ..StyledElement::default()
                };

                let children: Vec<Handle> = handle.children.borrow().iter().cloned().collect();
                let shadow_template = children.iter().position(|c| declarative_shadow_mode(c).is_some());

                if element.tag == "slot" {
                    if let Some(light) = light {
                        element.slot = self.assign_slot(&element, light);
                    }
                }

                if let Some(index) = shadow_template {
                    let mode = declarative_shadow_mode(&children[index]).unwrap_or_default();
                    let mut light_nodes = Vec::new();
                    for (i, child) in children.iter().enumerate() {
                        if i == index {
                            continue;
                        }
                        if let Some(node) = self.convert(child, Some(&element.style), child_svg, light)? {
                            let slot_name = node.as_element().and_then(|e| e.attr("slot")).map(str::to_string);
                            light_nodes.push((slot_name, node));
                        }
                    }
                    element.shadow_root = Some(if mode == "open" {
                        let light = LightTree { nodes: &light_nodes };
                        let contents = template_handle(&children[index]);
                        ShadowRoot::Open(self.convert_all(contents.as_ref(), &element.style, child_svg, Some(&light))?)
                    } else {
                        ShadowRoot::Closed
                    });
                    element.children = light_nodes.into_iter().map(|(_, n)| n).collect();
                } else if matches!(element.tag.as_str(), "iframe" | "frame") {
                    element.frame = Some(self.frame_content(&element)?);
                } else {
                    let source = if element.tag == "template" {
                        template_contents.borrow().clone()
                    } else {
                        None
                    };
                    let kids = match &source {
                        Some(contents) => contents.children.borrow().iter().cloned().collect(),
                        None => children,
                    };
                    for child in &kids {
                        if let Some(node) = self.convert(child, Some(&element.style), child_svg, light)? {
                            element.children.push(node);
                        }
                    }
                }
                Ok(Some(StyledNode::Element(element)))
            }
            RcNodeData::Document | RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => Ok(None),
        }
    }

    fn convert_all(
        &self,
        parent_handle: Option<&Handle>,
        parent: &ResolvedStyle,
        in_svg: bool,
        light: Option<&LightTree<'_>>,
    ) -> Result<Vec<StyledNode>, HtmlError> {
        let mut nodes = Vec::new();
        if let Some(handle) = parent_handle {
            for child in handle.children.borrow().iter() {
                if let Some(node) = self.convert(child, Some(parent), in_svg, light)? {
                    nodes.push(node);
                }
            }
        }
        Ok(nodes)
    }

    /// Named slots take light children with a matching `slot` attribute;
    /// the default slot takes everything unnamed
    fn assign_slot(&self, slot: &StyledElement, light: &LightTree<'_>) -> Option<SlotAssignment> {
        let name = slot.attr("name").map(str::trim).filter(|n| !n.is_empty());
        let nodes: Vec<StyledNode> = light
            .nodes
            .iter()
            .filter(|(slot_name, node)| match name {
                Some(name) => slot_name.as_deref() == Some(name),
                None => slot_name.is_none() && !matches!(node, StyledNode::Comment(_)),
            })
            .map(|(_, node)| node.clone())
            .filter(|node| !matches!(node, StyledNode::Text(t) if t.trim().is_empty()))
            .collect();
        (!nodes.is_empty()).then_some(SlotAssignment {
            nodes,
            from_light_tree: true,
        })
    }

    /// `srcdoc` is parsed as an embedded document; a `src` without `srcdoc`
    /// cannot be inspected
    fn frame_content(&self, frame: &StyledElement) -> Result<FrameContent, HtmlError> {
        if let Some(srcdoc) = frame.attr("srcdoc") {
            tracing::debug!("parsing srcdoc of <{}>", frame.tag);
            return Ok(FrameContent::Document(self.parse(srcdoc)?.children));
        }
        let src = frame.attr("src").map(str::trim).unwrap_or_default();
        if src.is_empty() || src == "about:blank" {
            Ok(FrameContent::Document(Vec::new()))
        } else {
            Ok(FrameContent::Inaccessible)
        }
    }
}

/// `shadowrootmode` of a declarative shadow root template
fn declarative_shadow_mode(handle: &Handle) -> Option<String> {
    match &handle.data {
        RcNodeData::Element { name, attrs, .. } if &*name.local == "template" => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == "shadowrootmode")
            .map(|a| a.value.to_string().trim().to_ascii_lowercase())
            .filter(|mode| mode == "open" || mode == "closed"),
        _ => None,
    }
}

fn template_handle(handle: &Handle) -> Option<Handle> {
    match &handle.data {
        RcNodeData::Element { template_contents, .. } => template_contents.borrow().clone(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(html: &str) -> StyledElement {
        let doc = HtmlLoader::new().parse(html).unwrap();
        doc.body().cloned().unwrap()
    }

    #[test]
    fn test_parse_simple() {
        let doc = HtmlLoader::new()
            .parse("<html><head><title>Test</title></head><body><p>Hello</p></body></html>")
            .unwrap();
        let root = doc.root().unwrap();
        assert_eq!(root.tag, "html");
        let head = root.child_elements().next().unwrap();
        assert!(head.style.is_display_none());
        assert_eq!(doc.body().unwrap().child_elements().next().unwrap().tag, "p");
    }

    #[test]
    fn test_generated_content_attributes() {
        let body = body(r#"<a href="/" data-before="Go" data-after="now">there</a>"#);
        let link = body.child_elements().next().unwrap();
        assert_eq!(link.before.as_deref(), Some("Go"));
        assert_eq!(link.after.as_deref(), Some("now"));
    }

    #[test]
    fn test_frames() {
        let body = body(r#"<iframe srcdoc="<p>Inner</p>"></iframe><iframe src="https://other.example/"></iframe>"#);
        let frames: Vec<_> = body.child_elements().collect();
        assert!(matches!(frames[0].frame, Some(FrameContent::Document(ref nodes)) if !nodes.is_empty()));
        assert_eq!(frames[1].frame, Some(FrameContent::Inaccessible));
    }

    #[test]
    fn test_declarative_shadow_root_with_slots() {
        let body = body(concat!(
            r#"<x-card><template shadowrootmode="open"><h2><slot name="title"></slot></h2><slot></slot></template>"#,
            r#"<span slot="title">Heading</span><p>Body</p></x-card>"#,
            r#"<x-closed><template shadowrootmode="closed"><p>secret</p></template></x-closed>"#,
        ));
        let card = body.child_elements().next().unwrap();
        let Some(ShadowRoot::Open(shadow)) = &card.shadow_root else {
            panic!("expected open shadow root");
        };
        let h2 = shadow[0].as_element().unwrap();
        let title_slot = h2.child_elements().next().unwrap();
        let assigned = title_slot.slot.as_ref().unwrap();
        assert!(assigned.from_light_tree);
        assert_eq!(assigned.nodes.len(), 1);
        let default_slot = shadow[1].as_element().unwrap();
        assert_eq!(default_slot.slot.as_ref().unwrap().nodes.len(), 1);

        let closed = body.child_elements().nth(1).unwrap();
        assert_eq!(closed.shadow_root, Some(ShadowRoot::Closed));
    }
}
