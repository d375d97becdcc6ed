//! Accessible name and description computation
//!
//! Names are resolved by a fixed precedence: `aria-labelledby`, then
//! `aria-label`, then host-language semantics, then `title`. Content
//! recursion never descends into the element being named, so reference
//! cycles terminate.

mod content;
mod embedded;

use std::collections::HashMap;

use accord_aria::AriaVersion;
use serde::Serialize;

use crate::role::ResolvedRole;
use crate::tree::{DocumentId, ElementId, ElementNode, NodeRef, Tree};

use content::Walk;

/// Naming attribute that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameAttribute {
    AriaLabelledBy,
    AriaLabel,
    AriaDescribedBy,
    AriaDescription,
    AriaErrorMessage,
    Placeholder,
    Value,
    Alt,
}

/// Precedence rule that produced a name or description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "kebab-case")]
pub enum NameSource {
    Attribute(NameAttribute),
    Content,
    LabelReference,
    LabelEncapsulation,
    Legend,
    /// A designated descendant element such as `caption` or `figcaption`
    Descendant(&'static str),
    Default,
    Title,
    None,
}

/// Name or description text with its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibleName {
    pub text: String,
    pub source: NameSource,
}

impl AccessibleName {
    pub fn none() -> Self {
        Self {
            text: String::new(),
            source: NameSource::None,
        }
    }

    fn non_empty(text: String, source: NameSource) -> Option<Self> {
        (!text.is_empty()).then_some(Self { text, source })
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for AccessibleName {
    fn default() -> Self {
        Self::none()
    }
}

/// Collapse whitespace runs and trim
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Name and description computation over a built tree
pub struct NameEngine<'a> {
    tree: &'a Tree,
    roles: &'a [ResolvedRole],
    version: AriaVersion,
    /// `label[for]` by document and target id
    labels: HashMap<(DocumentId, &'a str), Vec<ElementId>>,
}

impl<'a> NameEngine<'a> {
    /// `roles` is index-aligned with the tree's elements
    pub fn new(tree: &'a Tree, roles: &'a [ResolvedRole], version: AriaVersion) -> Self {
        let mut labels: HashMap<(DocumentId, &'a str), Vec<ElementId>> = HashMap::new();
        for node in tree.elements().filter(|n| n.tag == "label") {
            if let Some(target) = node.attr("for").map(str::trim).filter(|v| !v.is_empty()) {
                labels.entry((node.document, target)).or_default().push(node.id);
            }
        }
        Self {
            tree,
            roles,
            version,
            labels,
        }
    }

    fn role(&self, id: ElementId) -> &ResolvedRole {
        &self.roles[id.index()]
    }

    /// Accessible name of an element
    pub fn name(&self, id: ElementId) -> AccessibleName {
        let node = self.tree.element(id);
        self.from_references(id, "aria-labelledby")
            .and_then(|text| AccessibleName::non_empty(text, NameSource::Attribute(NameAttribute::AriaLabelledBy)))
            .or_else(|| {
                let label = normalize(node.attr("aria-label").unwrap_or_default());
                AccessibleName::non_empty(label, NameSource::Attribute(NameAttribute::AriaLabel))
            })
            .or_else(|| self.native(id))
            .or_else(|| self.title(node))
            .unwrap_or_default()
    }

    /// Accessible description; `title` is only used when the name did
    /// not consume it
    pub fn description(&self, id: ElementId, name: &AccessibleName) -> AccessibleName {
        let node = self.tree.element(id);
        self.from_references(id, "aria-describedby")
            .and_then(|text| AccessibleName::non_empty(text, NameSource::Attribute(NameAttribute::AriaDescribedBy)))
            .or_else(|| {
                if self.version < AriaVersion::Aria13 {
                    return None;
                }
                let text = normalize(node.attr("aria-description").unwrap_or_default());
                AccessibleName::non_empty(text, NameSource::Attribute(NameAttribute::AriaDescription))
            })
            .or_else(|| {
                if name.source == NameSource::Title {
                    None
                } else {
                    self.title(node)
                }
            })
            .unwrap_or_default()
    }

    /// Text of the elements referenced by `aria-errormessage`
    pub fn error_message(&self, id: ElementId) -> AccessibleName {
        self.from_references(id, "aria-errormessage")
            .and_then(|text| AccessibleName::non_empty(text, NameSource::Attribute(NameAttribute::AriaErrorMessage)))
            .unwrap_or_default()
    }

    /// Legends of the enclosing fieldsets, nearest first
    pub fn grouping_labels(&self, id: ElementId) -> Vec<String> {
        if !is_labelable(self.tree.element(id)) {
            return Vec::new();
        }
        let document = self.tree.element(id).document;
        self.tree
            .ancestors(id)
            .take_while(|&a| self.tree.element(a).document == document)
            .filter(|&a| self.tree.element(a).tag == "fieldset")
            .filter_map(|fieldset| self.legend(fieldset))
            .collect()
    }

    /// Resolve an id-reference list against the element's document and
    /// join the content of each target in list order
    fn from_references(&self, id: ElementId, attr: &str) -> Option<String> {
        let node = self.tree.element(id);
        let refs = node.attrs.tokens(attr);
        if refs.is_empty() {
            return None;
        }
        let mut parts = Vec::new();
        for reference in refs {
            let Some(target) = self.tree.element_by_id(node.document, reference) else {
                continue;
            };
            if target == id {
                parts.push(normalize(node.attr("aria-label").unwrap_or_default()));
                continue;
            }
            let target_node = self.tree.element(target);
            match target_node.attr("aria-label").map(normalize).filter(|l| !l.is_empty()) {
                Some(label) => parts.push(label),
                // a hidden target still contributes its own text
                None => parts.push(self.content_within(target, &Walk::new(id), self.is_hidden(target))),
            }
        }
        Some(normalize(&parts.join(" ")))
    }

    /// Host-language naming rules
    fn native(&self, id: ElementId) -> Option<AccessibleName> {
        let node = self.tree.element(id);
        let specific = match node.tag.as_str() {
            "input" => self.input(id),
            "textarea" => self.label(id).or_else(|| self.placeholder(node)),
            "select" | "meter" | "output" | "progress" => self.label(id),
            "button" => self.label(id).or_else(|| self.content_name(id)),
            "a" => self.content_name(id),
            "fieldset" => self
                .legend(id)
                .and_then(|text| AccessibleName::non_empty(text, NameSource::Legend)),
            "img" | "area" => self.alt(node),
            "svg" => self.descendant(id, "title"),
            "details" => self.details(id),
            "figure" => self.descendant(id, "figcaption"),
            "table" => self.descendant(id, "caption"),
            _ => None,
        };
        specific.or_else(|| {
            let allows_content = self.role(id).pattern.name_from_contents
                || matches!(node.tag.as_str(), "label" | "legend" | "caption" | "figcaption" | "summary" | "option");
            if allows_content && node.input_type().is_none() {
                self.content_name(id)
            } else {
                None
            }
        })
    }

    fn input(&self, id: ElementId) -> Option<AccessibleName> {
        let node = self.tree.element(id);
        let kind = node.input_type().unwrap_or_default();
        let value = || {
            let value = normalize(node.attr("value").unwrap_or_default());
            AccessibleName::non_empty(value, NameSource::Attribute(NameAttribute::Value))
        };
        match kind.as_str() {
            "hidden" => None,
            "button" => value(),
            "submit" | "reset" => value().or_else(|| {
                let default = if kind == "submit" { "Submit" } else { "Reset" };
                AccessibleName::non_empty(default.to_string(), NameSource::Default)
            }),
            "image" => self.alt(node).or_else(value),
            "email" | "number" | "password" | "search" | "tel" | "text" | "url" => {
                self.label(id).or_else(|| self.placeholder(node))
            }
            _ => self.label(id),
        }
    }

    fn alt(&self, node: &ElementNode) -> Option<AccessibleName> {
        AccessibleName::non_empty(
            normalize(node.attr("alt").unwrap_or_default()),
            NameSource::Attribute(NameAttribute::Alt),
        )
    }

    fn placeholder(&self, node: &ElementNode) -> Option<AccessibleName> {
        AccessibleName::non_empty(
            normalize(node.attr("placeholder").unwrap_or_default()),
            NameSource::Attribute(NameAttribute::Placeholder),
        )
    }

    fn title(&self, node: &ElementNode) -> Option<AccessibleName> {
        AccessibleName::non_empty(normalize(node.attr("title").unwrap_or_default()), NameSource::Title)
    }

    fn content_name(&self, id: ElementId) -> Option<AccessibleName> {
        AccessibleName::non_empty(self.content(id, &Walk::new(id)), NameSource::Content)
    }

    /// Associated `label` elements: by `for` reference first, then the
    /// enclosing label
    fn label(&self, id: ElementId) -> Option<AccessibleName> {
        let node = self.tree.element(id);
        if !is_labelable(node) {
            return None;
        }
        let walk = Walk::new(id);
        if let Some(labels) = node
            .attr("id")
            .map(str::trim)
            .and_then(|key| self.labels.get(&(node.document, key)))
        {
            let parts: Vec<String> = labels.iter().map(|&label| self.content(label, &walk)).collect();
            if let Some(name) = AccessibleName::non_empty(normalize(&parts.join(" ")), NameSource::LabelReference) {
                return Some(name);
            }
        }
        let own_id = node.attr("id").map(str::trim);
        let label = self.tree.ancestors(id).take_while(|&a| self.tree.element(a).document == node.document).find(|&a| {
            let candidate = self.tree.element(a);
            candidate.tag == "label"
                && candidate
                    .attr("for")
                    .map(str::trim)
                    .is_none_or(|target| target.is_empty() || Some(target) == own_id)
        })?;
        AccessibleName::non_empty(self.content(label, &walk), NameSource::LabelEncapsulation)
    }

    fn legend(&self, fieldset: ElementId) -> Option<String> {
        let legend = self
            .tree
            .element(fieldset)
            .child_elements()
            .find(|&c| self.tree.element(c).tag == "legend")?;
        let text = self.content(legend, &Walk::new(fieldset));
        (!text.is_empty()).then_some(text)
    }

    /// Content of the first descendant with `tag`
    fn descendant(&self, id: ElementId, tag: &'static str) -> Option<AccessibleName> {
        let found = self.tree.find_descendant(id, |n| n.tag == tag)?;
        AccessibleName::non_empty(self.content(found, &Walk::new(id)), NameSource::Descendant(tag))
    }

    /// Collapsed: the summary. Expanded: the summary and the revealed
    /// content.
    fn details(&self, id: ElementId) -> Option<AccessibleName> {
        let node = self.tree.element(id);
        let summary = node.child_elements().find(|&c| self.tree.element(c).tag == "summary");
        let walk = Walk::new(id);
        if !node.has_attr("open") {
            let summary = summary?;
            return AccessibleName::non_empty(self.content(summary, &walk), NameSource::Descendant("summary"));
        }
        let mut parts = Vec::new();
        if let Some(summary) = summary {
            parts.push(self.content(summary, &walk));
        }
        for child in &node.children {
            match *child {
                NodeRef::Element(c) if Some(c) == summary => {}
                NodeRef::Element(c) => {
                    if !self.is_hidden(c) {
                        parts.push(self.fragment(c, &walk));
                    }
                }
                NodeRef::Text(t) => parts.push(self.tree.text(t).text.clone()),
            }
        }
        AccessibleName::non_empty(normalize(&parts.join(" ")), NameSource::Content)
    }
}

/// Elements a `label` can be associated with
pub fn is_labelable(node: &ElementNode) -> bool {
    match node.tag.as_str() {
        "button" | "meter" | "output" | "progress" | "select" | "textarea" => true,
        "input" => node.input_type().as_deref() != Some("hidden"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::resolve_roles;
    use accord_dom::StyledElement;

    fn with_engine<R>(root: StyledElement, f: impl FnOnce(&Tree, &NameEngine<'_>) -> R) -> R {
        let tree = Tree::build(&root);
        let roles = resolve_roles(&tree, AriaVersion::Aria12);
        let engine = NameEngine::new(&tree, &roles, AriaVersion::Aria12);
        f(&tree, &engine)
    }

    fn find(tree: &Tree, id: &str) -> ElementId {
        tree.element_by_id(DocumentId::TOP, id).expect("fixture id")
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  a   b  "), "a b");
        assert_eq!(normalize(&normalize(" a\n\tb ")), normalize(" a\n\tb "));
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_label_precedence() {
        let root = StyledElement::new("form")
            .with_child(StyledElement::new("label").with_attr("for", "q").with_text("Search terms"))
            .with_child(
                StyledElement::new("input")
                    .with_attr("id", "q")
                    .with_attr("aria-label", "Query")
                    .with_attr("placeholder", "Type here"),
            );
        with_engine(root, |tree, engine| {
            let name = engine.name(find(tree, "q"));
            assert_eq!(name.text, "Query");
            assert_eq!(name.source, NameSource::Attribute(NameAttribute::AriaLabel));
        });

        let root = StyledElement::new("form")
            .with_child(StyledElement::new("label").with_attr("for", "q").with_text("Other text"))
            .with_child(StyledElement::new("input").with_attr("id", "q").with_attr("aria-label", "Query"));
        with_engine(root, |tree, engine| assert_eq!(engine.name(find(tree, "q")).text, "Query"));
    }

    #[test]
    fn test_label_reference_and_encapsulation() {
        let root = StyledElement::new("form")
            .with_child(StyledElement::new("label").with_attr("for", "a").with_text("First"))
            .with_child(StyledElement::new("input").with_attr("id", "a"))
            .with_child(
                StyledElement::new("label")
                    .with_text("Second")
                    .with_child(StyledElement::new("input").with_attr("id", "b").with_attr("value", "ignored")),
            )
            .with_child(StyledElement::new("input").with_attr("id", "c").with_attr("placeholder", "Hint"));
        with_engine(root, |tree, engine| {
            let a = engine.name(find(tree, "a"));
            assert_eq!((a.text.as_str(), a.source), ("First", NameSource::LabelReference));
            let b = engine.name(find(tree, "b"));
            assert_eq!((b.text.as_str(), b.source), ("Second", NameSource::LabelEncapsulation));
            let c = engine.name(find(tree, "c"));
            assert_eq!(c.source, NameSource::Attribute(NameAttribute::Placeholder));
        });
    }

    #[test]
    fn test_labelledby_uses_content_in_order() {
        let root = StyledElement::new("div")
            .with_child(StyledElement::new("span").with_attr("id", "x").with_text("Billing"))
            .with_child(
                StyledElement::new("span")
                    .with_attr("id", "y")
                    .with_attr("hidden", "")
                    .with_text("Address"),
            )
            .with_child(StyledElement::new("input").with_attr("id", "f").with_attr("aria-labelledby", "y x missing"));
        with_engine(root, |tree, engine| {
            let name = engine.name(find(tree, "f"));
            assert_eq!(name.text, "Address Billing");
            assert_eq!(name.source, NameSource::Attribute(NameAttribute::AriaLabelledBy));
        });
    }

    #[test]
    fn test_hidden_reference_keeps_own_text_only() {
        let root = StyledElement::new("div")
            .with_child(
                StyledElement::new("span")
                    .with_attr("id", "addr")
                    .with_attr("hidden", "")
                    .with_text("Address")
                    .with_child(StyledElement::new("b").with_text("line"))
                    .with_child(StyledElement::new("i").with_attr("aria-hidden", "false").with_text("two")),
            )
            .with_child(StyledElement::new("input").with_attr("id", "f").with_attr("aria-labelledby", "addr"));
        with_engine(root, |tree, engine| assert_eq!(engine.name(find(tree, "f")).text, "Address two"));
    }

    #[test]
    fn test_aria_hidden_false_forces_content_visible() {
        let root = StyledElement::new("button")
            .with_attr("id", "go")
            .with_text("Go")
            .with_child(
                StyledElement::new("span")
                    .with_attr("aria-hidden", "false")
                    .with_style("display", "none")
                    .with_text("now"),
            )
            .with_child(
                StyledElement::new("span")
                    .with_attr("aria-hidden", "false")
                    .with_attr("hidden", "")
                    .with_text("never"),
            );
        with_engine(root, |tree, engine| assert_eq!(engine.name(find(tree, "go")).text, "Go now"));
    }

    #[test]
    fn test_anchor_without_href_named_from_content() {
        let root = StyledElement::new("div").with_child(StyledElement::new("a").with_attr("id", "a").with_text("Top"));
        with_engine(root, |tree, engine| {
            let name = engine.name(find(tree, "a"));
            assert_eq!((name.text.as_str(), name.source), ("Top", NameSource::Content));
        });
    }

    #[test]
    fn test_reference_cycle_terminates() {
        let root = StyledElement::new("div")
            .with_attr("id", "outer")
            .with_attr("role", "group")
            .with_attr("aria-labelledby", "inner")
            .with_text("Outer text")
            .with_child(
                StyledElement::new("span")
                    .with_attr("id", "inner")
                    .with_attr("aria-labelledby", "outer")
                    .with_text("Inner text"),
            );
        with_engine(root, |tree, engine| {
            let outer = engine.name(find(tree, "outer"));
            assert_eq!(outer.text, "Inner text");
            let inner = engine.name(find(tree, "inner"));
            assert_eq!(inner.text, "Outer text");
        });
    }

    #[test]
    fn test_idempotent() {
        let root = StyledElement::new("button")
            .with_attr("id", "b")
            .with_before("Go")
            .with_child(StyledElement::new("img").with_attr("alt", "to top"));
        with_engine(root, |tree, engine| {
            let id = find(tree, "b");
            let first = engine.name(id);
            assert_eq!(first, engine.name(id));
            assert_eq!(first.text, "Go to top");
            assert_eq!(first.source, NameSource::Content);
        });
    }

    #[test]
    fn test_content_skips_hidden_and_uses_labels() {
        let root = StyledElement::new("a")
            .with_attr("href", "/")
            .with_attr("id", "l")
            .with_text("Read")
            .with_child(StyledElement::new("span").with_attr("aria-hidden", "true").with_text("icon"))
            .with_child(StyledElement::new("span").with_attr("aria-label", "more").with_text("..."))
            .with_child(
                StyledElement::new("span")
                    .with_style("display", "none")
                    .with_text("secret"),
            );
        with_engine(root, |tree, engine| assert_eq!(engine.name(find(tree, "l")).text, "Read more"));
    }

    #[test]
    fn test_native_sources() {
        let root = StyledElement::new("div")
            .with_child(
                StyledElement::new("fieldset")
                    .with_attr("id", "fs")
                    .with_child(StyledElement::new("legend").with_text("Shipping"))
                    .with_child(StyledElement::new("input").with_attr("id", "city")),
            )
            .with_child(
                StyledElement::new("table")
                    .with_attr("id", "t")
                    .with_child(StyledElement::new("caption").with_text("Totals")),
            )
            .with_child(StyledElement::new("input").with_attr("type", "submit").with_attr("id", "s"))
            .with_child(
                StyledElement::new("img")
                    .with_attr("id", "i")
                    .with_attr("alt", "")
                    .with_attr("title", "Logo"),
            );
        with_engine(root, |tree, engine| {
            let fs = engine.name(find(tree, "fs"));
            assert_eq!((fs.text.as_str(), fs.source), ("Shipping", NameSource::Legend));
            let t = engine.name(find(tree, "t"));
            assert_eq!(t.source, NameSource::Descendant("caption"));
            let s = engine.name(find(tree, "s"));
            assert_eq!((s.text.as_str(), s.source), ("Submit", NameSource::Default));
            let i = engine.name(find(tree, "i"));
            assert_eq!((i.text.as_str(), i.source), ("Logo", NameSource::Title));
            assert_eq!(engine.grouping_labels(find(tree, "city")), vec!["Shipping".to_string()]);
        });
    }

    #[test]
    fn test_details_summary() {
        let details = |open: bool| {
            let mut el = StyledElement::new("details")
                .with_attr("id", "d")
                .with_child(StyledElement::new("summary").with_text("More"))
                .with_child(StyledElement::new("p").with_text("Hidden body"));
            if open {
                el = el.with_attr("open", "");
            }
            el
        };
        with_engine(details(false), |tree, engine| {
            let name = engine.name(find(tree, "d"));
            assert_eq!((name.text.as_str(), name.source), ("More", NameSource::Descendant("summary")));
        });
        with_engine(details(true), |tree, engine| {
            let name = engine.name(find(tree, "d"));
            assert_eq!((name.text.as_str(), name.source), ("More Hidden body", NameSource::Content));
        });
    }

    #[test]
    fn test_description_and_title() {
        let root = StyledElement::new("div")
            .with_child(StyledElement::new("p").with_attr("id", "help").with_text("8 characters"))
            .with_child(
                StyledElement::new("input")
                    .with_attr("id", "pw")
                    .with_attr("type", "password")
                    .with_attr("aria-describedby", "help")
                    .with_attr("title", "Password"),
            )
            .with_child(StyledElement::new("span").with_attr("id", "tip").with_attr("title", "Tip"));
        with_engine(root, |tree, engine| {
            let pw = find(tree, "pw");
            let name = engine.name(pw);
            assert_eq!(name.source, NameSource::Title);
            let description = engine.description(pw, &name);
            assert_eq!(description.text, "8 characters");

            let tip = find(tree, "tip");
            let name = engine.name(tip);
            assert_eq!(engine.description(tip, &name).source, NameSource::None);
        });
    }
}
