//! ARIA attribute validation
//!
//! Classifies every `aria-*` attribute of an element against the property
//! type table and the element's role design pattern. Problems are recorded
//! as data for the rule layer, never raised.

use accord_aria::{AriaProperty, AriaVersion, Role, RoleDesignPattern, ValueType};
use accord_dom::Attr;
use serde::Serialize;

use crate::tree::{ElementNode, Tree};

/// How a role relates to an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrSupport {
    Required,
    Supported,
    Inherited,
    Unsupported,
}

/// Parsed integer attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntegerValue {
    Value(i64),
    /// `-1` on count properties that allow it
    Undetermined,
}

/// Classification of one known `aria-*` attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AriaAttrInfo {
    pub property: AriaProperty,
    pub value: String,
    pub value_type: ValueType,
    pub is_valid_value: bool,
    /// Referenced ids that do not resolve in the element's document
    pub invalid_refs: Vec<String>,
    pub support: AttrSupport,
    pub is_deprecated: bool,
}

/// Presence of one property the role requires
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequiredAttr {
    pub property: AriaProperty,
    pub value: Option<String>,
    /// Present as an attribute or satisfied by native state
    pub is_defined: bool,
    pub default_value: &'static str,
}

impl RequiredAttr {
    pub fn has_default(&self) -> bool {
        !self.default_value.is_empty()
    }
}

/// Range widget values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeValues {
    pub value_now: Option<f64>,
    pub value_min: f64,
    pub value_max: f64,
    pub value_text: Option<String>,
    pub is_value_now_required: bool,
}

/// ARIA facts of one element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AriaInfo {
    pub attrs: Vec<AriaAttrInfo>,
    /// `aria-*` names that are not ARIA properties
    pub unknown_attrs: Vec<Attr>,
    pub required: Vec<RequiredAttr>,
    pub heading_level: Option<u32>,
    pub range: Option<RangeValues>,
    /// Politeness of a live region, explicit or implied by the role
    pub live: Option<String>,
    pub is_busy: bool,
    pub owns: Vec<String>,
    pub flow_to: Vec<String>,
}

impl AriaInfo {
    /// Validate the attributes of `node`
    ///
    /// Required properties are only checked for explicit roles, since
    /// native elements carry their state outside ARIA.
    pub fn compute(
        tree: &Tree,
        node: &ElementNode,
        role: Role,
        pattern: &RoleDesignPattern,
        has_role: bool,
        version: AriaVersion,
    ) -> Self {
        let mut attrs = Vec::new();
        let mut unknown_attrs = Vec::new();

        for attr in node.attrs.aria() {
            let Some(property) = AriaProperty::parse_for(&attr.name, version) else {
                unknown_attrs.push(attr.clone());
                continue;
            };
            let info = property.info();
            let support = if pattern.is_required(property) {
                AttrSupport::Required
            } else if pattern.is_supported(property) {
                AttrSupport::Supported
            } else if pattern.is_inherited(property) {
                AttrSupport::Inherited
            } else {
                AttrSupport::Unsupported
            };
            let invalid_refs = match info.value_type {
                ValueType::Idref | ValueType::Idrefs => attr
                    .value
                    .split_ascii_whitespace()
                    .filter(|id| tree.element_by_id(node.document, id).is_none())
                    .map(str::to_string)
                    .collect(),
                _ => Vec::new(),
            };
            attrs.push(AriaAttrInfo {
                property,
                value: attr.value.clone(),
                value_type: info.value_type,
                is_valid_value: is_valid_value(property, &attr.value),
                invalid_refs,
                support,
                is_deprecated: pattern.is_deprecated(property),
            });
        }

        let required = if has_role {
            pattern
                .required_props
                .iter()
                .map(|&property| {
                    let value = node.attr(property.name()).map(str::to_string);
                    let native = match property {
                        AriaProperty::Checked => has_native_checked_state(node),
                        AriaProperty::Selected => has_native_selected_state(node),
                        _ => false,
                    };
                    RequiredAttr {
                        property,
                        is_defined: value.is_some() || native,
                        value,
                        default_value: property.info().default_value,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let number = |name: &str| node.attr(name).and_then(|v| v.trim().parse::<f64>().ok());
        let range = pattern.is_range().then(|| RangeValues {
            value_now: number("aria-valuenow"),
            value_min: number("aria-valuemin").unwrap_or(0.0),
            value_max: number("aria-valuemax").unwrap_or(100.0),
            value_text: node.attr("aria-valuetext").map(str::to_string),
            is_value_now_required: pattern.is_required(AriaProperty::ValueNow),
        });

        let explicit_live = node
            .attrs
            .get_lower("aria-live")
            .filter(|v| matches!(v.as_str(), "polite" | "assertive" | "off"));
        let live = explicit_live.or_else(|| implicit_live(role).map(str::to_string));

        Self {
            attrs,
            unknown_attrs,
            required,
            heading_level: heading_level(node, role),
            range,
            live,
            is_busy: node.attrs.get_lower("aria-busy").as_deref() == Some("true"),
            owns: node.attrs.tokens("aria-owns").into_iter().map(str::to_string).collect(),
            flow_to: node.attrs.tokens("aria-flowto").into_iter().map(str::to_string).collect(),
        }
    }

    pub fn attr(&self, property: AriaProperty) -> Option<&AriaAttrInfo> {
        self.attrs.iter().find(|a| a.property == property)
    }

    pub fn invalid_values(&self) -> impl Iterator<Item = &AriaAttrInfo> {
        self.attrs.iter().filter(|a| !a.is_valid_value)
    }

    pub fn invalid_refs(&self) -> impl Iterator<Item = &AriaAttrInfo> {
        self.attrs.iter().filter(|a| !a.invalid_refs.is_empty())
    }

    pub fn unsupported(&self) -> impl Iterator<Item = &AriaAttrInfo> {
        self.attrs.iter().filter(|a| a.support == AttrSupport::Unsupported)
    }

    pub fn deprecated(&self) -> impl Iterator<Item = &AriaAttrInfo> {
        self.attrs.iter().filter(|a| a.is_deprecated)
    }

    pub fn missing_required(&self) -> impl Iterator<Item = &RequiredAttr> {
        self.required.iter().filter(|r| !r.is_defined)
    }

    /// Announced as a live region
    pub fn is_live(&self) -> bool {
        matches!(self.live.as_deref(), Some("polite" | "assertive"))
    }
}

/// Check an attribute value against its type
pub fn is_valid_value(property: AriaProperty, value: &str) -> bool {
    let info = property.info();
    let token = value.trim().to_ascii_lowercase();
    match info.value_type {
        ValueType::Boolean | ValueType::Tristate | ValueType::Nmtoken => info.values.contains(&token.as_str()),
        ValueType::Nmtokens => {
            let mut tokens = token.split_ascii_whitespace().peekable();
            tokens.peek().is_some() && tokens.all(|t| info.values.contains(&t))
        }
        ValueType::Integer => parse_integer(&token, info.allow_undetermined).is_some(),
        ValueType::Number => token.parse::<f64>().is_ok_and(f64::is_finite),
        ValueType::Idref | ValueType::Idrefs | ValueType::String => true,
    }
}

/// Integers must be at least 1; count properties also accept 0 and the
/// `-1` "undetermined" sentinel
pub fn parse_integer(value: &str, allow_undetermined: bool) -> Option<IntegerValue> {
    let n = value.trim().parse::<i64>().ok()?;
    match n {
        -1 if allow_undetermined => Some(IntegerValue::Undetermined),
        n if n >= 1 || (allow_undetermined && n == 0) => Some(IntegerValue::Value(n)),
        _ => None,
    }
}

/// `h1`-`h6` level, else `aria-level` on headings
fn heading_level(node: &ElementNode, role: Role) -> Option<u32> {
    if let Some(level) = node
        .tag
        .strip_prefix('h')
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| (1..=6).contains(n))
    {
        if node.attr("role").is_none() || role == Role::Heading {
            return Some(level);
        }
    }
    if role != Role::Heading {
        return None;
    }
    node.attr("aria-level")
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .or(Some(2))
}

fn implicit_live(role: Role) -> Option<&'static str> {
    match role {
        Role::Alert => Some("assertive"),
        Role::Log | Role::Status => Some("polite"),
        Role::Marquee | Role::Timer => Some("off"),
        _ => None,
    }
}

/// `checked` is meaningful on checkbox and radio inputs
pub fn has_native_checked_state(node: &ElementNode) -> bool {
    matches!(node.input_type().as_deref(), Some("checkbox" | "radio"))
}

/// `selected` is meaningful on options
pub fn has_native_selected_state(node: &ElementNode) -> bool {
    node.tag == "option"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::{RoleContext, resolve_role};
    use crate::tree::ElementId;
    use accord_dom::StyledElement;

    fn info_for(root: StyledElement, index: u32) -> AriaInfo {
        let tree = Tree::build(&root);
        let node = tree.element(ElementId(index));
        let resolved = resolve_role(node, &RoleContext::default(), AriaVersion::Aria12);
        AriaInfo::compute(
            &tree,
            node,
            resolved.role,
            resolved.pattern,
            resolved.has_role(),
            AriaVersion::Aria12,
        )
    }

    #[test]
    fn test_value_types() {
        assert!(is_valid_value(AriaProperty::Checked, "Mixed"));
        assert!(!is_valid_value(AriaProperty::Checked, "yes"));
        assert!(is_valid_value(AriaProperty::Relevant, "additions text"));
        assert!(!is_valid_value(AriaProperty::Relevant, "additions bogus"));
        assert!(!is_valid_value(AriaProperty::Relevant, ""));
        assert!(is_valid_value(AriaProperty::ValueNow, "-3.5"));
        assert!(!is_valid_value(AriaProperty::ValueNow, "NaN"));
        assert!(!is_valid_value(AriaProperty::Level, "0"));
        assert!(is_valid_value(AriaProperty::SetSize, "-1"));
        assert!(!is_valid_value(AriaProperty::PosInSet, "-1"));
    }

    #[test]
    fn test_integer_sentinel() {
        assert_eq!(parse_integer("-1", true), Some(IntegerValue::Undetermined));
        assert_eq!(parse_integer("-1", false), None);
        assert_eq!(parse_integer(" 4 ", false), Some(IntegerValue::Value(4)));
        assert_eq!(parse_integer("x", true), None);
    }

    #[test]
    fn test_support_classification() {
        let info = info_for(
            StyledElement::new("div")
                .with_attr("role", "checkbox")
                .with_attr("aria-checked", "true")
                .with_attr("aria-required", "true")
                .with_attr("aria-label", "Agree")
                .with_attr("aria-valuenow", "3")
                .with_attr("aria-grabbed", "true")
                .with_attr("aria-bogus", "1"),
            0,
        );
        let support = |p| info.attr(p).map(|a| a.support);
        assert_eq!(support(AriaProperty::Checked), Some(AttrSupport::Required));
        assert_eq!(support(AriaProperty::Required), Some(AttrSupport::Supported));
        assert_eq!(support(AriaProperty::Label), Some(AttrSupport::Inherited));
        assert_eq!(support(AriaProperty::ValueNow), Some(AttrSupport::Unsupported));
        assert_eq!(info.deprecated().count(), 1);
        assert_eq!(info.unknown_attrs.len(), 1);
        assert_eq!(info.missing_required().count(), 0);
    }

    #[test]
    fn test_required_with_native_equivalent() {
        let info = info_for(StyledElement::new("input").with_attr("type", "checkbox").with_attr("role", "switch"), 0);
        assert_eq!(info.required.len(), 1);
        assert!(info.required[0].is_defined);

        let info = info_for(StyledElement::new("div").with_attr("role", "slider"), 0);
        assert_eq!(info.missing_required().count(), 1);
        let range = info.range.expect("slider is a range widget");
        assert_eq!((range.value_min, range.value_max), (0.0, 100.0));
        assert!(range.is_value_now_required);

        // implicit roles are not checked
        let info = info_for(StyledElement::new("select"), 0);
        assert!(info.required.is_empty());
    }

    #[test]
    fn test_invalid_references() {
        let root = StyledElement::new("div")
            .with_child(StyledElement::new("span").with_attr("id", "real"))
            .with_child(StyledElement::new("button").with_attr("aria-describedby", "real ghost"));
        let info = info_for(root, 2);
        let refs: Vec<_> = info.invalid_refs().flat_map(|a| a.invalid_refs.clone()).collect();
        assert_eq!(refs, vec!["ghost".to_string()]);
    }

    #[test]
    fn test_heading_level_and_live() {
        assert_eq!(info_for(StyledElement::new("h3"), 0).heading_level, Some(3));
        assert_eq!(
            info_for(StyledElement::new("div").with_attr("role", "heading").with_attr("aria-level", "5"), 0)
                .heading_level,
            Some(5)
        );
        assert_eq!(info_for(StyledElement::new("p"), 0).heading_level, None);
        let status = info_for(StyledElement::new("div").with_attr("role", "status"), 0);
        assert_eq!(status.live.as_deref(), Some("polite"));
        assert!(status.is_live());
    }
}
