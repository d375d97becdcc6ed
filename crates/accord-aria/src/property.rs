//! ARIA states and properties
//!
//! One entry per `aria-*` attribute: value type, legal tokens, default
//! value and deprecation, as published by WAI-ARIA.

use serde::Serialize;

use crate::AriaVersion;

/// ARIA state or property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum AriaProperty {
    ActiveDescendant,
    Atomic,
    AutoComplete,
    BrailleLabel,
    BrailleRoleDescription,
    Busy,
    Checked,
    ColCount,
    ColIndex,
    ColIndexText,
    ColSpan,
    Controls,
    Current,
    DescribedBy,
    Description,
    Details,
    Disabled,
    DropEffect,
    ErrorMessage,
    Expanded,
    FlowTo,
    Grabbed,
    HasPopup,
    Hidden,
    Invalid,
    KeyShortcuts,
    Label,
    LabelledBy,
    Level,
    Live,
    Modal,
    MultiLine,
    MultiSelectable,
    Orientation,
    Owns,
    Placeholder,
    PosInSet,
    Pressed,
    ReadOnly,
    Relevant,
    Required,
    RoleDescription,
    RowCount,
    RowIndex,
    RowIndexText,
    RowSpan,
    Selected,
    SetSize,
    Sort,
    ValueMax,
    ValueMin,
    ValueNow,
    ValueText,
}

/// Value type of an ARIA attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    Tristate,
    Integer,
    Number,
    Nmtoken,
    Nmtokens,
    Idref,
    Idrefs,
    String,
}

/// Whether the attribute is a state or a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    State,
    Property,
}

/// Static description of one ARIA attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyType {
    pub property: AriaProperty,
    pub kind: PropertyKind,
    pub value_type: ValueType,
    /// Legal tokens for token-valued types
    pub values: &'static [&'static str],
    pub default_value: &'static str,
    pub deprecated: bool,
    /// Integer attribute that accepts `-1` as "undetermined"
    pub allow_undetermined: bool,
    pub since: AriaVersion,
}

impl PropertyType {
    const fn property(property: AriaProperty, value_type: ValueType) -> Self {
        Self {
            property,
            kind: PropertyKind::Property,
            value_type,
            values: &[],
            default_value: "",
            deprecated: false,
            allow_undetermined: false,
            since: AriaVersion::Aria12,
        }
    }

    const fn state(property: AriaProperty, value_type: ValueType) -> Self {
        let mut entry = Self::property(property, value_type);
        entry.kind = PropertyKind::State;
        entry
    }

    const fn tokens(mut self, values: &'static [&'static str], default_value: &'static str) -> Self {
        self.values = values;
        self.default_value = default_value;
        self
    }

    const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    const fn undetermined(mut self) -> Self {
        self.allow_undetermined = true;
        self
    }

    const fn since(mut self, version: AriaVersion) -> Self {
        self.since = version;
        self
    }

    /// Whether a default value is defined
    pub fn has_default(&self) -> bool {
        !self.default_value.is_empty()
    }
}

use AriaProperty as P;
use ValueType as V;

const BOOLEAN: &[&str] = &["false", "true"];
const TRISTATE: &[&str] = &["false", "mixed", "true", "undefined"];
const TRUE_FALSE_UNDEFINED: &[&str] = &["false", "true", "undefined"];

/// Indexed by `AriaProperty as usize`
static PROPERTY_TYPES: [PropertyType; 53] = [
    PropertyType::property(P::ActiveDescendant, V::Idref),
    PropertyType::property(P::Atomic, V::Boolean).tokens(BOOLEAN, "false"),
    PropertyType::property(P::AutoComplete, V::Nmtoken).tokens(&["inline", "list", "both", "none"], "none"),
    PropertyType::property(P::BrailleLabel, V::String).since(AriaVersion::Aria13),
    PropertyType::property(P::BrailleRoleDescription, V::String).since(AriaVersion::Aria13),
    PropertyType::state(P::Busy, V::Boolean).tokens(BOOLEAN, "false"),
    PropertyType::state(P::Checked, V::Tristate).tokens(TRISTATE, "undefined"),
    PropertyType::property(P::ColCount, V::Integer).undetermined(),
    PropertyType::property(P::ColIndex, V::Integer),
    PropertyType::property(P::ColIndexText, V::String),
    PropertyType::property(P::ColSpan, V::Integer),
    PropertyType::property(P::Controls, V::Idrefs),
    PropertyType::state(P::Current, V::Nmtoken)
        .tokens(&["page", "step", "location", "date", "time", "true", "false"], "false"),
    PropertyType::property(P::DescribedBy, V::Idrefs),
    PropertyType::property(P::Description, V::String).since(AriaVersion::Aria13),
    PropertyType::property(P::Details, V::Idref),
    PropertyType::state(P::Disabled, V::Boolean).tokens(BOOLEAN, "false"),
    PropertyType::property(P::DropEffect, V::Nmtokens)
        .tokens(&["copy", "execute", "link", "move", "none", "popup"], "none")
        .deprecated(),
    PropertyType::property(P::ErrorMessage, V::Idref),
    PropertyType::state(P::Expanded, V::Nmtoken).tokens(TRUE_FALSE_UNDEFINED, "undefined"),
    PropertyType::property(P::FlowTo, V::Idrefs),
    PropertyType::state(P::Grabbed, V::Nmtoken)
        .tokens(TRUE_FALSE_UNDEFINED, "undefined")
        .deprecated(),
    PropertyType::property(P::HasPopup, V::Nmtoken)
        .tokens(&["false", "true", "menu", "listbox", "tree", "grid", "dialog"], "false"),
    PropertyType::state(P::Hidden, V::Nmtoken).tokens(TRUE_FALSE_UNDEFINED, "undefined"),
    PropertyType::state(P::Invalid, V::Nmtoken).tokens(&["grammar", "false", "spelling", "true"], "false"),
    PropertyType::property(P::KeyShortcuts, V::String),
    PropertyType::property(P::Label, V::String),
    PropertyType::property(P::LabelledBy, V::Idrefs),
    PropertyType::property(P::Level, V::Integer),
    PropertyType::property(P::Live, V::Nmtoken).tokens(&["assertive", "off", "polite"], "off"),
    PropertyType::property(P::Modal, V::Boolean).tokens(BOOLEAN, "false"),
    PropertyType::property(P::MultiLine, V::Boolean).tokens(BOOLEAN, "false"),
    PropertyType::property(P::MultiSelectable, V::Boolean).tokens(BOOLEAN, "false"),
    PropertyType::property(P::Orientation, V::Nmtoken)
        .tokens(&["horizontal", "undefined", "vertical"], "undefined"),
    PropertyType::property(P::Owns, V::Idrefs),
    PropertyType::property(P::Placeholder, V::String),
    PropertyType::property(P::PosInSet, V::Integer),
    PropertyType::state(P::Pressed, V::Tristate).tokens(TRISTATE, "undefined"),
    PropertyType::property(P::ReadOnly, V::Boolean).tokens(BOOLEAN, "false"),
    PropertyType::property(P::Relevant, V::Nmtokens)
        .tokens(&["additions", "all", "removals", "text"], "additions text"),
    PropertyType::property(P::Required, V::Boolean).tokens(BOOLEAN, "false"),
    PropertyType::property(P::RoleDescription, V::String),
    PropertyType::property(P::RowCount, V::Integer).undetermined(),
    PropertyType::property(P::RowIndex, V::Integer),
    PropertyType::property(P::RowIndexText, V::String),
    PropertyType::property(P::RowSpan, V::Integer),
    PropertyType::state(P::Selected, V::Nmtoken).tokens(TRUE_FALSE_UNDEFINED, "undefined"),
    PropertyType::property(P::SetSize, V::Integer).undetermined(),
    PropertyType::property(P::Sort, V::Nmtoken).tokens(&["ascending", "descending", "none", "other"], "none"),
    PropertyType::property(P::ValueMax, V::Number),
    PropertyType::property(P::ValueMin, V::Number),
    PropertyType::property(P::ValueNow, V::Number),
    PropertyType::property(P::ValueText, V::String),
];

/// Properties every role inherits from `roletype`
pub const GLOBAL_PROPERTIES: &[AriaProperty] = &[
    P::Atomic,
    P::BrailleLabel,
    P::BrailleRoleDescription,
    P::Busy,
    P::Controls,
    P::Current,
    P::DescribedBy,
    P::Description,
    P::Details,
    P::Disabled,
    P::DropEffect,
    P::ErrorMessage,
    P::FlowTo,
    P::Grabbed,
    P::HasPopup,
    P::Hidden,
    P::Invalid,
    P::KeyShortcuts,
    P::Label,
    P::LabelledBy,
    P::Live,
    P::Owns,
    P::Relevant,
    P::RoleDescription,
];

/// Global in ARIA 1.1, deprecated in 1.2 on roles that do not list them
pub const DEPRECATED_GLOBALS: &[AriaProperty] =
    &[P::Disabled, P::ErrorMessage, P::HasPopup, P::Invalid];

impl AriaProperty {
    /// Every property, in table order
    pub fn all() -> impl Iterator<Item = AriaProperty> {
        PROPERTY_TYPES.iter().map(|entry| entry.property)
    }

    /// Look up an attribute name such as `aria-label`
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::all().find(|p| p.name() == name)
    }

    /// Look up an attribute name known to the given ARIA version
    pub fn parse_for(name: &str, version: AriaVersion) -> Option<Self> {
        Self::parse(name).filter(|p| p.info().since <= version)
    }

    /// Static type information
    pub fn info(self) -> &'static PropertyType {
        &PROPERTY_TYPES[self as usize]
    }

    /// Is this a global (roletype) property
    pub fn is_global(self) -> bool {
        GLOBAL_PROPERTIES.contains(&self)
    }

    /// Attribute name
    pub fn name(self) -> &'static str {
        match self {
            Self::ActiveDescendant => "aria-activedescendant",
            Self::Atomic => "aria-atomic",
            Self::AutoComplete => "aria-autocomplete",
            Self::BrailleLabel => "aria-braillelabel",
            Self::BrailleRoleDescription => "aria-brailleroledescription",
            Self::Busy => "aria-busy",
            Self::Checked => "aria-checked",
            Self::ColCount => "aria-colcount",
            Self::ColIndex => "aria-colindex",
            Self::ColIndexText => "aria-colindextext",
            Self::ColSpan => "aria-colspan",
            Self::Controls => "aria-controls",
            Self::Current => "aria-current",
            Self::DescribedBy => "aria-describedby",
            Self::Description => "aria-description",
            Self::Details => "aria-details",
            Self::Disabled => "aria-disabled",
            Self::DropEffect => "aria-dropeffect",
            Self::ErrorMessage => "aria-errormessage",
            Self::Expanded => "aria-expanded",
            Self::FlowTo => "aria-flowto",
            Self::Grabbed => "aria-grabbed",
            Self::HasPopup => "aria-haspopup",
            Self::Hidden => "aria-hidden",
            Self::Invalid => "aria-invalid",
            Self::KeyShortcuts => "aria-keyshortcuts",
            Self::Label => "aria-label",
            Self::LabelledBy => "aria-labelledby",
            Self::Level => "aria-level",
            Self::Live => "aria-live",
            Self::Modal => "aria-modal",
            Self::MultiLine => "aria-multiline",
            Self::MultiSelectable => "aria-multiselectable",
            Self::Orientation => "aria-orientation",
            Self::Owns => "aria-owns",
            Self::Placeholder => "aria-placeholder",
            Self::PosInSet => "aria-posinset",
            Self::Pressed => "aria-pressed",
            Self::ReadOnly => "aria-readonly",
            Self::Relevant => "aria-relevant",
            Self::Required => "aria-required",
            Self::RoleDescription => "aria-roledescription",
            Self::RowCount => "aria-rowcount",
            Self::RowIndex => "aria-rowindex",
            Self::RowIndexText => "aria-rowindextext",
            Self::RowSpan => "aria-rowspan",
            Self::Selected => "aria-selected",
            Self::SetSize => "aria-setsize",
            Self::Sort => "aria-sort",
            Self::ValueMax => "aria-valuemax",
            Self::ValueMin => "aria-valuemin",
            Self::ValueNow => "aria-valuenow",
            Self::ValueText => "aria-valuetext",
        }
    }
}

impl From<AriaProperty> for &'static str {
    fn from(property: AriaProperty) -> Self {
        property.name()
    }
}

impl std::fmt::Display for AriaProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for (index, entry) in PROPERTY_TYPES.iter().enumerate() {
            assert_eq!(entry.property as usize, index, "{}", entry.property);
        }
    }

    #[test]
    fn test_parse_property() {
        assert_eq!(AriaProperty::parse("ARIA-Checked"), Some(AriaProperty::Checked));
        assert_eq!(AriaProperty::parse("aria-bogus"), None);
        assert_eq!(AriaProperty::parse_for("aria-description", AriaVersion::Aria12), None);
        assert!(AriaProperty::parse_for("aria-description", AriaVersion::Aria13).is_some());
    }

    #[test]
    fn test_type_info() {
        let checked = AriaProperty::Checked.info();
        assert_eq!(checked.value_type, ValueType::Tristate);
        assert_eq!(checked.kind, PropertyKind::State);
        assert_eq!(checked.default_value, "undefined");
        assert!(AriaProperty::SetSize.info().allow_undetermined);
        assert!(AriaProperty::Grabbed.info().deprecated);
        assert!(AriaProperty::Label.is_global());
        assert!(!AriaProperty::Checked.is_global());
    }
}
