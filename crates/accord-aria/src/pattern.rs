//! Role design patterns
//!
//! The static rulebook for each role: classification, naming rules,
//! required/supported/inherited properties and allowed parent/child roles.

use serde::Serialize;

use crate::property::{DEPRECATED_GLOBALS, GLOBAL_PROPERTIES};
use crate::{AriaProperty, AriaVersion, Role};

/// Role classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Abstract,
    Widget,
    Composite,
    Input,
    Command,
    Range,
    Landmark,
    Live,
    Window,
    Section,
    Sectionhead,
    Select,
    Structure,
}

/// Context-dependent variants of a role's pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternVariant {
    #[default]
    Standard,
    /// `separator` that is focusable behaves as a range widget
    FocusableSeparator,
    /// `row` owned by a `grid`
    GridRow,
    /// `row` owned by a `treegrid`
    TreegridRow,
}

/// Design pattern of one role
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleDesignPattern {
    pub role: Role,
    pub variant: PatternVariant,
    pub role_types: &'static [RoleType],
    pub name_from_contents: bool,
    pub name_required: bool,
    pub name_prohibited: bool,
    pub children_presentational: bool,
    pub required_props: &'static [AriaProperty],
    pub supported_props: &'static [AriaProperty],
    /// Properties inherited from superclass roles other than `roletype`
    pub inherited_props: &'static [AriaProperty],
    pub required_parents: &'static [Role],
    pub required_children: &'static [Role],
}

impl RoleDesignPattern {
    const fn new(role: Role, role_types: &'static [RoleType]) -> Self {
        Self {
            role,
            variant: PatternVariant::Standard,
            role_types,
            name_from_contents: false,
            name_required: false,
            name_prohibited: false,
            children_presentational: false,
            required_props: &[],
            supported_props: &[],
            inherited_props: &[],
            required_parents: &[],
            required_children: &[],
        }
    }

    const fn variant(mut self, variant: PatternVariant) -> Self {
        self.variant = variant;
        self
    }

    const fn contents(mut self) -> Self {
        self.name_from_contents = true;
        self
    }

    const fn named(mut self) -> Self {
        self.name_required = true;
        self
    }

    const fn prohibited(mut self) -> Self {
        self.name_prohibited = true;
        self
    }

    const fn presentational_children(mut self) -> Self {
        self.children_presentational = true;
        self
    }

    const fn required(mut self, props: &'static [AriaProperty]) -> Self {
        self.required_props = props;
        self
    }

    const fn supported(mut self, props: &'static [AriaProperty]) -> Self {
        self.supported_props = props;
        self
    }

    const fn inherited(mut self, props: &'static [AriaProperty]) -> Self {
        self.inherited_props = props;
        self
    }

    const fn parents(mut self, roles: &'static [Role]) -> Self {
        self.required_parents = roles;
        self
    }

    const fn children(mut self, roles: &'static [Role]) -> Self {
        self.required_children = roles;
        self
    }

    pub fn has_type(&self, role_type: RoleType) -> bool {
        self.role_types.contains(&role_type)
    }

    pub fn is_abstract(&self) -> bool {
        self.has_type(RoleType::Abstract)
    }

    pub fn is_widget(&self) -> bool {
        self.has_type(RoleType::Widget)
    }

    pub fn is_landmark(&self) -> bool {
        self.has_type(RoleType::Landmark)
    }

    pub fn is_range(&self) -> bool {
        self.has_type(RoleType::Range)
    }

    pub fn is_live(&self) -> bool {
        self.has_type(RoleType::Live)
    }

    pub fn is_section(&self) -> bool {
        self.has_type(RoleType::Section)
    }

    pub fn is_window(&self) -> bool {
        self.has_type(RoleType::Window)
    }

    pub fn is_required(&self, prop: AriaProperty) -> bool {
        self.required_props.contains(&prop)
    }

    pub fn is_supported(&self, prop: AriaProperty) -> bool {
        self.supported_props.contains(&prop)
    }

    /// Inherited either from `roletype` or from another superclass
    pub fn is_inherited(&self, prop: AriaProperty) -> bool {
        GLOBAL_PROPERTIES.contains(&prop) || self.inherited_props.contains(&prop)
    }

    /// Usable on this role at all
    pub fn allows(&self, prop: AriaProperty) -> bool {
        self.is_required(prop) || self.is_supported(prop) || self.is_inherited(prop)
    }

    /// Deprecated for this role, either everywhere or because the role
    /// does not list a former global property
    pub fn is_deprecated(&self, prop: AriaProperty) -> bool {
        prop.info().deprecated
            || (DEPRECATED_GLOBALS.contains(&prop)
                && !self.is_required(prop)
                && !self.is_supported(prop)
                && !self.inherited_props.contains(&prop))
    }

    /// Available in the given ARIA version
    pub fn available_in(&self, version: AriaVersion) -> bool {
        self.role.since() <= version
    }
}

use AriaProperty as P;
use Role as R;
use RoleType as T;

// === Shared property groups ===
const RANGE_VALUES: &[AriaProperty] = &[P::ValueMax, P::ValueMin, P::ValueNow, P::ValueText];
const RANGE_INHERITED: &[AriaProperty] = &[P::ValueMax, P::ValueMin, P::ValueText];
const CELL_PROPS: &[AriaProperty] = &[
    P::ColIndex,
    P::ColIndexText,
    P::ColSpan,
    P::RowIndex,
    P::RowIndexText,
    P::RowSpan,
];
const HEADER_PROPS: &[AriaProperty] = &[
    P::Sort,
    P::ColIndex,
    P::ColIndexText,
    P::ColSpan,
    P::RowIndex,
    P::RowIndexText,
    P::RowSpan,
    P::Disabled,
    P::ErrorMessage,
    P::Expanded,
    P::HasPopup,
    P::Invalid,
    P::ReadOnly,
    P::Required,
    P::Selected,
];
const ROW_PROPS: &[AriaProperty] = &[
    P::ColIndex,
    P::ColIndexText,
    P::Expanded,
    P::Level,
    P::PosInSet,
    P::RowIndex,
    P::RowIndexText,
    P::Selected,
    P::SetSize,
    P::Disabled,
];
const TEXTBOX_PROPS: &[AriaProperty] = &[
    P::ActiveDescendant,
    P::AutoComplete,
    P::ErrorMessage,
    P::HasPopup,
    P::Invalid,
    P::MultiLine,
    P::Placeholder,
    P::ReadOnly,
    P::Required,
];
const MENU_PROPS: &[AriaProperty] = &[P::Orientation];
const MENU_CHILDREN: &[Role] = &[R::Group, R::MenuItem, R::MenuItemCheckbox, R::MenuItemRadio];
const MENU_PARENTS: &[Role] = &[R::Group, R::Menu, R::MenuBar];
const MENUITEM_PROPS: &[AriaProperty] =
    &[P::Disabled, P::Expanded, P::HasPopup, P::PosInSet, P::SetSize];
const CHECKABLE_MENUITEM_PROPS: &[AriaProperty] = &[
    P::Disabled,
    P::Expanded,
    P::HasPopup,
    P::PosInSet,
    P::SetSize,
    P::ReadOnly,
];
const COMPOSITE: &[AriaProperty] = &[P::ActiveDescendant];
const CELL_PARENTS: &[Role] = &[R::Row];
const TABLE_CHILDREN: &[Role] = &[R::Row, R::RowGroup];
const ROW_PARENTS: &[Role] = &[R::Grid, R::RowGroup, R::Table, R::TreeGrid];
const ROW_CHILDREN: &[Role] = &[R::Cell, R::ColumnHeader, R::GridCell, R::RowHeader];

const GENERIC: RoleDesignPattern = RoleDesignPattern::new(R::Generic, &[T::Structure]).prohibited();

/// Pattern returned for roles without a table entry
pub static GENERIC_PATTERN: RoleDesignPattern = GENERIC;

static PATTERNS: &[RoleDesignPattern] = &[
    // === Abstract ===
    RoleDesignPattern::new(R::Command, &[T::Abstract, T::Widget]),
    RoleDesignPattern::new(R::Composite, &[T::Abstract, T::Widget]).inherited(COMPOSITE),
    RoleDesignPattern::new(R::Input, &[T::Abstract, T::Widget]),
    RoleDesignPattern::new(R::Landmark, &[T::Abstract, T::Landmark]),
    RoleDesignPattern::new(R::Range, &[T::Abstract, T::Structure]).supported(RANGE_VALUES),
    RoleDesignPattern::new(R::Roletype, &[T::Abstract]),
    RoleDesignPattern::new(R::Section, &[T::Abstract, T::Section]),
    RoleDesignPattern::new(R::Sectionhead, &[T::Abstract, T::Sectionhead]),
    RoleDesignPattern::new(R::Select, &[T::Abstract, T::Widget, T::Composite]),
    RoleDesignPattern::new(R::Structure, &[T::Abstract, T::Structure]),
    RoleDesignPattern::new(R::Widget, &[T::Abstract, T::Widget]),
    RoleDesignPattern::new(R::Window, &[T::Abstract, T::Window]),
    // === Landmarks ===
    RoleDesignPattern::new(R::Banner, &[T::Landmark]),
    RoleDesignPattern::new(R::Complementary, &[T::Landmark]),
    RoleDesignPattern::new(R::ContentInfo, &[T::Landmark]),
    RoleDesignPattern::new(R::Form, &[T::Landmark]),
    RoleDesignPattern::new(R::Main, &[T::Landmark]),
    RoleDesignPattern::new(R::Navigation, &[T::Landmark]),
    RoleDesignPattern::new(R::Region, &[T::Landmark]).named(),
    RoleDesignPattern::new(R::Search, &[T::Landmark]),
    // === Widgets ===
    RoleDesignPattern::new(R::Button, &[T::Widget, T::Command])
        .contents()
        .named()
        .presentational_children()
        .supported(&[P::Disabled, P::Expanded, P::HasPopup, P::Pressed]),
    RoleDesignPattern::new(R::Checkbox, &[T::Widget, T::Input])
        .contents()
        .named()
        .presentational_children()
        .required(&[P::Checked])
        .supported(&[P::ErrorMessage, P::Expanded, P::Invalid, P::ReadOnly, P::Required]),
    RoleDesignPattern::new(R::Combobox, &[T::Widget, T::Input, T::Composite])
        .named()
        .required(&[P::Expanded])
        .supported(&[
            P::ActiveDescendant,
            P::AutoComplete,
            P::Controls,
            P::ErrorMessage,
            P::HasPopup,
            P::Invalid,
            P::ReadOnly,
            P::Required,
        ]),
    RoleDesignPattern::new(R::Grid, &[T::Widget, T::Composite, T::Section])
        .named()
        .supported(&[P::MultiSelectable, P::ReadOnly, P::ColCount, P::RowCount])
        .inherited(COMPOSITE)
        .children(TABLE_CHILDREN),
    RoleDesignPattern::new(R::GridCell, &[T::Widget, T::Section])
        .contents()
        .supported(&[
            P::Disabled,
            P::ErrorMessage,
            P::Expanded,
            P::HasPopup,
            P::Invalid,
            P::ReadOnly,
            P::Required,
            P::Selected,
        ])
        .inherited(CELL_PROPS)
        .parents(CELL_PARENTS),
    RoleDesignPattern::new(R::Link, &[T::Widget, T::Command])
        .contents()
        .named()
        .supported(&[P::Disabled, P::Expanded, P::HasPopup]),
    RoleDesignPattern::new(R::Listbox, &[T::Widget, T::Composite, T::Select])
        .named()
        .supported(&[
            P::ErrorMessage,
            P::Expanded,
            P::Invalid,
            P::MultiSelectable,
            P::ReadOnly,
            P::Required,
            P::Orientation,
        ])
        .inherited(COMPOSITE)
        .children(&[R::Group, R::Option]),
    RoleDesignPattern::new(R::Menu, &[T::Widget, T::Composite, T::Select])
        .supported(MENU_PROPS)
        .inherited(COMPOSITE)
        .children(MENU_CHILDREN),
    RoleDesignPattern::new(R::MenuBar, &[T::Widget, T::Composite, T::Select])
        .supported(MENU_PROPS)
        .inherited(COMPOSITE)
        .children(MENU_CHILDREN),
    RoleDesignPattern::new(R::MenuItem, &[T::Widget, T::Command])
        .contents()
        .named()
        .supported(MENUITEM_PROPS)
        .parents(MENU_PARENTS),
    RoleDesignPattern::new(R::MenuItemCheckbox, &[T::Widget, T::Command, T::Input])
        .contents()
        .named()
        .presentational_children()
        .required(&[P::Checked])
        .supported(CHECKABLE_MENUITEM_PROPS)
        .parents(MENU_PARENTS),
    RoleDesignPattern::new(R::MenuItemRadio, &[T::Widget, T::Command, T::Input])
        .contents()
        .named()
        .presentational_children()
        .required(&[P::Checked])
        .supported(CHECKABLE_MENUITEM_PROPS)
        .parents(MENU_PARENTS),
    RoleDesignPattern::new(R::Option, &[T::Widget, T::Input])
        .contents()
        .named()
        .presentational_children()
        .required(&[P::Selected])
        .supported(&[P::Checked, P::Disabled, P::PosInSet, P::SetSize])
        .parents(&[R::Group, R::Listbox]),
    RoleDesignPattern::new(R::ProgressBar, &[T::Widget, T::Range])
        .named()
        .presentational_children()
        .supported(&[P::ValueNow])
        .inherited(RANGE_INHERITED),
    RoleDesignPattern::new(R::Radio, &[T::Widget, T::Input])
        .contents()
        .named()
        .presentational_children()
        .required(&[P::Checked])
        .supported(&[P::PosInSet, P::SetSize]),
    RoleDesignPattern::new(R::RadioGroup, &[T::Widget, T::Composite, T::Select])
        .named()
        .supported(&[P::ErrorMessage, P::Invalid, P::ReadOnly, P::Required, P::Orientation])
        .inherited(COMPOSITE)
        .children(&[R::Radio]),
    RoleDesignPattern::new(R::ScrollBar, &[T::Widget, T::Range])
        .presentational_children()
        .required(&[P::Controls, P::ValueNow])
        .supported(&[P::Disabled, P::Orientation])
        .inherited(RANGE_INHERITED),
    RoleDesignPattern::new(R::SearchBox, &[T::Widget, T::Input])
        .named()
        .supported(TEXTBOX_PROPS),
    RoleDesignPattern::new(R::Slider, &[T::Widget, T::Input, T::Range])
        .named()
        .presentational_children()
        .required(&[P::ValueNow])
        .supported(&[P::ErrorMessage, P::HasPopup, P::Invalid, P::Orientation, P::ReadOnly])
        .inherited(RANGE_INHERITED),
    RoleDesignPattern::new(R::SpinButton, &[T::Widget, T::Composite, T::Input, T::Range])
        .named()
        .supported(&[P::ErrorMessage, P::Invalid, P::ReadOnly, P::Required, P::ValueNow])
        .inherited(RANGE_INHERITED),
    RoleDesignPattern::new(R::Switch, &[T::Widget, T::Input])
        .contents()
        .named()
        .presentational_children()
        .required(&[P::Checked])
        .supported(&[P::ReadOnly, P::Required]),
    RoleDesignPattern::new(R::Tab, &[T::Widget])
        .contents()
        .presentational_children()
        .supported(&[P::Disabled, P::Expanded, P::HasPopup, P::PosInSet, P::Selected, P::SetSize])
        .parents(&[R::TabList]),
    RoleDesignPattern::new(R::TabList, &[T::Widget, T::Composite])
        .supported(&[P::MultiSelectable, P::Orientation])
        .inherited(COMPOSITE)
        .children(&[R::Tab]),
    RoleDesignPattern::new(R::TabPanel, &[T::Section]).named(),
    RoleDesignPattern::new(R::TextBox, &[T::Widget, T::Input])
        .named()
        .supported(TEXTBOX_PROPS),
    RoleDesignPattern::new(R::Tree, &[T::Widget, T::Composite, T::Select])
        .named()
        .supported(&[P::ErrorMessage, P::Invalid, P::MultiSelectable, P::Required, P::Orientation])
        .inherited(COMPOSITE)
        .children(&[R::Group, R::TreeItem]),
    RoleDesignPattern::new(R::TreeGrid, &[T::Widget, T::Composite, T::Section])
        .named()
        .supported(&[
            P::ErrorMessage,
            P::Invalid,
            P::MultiSelectable,
            P::ReadOnly,
            P::Required,
            P::ColCount,
            P::RowCount,
            P::Orientation,
        ])
        .inherited(COMPOSITE)
        .children(TABLE_CHILDREN),
    RoleDesignPattern::new(R::TreeItem, &[T::Widget, T::Input])
        .contents()
        .named()
        .supported(&[
            P::Checked,
            P::Disabled,
            P::Expanded,
            P::HasPopup,
            P::Level,
            P::PosInSet,
            P::Selected,
            P::SetSize,
        ])
        .parents(&[R::Group, R::Tree]),
    // === Document structure ===
    RoleDesignPattern::new(R::Application, &[T::Structure])
        .named()
        .supported(&[
            P::ActiveDescendant,
            P::Disabled,
            P::ErrorMessage,
            P::Expanded,
            P::HasPopup,
            P::Invalid,
        ]),
    RoleDesignPattern::new(R::Article, &[T::Structure, T::Section]).supported(&[P::PosInSet, P::SetSize]),
    RoleDesignPattern::new(R::Blockquote, &[T::Section]),
    RoleDesignPattern::new(R::Caption, &[T::Section])
        .prohibited()
        .parents(&[R::Figure, R::Grid, R::Table, R::TreeGrid]),
    RoleDesignPattern::new(R::Cell, &[T::Section])
        .contents()
        .supported(CELL_PROPS)
        .parents(CELL_PARENTS),
    RoleDesignPattern::new(R::Code, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::ColumnHeader, &[T::Section, T::Widget])
        .contents()
        .named()
        .supported(HEADER_PROPS)
        .parents(CELL_PARENTS),
    RoleDesignPattern::new(R::Definition, &[T::Section]),
    RoleDesignPattern::new(R::Deletion, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::Directory, &[T::Section]).children(&[R::ListItem]),
    RoleDesignPattern::new(R::Document, &[T::Structure]).supported(&[P::Expanded]),
    RoleDesignPattern::new(R::Emphasis, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::Feed, &[T::Structure]).children(&[R::Article]),
    RoleDesignPattern::new(R::Figure, &[T::Section]),
    GENERIC,
    RoleDesignPattern::new(R::Group, &[T::Section]).supported(&[P::ActiveDescendant, P::Disabled]),
    RoleDesignPattern::new(R::Heading, &[T::Sectionhead])
        .contents()
        .named()
        .required(&[P::Level]),
    RoleDesignPattern::new(R::Img, &[T::Section]).named().presentational_children(),
    RoleDesignPattern::new(R::Insertion, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::List, &[T::Section]).children(&[R::ListItem]),
    RoleDesignPattern::new(R::ListItem, &[T::Section])
        .supported(&[P::Level, P::PosInSet, P::SetSize])
        .parents(&[R::Directory, R::List]),
    RoleDesignPattern::new(R::Math, &[T::Section]),
    RoleDesignPattern::new(R::Meter, &[T::Structure, T::Range])
        .named()
        .presentational_children()
        .required(&[P::ValueNow])
        .inherited(RANGE_INHERITED),
    RoleDesignPattern::new(R::None, &[T::Structure]).prohibited(),
    RoleDesignPattern::new(R::Note, &[T::Section]),
    RoleDesignPattern::new(R::Paragraph, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::Presentation, &[T::Structure]).prohibited(),
    RoleDesignPattern::new(R::Row, &[T::Structure])
        .contents()
        .supported(ROW_PROPS)
        .parents(ROW_PARENTS)
        .children(ROW_CHILDREN),
    RoleDesignPattern::new(R::Row, &[T::Structure, T::Widget])
        .variant(PatternVariant::GridRow)
        .contents()
        .supported(ROW_PROPS)
        .inherited(COMPOSITE)
        .parents(ROW_PARENTS)
        .children(ROW_CHILDREN),
    RoleDesignPattern::new(R::Row, &[T::Structure, T::Widget])
        .variant(PatternVariant::TreegridRow)
        .contents()
        .required(&[P::Expanded])
        .supported(ROW_PROPS)
        .inherited(COMPOSITE)
        .parents(ROW_PARENTS)
        .children(ROW_CHILDREN),
    RoleDesignPattern::new(R::RowGroup, &[T::Structure])
        .contents()
        .parents(&[R::Grid, R::Table, R::TreeGrid])
        .children(&[R::Row]),
    RoleDesignPattern::new(R::RowHeader, &[T::Section, T::Widget])
        .contents()
        .named()
        .supported(HEADER_PROPS)
        .parents(CELL_PARENTS),
    RoleDesignPattern::new(R::Separator, &[T::Structure]).supported(&[P::Orientation]),
    RoleDesignPattern::new(R::Separator, &[T::Widget, T::Range])
        .variant(PatternVariant::FocusableSeparator)
        .presentational_children()
        .required(&[P::ValueNow])
        .supported(&[P::Disabled, P::Orientation, P::ValueMax, P::ValueMin, P::ValueText]),
    RoleDesignPattern::new(R::Strong, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::Subscript, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::Superscript, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::Table, &[T::Section])
        .named()
        .supported(&[P::ColCount, P::RowCount])
        .children(TABLE_CHILDREN),
    RoleDesignPattern::new(R::Term, &[T::Section]),
    RoleDesignPattern::new(R::Time, &[T::Section]),
    RoleDesignPattern::new(R::Toolbar, &[T::Structure])
        .supported(&[P::Orientation])
        .inherited(COMPOSITE),
    RoleDesignPattern::new(R::Tooltip, &[T::Structure, T::Section]).contents(),
    // === Live regions ===
    RoleDesignPattern::new(R::Alert, &[T::Live, T::Section]),
    RoleDesignPattern::new(R::Log, &[T::Live, T::Section]),
    RoleDesignPattern::new(R::Marquee, &[T::Live, T::Section]).named(),
    RoleDesignPattern::new(R::Status, &[T::Live, T::Section]),
    RoleDesignPattern::new(R::Timer, &[T::Live, T::Section]),
    // === Windows ===
    RoleDesignPattern::new(R::AlertDialog, &[T::Window]).named().supported(&[P::Modal]),
    RoleDesignPattern::new(R::Dialog, &[T::Window]).named().supported(&[P::Modal]),
    // === ARIA 1.3 ===
    RoleDesignPattern::new(R::Comment, &[T::Section])
        .contents()
        .supported(&[P::Level, P::PosInSet, P::SetSize]),
    RoleDesignPattern::new(R::Mark, &[T::Section]).prohibited(),
    RoleDesignPattern::new(R::Suggestion, &[T::Section]).prohibited(),
    // === Graphics ===
    RoleDesignPattern::new(R::GraphicsDocument, &[T::Structure]).supported(&[P::Expanded]),
    RoleDesignPattern::new(R::GraphicsObject, &[T::Section]).supported(&[P::ActiveDescendant]),
    RoleDesignPattern::new(R::GraphicsSymbol, &[T::Section]).presentational_children(),
];

/// Design pattern for a role, falling back to the standard variant and
/// then to `generic`
pub fn design_pattern(role: Role, variant: PatternVariant) -> &'static RoleDesignPattern {
    PATTERNS
        .iter()
        .find(|p| p.role == role && p.variant == variant)
        .or_else(|| PATTERNS.iter().find(|p| p.role == role))
        .unwrap_or(&GENERIC_PATTERN)
}

/// All patterns, including role variants
pub fn design_patterns() -> &'static [RoleDesignPattern] {
    PATTERNS
}

impl Role {
    /// Standard design pattern of this role
    pub fn pattern(self) -> &'static RoleDesignPattern {
        design_pattern(self, PatternVariant::Standard)
    }

    pub fn is_abstract(self) -> bool {
        self.pattern().is_abstract()
    }

    pub fn is_widget(self) -> bool {
        self.pattern().is_widget()
    }

    pub fn is_landmark(self) -> bool {
        self.pattern().is_landmark()
    }

    pub fn is_live_region(self) -> bool {
        self.pattern().is_live()
    }

    pub fn supports_name_from_content(self) -> bool {
        self.pattern().name_from_contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_pattern() {
        for role in Role::ALL {
            assert_eq!(role.pattern().role, role, "{role}");
        }
    }

    #[test]
    fn test_classification() {
        assert!(Role::Widget.is_abstract());
        assert!(!Role::Button.is_abstract());
        assert!(Role::Navigation.is_landmark());
        assert!(Role::Status.is_live_region());
        assert!(Role::Link.supports_name_from_content());
        assert!(!Role::Img.supports_name_from_content());
        assert!(Role::Generic.pattern().name_prohibited);
    }

    #[test]
    fn test_variants() {
        let sep = design_pattern(Role::Separator, PatternVariant::FocusableSeparator);
        assert!(sep.is_range());
        assert!(sep.is_required(AriaProperty::ValueNow));
        assert!(!Role::Separator.pattern().is_widget());

        let row = design_pattern(Role::Row, PatternVariant::TreegridRow);
        assert!(row.is_required(AriaProperty::Expanded));

        // no variant entry -> standard pattern
        let button = design_pattern(Role::Button, PatternVariant::GridRow);
        assert_eq!(button.variant, PatternVariant::Standard);
    }

    #[test]
    fn test_property_support() {
        let checkbox = Role::Checkbox.pattern();
        assert!(checkbox.is_required(AriaProperty::Checked));
        assert!(checkbox.allows(AriaProperty::Label));
        assert!(!checkbox.allows(AriaProperty::ValueNow));
        assert!(!checkbox.is_deprecated(AriaProperty::Invalid));
        assert!(Role::Paragraph.pattern().is_deprecated(AriaProperty::Invalid));
        assert!(checkbox.is_deprecated(AriaProperty::Grabbed));
    }
}
