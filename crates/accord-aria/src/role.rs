//! ARIA roles
//!
//! The closed set of WAI-ARIA 1.2/1.3 roles (plus the graphics module
//! roles used by SVG), including the abstract superclass roles.

use serde::Serialize;

use crate::AriaVersion;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum Role {
    // === Abstract Roles ===
    Command,
    Composite,
    Input,
    Landmark,
    Range,
    Roletype,
    Section,
    Sectionhead,
    Select,
    Structure,
    Widget,
    Window,

    // === Landmark Roles ===
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // === Widget Roles ===
    Button,
    Checkbox,
    Combobox,
    Grid,
    GridCell,
    Link,
    Listbox,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    ProgressBar,
    Radio,
    RadioGroup,
    ScrollBar,
    SearchBox,
    Slider,
    SpinButton,
    Switch,
    Tab,
    TabList,
    TabPanel,
    TextBox,
    Tree,
    TreeGrid,
    TreeItem,

    // === Document Structure Roles ===
    Application,
    Article,
    Blockquote,
    Caption,
    Cell,
    Code,
    ColumnHeader,
    Definition,
    Deletion,
    Directory,
    Document,
    Emphasis,
    Feed,
    Figure,
    Generic,
    Group,
    Heading,
    Img,
    Insertion,
    List,
    ListItem,
    Math,
    Meter,
    None,
    Note,
    Paragraph,
    Presentation,
    Row,
    RowGroup,
    RowHeader,
    Separator,
    Strong,
    Subscript,
    Superscript,
    Table,
    Term,
    Time,
    Toolbar,
    Tooltip,

    // === Live Region Roles ===
    Alert,
    Log,
    Marquee,
    Status,
    Timer,

    // === Window Roles ===
    AlertDialog,
    Dialog,

    // === ARIA 1.3 ===
    Comment,
    Mark,
    Suggestion,

    // === Graphics ===
    GraphicsDocument,
    GraphicsObject,
    GraphicsSymbol,
}

impl Role {
    /// Every role, abstract ones included
    pub const ALL: [Role; 100] = [
        Self::Command, Self::Composite, Self::Input, Self::Landmark, Self::Range,
        Self::Roletype, Self::Section, Self::Sectionhead, Self::Select, Self::Structure,
        Self::Widget, Self::Window,
        Self::Banner, Self::Complementary, Self::ContentInfo, Self::Form, Self::Main,
        Self::Navigation, Self::Region, Self::Search,
        Self::Button, Self::Checkbox, Self::Combobox, Self::Grid, Self::GridCell, Self::Link,
        Self::Listbox, Self::Menu, Self::MenuBar, Self::MenuItem, Self::MenuItemCheckbox,
        Self::MenuItemRadio, Self::Option, Self::ProgressBar, Self::Radio, Self::RadioGroup,
        Self::ScrollBar, Self::SearchBox, Self::Slider, Self::SpinButton, Self::Switch,
        Self::Tab, Self::TabList, Self::TabPanel, Self::TextBox, Self::Tree, Self::TreeGrid,
        Self::TreeItem,
        Self::Application, Self::Article, Self::Blockquote, Self::Caption, Self::Cell,
        Self::Code, Self::ColumnHeader, Self::Definition, Self::Deletion, Self::Directory,
        Self::Document, Self::Emphasis, Self::Feed, Self::Figure, Self::Generic, Self::Group,
        Self::Heading, Self::Img, Self::Insertion, Self::List, Self::ListItem, Self::Math,
        Self::Meter, Self::None, Self::Note, Self::Paragraph, Self::Presentation, Self::Row,
        Self::RowGroup, Self::RowHeader, Self::Separator, Self::Strong, Self::Subscript,
        Self::Superscript, Self::Table, Self::Term, Self::Time, Self::Toolbar, Self::Tooltip,
        Self::Alert, Self::Log, Self::Marquee, Self::Status, Self::Timer,
        Self::AlertDialog, Self::Dialog,
        Self::Comment, Self::Mark, Self::Suggestion,
        Self::GraphicsDocument, Self::GraphicsObject, Self::GraphicsSymbol,
    ];

    /// Parse a single role token (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|role| role.name() == token)
    }

    /// Parse a role token known to the given ARIA version
    pub fn parse_for(s: &str, version: AriaVersion) -> Option<Self> {
        Self::parse(s).filter(|role| role.since() <= version)
    }

    /// Token as written in a `role` attribute
    pub fn name(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Composite => "composite",
            Self::Input => "input",
            Self::Landmark => "landmark",
            Self::Range => "range",
            Self::Roletype => "roletype",
            Self::Section => "section",
            Self::Sectionhead => "sectionhead",
            Self::Select => "select",
            Self::Structure => "structure",
            Self::Widget => "widget",
            Self::Window => "window",
            Self::Banner => "banner",
            Self::Complementary => "complementary",
            Self::ContentInfo => "contentinfo",
            Self::Form => "form",
            Self::Main => "main",
            Self::Navigation => "navigation",
            Self::Region => "region",
            Self::Search => "search",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Combobox => "combobox",
            Self::Grid => "grid",
            Self::GridCell => "gridcell",
            Self::Link => "link",
            Self::Listbox => "listbox",
            Self::Menu => "menu",
            Self::MenuBar => "menubar",
            Self::MenuItem => "menuitem",
            Self::MenuItemCheckbox => "menuitemcheckbox",
            Self::MenuItemRadio => "menuitemradio",
            Self::Option => "option",
            Self::ProgressBar => "progressbar",
            Self::Radio => "radio",
            Self::RadioGroup => "radiogroup",
            Self::ScrollBar => "scrollbar",
            Self::SearchBox => "searchbox",
            Self::Slider => "slider",
            Self::SpinButton => "spinbutton",
            Self::Switch => "switch",
            Self::Tab => "tab",
            Self::TabList => "tablist",
            Self::TabPanel => "tabpanel",
            Self::TextBox => "textbox",
            Self::Tree => "tree",
            Self::TreeGrid => "treegrid",
            Self::TreeItem => "treeitem",
            Self::Application => "application",
            Self::Article => "article",
            Self::Blockquote => "blockquote",
            Self::Caption => "caption",
            Self::Cell => "cell",
            Self::Code => "code",
            Self::ColumnHeader => "columnheader",
            Self::Definition => "definition",
            Self::Deletion => "deletion",
            Self::Directory => "directory",
            Self::Document => "document",
            Self::Emphasis => "emphasis",
            Self::Feed => "feed",
            Self::Figure => "figure",
            Self::Generic => "generic",
            Self::Group => "group",
            Self::Heading => "heading",
            Self::Img => "img",
            Self::Insertion => "insertion",
            Self::List => "list",
            Self::ListItem => "listitem",
            Self::Math => "math",
            Self::Meter => "meter",
            Self::None => "none",
            Self::Note => "note",
            Self::Paragraph => "paragraph",
            Self::Presentation => "presentation",
            Self::Row => "row",
            Self::RowGroup => "rowgroup",
            Self::RowHeader => "rowheader",
            Self::Separator => "separator",
            Self::Strong => "strong",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
            Self::Table => "table",
            Self::Term => "term",
            Self::Time => "time",
            Self::Toolbar => "toolbar",
            Self::Tooltip => "tooltip",
            Self::Alert => "alert",
            Self::Log => "log",
            Self::Marquee => "marquee",
            Self::Status => "status",
            Self::Timer => "timer",
            Self::AlertDialog => "alertdialog",
            Self::Dialog => "dialog",
            Self::Comment => "comment",
            Self::Mark => "mark",
            Self::Suggestion => "suggestion",
            Self::GraphicsDocument => "graphics-document",
            Self::GraphicsObject => "graphics-object",
            Self::GraphicsSymbol => "graphics-symbol",
        }
    }

    /// First ARIA version defining the role
    pub fn since(self) -> AriaVersion {
        match self {
            Self::Comment | Self::Mark | Self::Suggestion => AriaVersion::Aria13,
            _ => AriaVersion::Aria12,
        }
    }

    /// `none` and its synonym `presentation`
    pub fn is_presentational(self) -> bool {
        matches!(self, Self::None | Self::Presentation)
    }

    /// Roles that make up data tables and grids
    pub fn is_table_family(self) -> bool {
        matches!(self, Self::Table | Self::Grid | Self::TreeGrid)
    }

    /// Cell-like roles placed in a table grid
    pub fn is_cell_like(self) -> bool {
        matches!(self, Self::Cell | Self::GridCell | Self::ColumnHeader | Self::RowHeader)
    }

    /// List-like roles grouped by the list collector
    pub fn is_list_like(self) -> bool {
        matches!(
            self,
            Self::List
                | Self::ListItem
                | Self::Menu
                | Self::MenuBar
                | Self::MenuItem
                | Self::MenuItemCheckbox
                | Self::MenuItemRadio
        )
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> Self {
        role.name()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(Role::parse("button"), Some(Role::Button));
        assert_eq!(Role::parse(" NAVIGATION "), Some(Role::Navigation));
        assert_eq!(Role::parse("graphics-document"), Some(Role::GraphicsDocument));
        assert_eq!(Role::parse("invalid"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.name()), Some(role));
        }
    }

    #[test]
    fn test_version_gating() {
        assert_eq!(Role::parse_for("mark", AriaVersion::Aria12), None);
        assert_eq!(Role::parse_for("mark", AriaVersion::Aria13), Some(Role::Mark));
    }
}
