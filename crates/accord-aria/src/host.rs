//! Host language semantics
//!
//! Default (implicit) roles of HTML elements, keyed by tag and the few
//! attributes that disambiguate them.

use accord_dom::Attributes;

use crate::Role;

/// Ancestor facts needed to pick a default role
#[derive(Debug, Clone, Copy, Default)]
pub struct HostContext {
    /// Inside `article`, `aside`, `main`, `nav` or `section`
    pub in_sectioning_content: bool,
    /// Inside an element with role `grid` or `treegrid`
    pub in_grid: bool,
    /// Inside a `table` element whose role is `table`
    pub in_table: bool,
}

/// Implicit role of an element; elements with no corresponding role map to
/// `generic`
pub fn default_role(tag: &str, attrs: &Attributes, ctx: &HostContext) -> Role {
    let has = |name: &str| attrs.has(name);
    match tag {
        "a" | "area" => {
            if has("href") {
                Role::Link
            } else {
                Role::Generic
            }
        }
        "address" | "details" | "fieldset" | "hgroup" | "optgroup" => Role::Group,
        "article" => Role::Article,
        "aside" => Role::Complementary,
        "blockquote" => Role::Blockquote,
        "button" => Role::Button,
        "caption" | "figcaption" => Role::Caption,
        "code" => Role::Code,
        "datalist" => Role::Listbox,
        "dd" => Role::Definition,
        "del" | "s" => Role::Deletion,
        "dfn" | "dt" => Role::Term,
        "dialog" => Role::Dialog,
        "em" => Role::Emphasis,
        "figure" => Role::Figure,
        "footer" => {
            if ctx.in_sectioning_content {
                Role::Generic
            } else {
                Role::ContentInfo
            }
        }
        "form" => Role::Form,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Role::Heading,
        "header" => {
            if ctx.in_sectioning_content {
                Role::Generic
            } else {
                Role::Banner
            }
        }
        "hr" => Role::Separator,
        "html" => Role::Document,
        "img" => match attrs.get("alt") {
            Some(alt) if alt.is_empty() && !has("aria-label") && !has("aria-labelledby") && !has("title") => {
                Role::Presentation
            }
            _ => Role::Img,
        },
        "input" => input_role(attrs),
        "ins" => Role::Insertion,
        "li" => Role::ListItem,
        "main" => Role::Main,
        "math" => Role::Math,
        "menu" | "ol" | "ul" => Role::List,
        "meter" => Role::Meter,
        "nav" => Role::Navigation,
        "option" => Role::Option,
        "output" => Role::Status,
        "p" => Role::Paragraph,
        "progress" => Role::ProgressBar,
        "search" => Role::Search,
        "section" => {
            if has("aria-label") || has("aria-labelledby") || has("title") {
                Role::Region
            } else {
                Role::Generic
            }
        }
        "select" => {
            let size = attrs
                .get("size")
                .and_then(|s| s.trim().parse::<u32>().ok())
                .unwrap_or(0);
            if has("multiple") || size > 1 {
                Role::Listbox
            } else {
                Role::Combobox
            }
        }
        "strong" => Role::Strong,
        "sub" => Role::Subscript,
        "sup" => Role::Superscript,
        "svg" => Role::GraphicsDocument,
        "table" => Role::Table,
        "tbody" | "tfoot" | "thead" => Role::RowGroup,
        "td" => {
            if ctx.in_grid {
                Role::GridCell
            } else if ctx.in_table {
                Role::Cell
            } else {
                Role::Generic
            }
        }
        "textarea" => Role::TextBox,
        "th" => match attrs.get_lower("scope").as_deref() {
            Some("row") | Some("rowgroup") => Role::RowHeader,
            _ => Role::ColumnHeader,
        },
        "time" => Role::Time,
        "tr" => Role::Row,
        _ => Role::Generic,
    }
}

fn input_role(attrs: &Attributes) -> Role {
    let kind = attrs.get_lower("type").unwrap_or_else(|| "text".to_string());
    let has_list = attrs.has("list");
    match kind.as_str() {
        "button" | "image" | "reset" | "submit" => Role::Button,
        "checkbox" => Role::Checkbox,
        "number" => Role::SpinButton,
        "radio" => Role::Radio,
        "range" => Role::Slider,
        "search" if has_list => Role::Combobox,
        "search" => Role::SearchBox,
        "email" | "tel" | "text" | "url" if has_list => Role::Combobox,
        "email" | "tel" | "text" | "url" | "password" => Role::TextBox,
        "color" | "date" | "datetime-local" | "file" | "hidden" | "month" | "time" | "week" => Role::Generic,
        // unknown types behave as text
        _ if has_list => Role::Combobox,
        _ => Role::TextBox,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_dom::StyledElement;

    fn role_of(el: StyledElement) -> Role {
        default_role(&el.tag, &el.attrs, &HostContext::default())
    }

    #[test]
    fn test_anchor_needs_href() {
        assert_eq!(role_of(StyledElement::new("a")), Role::Generic);
        assert_eq!(role_of(StyledElement::new("a").with_attr("href", "#x")), Role::Link);
    }

    #[test]
    fn test_input_types() {
        let input = |t: &str| StyledElement::new("input").with_attr("type", t);
        assert_eq!(role_of(StyledElement::new("input")), Role::TextBox);
        assert_eq!(role_of(input("checkbox")), Role::Checkbox);
        assert_eq!(role_of(input("SUBMIT")), Role::Button);
        assert_eq!(role_of(input("range")), Role::Slider);
        assert_eq!(role_of(input("email").with_attr("list", "suggestions")), Role::Combobox);
        assert_eq!(role_of(input("date")), Role::Generic);
    }

    #[test]
    fn test_attribute_dependent_roles() {
        assert_eq!(role_of(StyledElement::new("img").with_attr("alt", "")), Role::Presentation);
        assert_eq!(role_of(StyledElement::new("img").with_attr("alt", "Logo")), Role::Img);
        assert_eq!(role_of(StyledElement::new("section")), Role::Generic);
        assert_eq!(
            role_of(StyledElement::new("section").with_attr("aria-label", "News")),
            Role::Region
        );
        assert_eq!(role_of(StyledElement::new("select").with_attr("size", "4")), Role::Listbox);
        assert_eq!(role_of(StyledElement::new("select")), Role::Combobox);
    }

    #[test]
    fn test_context_dependent_roles() {
        let footer = StyledElement::new("footer");
        assert_eq!(default_role(&footer.tag, &footer.attrs, &HostContext::default()), Role::ContentInfo);
        let scoped = HostContext {
            in_sectioning_content: true,
            ..HostContext::default()
        };
        assert_eq!(default_role(&footer.tag, &footer.attrs, &scoped), Role::Generic);

        let td = StyledElement::new("td");
        let grid = HostContext {
            in_grid: true,
            in_table: true,
            ..HostContext::default()
        };
        assert_eq!(default_role(&td.tag, &td.attrs, &grid), Role::GridCell);
    }
}
