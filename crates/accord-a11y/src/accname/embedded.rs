//! Current values of controls embedded in a name

use accord_aria::Role;

use super::{NameEngine, normalize};
use crate::tree::ElementId;

impl NameEngine<'_> {
    /// Value an embedded control contributes instead of its subtree
    pub(super) fn embedded_value(&self, id: ElementId) -> Option<String> {
        let node = self.tree.element(id);
        if let Some(kind) = node.input_type() {
            return match kind.as_str() {
                "button" | "email" | "number" | "password" | "range" | "tel" | "text" | "url" => {
                    Some(node.attr("value").unwrap_or_default().to_string())
                }
                _ => None,
            };
        }
        match node.tag.as_str() {
            "textarea" => return Some(self.tree.text_content(id)),
            "select" => return Some(self.selected_options(id)),
            _ => {}
        }
        match self.role(id).role {
            Role::Slider | Role::SpinButton => node
                .attr("aria-valuetext")
                .filter(|v| !v.trim().is_empty())
                .or_else(|| node.attr("aria-valuenow"))
                .map(str::to_string),
            Role::Listbox => Some(
                self.tree
                    .descendants(id)
                    .filter(|&d| {
                        let option = self.tree.element(d);
                        self.role(d).role == Role::Option
                            && option.attrs.get_lower("aria-selected").as_deref() == Some("true")
                    })
                    .map(|d| self.tree.text_content(d))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        }
    }

    /// Values of the selected options; a single-valued select selects its
    /// first option when nothing is selected
    fn selected_options(&self, select: ElementId) -> String {
        let node = self.tree.element(select);
        let options: Vec<ElementId> = self
            .tree
            .descendants(select)
            .filter(|&d| self.tree.element(d).tag == "option")
            .collect();
        let selected: Vec<String> = options
            .iter()
            .filter(|&&o| self.tree.element(o).has_attr("selected"))
            .map(|&o| self.option_value(o))
            .filter(|v| !v.is_empty())
            .collect();
        if !selected.is_empty() {
            return selected.join(" ");
        }
        let size = node
            .attr("size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0);
        if node.has_attr("multiple") || size > 1 {
            return String::new();
        }
        options
            .first()
            .map(|&o| self.option_value(o))
            .unwrap_or_default()
    }

    /// `value` attribute, or the option's text when it has none
    fn option_value(&self, option: ElementId) -> String {
        match self.tree.element(option).attr("value") {
            Some(value) => normalize(value),
            None => normalize(&self.tree.text_content(option)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::accname::NameEngine;
    use crate::role::resolve_roles;
    use crate::tree::{DocumentId, Tree};
    use accord_aria::AriaVersion;
    use accord_dom::StyledElement;

    fn name_of(root: StyledElement, id: &str) -> String {
        let tree = Tree::build(&root);
        let roles = resolve_roles(&tree, AriaVersion::Aria12);
        let engine = NameEngine::new(&tree, &roles, AriaVersion::Aria12);
        let target = tree.element_by_id(DocumentId::TOP, id).expect("fixture id");
        engine.name(target).text
    }

    #[test]
    fn test_embedded_text_input_and_select() {
        let root = StyledElement::new("div")
            .with_child(
                StyledElement::new("label")
                    .with_attr("for", "cb")
                    .with_text("Remind me every")
                    .with_child(StyledElement::new("input").with_attr("value", "3"))
                    .with_child(
                        StyledElement::new("select")
                            .with_child(StyledElement::new("option").with_text("hours"))
                            .with_child(StyledElement::new("option").with_attr("selected", "").with_text("days")),
                    ),
            )
            .with_child(StyledElement::new("input").with_attr("type", "checkbox").with_attr("id", "cb"));
        assert_eq!(name_of(root, "cb"), "Remind me every 3 days");
    }

    #[test]
    fn test_embedded_first_option_and_range() {
        let root = StyledElement::new("div")
            .with_child(
                StyledElement::new("button")
                    .with_attr("id", "b")
                    .with_text("Volume")
                    .with_child(
                        StyledElement::new("div")
                            .with_attr("role", "slider")
                            .with_attr("aria-valuenow", "7")
                            .with_attr("aria-valuetext", "loud"),
                    )
                    .with_child(
                        StyledElement::new("select")
                            .with_child(StyledElement::new("option").with_text("left"))
                            .with_child(StyledElement::new("option").with_text("right")),
                    ),
            );
        assert_eq!(name_of(root, "b"), "Volume loud left");
    }

    #[test]
    fn test_option_value_and_search_input() {
        let root = StyledElement::new("div").with_child(
            StyledElement::new("button")
                .with_attr("id", "b")
                .with_text("Sort")
                .with_child(StyledElement::new("input").with_attr("type", "search").with_attr("value", "query"))
                .with_child(
                    StyledElement::new("select")
                        .with_child(StyledElement::new("option").with_attr("value", "asc").with_text("Ascending"))
                        .with_child(
                            StyledElement::new("option")
                                .with_attr("value", "desc")
                                .with_attr("selected", "")
                                .with_text("Descending"),
                        ),
                ),
        );
        assert_eq!(name_of(root, "b"), "Sort desc");
    }
}
