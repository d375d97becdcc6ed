//! Serializable summary of a model for the rule layer

use accord_aria::Role;
use serde::Serialize;

use crate::accname::NameSource;
use crate::model::NodeModel;
use crate::table::TableType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    pub ordinal: u32,
    pub tag: String,
    pub document: u32,
    pub role: Role,
    pub name: String,
    pub name_source: NameSource,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub visible_on_screen: bool,
    pub visible_to_at: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invalid_attrs: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unsupported_attrs: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_required: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    pub ordinal: u32,
    pub table_type: TableType,
    pub rows: u32,
    pub columns: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSnapshot {
    pub elements: Vec<ElementSnapshot>,
    pub tables: Vec<TableSnapshot>,
}

impl ModelSnapshot {
    pub fn from_model(model: &NodeModel) -> Self {
        let elements = model
            .iter()
            .map(|(node, facts)| ElementSnapshot {
                ordinal: node.ordinal(),
                tag: node.tag.clone(),
                document: node.document.index() as u32,
                role: facts.role.role,
                name: facts.name.text.clone(),
                name_source: facts.name.source,
                description: facts.description.text.clone(),
                visible_on_screen: facts.visibility.is_visible_on_screen,
                visible_to_at: facts.visibility.is_visible_to_at,
                contrast_ratio: facts.has_text.then_some(facts.contrast.ratio),
                invalid_attrs: facts.aria.invalid_values().map(|a| a.property.name()).collect(),
                unsupported_attrs: facts.aria.unsupported().map(|a| a.property.name()).collect(),
                missing_required: facts.aria.missing_required().map(|r| r.property.name()).collect(),
                headers: model.headers(node.id).map(<[String]>::to_vec).unwrap_or_default(),
            })
            .collect();
        let tables = model
            .tables()
            .iter()
            .map(|t| TableSnapshot {
                ordinal: t.element.ordinal(),
                table_type: t.table_type,
                rows: t.row_count(),
                columns: t.column_count(),
            })
            .collect();
        Self { elements, tables }
    }

    /// Snapshot of the element with the given ordinal
    pub fn element(&self, ordinal: u32) -> Option<&ElementSnapshot> {
        self.elements.iter().find(|e| e.ordinal == ordinal)
    }
}
