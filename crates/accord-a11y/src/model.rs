//! Node model
//!
//! Per-element facts, index-aligned with the tree, plus tables and
//! collections. Everything is computed once by [`crate::Engine`] and only
//! read afterwards.

use accord_aria::Role;
use serde::Serialize;

use crate::A11yError;
use crate::accname::{AccessibleName, NameEngine};
use crate::aria_info::AriaInfo;
use crate::collect::Collections;
use crate::config::EngineConfig;
use crate::contrast::ColorContrast;
use crate::role::ResolvedRole;
use crate::snapshot::ModelSnapshot;
use crate::table::{CellRef, TableCell, TableElement, TableId};
use crate::tree::{DocumentId, ElementId, ElementNode, Tree};
use crate::visibility::Visibility;

/// State carried by host-language markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NativeState {
    /// Checkbox and radio inputs only
    pub checked: Option<bool>,
    pub selected: bool,
    pub disabled: bool,
    pub required: bool,
    pub readonly: bool,
    /// Required control with no value
    pub invalid: bool,
}

/// Everything computed for one element
#[derive(Debug, Clone, Serialize)]
pub struct ElementFacts {
    pub id: ElementId,
    pub role: ResolvedRole,
    pub aria: AriaInfo,
    pub name: AccessibleName,
    pub description: AccessibleName,
    pub error_message: AccessibleName,
    /// Enclosing fieldset legends, nearest first
    pub grouping_labels: Vec<String>,
    pub visibility: Visibility,
    pub contrast: ColorContrast,
    /// Has text of its own, so contrast applies
    pub has_text: bool,
    pub state: NativeState,
    pub tab_index: Option<i32>,
    pub is_focusable: bool,
    pub is_tab_stop: bool,
    pub is_interactive: bool,
    pub is_landmark: bool,
    pub is_heading: bool,
    pub is_link: bool,
    pub is_in_dialog: bool,
    pub has_content: bool,
    pub role_description: Option<String>,
    pub accesskey: Option<String>,
    /// Set on table roots
    pub table: Option<TableId>,
    pub table_cell: Option<CellRef>,
    /// Element claiming this one through `aria-owns`
    pub owner: Option<ElementId>,
    pub owned: Vec<ElementId>,
    pub shadow_closed: bool,
    pub frame_inaccessible: bool,
}

/// Result of one evaluation
#[derive(Debug, Clone)]
pub struct NodeModel {
    pub(crate) config: EngineConfig,
    pub(crate) tree: Tree,
    pub(crate) roles: Vec<ResolvedRole>,
    pub(crate) facts: Vec<ElementFacts>,
    pub(crate) tables: Vec<TableElement>,
    pub(crate) collections: Collections,
}

impl NodeModel {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Facts in tree order
    pub fn iter(&self) -> impl Iterator<Item = (&ElementNode, &ElementFacts)> {
        self.tree.elements().zip(self.facts.iter())
    }

    pub fn facts(&self, id: ElementId) -> Result<&ElementFacts, A11yError> {
        self.facts.get(id.index()).ok_or(A11yError::UnknownElement(id))
    }

    pub fn element(&self, id: ElementId) -> Result<&ElementNode, A11yError> {
        self.tree.get(id).ok_or(A11yError::UnknownElement(id))
    }

    pub fn role(&self, id: ElementId) -> Result<Role, A11yError> {
        Ok(self.facts(id)?.role.role)
    }

    pub fn name(&self, id: ElementId) -> Result<&AccessibleName, A11yError> {
        Ok(&self.facts(id)?.name)
    }

    pub fn description(&self, id: ElementId) -> Result<&AccessibleName, A11yError> {
        Ok(&self.facts(id)?.description)
    }

    pub fn visibility(&self, id: ElementId) -> Result<Visibility, A11yError> {
        Ok(self.facts(id)?.visibility)
    }

    pub fn contrast(&self, id: ElementId) -> Result<&ColorContrast, A11yError> {
        Ok(&self.facts(id)?.contrast)
    }

    pub fn aria(&self, id: ElementId) -> Result<&AriaInfo, A11yError> {
        Ok(&self.facts(id)?.aria)
    }

    /// `getElementById` in one document
    pub fn element_by_id(&self, document: DocumentId, id: &str) -> Option<ElementId> {
        self.tree.element_by_id(document, id)
    }

    /// Resolve an id reference made by `from`; the target must live in the
    /// same document
    pub fn resolve_reference(&self, from: ElementId, target: ElementId) -> Result<ElementId, A11yError> {
        let from_doc = self.element(from)?.document;
        let target_doc = self.element(target)?.document;
        if from_doc != target_doc {
            return Err(A11yError::CrossDocument { from, target });
        }
        Ok(target)
    }

    pub fn tables(&self) -> &[TableElement] {
        &self.tables
    }

    pub fn table(&self, id: TableId) -> Option<&TableElement> {
        self.tables.get(id.0)
    }

    /// Table cell of an element
    pub fn cell(&self, id: ElementId) -> Result<&TableCell, A11yError> {
        let cell = self.facts(id)?.table_cell.ok_or(A11yError::NotATableCell(id))?;
        self.tables
            .get(cell.table.0)
            .and_then(|t| t.cells.get(cell.cell))
            .ok_or(A11yError::NotATableCell(id))
    }

    /// Resolved header texts of a table cell
    pub fn headers(&self, id: ElementId) -> Result<&[String], A11yError> {
        Ok(&self.cell(id)?.headers)
    }

    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    /// Compute the name again from the built tree; always equal to the
    /// stored name
    pub fn recompute_name(&self, id: ElementId) -> Result<AccessibleName, A11yError> {
        self.element(id)?;
        let engine = NameEngine::new(&self.tree, &self.roles, self.config.aria_version);
        Ok(engine.name(id))
    }

    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot::from_model(self)
    }
}
