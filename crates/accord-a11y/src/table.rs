//! Table structure
//!
//! Rows and cells are placed into a 1-based grid as the table subtree is
//! traversed. Each row keeps the cells covering it keyed by start column,
//! so a wide or tall span costs one entry per row it actually reaches.
//! Row spans stop at the end of their row group. Header association runs
//! as a separate pass once names are known.

use std::collections::BTreeMap;

use accord_aria::Role;
use serde::Serialize;

use crate::role::ResolvedRole;
use crate::tree::{ElementId, Tree};

/// Index of a table in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TableId(pub usize);

/// Back-reference from an element to its table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRef {
    pub table: TableId,
    pub cell: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableType {
    Layout,
    Data,
    /// Data table with spanned cells
    Complex,
    AriaTable,
    AriaGrid,
    AriaTreegrid,
    Unknown,
}

impl TableType {
    pub fn is_data(self) -> bool {
        !matches!(self, Self::Layout | Self::Unknown)
    }
}

/// How a cell's headers were found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderSource {
    /// `headers` attribute
    Explicit,
    /// Column and row scan
    Positional,
}

/// Restriction on what a header cell labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderScope {
    Row,
    Column,
    /// Either direction
    Auto,
}

impl HeaderScope {
    /// Scope from a `scope` attribute, falling back to an explicit header role
    fn parse(value: Option<&str>, role: Option<Role>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("row") => Self::Row,
            Some("col") => Self::Column,
            _ => match role {
                Some(Role::RowHeader) => Self::Row,
                Some(Role::ColumnHeader) => Self::Column,
                _ => Self::Auto,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableCell {
    pub element: ElementId,
    pub start_row: u32,
    pub start_column: u32,
    /// Exclusive
    pub end_row: u32,
    /// Exclusive
    pub end_column: u32,
    pub is_header: bool,
    pub scope: HeaderScope,
    /// Raw `headers` id references, `None` without the attribute
    pub header_refs: Option<Vec<String>>,
    /// Resolved header texts, in precedence order
    pub headers: Vec<String>,
    pub header_cells: Vec<ElementId>,
    pub header_source: Option<HeaderSource>,
}

impl TableCell {
    pub fn row_span(&self) -> u32 {
        self.end_row - self.start_row
    }

    pub fn col_span(&self) -> u32 {
        self.end_column - self.start_column
    }

    pub fn is_spanned(&self) -> bool {
        self.row_span() > 1 || self.col_span() > 1
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub element: ElementId,
    /// 1-based
    pub index: u32,
    /// Cells starting in this row
    pub cells: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableElement {
    pub element: ElementId,
    pub table_type: TableType,
    pub caption: Option<ElementId>,
    pub rows: Vec<TableRow>,
    pub cells: Vec<TableCell>,
    /// `slots[row - 1]` maps start column to the cell covering the row there
    #[serde(skip)]
    slots: Vec<BTreeMap<u32, usize>>,
    /// Cells whose row span reaches past the current row
    #[serde(skip)]
    spanning: Vec<usize>,
}

impl TableElement {
    pub fn new(element: ElementId) -> Self {
        Self {
            element,
            table_type: TableType::Unknown,
            caption: None,
            rows: Vec::new(),
            cells: Vec::new(),
            slots: Vec::new(),
            spanning: Vec::new(),
        }
    }

    /// Start a new row. Cells spanning down from earlier rows of the same
    /// group occupy their columns first.
    pub fn add_row(&mut self, element: ElementId) {
        let index = self.rows.len() as u32 + 1;
        let cells = &self.cells;
        self.spanning.retain(|&c| cells[c].end_row > index);
        let slots = self.spanning.iter().map(|&c| (cells[c].start_column, c)).collect();
        self.slots.push(slots);
        self.rows.push(TableRow {
            element,
            index,
            cells: Vec::new(),
        });
    }

    /// Close the current row group. Row spans still open end at its last
    /// row.
    pub fn end_row_group(&mut self) {
        let end = self.rows.len() as u32 + 1;
        for index in self.spanning.drain(..) {
            let cell = &mut self.cells[index];
            cell.end_row = cell.end_row.min(end);
        }
    }

    /// Place a cell at the next free column of the current row. Returns
    /// the cell index, or `None` when no row has been started.
    pub fn add_cell(
        &mut self,
        element: ElementId,
        is_header: bool,
        scope: HeaderScope,
        row_span: u32,
        col_span: u32,
        header_refs: Option<Vec<String>>,
    ) -> Option<usize> {
        let row = self.rows.last()?.index;
        let row_span = row_span.max(1);
        let col_span = col_span.max(1);
        let column = self.next_free_column(row);

        let index = self.cells.len();
        self.cells.push(TableCell {
            element,
            start_row: row,
            start_column: column,
            end_row: row.saturating_add(row_span),
            end_column: column.saturating_add(col_span),
            is_header,
            scope,
            header_refs,
            headers: Vec::new(),
            header_cells: Vec::new(),
            header_source: None,
        });
        self.slots[row as usize - 1].insert(column, index);
        if row_span > 1 {
            self.spanning.push(index);
        }
        if let Some(current) = self.rows.last_mut() {
            current.cells.push(index);
        }
        Some(index)
    }

    fn next_free_column(&self, row: u32) -> u32 {
        let mut column = 1;
        for (&start, &index) in &self.slots[row as usize - 1] {
            if start > column {
                break;
            }
            column = column.max(self.cells[index].end_column);
        }
        column
    }

    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Bounding column count
    pub fn column_count(&self) -> u32 {
        self.cells.iter().map(|c| c.end_column - 1).max().unwrap_or(0)
    }

    /// Cell covering a 1-based slot
    pub fn cell_at(&self, row: u32, column: u32) -> Option<&TableCell> {
        self.cells.get(self.index_at(row, column)?)
    }

    fn index_at(&self, row: u32, column: u32) -> Option<usize> {
        self.slots
            .get(row.checked_sub(1)? as usize)?
            .range(..=column)
            .rev()
            .map(|(_, &index)| index)
            .find(|&index| column < self.cells[index].end_column)
    }

    pub fn has_header_cells(&self) -> bool {
        self.cells.iter().any(|c| c.is_header)
    }

    pub fn has_spanned_cells(&self) -> bool {
        self.cells.iter().any(TableCell::is_spanned)
    }

    /// Classify from the explicit role, header cells, naming and geometry
    pub fn classify(&mut self, explicit: Option<Role>, has_name: bool) -> TableType {
        let rows = self.row_count();
        let columns = self.column_count();
        self.table_type = match explicit {
            Some(role) if role.is_presentational() => TableType::Layout,
            Some(Role::Table) => TableType::AriaTable,
            Some(Role::Grid) => TableType::AriaGrid,
            Some(Role::TreeGrid) => TableType::AriaTreegrid,
            _ if self.has_header_cells() || (has_name && rows > 1 && columns > 1) => {
                if self.has_spanned_cells() {
                    TableType::Complex
                } else {
                    TableType::Data
                }
            }
            _ if rows <= 1 || columns <= 1 => TableType::Layout,
            _ => TableType::Unknown,
        };
        tracing::debug!(
            "table {} classified {:?} ({}x{})",
            self.element.ordinal(),
            self.table_type,
            rows,
            columns
        );
        self.table_type
    }

    /// Resolve the headers of every non-header cell
    ///
    /// A cell carrying a `headers` attribute takes only the cells it
    /// references, even when none resolve. Otherwise the column above the
    /// start column is scanned top-down, then the row left of the start
    /// column left to right. `resolve` maps a `headers` id to an element;
    /// `name_of` yields the accessible name of a header element. Empty
    /// names contribute nothing.
    pub fn compute_headers(
        &mut self,
        resolve: impl Fn(&str) -> Option<ElementId>,
        name_of: impl Fn(ElementId) -> String,
    ) {
        for index in 0..self.cells.len() {
            if self.cells[index].is_header {
                continue;
            }
            let (elements, source) = match &self.cells[index].header_refs {
                Some(refs) => {
                    let own = self.cells[index].element;
                    let elements = refs
                        .iter()
                        .filter_map(|id| resolve(id))
                        .filter(|&el| el != own)
                        .collect();
                    (elements, Some(HeaderSource::Explicit))
                }
                None => (self.positional_headers(index), None),
            };

            let mut cells = Vec::new();
            let mut texts = Vec::new();
            for element in elements {
                if cells.contains(&element) {
                    continue;
                }
                let text = name_of(element);
                if text.is_empty() {
                    continue;
                }
                cells.push(element);
                texts.push(text);
            }
            let cell = &mut self.cells[index];
            cell.header_source = source.or((!cells.is_empty()).then_some(HeaderSource::Positional));
            cell.header_cells = cells;
            cell.headers = texts;
        }
    }

    /// Column headers above the start column, top-down, then row headers
    /// left of the start column, left to right
    fn positional_headers(&self, index: usize) -> Vec<ElementId> {
        let cell = &self.cells[index];
        let above = (1..cell.start_row)
            .filter_map(|row| self.index_at(row, cell.start_column))
            .filter(|&c| self.cells[c].scope != HeaderScope::Row);
        let left = (1..cell.start_column)
            .filter_map(|column| self.index_at(cell.start_row, column))
            .filter(|&c| self.cells[c].scope != HeaderScope::Column);

        let mut found: Vec<usize> = Vec::new();
        for candidate in above.chain(left) {
            if self.cells[candidate].is_header && !found.contains(&candidate) {
                found.push(candidate);
            }
        }
        found.into_iter().map(|c| self.cells[c].element).collect()
    }
}

/// Roots of table structures: `table` elements and explicit table-family
/// roles
pub fn is_table_root(tree: &Tree, roles: &[ResolvedRole], id: ElementId) -> bool {
    tree.element(id).tag == "table" || roles[id.index()].explicit.is_some_and(Role::is_table_family)
}

/// Build the grid of one table by traversing its subtree. Nested tables
/// are left to their own pass.
pub fn build_table(tree: &Tree, roles: &[ResolvedRole], id: ElementId) -> TableElement {
    let mut table = TableElement::new(id);
    let by_tag = tree.element(id).tag == "table";
    place(tree, roles, id, by_tag, &mut table);
    table.end_row_group();
    table
}

fn place(tree: &Tree, roles: &[ResolvedRole], parent: ElementId, by_tag: bool, table: &mut TableElement) {
    let document = tree.element(parent).document;
    let mut has_rows = false;
    for child in tree.element(parent).child_elements() {
        let node = tree.element(child);
        if node.document != document || is_table_root(tree, roles, child) {
            continue;
        }
        let resolved = &roles[child.index()];
        let (is_row, is_cell) = if by_tag {
            (node.tag == "tr", matches!(node.tag.as_str(), "td" | "th"))
        } else {
            (resolved.role == Role::Row, resolved.role.is_cell_like())
        };

        if by_tag && node.tag == "caption" && table.caption.is_none() {
            table.caption = Some(child);
        } else if is_row {
            has_rows = true;
            table.add_row(child);
            place(tree, roles, child, by_tag, table);
        } else if is_cell {
            let (scope, span_attrs) = if by_tag {
                (
                    HeaderScope::parse(node.attr("scope"), resolved.explicit),
                    ("rowspan", "colspan"),
                )
            } else {
                (HeaderScope::parse(None, Some(resolved.role)), ("aria-rowspan", "aria-colspan"))
            };
            let is_header = (by_tag && node.tag == "th") || scope != HeaderScope::Auto;
            let span = |name: &str| node.attr(name).and_then(|v| v.trim().parse::<u32>().ok()).unwrap_or(1);
            let refs = node
                .attr("headers")
                .map(|v| v.split_ascii_whitespace().map(str::to_string).collect());
            table.add_cell(
                child,
                is_header,
                scope,
                span(span_attrs.0).min(65534),
                span(span_attrs.1).min(1000),
                refs,
            );
        } else {
            place(tree, roles, child, by_tag, table);
        }
    }
    if has_rows {
        table.end_row_group();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::resolve_roles;
    use crate::tree::DocumentId;
    use accord_aria::AriaVersion;
    use accord_dom::StyledElement;

    fn row(cells: Vec<StyledElement>) -> StyledElement {
        cells.into_iter().fold(StyledElement::new("tr"), StyledElement::with_child)
    }

    fn th(text: &str) -> StyledElement {
        StyledElement::new("th").with_text(text)
    }

    fn td(text: &str) -> StyledElement {
        StyledElement::new("td").with_text(text)
    }

    fn build(root: StyledElement) -> (Tree, TableElement) {
        let tree = Tree::build(&root);
        let roles = resolve_roles(&tree, AriaVersion::Aria12);
        let mut table = build_table(&tree, &roles, ElementId(0));
        let explicit = roles[0].explicit;
        table.classify(explicit, false);
        table.compute_headers(
            |id| tree.element_by_id(DocumentId::TOP, id),
            |el| tree.text_content(el),
        );
        (tree, table)
    }

    #[test]
    fn test_column_scan() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(row(vec![th("Q1"), th("Q2")]))
                .with_child(row(vec![td("10"), td("20")])),
        );
        assert_eq!(table.table_type, TableType::Data);
        let cell = table.cell_at(2, 2).expect("cell");
        assert_eq!(cell.headers, vec!["Q2".to_string()]);
        assert_eq!(cell.header_source, Some(HeaderSource::Positional));
    }

    #[test]
    fn test_explicit_headers_win() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(row(vec![th("Q1"), th("Q2")]))
                .with_child(row(vec![td("10"), td("20").with_attr("headers", "totals")]))
                .with_child(row(vec![th("Totals").with_attr("id", "totals"), td("30")])),
        );
        let cell = table.cell_at(2, 2).expect("cell");
        assert_eq!(cell.headers, vec!["Totals".to_string()]);
        assert_eq!(cell.header_source, Some(HeaderSource::Explicit));
    }

    #[test]
    fn test_spans_fill_grid() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(row(vec![th("Name").with_attr("rowspan", "2"), th("Score").with_attr("colspan", "2")]))
                .with_child(row(vec![th("A"), th("B")]))
                .with_child(row(vec![td("x"), td("1"), td("2")])),
        );
        assert_eq!((table.row_count(), table.column_count()), (3, 3));
        assert_eq!(table.table_type, TableType::Complex);
        let a = table.cell_at(2, 2).expect("A");
        assert_eq!((a.start_column, a.end_column), (2, 3));
        let spanned = table.cell_at(2, 1).expect("rowspan");
        assert_eq!((spanned.start_row, spanned.end_row), (1, 3));
        let last = table.cell_at(3, 3).expect("cell");
        assert_eq!(last.headers, vec!["Score".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_scope_restricts_scan() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(row(vec![td(""), th("Mon").with_attr("scope", "row")]))
                .with_child(row(vec![th("Alice").with_attr("scope", "row"), td("9")])),
        );
        let cell = table.cell_at(2, 2).expect("cell");
        assert_eq!(cell.headers, vec!["Alice".to_string()]);
    }

    #[test]
    fn test_layout_and_aria_classification() {
        let (_, table) = build(StyledElement::new("table").with_child(row(vec![td("a"), td("b")])));
        assert_eq!(table.table_type, TableType::Layout);

        let (_, table) = build(
            StyledElement::new("table")
                .with_attr("role", "presentation")
                .with_child(row(vec![th("a")])),
        );
        assert_eq!(table.table_type, TableType::Layout);

        let (_, table) = build(
            StyledElement::new("div")
                .with_attr("role", "grid")
                .with_child(
                    StyledElement::new("div")
                        .with_attr("role", "row")
                        .with_child(StyledElement::new("div").with_attr("role", "columnheader").with_text("Col"))
                        .with_child(StyledElement::new("div").with_attr("role", "gridcell").with_text("v")),
                )
                .with_child(
                    StyledElement::new("div")
                        .with_attr("role", "row")
                        .with_child(StyledElement::new("div").with_attr("role", "gridcell").with_text("w")),
                ),
        );
        assert_eq!(table.table_type, TableType::AriaGrid);
        assert_eq!(table.cell_at(2, 1).expect("cell").headers, vec!["Col".to_string()]);
    }

    #[test]
    fn test_cell_without_row_is_ignored() {
        let mut table = TableElement::new(ElementId(0));
        assert_eq!(table.add_cell(ElementId(1), false, HeaderScope::Auto, 1, 1, None), None);
    }

    #[test]
    fn test_unresolved_headers_attribute_suppresses_scan() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(row(vec![th("Q1"), th("Q2")]))
                .with_child(row(vec![td("10"), td("20").with_attr("headers", "missing")])),
        );
        let cell = table.cell_at(2, 2).expect("cell");
        assert!(cell.headers.is_empty());
        assert_eq!(cell.header_source, Some(HeaderSource::Explicit));
        assert_eq!(table.cell_at(2, 1).expect("cell").headers, vec!["Q1".to_string()]);
    }

    #[test]
    fn test_positional_scan_order() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(row(vec![td(""), td(""), th("Q1")]))
                .with_child(row(vec![td(""), td(""), th("Q2")]))
                .with_child(row(vec![th("North"), th("East"), td("5")])),
        );
        let cell = table.cell_at(3, 3).expect("cell");
        assert_eq!(cell.headers, vec!["Q1", "Q2", "North", "East"]);
        assert_eq!(cell.header_source, Some(HeaderSource::Positional));
    }

    #[test]
    fn test_scoped_and_role_cells_are_headers() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(row(vec![
                    td(""),
                    td("Mon").with_attr("scope", "col"),
                    td("Tue").with_attr("role", "columnheader"),
                ]))
                .with_child(row(vec![td("Alice").with_attr("scope", "row"), td("9"), td("7")])),
        );
        assert_eq!(table.table_type, TableType::Data);
        let mon = table.cell_at(1, 2).expect("Mon");
        assert!(mon.is_header);
        assert_eq!(mon.scope, HeaderScope::Column);
        assert_eq!(table.cell_at(1, 3).expect("Tue").scope, HeaderScope::Column);
        assert_eq!(table.cell_at(2, 2).expect("cell").headers, vec!["Mon", "Alice"]);
        assert_eq!(table.cell_at(2, 3).expect("cell").headers, vec!["Tue", "Alice"]);
    }

    #[test]
    fn test_huge_spans_are_bounded() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(row(vec![
                    td("a").with_attr("rowspan", "65534").with_attr("colspan", "1000"),
                    th("H"),
                ]))
                .with_child(row(vec![td("b")])),
        );
        assert_eq!((table.row_count(), table.column_count()), (2, 1001));
        let a = table.cell_at(2, 500).expect("a");
        assert_eq!((a.start_row, a.end_row, a.end_column), (1, 3, 1001));
        let b = table.cell_at(2, 1001).expect("b");
        assert_eq!(b.start_column, 1001);
        assert_eq!(b.headers, vec!["H".to_string()]);
        assert!(table.cell_at(3, 1).is_none());
    }

    #[test]
    fn test_row_span_stops_at_row_group() {
        let (_, table) = build(
            StyledElement::new("table")
                .with_child(StyledElement::new("thead").with_child(row(vec![th("H").with_attr("rowspan", "5")])))
                .with_child(StyledElement::new("tbody").with_child(row(vec![td("x")]))),
        );
        let header = table.cell_at(1, 1).expect("H");
        assert_eq!(header.end_row, 2);
        let x = table.cell_at(2, 1).expect("x");
        assert_eq!(x.start_column, 1);
        assert_eq!(x.headers, vec!["H".to_string()]);
    }
}
