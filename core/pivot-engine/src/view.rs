//! FILENAME: core/pivot-engine/src/view.rs
//! Pivot View - Renderable output for the frontend.
//!
//! `PivotTableView` keeps the structure of the table: header rows (title
//! cells + column header cells) and body rows (row header cells + value
//! cells). `PivotGrid` flattens it into a plain 2D grid of typed cells for
//! renderers that only paint rectangles.

use engine::ResultValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

/// Axis levels are few; label cells usually fit inline.
pub type AxisCells = SmallVec<[PivotLabelCell; 4]>;

// ============================================================================
// CELL TYPES AND METADATA
// ============================================================================

/// The type of a cell in the pivot view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PivotCellType {
    /// Corner label naming an index level (top-left area).
    Title,
    /// Column header label.
    ColumnHeader,
    /// Row header label.
    RowHeader,
    /// Value cell.
    Data,
}

/// Background style hints for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundStyle {
    Normal,
    Header,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        BackgroundStyle::Normal
    }
}

/// Display value for a grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PivotCellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl From<&ResultValue> for PivotCellValue {
    fn from(value: &ResultValue) -> Self {
        match &value.raw {
            Value::Null => PivotCellValue::Empty,
            Value::Bool(b) => PivotCellValue::Boolean(*b),
            Value::Number(n) => n
                .as_f64()
                .map(PivotCellValue::Number)
                .unwrap_or_else(|| PivotCellValue::Text(value.formatted.clone())),
            Value::String(s) => PivotCellValue::Text(s.clone()),
            _ => PivotCellValue::Text(value.formatted.clone()),
        }
    }
}

impl PivotCellValue {
    pub fn text(s: impl Into<String>) -> Self {
        PivotCellValue::Text(s.into())
    }
}

// ============================================================================
// STRUCTURED VIEW
// ============================================================================

/// A title, column header or row header cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotLabelCell {
    /// Resolved label. `None` when the source value was missing and no
    /// resolver was applied.
    pub label: Option<String>,
}

impl PivotLabelCell {
    pub fn new(label: Option<String>) -> Self {
        PivotLabelCell { label }
    }

    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// A value cell, passed through from the value matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotValueCell {
    pub value: Option<ResultValue>,
}

impl PivotValueCell {
    pub fn formatted(&self) -> &str {
        self.value.as_ref().map_or("", |v| v.formatted.as_str())
    }
}

/// One header row: a title cell per index level, then a header cell per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotHeaderRow {
    pub title_cells: AxisCells,
    pub header_cells: Vec<PivotLabelCell>,
}

impl PivotHeaderRow {
    pub fn len(&self) -> usize {
        self.title_cells.len() + self.header_cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One body row: a row header cell per index level, then a value per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotBodyRow {
    pub index_cells: AxisCells,
    pub value_cells: Vec<PivotValueCell>,
}

impl PivotBodyRow {
    pub fn len(&self) -> usize {
        self.index_cells.len() + self.value_cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The rendered pivot table: header rows first, then body rows, both in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotTableView {
    pub header_rows: Vec<PivotHeaderRow>,
    pub body_rows: Vec<PivotBodyRow>,

    /// Number of row label columns (left area).
    pub row_label_col_count: usize,

    /// Number of value columns.
    pub value_col_count: usize,
}

impl PivotTableView {
    pub fn column_header_row_count(&self) -> usize {
        self.header_rows.len()
    }

    /// Total columns of the rendered table.
    pub fn col_count(&self) -> usize {
        self.row_label_col_count + self.value_col_count
    }

    /// Total rows of the rendered table.
    pub fn row_count(&self) -> usize {
        self.header_rows.len() + self.body_rows.len()
    }

    /// Flattens the view into a grid of typed cells.
    pub fn to_grid(&self) -> PivotGrid {
        let mut grid = PivotGrid {
            cells: Vec::with_capacity(self.row_count()),
            row_count: 0,
            col_count: self.col_count(),
            row_label_col_count: self.row_label_col_count,
            column_header_row_count: self.column_header_row_count(),
        };

        for row in &self.header_rows {
            let mut cells = Vec::with_capacity(row.len());
            cells.extend(row.title_cells.iter().map(PivotViewCell::title));
            cells.extend(row.header_cells.iter().map(PivotViewCell::column_header));
            grid.cells.push(cells);
        }

        for row in &self.body_rows {
            let mut cells = Vec::with_capacity(row.len());
            cells.extend(row.index_cells.iter().map(PivotViewCell::row_header));
            cells.extend(row.value_cells.iter().map(PivotViewCell::data));
            grid.cells.push(cells);
        }

        grid.row_count = grid.cells.len();
        grid
    }
}

// ============================================================================
// FLAT GRID
// ============================================================================

/// A single cell in the flat grid.
/// Contains both the value and rendering metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotViewCell {
    /// The display value.
    pub value: PivotCellValue,

    /// The type of this cell.
    pub cell_type: PivotCellType,

    /// Pre-formatted display string.
    pub formatted_value: String,

    /// Whether this cell should be visually emphasized.
    pub is_bold: bool,

    /// Background style hint.
    pub background_style: BackgroundStyle,
}

impl PivotViewCell {
    fn label(cell: &PivotLabelCell, cell_type: PivotCellType, is_bold: bool) -> Self {
        let value = match &cell.label {
            Some(label) => PivotCellValue::Text(label.clone()),
            None => PivotCellValue::Empty,
        };
        PivotViewCell {
            value,
            cell_type,
            formatted_value: cell.text().to_string(),
            is_bold,
            background_style: BackgroundStyle::Header,
        }
    }

    /// Creates a title (corner) cell.
    pub fn title(cell: &PivotLabelCell) -> Self {
        Self::label(cell, PivotCellType::Title, true)
    }

    /// Creates a column header cell.
    pub fn column_header(cell: &PivotLabelCell) -> Self {
        Self::label(cell, PivotCellType::ColumnHeader, true)
    }

    /// Creates a row header cell.
    pub fn row_header(cell: &PivotLabelCell) -> Self {
        Self::label(cell, PivotCellType::RowHeader, false)
    }

    /// Creates a data cell.
    pub fn data(cell: &PivotValueCell) -> Self {
        PivotViewCell {
            value: cell.value.as_ref().map_or(PivotCellValue::Empty, PivotCellValue::from),
            cell_type: PivotCellType::Data,
            formatted_value: cell.formatted().to_string(),
            is_bold: false,
            background_style: BackgroundStyle::Normal,
        }
    }
}

/// The flattened pivot table. Indexed as cells[row][col].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotGrid {
    pub cells: Vec<Vec<PivotViewCell>>,

    /// Total number of rows in the grid.
    pub row_count: usize,

    /// Total number of columns in the grid.
    pub col_count: usize,

    /// Number of row label columns (left frozen area).
    pub row_label_col_count: usize,

    /// Number of column header rows (top frozen area).
    pub column_header_row_count: usize,
}

impl PivotGrid {
    /// Gets a cell at the specified position.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&PivotViewCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }
}
