//! FILENAME: core/pivot-engine/src/engine.rs
//! Pivot Engine - Projects a pivot dataset into a renderable view.
//!
//! Algorithm:
//! 1. For each header level (outer to inner) emit one header row: a title
//!    cell per index level, then one header cell per column
//! 2. For each row of the value matrix emit one body row: a row header cell
//!    per index level, then the row's values
//! 3. Labels of metric levels go through the label resolver; everything
//!    else is shown as formatted upstream
//!
//! Order is strictly positional. Sorting and grouping happen upstream.
//! Missing matrix entries produce empty cells instead of panicking.

use engine::ResultValue;

use crate::definition::{PivotData, PivotValueType};
use crate::resolver::LabelResolver;
use crate::view::{
    AxisCells, PivotBodyRow, PivotHeaderRow, PivotLabelCell, PivotTableView, PivotValueCell,
};

// ============================================================================
// PROJECTOR
// ============================================================================

struct PivotProjector<'a> {
    data: &'a PivotData,
    resolver: Option<&'a dyn LabelResolver>,
}

impl<'a> PivotProjector<'a> {
    fn new(data: &'a PivotData, resolver: Option<&'a dyn LabelResolver>) -> Self {
        PivotProjector { data, resolver }
    }

    fn project(&self) -> PivotTableView {
        PivotTableView {
            header_rows: self.header_rows(),
            body_rows: self.body_rows(),
            row_label_col_count: self.data.index_level_count(),
            value_col_count: self.data.column_count(),
        }
    }

    /// Label of a header or index cell.
    /// Metric levels show the resolved label, others the formatted value.
    fn axis_label(&self, value_type: &PivotValueType, value: Option<&ResultValue>) -> Option<String> {
        let formatted = value.map(|v| v.formatted.as_str());
        match self.resolver {
            Some(resolver) if value_type.is_metric() => Some(resolver.resolve(formatted)),
            _ => formatted.map(str::to_string),
        }
    }

    /// Label of a title cell. Titles are field ids; absent titles stay blank.
    fn title_label(&self, title: Option<&str>) -> Option<String> {
        let title = title?;
        Some(match self.resolver {
            Some(resolver) => resolver.resolve(Some(title)),
            None => title.to_string(),
        })
    }

    fn header_rows(&self) -> Vec<PivotHeaderRow> {
        let index_levels = self.data.index_level_count();

        self.data
            .header_value_types
            .iter()
            .enumerate()
            .map(|(level, value_type)| {
                let titles = self.data.title_fields.get(level);
                let title_cells: AxisCells = (0..index_levels)
                    .map(|index_level| {
                        let title = titles
                            .and_then(|row| row.get(index_level))
                            .and_then(|t| t.as_deref());
                        PivotLabelCell::new(self.title_label(title))
                    })
                    .collect();

                let header_cells: Vec<PivotLabelCell> = self
                    .data
                    .header_values
                    .get(level)
                    .map(|values| {
                        values
                            .iter()
                            .map(|value| PivotLabelCell::new(self.axis_label(value_type, value.as_ref())))
                            .collect()
                    })
                    .unwrap_or_default();

                PivotHeaderRow {
                    title_cells,
                    header_cells,
                }
            })
            .collect()
    }

    fn body_rows(&self) -> Vec<PivotBodyRow> {
        self.data
            .data_values
            .iter()
            .enumerate()
            .map(|(row, values)| {
                let index_values = self.data.index_values.get(row);
                let index_cells: AxisCells = self
                    .data
                    .index_value_types
                    .iter()
                    .enumerate()
                    .map(|(level, value_type)| {
                        let value = index_values
                            .and_then(|r| r.get(level))
                            .and_then(Option::as_ref);
                        PivotLabelCell::new(self.axis_label(value_type, value))
                    })
                    .collect();

                let value_cells: Vec<PivotValueCell> = values
                    .iter()
                    .map(|value| PivotValueCell { value: value.clone() })
                    .collect();

                PivotBodyRow {
                    index_cells,
                    value_cells,
                }
            })
            .collect()
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Projects a pivot dataset into header and body rows.
///
/// `resolver` relabels metric levels and title cells; pass `None` to show
/// formatted values and raw title field ids.
pub fn project_pivot(data: &PivotData, resolver: Option<&dyn LabelResolver>) -> PivotTableView {
    PivotProjector::new(data, resolver).project()
}
