//! FILENAME: core/pivot-engine/src/definition.rs
//! Pivot Data - The precomputed pivot dataset.
//!
//! The query engine pivots results before they reach us. This module only
//! DESCRIBES that output:
//! - header axis: one row of formatted values per header level
//! - index axis: one row of formatted values per body row
//! - title fields: the corner labels, addressed by [header level][index level]
//! - data values: the value matrix, addressed by [row][column]

use engine::{FieldType, ResultValue};
use serde::{Deserialize, Serialize};

use crate::error::PivotShapeError;

/// Type descriptor of one axis level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotValueType {
    /// Dimension or metric (`type` on the wire).
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Field the level was pivoted on. Metric levels carry no single field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
}

impl PivotValueType {
    pub fn dimension(field_id: impl Into<String>) -> Self {
        PivotValueType {
            field_type: FieldType::Dimension,
            field_id: Some(field_id.into()),
        }
    }

    pub fn metric() -> Self {
        PivotValueType {
            field_type: FieldType::Metric,
            field_id: None,
        }
    }

    pub fn is_metric(&self) -> bool {
        self.field_type == FieldType::Metric
    }
}

/// A pivoted result, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PivotData {
    /// Header levels, outer to inner.
    pub header_value_types: Vec<PivotValueType>,

    /// header_values[level][column].
    pub header_values: Vec<Vec<Option<ResultValue>>>,

    /// Index levels, outer to inner.
    pub index_value_types: Vec<PivotValueType>,

    /// index_values[row][level].
    pub index_values: Vec<Vec<Option<ResultValue>>>,

    /// title_fields[header level][index level].
    pub title_fields: Vec<Vec<Option<String>>>,

    /// data_values[row][column].
    pub data_values: Vec<Vec<Option<ResultValue>>>,
}

impl PivotData {
    pub fn header_level_count(&self) -> usize {
        self.header_value_types.len()
    }

    pub fn index_level_count(&self) -> usize {
        self.index_value_types.len()
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.data_values.len()
    }

    /// Number of value columns.
    pub fn column_count(&self) -> usize {
        self.header_values
            .first()
            .or_else(|| self.data_values.first())
            .map_or(0, Vec::len)
    }

    /// Checks that all matrices agree on their dimensions.
    ///
    /// Projection never fails on a mismatch; this lets a caller find out
    /// before rendering. Reports the first mismatch found.
    pub fn validate(&self) -> Result<(), PivotShapeError> {
        let header_levels = self.header_level_count();
        let index_levels = self.index_level_count();
        let rows = self.row_count();
        let columns = self.column_count();

        if self.header_values.len() != header_levels {
            return Err(PivotShapeError::HeaderLevels {
                expected: header_levels,
                actual: self.header_values.len(),
            });
        }
        for (level, values) in self.header_values.iter().enumerate() {
            if values.len() != columns {
                return Err(PivotShapeError::HeaderColumns {
                    level,
                    expected: columns,
                    actual: values.len(),
                });
            }
        }

        if self.title_fields.len() != header_levels {
            return Err(PivotShapeError::TitleLevels {
                expected: header_levels,
                actual: self.title_fields.len(),
            });
        }
        for (level, titles) in self.title_fields.iter().enumerate() {
            if titles.len() != index_levels {
                return Err(PivotShapeError::TitleColumns {
                    level,
                    expected: index_levels,
                    actual: titles.len(),
                });
            }
        }

        if self.index_values.len() != rows {
            return Err(PivotShapeError::IndexRows {
                expected: rows,
                actual: self.index_values.len(),
            });
        }
        for (row, values) in self.index_values.iter().enumerate() {
            if values.len() != index_levels {
                return Err(PivotShapeError::IndexColumns {
                    row,
                    expected: index_levels,
                    actual: values.len(),
                });
            }
        }

        for (row, values) in self.data_values.iter().enumerate() {
            if values.len() != columns {
                return Err(PivotShapeError::DataColumns {
                    row,
                    expected: columns,
                    actual: values.len(),
                });
            }
        }

        Ok(())
    }
}
