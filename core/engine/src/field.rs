//! FILENAME: core/engine/src/field.rs
//! PURPOSE: Describes the explore fields that back result columns.
//! CONTEXT: Fields are either dimensions (group-by columns) or metrics
//! (aggregations). Filters, pivot headers and column menus all address
//! fields through the id produced by `field_id`.

use serde::{Deserialize, Serialize};

/// Identifier of a field inside an explore, e.g. `orders_created_at`.
pub type FieldId = String;

/// Whether a field groups rows or aggregates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Metric,
    Dimension,
}

/// The value type carried by a field.
/// Dimensions use the first five variants; metrics may use any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValueType {
    String,
    Number,
    Timestamp,
    Date,
    Boolean,
    Percentile,
    Median,
    Average,
    Count,
    CountDistinct,
    Sum,
    Min,
    Max,
}

impl FieldValueType {
    /// True for types whose values sort chronologically.
    pub fn is_date_like(&self) -> bool {
        matches!(self, FieldValueType::Date | FieldValueType::Timestamp)
    }
}

/// A dimension or metric of an explore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub field_type: FieldType,

    /// Value type (`type` on the wire).
    #[serde(rename = "type")]
    pub value_type: FieldValueType,

    /// Table the field belongs to.
    pub table: String,

    /// Field name within the table. May contain dots for nested fields.
    pub name: String,

    /// Human readable label.
    pub label: String,

    #[serde(default)]
    pub hidden: bool,
}

impl Field {
    pub fn dimension(table: &str, name: &str, label: &str, value_type: FieldValueType) -> Self {
        Field {
            field_type: FieldType::Dimension,
            value_type,
            table: table.to_string(),
            name: name.to_string(),
            label: label.to_string(),
            hidden: false,
        }
    }

    pub fn metric(table: &str, name: &str, label: &str, value_type: FieldValueType) -> Self {
        Field {
            field_type: FieldType::Metric,
            value_type,
            table: table.to_string(),
            name: name.to_string(),
            label: label.to_string(),
            hidden: false,
        }
    }

    pub fn is_dimension(&self) -> bool {
        self.field_type == FieldType::Dimension
    }

    pub fn is_metric(&self) -> bool {
        self.field_type == FieldType::Metric
    }

    /// The id used to reference this field in filters, sorts and pivots.
    pub fn field_id(&self) -> FieldId {
        field_id(&self.table, &self.name)
    }

    /// Whether the explorer lets users filter on this field.
    /// Every metric is filterable; dimensions only for scalar value types.
    pub fn is_filterable(&self) -> bool {
        match self.field_type {
            FieldType::Metric => true,
            FieldType::Dimension => matches!(
                self.value_type,
                FieldValueType::String
                    | FieldValueType::Number
                    | FieldValueType::Date
                    | FieldValueType::Timestamp
                    | FieldValueType::Boolean
            ),
        }
    }
}

/// Builds a field id from its table and name.
/// Dots in nested names become double underscores so ids stay flat.
pub fn field_id(table: &str, name: &str) -> FieldId {
    format!("{}_{}", table, name.replace('.', "__"))
}
