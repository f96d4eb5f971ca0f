//! FILENAME: core/column-menu/src/definition.rs
//! PURPOSE: What a result column is backed by.
//! CONTEXT: A column shows either an explore field, a table calculation or
//! a custom dimension. Columns whose field no longer exists in the explore
//! are flagged invalid so the user can still remove them.

use engine::{Field, FieldValueType};
use serde::{Deserialize, Serialize};

/// A calculation over the result set, defined in SQL by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCalculation {
    /// Unique name, used as the column id.
    pub name: String,
    pub display_name: String,
    pub sql: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomDimensionType {
    /// Numeric bins over a base dimension.
    Bin,
    /// Free SQL expression.
    Sql,
}

/// A dimension defined by the user on top of the explore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDimension {
    pub id: String,
    pub name: String,
    pub table: String,

    #[serde(rename = "type")]
    pub dimension_type: CustomDimensionType,

    /// Result type of a SQL custom dimension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<FieldValueType>,
}

impl CustomDimension {
    /// Field id built from table and name, as for explore fields.
    pub fn field_id(&self) -> String {
        engine::field_id(&self.table, &self.name)
    }
}

/// A metric defined by the user on top of a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalMetric {
    pub table: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(rename = "type")]
    pub metric_type: FieldValueType,

    pub sql: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dimension_name: Option<String>,
}

impl AdditionalMetric {
    pub fn field_id(&self) -> String {
        engine::field_id(&self.table, &self.name)
    }
}

/// The item behind a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ColumnItem {
    Field(Field),
    TableCalculation(TableCalculation),
    CustomDimension(CustomDimension),
}

impl ColumnItem {
    /// Id used by sorts and field removal.
    pub fn item_id(&self) -> String {
        match self {
            ColumnItem::Field(field) => field.field_id(),
            ColumnItem::TableCalculation(calc) => calc.name.clone(),
            ColumnItem::CustomDimension(dim) => dim.id.clone(),
        }
    }
}

/// Current sort of the result set on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortField {
    pub field_id: String,
    pub descending: bool,
}

/// Metadata of a result column, as the header menu sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMeta {
    pub column_id: String,

    #[serde(default)]
    pub item: Option<ColumnItem>,

    #[serde(default)]
    pub sort: Option<SortField>,

    /// The column references a field missing from the explore.
    #[serde(default)]
    pub is_invalid_item: bool,
}

impl ColumnMeta {
    pub fn for_item(item: ColumnItem) -> Self {
        ColumnMeta {
            column_id: item.item_id(),
            item: Some(item),
            sort: None,
            is_invalid_item: false,
        }
    }

    pub fn invalid(column_id: impl Into<String>) -> Self {
        ColumnMeta {
            column_id: column_id.into(),
            item: None,
            sort: None,
            is_invalid_item: true,
        }
    }

    pub fn with_sort(mut self, descending: bool) -> Self {
        self.sort = Some(SortField {
            field_id: self.column_id.clone(),
            descending,
        });
        self
    }
}
