//! FILENAME: app/bridge/src/api_types.rs
// PURPOSE: Request and response types of the bridge protocol.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use std::collections::HashMap;

use column_menu::{AdditionalMetric, ColumnMeta};
use engine::Field;
use filter_engine::{DashboardFilters, DateWireFormat, FilterValue, Filters};
use pivot_engine::{PivotData, PivotGrid, PivotTableView};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// ENVELOPE
// ============================================================================

/// One request line: `{"command": "...", "payload": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    pub command: String,
    #[serde(default)]
    pub payload: Value,
}

impl BridgeRequest {
    pub fn new(command: impl Into<String>, payload: Value) -> Self {
        BridgeRequest {
            command: command.into(),
            payload,
        }
    }
}

/// One response line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BridgeResponse {
    pub fn ok(data: Value) -> Self {
        BridgeResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        BridgeResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// FILTER COMMANDS
// ============================================================================

/// Params for `convert_date_filters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertFiltersParams {
    #[serde(default)]
    pub filters: Filters,
    /// Overrides the configured date format for this request.
    #[serde(default)]
    pub date_format: Option<DateWireFormat>,
}

/// Params for `convert_date_dashboard_filters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertDashboardFiltersParams {
    pub filters: DashboardFilters,
    #[serde(default)]
    pub date_format: Option<DateWireFormat>,
}

/// Params for `add_filter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFilterParams {
    #[serde(default)]
    pub filters: Filters,
    pub field: Field,
    /// Absent: empty `equals` rule. `null`: `isNull` rule.
    #[serde(default, deserialize_with = "present_value")]
    pub value: Option<FilterValue>,
}

/// Keeps an explicit `null` as `Some(Other(Null))`; only a missing key is `None`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<FilterValue>, D::Error>
where
    D: Deserializer<'de>,
{
    FilterValue::deserialize(deserializer).map(Some)
}

// ============================================================================
// PIVOT COMMANDS
// ============================================================================

/// Params for `render_pivot_table`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPivotParams {
    pub data: PivotData,

    /// Explicit field id -> label map for metric headers.
    #[serde(default)]
    pub labels: Option<HashMap<String, String>>,

    /// Fields of the explore; their labels are used for metric headers.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Also return the flattened grid.
    #[serde(default)]
    pub include_grid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPivotResponse {
    pub view: PivotTableView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<PivotGrid>,
    /// Shape problems of the input; the view is still produced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

// ============================================================================
// COLUMN MENU
// ============================================================================

/// Params for `get_column_menu`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMenuParams {
    pub column: ColumnMeta,
    #[serde(default)]
    pub additional_metrics: Vec<AdditionalMetric>,
}
