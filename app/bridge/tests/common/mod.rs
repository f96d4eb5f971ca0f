//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for bridge integration tests.

#![allow(dead_code)]

use app_lib::{handle_line, handle_request, BridgeConfig, BridgeRequest, BridgeResponse};
use serde_json::{json, Value};

/// Test harness: a bridge configuration plus helpers to send commands.
pub struct TestHarness {
    pub config: BridgeConfig,
}

impl TestHarness {
    /// Create a new test harness with the default configuration.
    pub fn new() -> Self {
        TestHarness {
            config: BridgeConfig::default(),
        }
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        TestHarness { config }
    }

    /// Send a command and return the raw response.
    pub fn send(&self, command: &str, payload: Value) -> BridgeResponse {
        handle_request(BridgeRequest::new(command, payload), &self.config)
    }

    /// Send a raw request line.
    pub fn send_line(&self, line: &str) -> BridgeResponse {
        handle_line(line, &self.config)
    }

    /// Send a command that must succeed and return its data.
    pub fn send_ok(&self, command: &str, payload: Value) -> Value {
        let response = self.send(command, payload);
        assert!(
            response.success,
            "{} failed: {:?}",
            command,
            response.error
        );
        response.data.unwrap_or(Value::Null)
    }

    /// Send a command that must fail and return its error message.
    pub fn send_err(&self, command: &str, payload: Value) -> String {
        let response = self.send(command, payload);
        assert!(!response.success, "{} unexpectedly succeeded", command);
        response.error.unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Fields of a small orders explore.
pub struct ExploreFixture;

impl ExploreFixture {
    pub fn status() -> Value {
        json!({
            "fieldType": "dimension",
            "type": "string",
            "table": "orders",
            "name": "status",
            "label": "Status"
        })
    }

    pub fn created() -> Value {
        json!({
            "fieldType": "dimension",
            "type": "timestamp",
            "table": "orders",
            "name": "created",
            "label": "Created"
        })
    }

    pub fn revenue() -> Value {
        json!({
            "fieldType": "metric",
            "type": "sum",
            "table": "orders",
            "name": "revenue",
            "label": "Revenue"
        })
    }

    pub fn order_count() -> Value {
        json!({
            "fieldType": "metric",
            "type": "count",
            "table": "orders",
            "name": "order_count",
            "label": "Order count"
        })
    }

    pub fn fields() -> Value {
        json!([Self::status(), Self::created(), Self::revenue(), Self::order_count()])
    }
}

/// Filter trees holding date values.
pub struct FilterFixture;

impl FilterFixture {
    pub fn rule(id: &str, field_id: &str, operator: &str, values: Value) -> Value {
        json!({
            "id": id,
            "target": { "fieldId": field_id },
            "operator": operator,
            "values": values
        })
    }

    /// `dimensions`: AND(created in between two dates, OR(status = shipped, created < date)).
    pub fn nested() -> Value {
        json!({
            "dimensions": {
                "id": "root",
                "and": [
                    Self::rule(
                        "r1",
                        "orders_created",
                        "inBetween",
                        json!(["2024-01-05T10:30:00", "2024-02-01T00:00:00"])
                    ),
                    {
                        "id": "inner",
                        "or": [
                            Self::rule("r2", "orders_status", "equals", json!(["shipped"])),
                            Self::rule("r3", "orders_created", "lessThan", json!(["2023-12-31T23:59:59"]))
                        ]
                    }
                ]
            },
            "metrics": {
                "id": "m",
                "and": [Self::rule("r4", "orders_revenue", "greaterThan", json!([100]))]
            }
        })
    }
}

/// Pivot datasets.
pub struct PivotFixture;

impl PivotFixture {
    /// One metric header level, one dimension index level, two rows.
    pub fn revenue_by_month() -> Value {
        json!({
            "headerValueTypes": [{ "type": "metric" }],
            "headerValues": [[{ "raw": "orders_revenue", "formatted": "orders_revenue" }]],
            "indexValueTypes": [{ "type": "dimension", "fieldId": "orders_month" }],
            "indexValues": [
                [{ "raw": "2024-01", "formatted": "2024-01" }],
                [{ "raw": "2024-02", "formatted": "2024-02" }]
            ],
            "titleFields": [["orders_month"]],
            "dataValues": [
                [{ "raw": 100, "formatted": "$100" }],
                [{ "raw": 200, "formatted": "$200" }]
            ]
        })
    }

    /// Dimension header level over two statuses, metric index level.
    pub fn metrics_by_status() -> Value {
        json!({
            "headerValueTypes": [{ "type": "dimension", "fieldId": "orders_status" }],
            "headerValues": [[
                { "raw": "shipped", "formatted": "Shipped" },
                { "raw": "pending", "formatted": "Pending" }
            ]],
            "indexValueTypes": [{ "type": "metric" }],
            "indexValues": [
                [{ "raw": "orders_revenue", "formatted": "orders_revenue" }],
                [{ "raw": "orders_order_count", "formatted": "orders_order_count" }]
            ],
            "titleFields": [[null]],
            "dataValues": [
                [{ "raw": 1500, "formatted": "1,500" }, { "raw": 300, "formatted": "300" }],
                [{ "raw": 12, "formatted": "12" }, null]
            ]
        })
    }
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Label texts of a header row's title and header cells.
pub fn header_labels(view: &Value, row: usize) -> Vec<Value> {
    let row = &view["headerRows"][row];
    cell_labels(&row["titleCells"])
        .into_iter()
        .chain(cell_labels(&row["headerCells"]))
        .collect()
}

/// Label texts of a body row's index cells.
pub fn index_labels(view: &Value, row: usize) -> Vec<Value> {
    cell_labels(&view["bodyRows"][row]["indexCells"])
}

/// Formatted values of a body row's value cells (`null` for empty cells).
pub fn formatted_values(view: &Value, row: usize) -> Vec<Value> {
    view["bodyRows"][row]["valueCells"]
        .as_array()
        .map(|cells| cells.iter().map(|c| c["value"]["formatted"].clone()).collect())
        .unwrap_or_default()
}

fn cell_labels(cells: &Value) -> Vec<Value> {
    cells
        .as_array()
        .map(|cells| cells.iter().map(|c| c["label"].clone()).collect())
        .unwrap_or_default()
}
