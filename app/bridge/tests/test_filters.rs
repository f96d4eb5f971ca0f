//! FILENAME: tests/test_filters.rs
//! Integration tests for the filter commands.

mod common;

use app_lib::BridgeConfig;
use common::{ExploreFixture, FilterFixture, TestHarness};
use filter_engine::DateWireFormat;
use serde_json::{json, Value};

// ============================================================================
// DATE NORMALIZATION
// ============================================================================

#[test]
fn test_convert_nested_dates() {
    let harness = TestHarness::new();
    let out = harness.send_ok("convert_date_filters", json!({ "filters": FilterFixture::nested() }));

    let root = &out["dimensions"];
    assert_eq!(root["id"], "root");
    assert_eq!(
        root["and"][0]["values"],
        json!(["2024-01-05T10:30:00Z", "2024-02-01T00:00:00Z"])
    );

    let inner = &root["and"][1];
    assert_eq!(inner["id"], "inner");
    assert!(inner.get("and").is_none());
    assert_eq!(inner["or"][0]["values"], json!(["shipped"]));
    assert_eq!(inner["or"][1]["values"], json!(["2023-12-31T23:59:59Z"]));
    assert_eq!(inner["or"][1]["operator"], "lessThan");

    assert_eq!(out["metrics"]["and"][0]["values"], json!([100]));
}

#[test]
fn test_convert_without_dates_is_identity() {
    let harness = TestHarness::new();
    let filters = json!({
        "dimensions": {
            "id": "g",
            "or": [FilterFixture::rule("r", "orders_status", "equals", json!(["a", "b"]))]
        }
    });
    let out = harness.send_ok("convert_date_filters", json!({ "filters": filters.clone() }));
    assert_eq!(out, filters);
}

#[test]
fn test_convert_empty_filters() {
    let harness = TestHarness::new();
    let out = harness.send_ok("convert_date_filters", json!({ "filters": {} }));
    assert_eq!(out, json!({}));
}

#[test]
fn test_offset_strings_are_not_dates() {
    let harness = TestHarness::new();
    let filters = json!({
        "dimensions": {
            "id": "g",
            "and": [FilterFixture::rule("r", "orders_created", "equals", json!(["2024-01-05T10:30:00Z"]))]
        }
    });
    let out = harness.send_ok("convert_date_filters", json!({ "filters": filters.clone() }));
    assert_eq!(out, filters);
}

#[test]
fn test_request_date_format_override() {
    let harness = TestHarness::new();
    let out = harness.send_ok(
        "convert_date_filters",
        json!({ "filters": FilterFixture::nested(), "dateFormat": "local" }),
    );
    assert_eq!(
        out["dimensions"]["and"][0]["values"][0],
        Value::String("2024-01-05T10:30:00".to_string())
    );
}

#[test]
fn test_configured_date_format() {
    let harness = TestHarness::with_config(BridgeConfig {
        date_wire_format: DateWireFormat::LocalNaive,
        ..BridgeConfig::default()
    });
    let out = harness.send_ok("convert_date_filters", json!({ "filters": FilterFixture::nested() }));
    assert_eq!(out["dimensions"]["and"][0]["values"][1], "2024-02-01T00:00:00");
}

#[test]
fn test_convert_dashboard_filters() {
    let harness = TestHarness::new();
    let filters = json!({
        "dimensions": [
            {
                "id": "d1",
                "target": { "fieldId": "orders_created" },
                "operator": "greaterThan",
                "values": ["2024-03-01T08:00:00"],
                "label": "Since March",
                "tileTargets": { "tile-1": { "fieldId": "orders_created" } }
            },
            {
                "id": "d2",
                "target": { "fieldId": "orders_status" },
                "operator": "isNull"
            }
        ],
        "metrics": []
    });

    let out = harness.send_ok("convert_date_dashboard_filters", json!({ "filters": filters }));
    let dims = out["dimensions"].as_array().unwrap();
    assert_eq!(dims.len(), 2);
    assert_eq!(dims[0]["values"], json!(["2024-03-01T08:00:00Z"]));
    assert_eq!(dims[0]["label"], "Since March");
    assert_eq!(dims[0]["tileTargets"]["tile-1"]["fieldId"], "orders_created");
    assert_eq!(dims[1]["id"], "d2");
    assert!(dims[1].get("values").is_none());
    assert_eq!(out["metrics"], json!([]));
}

#[test]
fn test_dashboard_filters_are_required() {
    let harness = TestHarness::new();
    let error = harness.send_err("convert_date_dashboard_filters", json!({}));
    assert!(error.starts_with("Invalid JSON"), "{}", error);
}

// ============================================================================
// ADD FILTER
// ============================================================================

#[test]
fn test_add_dimension_filter_creates_group() {
    let harness = TestHarness::new();
    let out = harness.send_ok(
        "add_filter",
        json!({ "field": ExploreFixture::status(), "value": "shipped" }),
    );

    let items = out["dimensions"]["and"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["target"]["fieldId"], "orders_status");
    assert_eq!(items[0]["operator"], "equals");
    assert_eq!(items[0]["values"], json!(["shipped"]));
    assert!(out.get("metrics").is_none());
}

#[test]
fn test_add_null_value_filter() {
    let harness = TestHarness::new();
    let out = harness.send_ok(
        "add_filter",
        json!({ "field": ExploreFixture::status(), "value": null }),
    );
    let rule = &out["dimensions"]["and"][0];
    assert_eq!(rule["operator"], "isNull");
    assert_eq!(rule["values"], json!([]));
}

#[test]
fn test_add_metric_filter_keeps_existing_group() {
    let harness = TestHarness::new();
    let out = harness.send_ok(
        "add_filter",
        json!({ "filters": FilterFixture::nested(), "field": ExploreFixture::revenue() }),
    );

    assert_eq!(out["dimensions"], FilterFixture::nested()["dimensions"]);

    let metrics = &out["metrics"];
    assert_eq!(metrics["id"], "m");
    let items = metrics["and"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["target"]["fieldId"], "orders_revenue");
    assert_eq!(items[1]["operator"], "equals");
    assert_eq!(items[1]["values"], json!([]));
    assert_ne!(items[1]["id"], items[0]["id"]);
}

#[test]
fn test_added_rule_dates_normalize() {
    let harness = TestHarness::new();
    let filters = harness.send_ok(
        "add_filter",
        json!({ "field": ExploreFixture::created(), "value": "2024-06-30T12:00:00" }),
    );
    let out = harness.send_ok("convert_date_filters", json!({ "filters": filters }));
    assert_eq!(out["dimensions"]["and"][0]["values"], json!(["2024-06-30T12:00:00Z"]));
}

#[test]
fn test_unknown_rule_properties_pass_through() {
    let harness = TestHarness::new();
    let mut rule = FilterFixture::rule("r", "orders_status", "equals", json!(["a"]));
    rule["required"] = json!(true);
    let filters = json!({ "dimensions": { "id": "g", "and": [rule] } });

    let out = harness.send_ok("convert_date_filters", json!({ "filters": filters.clone() }));
    assert_eq!(out["dimensions"]["and"][0]["required"], true);
    assert_eq!(out, filters);
}

#[test]
fn test_date_shaped_text_on_string_field_is_rewritten() {
    let harness = TestHarness::new();
    let filters = json!({
        "dimensions": {
            "id": "g",
            "and": [FilterFixture::rule(
                "r",
                "orders_status",
                "equals",
                json!(["2024-01-05T10:30:00", "2024-01-05T10:30:00+00:00"])
            )]
        }
    });
    let out = harness.send_ok("convert_date_filters", json!({ "filters": filters }));
    assert_eq!(
        out["dimensions"]["and"][0]["values"],
        json!(["2024-01-05T10:30:00Z", "2024-01-05T10:30:00+00:00"])
    );
}
