//! FILENAME: tests/test_protocol.rs
//! Tests of the line-delimited request/response loop.

mod common;

use std::io::Cursor;

use app_lib::{serve, BridgeConfig, BridgeResponse};
use common::PivotFixture;
use serde_json::json;

fn responses(output: &[u8]) -> Vec<BridgeResponse> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_serve_answers_each_line() {
    let input = format!(
        "{}\n\n{}\nnot json\n{}\n",
        json!({ "command": "convert_date_filters", "payload": { "filters": {} } }),
        json!({ "command": "render_pivot_table", "payload": { "data": PivotFixture::revenue_by_month() } }),
        json!({ "command": "nope" })
    );
    let mut output = Vec::new();

    let handled = serve(Cursor::new(input), &mut output, &BridgeConfig::default()).unwrap();
    assert_eq!(handled, 4);

    let responses = responses(&output);
    assert_eq!(responses.len(), 4);
    assert!(responses[0].success);
    assert_eq!(responses[0].data, Some(json!({})));
    assert!(responses[1].success);
    assert!(!responses[2].success);
    assert!(responses[2].error.as_deref().unwrap().starts_with("Invalid JSON"));
    assert_eq!(responses[3].error.as_deref(), Some("Unknown command: nope"));
}

#[test]
fn test_serve_empty_input() {
    let mut output = Vec::new();
    let handled = serve(Cursor::new(""), &mut output, &BridgeConfig::default()).unwrap();
    assert_eq!(handled, 0);
    assert!(output.is_empty());
}

#[test]
fn test_serve_survives_invalid_utf8() {
    let mut input = b"\xff\xfe garbage\n".to_vec();
    input.extend_from_slice(
        json!({ "command": "convert_date_filters", "payload": { "filters": {} } })
            .to_string()
            .as_bytes(),
    );
    input.extend_from_slice(b"\r\n");
    let mut output = Vec::new();

    let handled = serve(Cursor::new(input), &mut output, &BridgeConfig::default()).unwrap();
    assert_eq!(handled, 2);

    let responses = responses(&output);
    assert_eq!(responses.len(), 2);
    assert!(!responses[0].success);
    assert!(responses[0].error.as_deref().unwrap().starts_with("Invalid UTF-8"));
    assert!(responses[1].success);
    assert_eq!(responses[1].data, Some(json!({})));
}

#[test]
fn test_serve_last_line_without_newline() {
    let input = json!({ "command": "nope" }).to_string();
    let mut output = Vec::new();
    let handled = serve(Cursor::new(input), &mut output, &BridgeConfig::default()).unwrap();
    assert_eq!(handled, 1);
    assert_eq!(responses(&output)[0].error.as_deref(), Some("Unknown command: nope"));
}
