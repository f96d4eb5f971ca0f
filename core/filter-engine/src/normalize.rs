//! FILENAME: core/filter-engine/src/normalize.rs
//! Date normalization - fixes date values before filters leave the client.
//!
//! Date values picked in the UI are local wall-clock times. Serializing them
//! with a generic date encoder converts them to UTC and shifts the clock.
//! Instead every date is written as `YYYY-MM-DDTHH:mm:ss` with the local
//! clock value unchanged, followed by a literal `Z`. The suffix is only a
//! marker; no timezone conversion happens.
//!
//! Every function returns a fresh copy. Non-date values, rule fields and
//! group structure are carried over unchanged.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::definition::{
    DashboardFilterRule, DashboardFilters, FilterGroup, FilterGroupItem, FilterRule,
    FilterValue, Filters,
};

/// strftime pattern of the wire date, without the suffix.
pub const DATE_WIRE_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// How date values are written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateWireFormat {
    /// `2024-01-05T10:30:00Z`: local clock value plus a literal `Z`.
    #[serde(rename = "literal-z")]
    LiteralUtcMarker,
    /// `2024-01-05T10:30:00`: local clock value, no marker.
    #[serde(rename = "local")]
    LocalNaive,
}

impl Default for DateWireFormat {
    fn default() -> Self {
        DateWireFormat::LiteralUtcMarker
    }
}

impl DateWireFormat {
    /// Parses the names used in configuration (`literal-z`, `local`).
    pub fn parse(name: &str) -> Option<DateWireFormat> {
        match name.trim().to_ascii_lowercase().as_str() {
            "literal-z" | "literal_z" | "z" => Some(DateWireFormat::LiteralUtcMarker),
            "local" | "naive" => Some(DateWireFormat::LocalNaive),
            _ => None,
        }
    }
}

// ============================================================================
// VALUES AND RULES
// ============================================================================

/// Formats a date the way the query API expects it.
pub fn format_date_value(date: &NaiveDateTime, format: DateWireFormat) -> String {
    let formatted = date.format(DATE_WIRE_PATTERN).to_string();
    match format {
        DateWireFormat::LiteralUtcMarker => formatted + "Z",
        DateWireFormat::LocalNaive => formatted,
    }
}

fn convert_value(value: &FilterValue, format: DateWireFormat) -> FilterValue {
    match value {
        FilterValue::Date(date) => FilterValue::Text(format_date_value(date, format)),
        other => other.clone(),
    }
}

/// Rewrites the date values of one rule. Value order is kept.
pub fn convert_filter_rule(rule: &FilterRule, format: DateWireFormat) -> FilterRule {
    FilterRule {
        values: rule
            .values
            .as_ref()
            .map(|values| values.iter().map(|v| convert_value(v, format)).collect()),
        ..rule.clone()
    }
}

// ============================================================================
// GROUPS
// ============================================================================

/// Rewrites a group tree. Nested groups recurse; kind, id and item order
/// are preserved at every level.
pub fn convert_filter_group(group: &FilterGroup, format: DateWireFormat) -> FilterGroup {
    let items = group
        .items()
        .iter()
        .map(|item| match item {
            FilterGroupItem::Group(nested) => {
                FilterGroupItem::Group(convert_filter_group(nested, format))
            }
            FilterGroupItem::Rule(rule) => FilterGroupItem::Rule(convert_filter_rule(rule, format)),
        })
        .collect();

    group.with_items(items)
}

/// Normalizes the dates of explore filters. Absent trees stay absent.
pub fn convert_date_filters(filters: &Filters) -> Filters {
    convert_date_filters_with(filters, DateWireFormat::default())
}

pub fn convert_date_filters_with(filters: &Filters, format: DateWireFormat) -> Filters {
    Filters {
        dimensions: filters
            .dimensions
            .as_ref()
            .map(|group| convert_filter_group(group, format)),
        metrics: filters
            .metrics
            .as_ref()
            .map(|group| convert_filter_group(group, format)),
    }
}

// ============================================================================
// DASHBOARD FILTERS
// ============================================================================

fn convert_dashboard_rule(rule: &DashboardFilterRule, format: DateWireFormat) -> DashboardFilterRule {
    DashboardFilterRule {
        rule: convert_filter_rule(&rule.rule, format),
        ..rule.clone()
    }
}

/// Normalizes the dates of dashboard filters. One output rule per input rule.
pub fn convert_date_dashboard_filters(filters: &DashboardFilters) -> DashboardFilters {
    convert_date_dashboard_filters_with(filters, DateWireFormat::default())
}

pub fn convert_date_dashboard_filters_with(
    filters: &DashboardFilters,
    format: DateWireFormat,
) -> DashboardFilters {
    DashboardFilters {
        dimensions: filters
            .dimensions
            .iter()
            .map(|rule| convert_dashboard_rule(rule, format))
            .collect(),
        metrics: filters
            .metrics
            .iter()
            .map(|rule| convert_dashboard_rule(rule, format))
            .collect(),
    }
}
