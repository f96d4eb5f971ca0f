//! FILENAME: app/bridge/src/commands/filters.rs
//! PURPOSE: Filter commands (date normalization, add filter).

use filter_engine::{
    add_filter_rule, convert_date_dashboard_filters_with, convert_date_filters_with,
    DashboardFilters, Filters,
};

use crate::api_types::{AddFilterParams, ConvertDashboardFiltersParams, ConvertFiltersParams};
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::{log_debug, log_info};

/// Rewrites the date values of an explore's filter trees for the query API.
///
/// Any rule value that reads as a local ISO date-time without offset
/// (`2024-01-05T10:30:00`) is taken as a date and rewritten, whatever the
/// field type. To keep such text as-is, send it with an offset
/// (`2024-01-05T10:30:00+00:00`) or in another shape.
pub fn convert_date_filters(
    params: ConvertFiltersParams,
    config: &BridgeConfig,
) -> Result<Filters, BridgeError> {
    let format = params.date_format.unwrap_or(config.date_wire_format);
    log_debug!(
        "FILTER",
        "convert_date_filters rules={} format={:?}",
        params.filters.rule_count(),
        format
    );
    Ok(convert_date_filters_with(&params.filters, format))
}

/// Same rewrite over the flat rule lists of a dashboard. Date-shaped text
/// is rewritten here too.
pub fn convert_date_dashboard_filters(
    params: ConvertDashboardFiltersParams,
    config: &BridgeConfig,
) -> Result<DashboardFilters, BridgeError> {
    let format = params.date_format.unwrap_or(config.date_wire_format);
    log_debug!(
        "FILTER",
        "convert_date_dashboard_filters dimensions={} metrics={} format={:?}",
        params.filters.dimensions.len(),
        params.filters.metrics.len(),
        format
    );
    Ok(convert_date_dashboard_filters_with(&params.filters, format))
}

/// Appends a rule for a field and returns the new filters.
pub fn add_filter(params: AddFilterParams) -> Result<Filters, BridgeError> {
    let field_id = params.field.field_id();
    let filters = add_filter_rule(&params.filters, &params.field, params.value);
    log_info!(
        "FILTER",
        "add_filter field={} rules={}",
        field_id,
        filters.rule_count()
    );
    Ok(filters)
}
