//! FILENAME: app/bridge/src/commands/pivot.rs
//! PURPOSE: Pivot table rendering command.
//! CONTEXT: Metric headers are labeled from an explicit label map when the
//! request carries one, else from the explore's fields. Without either the
//! raw field ids are shown.

use pivot_engine::{project_pivot, FieldLabels, LabelResolver};

use crate::api_types::{RenderPivotParams, RenderPivotResponse};
use crate::error::BridgeError;
use crate::{log_enter, log_exit, log_warn};

fn build_labels(params: &RenderPivotParams) -> Option<FieldLabels> {
    if let Some(map) = &params.labels {
        let mut labels = FieldLabels::new();
        for (field_id, label) in map {
            labels.insert(field_id.clone(), label.clone());
        }
        return Some(labels);
    }
    if params.fields.is_empty() {
        None
    } else {
        Some(FieldLabels::from_fields(&params.fields))
    }
}

pub fn render_pivot_table(params: RenderPivotParams) -> Result<RenderPivotResponse, BridgeError> {
    log_enter!(
        "PIVOT",
        "render_pivot_table",
        "rows={} cols={}",
        params.data.row_count(),
        params.data.column_count()
    );

    let mut warnings = Vec::new();
    if let Err(e) = params.data.validate() {
        log_warn!("PIVOT", "render_pivot_table: {}", e);
        warnings.push(e.to_string());
    }

    let labels = build_labels(&params);
    let resolver = labels.as_ref().map(|l| l as &dyn LabelResolver);
    let view = project_pivot(&params.data, resolver);
    let grid = params.include_grid.then(|| view.to_grid());

    log_exit!(
        "PIVOT",
        "render_pivot_table",
        "header_rows={} body_rows={}",
        view.header_rows.len(),
        view.body_rows.len()
    );

    Ok(RenderPivotResponse {
        view,
        grid,
        warnings,
    })
}
