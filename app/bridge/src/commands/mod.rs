//! FILENAME: app/bridge/src/commands/mod.rs
// PURPOSE: Command dispatch. Maps a request's command name to its handler.

pub mod filters;
pub mod menu;
pub mod pivot;

pub use filters::*;
pub use menu::*;
pub use pivot::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api_types::{BridgeRequest, BridgeResponse};
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::{log_error, log_info};

pub const CMD_CONVERT_DATE_FILTERS: &str = "convert_date_filters";
pub const CMD_CONVERT_DATE_DASHBOARD_FILTERS: &str = "convert_date_dashboard_filters";
pub const CMD_ADD_FILTER: &str = "add_filter";
pub const CMD_RENDER_PIVOT_TABLE: &str = "render_pivot_table";
pub const CMD_GET_COLUMN_MENU: &str = "get_column_menu";

/// Every command the bridge understands.
pub const COMMANDS: [&str; 5] = [
    CMD_CONVERT_DATE_FILTERS,
    CMD_CONVERT_DATE_DASHBOARD_FILTERS,
    CMD_ADD_FILTER,
    CMD_RENDER_PIVOT_TABLE,
    CMD_GET_COLUMN_MENU,
];

fn call<P, R, F>(payload: Value, handler: F) -> Result<Value, BridgeError>
where
    P: DeserializeOwned,
    R: Serialize,
    F: FnOnce(P) -> Result<R, BridgeError>,
{
    let params: P = serde_json::from_value(payload)?;
    let result = handler(params)?;
    Ok(serde_json::to_value(result)?)
}

/// Runs one command and returns its JSON result.
pub fn dispatch(request: BridgeRequest, config: &BridgeConfig) -> Result<Value, BridgeError> {
    let BridgeRequest { command, payload } = request;
    match command.as_str() {
        CMD_CONVERT_DATE_FILTERS => call(payload, |p| filters::convert_date_filters(p, config)),
        CMD_CONVERT_DATE_DASHBOARD_FILTERS => {
            call(payload, |p| filters::convert_date_dashboard_filters(p, config))
        }
        CMD_ADD_FILTER => call(payload, filters::add_filter),
        CMD_RENDER_PIVOT_TABLE => call(payload, pivot::render_pivot_table),
        CMD_GET_COLUMN_MENU => call(payload, menu::get_column_menu),
        _ => Err(BridgeError::UnknownCommand(command)),
    }
}

/// Runs one command; errors become a failed response.
pub fn handle_request(request: BridgeRequest, config: &BridgeConfig) -> BridgeResponse {
    let command = request.command.clone();
    log_info!("CMD", "{}", command);

    match dispatch(request, config) {
        Ok(data) => BridgeResponse::ok(data),
        Err(e) => {
            log_error!("CMD", "{} failed: {}", command, e);
            BridgeResponse::err(e.to_string())
        }
    }
}

/// Parses and runs one request line.
pub fn handle_line(line: &str, config: &BridgeConfig) -> BridgeResponse {
    match serde_json::from_str::<BridgeRequest>(line) {
        Ok(request) => handle_request(request, config),
        Err(e) => {
            let e = BridgeError::from(e);
            log_error!("CMD", "bad request: {}", e);
            BridgeResponse::err(e.to_string())
        }
    }
}
