//! FILENAME: app/bridge/src/commands/menu.rs
//! PURPOSE: Column header menu command.

use column_menu::{build_column_menu, MenuEntry};

use crate::api_types::ColumnMenuParams;
use crate::error::BridgeError;
use crate::log_debug;

/// `None` (JSON null) when the column has no menu.
pub fn get_column_menu(params: ColumnMenuParams) -> Result<Option<Vec<MenuEntry>>, BridgeError> {
    let entries = build_column_menu(&params.column, &params.additional_metrics);
    log_debug!(
        "MENU",
        "get_column_menu column={} entries={:?}",
        params.column.column_id,
        entries.as_ref().map(Vec::len)
    );
    Ok(entries)
}
