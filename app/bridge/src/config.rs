//! FILENAME: app/bridge/src/config.rs
//! PURPOSE: Runtime configuration of the bridge.
//! CONTEXT: Read once at startup. An optional JSON file named by
//! `EXPLORER_BRIDGE_CONFIG` provides the base; single env vars override it.

use std::path::{Path, PathBuf};

use filter_engine::DateWireFormat;
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

pub const CONFIG_ENV: &str = "EXPLORER_BRIDGE_CONFIG";
pub const LOG_PATH_ENV: &str = "EXPLORER_BRIDGE_LOG";
pub const DATE_FORMAT_ENV: &str = "EXPLORER_DATE_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeConfig {
    /// Unified log file. No file logging when absent.
    pub log_path: Option<PathBuf>,

    /// Date format used by the filter commands unless a request overrides it.
    pub date_wire_format: DateWireFormat,

    pub echo_to_stderr: bool,
}

impl BridgeConfig {
    pub fn from_file(path: &Path) -> Result<Self, BridgeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(text)
            .map_err(|e| BridgeError::Config(format!("{}", e)))
    }

    /// Loads the config file named by the environment, then applies env overrides.
    pub fn from_env() -> Result<Self, BridgeError> {
        let base = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => BridgeConfig::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` (env var name -> value).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, BridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(LOG_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            self.log_path = Some(PathBuf::from(path));
        }

        if let Some(name) = lookup(DATE_FORMAT_ENV) {
            self.date_wire_format = DateWireFormat::parse(&name).ok_or_else(|| {
                BridgeError::Config(format!("{}: unknown date format '{}'", DATE_FORMAT_ENV, name))
            })?;
        }

        Ok(self)
    }
}
