//! FILENAME: app/bridge/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Log backend: {0}")]
    LogBackend(String),

    #[error("Log file not initialized")]
    LogNotInitialized,

    #[error("Log file lock poisoned")]
    LogPoisoned,
}
