//! FILENAME: core/engine/src/value.rs
//! PURPOSE: A single value of a query result.
//! CONTEXT: The query engine ships every value twice: the raw JSON value and
//! the string already formatted for display. Renderers show `formatted`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A result value as produced upstream by the query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultValue {
    pub raw: Value,
    pub formatted: String,
}

impl ResultValue {
    pub fn new(raw: impl Into<Value>, formatted: impl Into<String>) -> Self {
        ResultValue {
            raw: raw.into(),
            formatted: formatted.into(),
        }
    }

    /// A text value whose raw and formatted forms are the same string.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        ResultValue {
            raw: Value::String(s.clone()),
            formatted: s,
        }
    }

    /// A numeric value formatted with its default display.
    pub fn number(n: f64) -> Self {
        ResultValue {
            raw: Value::from(n),
            formatted: format!("{}", n),
        }
    }
}
