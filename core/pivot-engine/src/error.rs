//! FILENAME: core/pivot-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PivotShapeError {
    #[error("header values: expected {expected} levels, found {actual}")]
    HeaderLevels { expected: usize, actual: usize },

    #[error("header level {level}: expected {expected} columns, found {actual}")]
    HeaderColumns { level: usize, expected: usize, actual: usize },

    #[error("title fields: expected {expected} levels, found {actual}")]
    TitleLevels { expected: usize, actual: usize },

    #[error("title level {level}: expected {expected} index levels, found {actual}")]
    TitleColumns { level: usize, expected: usize, actual: usize },

    #[error("index values: expected {expected} rows, found {actual}")]
    IndexRows { expected: usize, actual: usize },

    #[error("index row {row}: expected {expected} levels, found {actual}")]
    IndexColumns { row: usize, expected: usize, actual: usize },

    #[error("data row {row}: expected {expected} columns, found {actual}")]
    DataColumns { row: usize, expected: usize, actual: usize },
}
