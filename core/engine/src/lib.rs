//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Shared field and value types for the explorer crates.
//! CONTEXT: Re-exports public types used by filter-engine, pivot-engine
//! and column-menu.

pub mod field;
pub mod value;

// Re-export commonly used types at the crate root
pub use field::{field_id, Field, FieldId, FieldType, FieldValueType};
pub use value::ResultValue;
