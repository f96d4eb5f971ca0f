//! FILENAME: core/filter-engine/src/lib.rs
//! Filter subsystem for the explorer.
//!
//! Layers:
//! - `definition`: Serializable filter trees (what the filters ARE)
//! - `normalize`: Date rewriting before filters are sent (HOW they travel)
//! - `rule`: Building rules from fields (HOW filters are added)

pub mod definition;
pub mod normalize;
pub mod rule;

pub use definition::*;
pub use normalize::{
    convert_date_dashboard_filters, convert_date_dashboard_filters_with, convert_date_filters,
    convert_date_filters_with, convert_filter_group, convert_filter_rule, format_date_value,
    DateWireFormat, DATE_WIRE_PATTERN,
};
pub use rule::{add_filter_rule, create_filter_rule_from_field};
