//! FILENAME: core/column-menu/src/lib.rs
//! Column header menus of the results table.

pub mod definition;
pub mod menu;
pub mod sort;

pub use definition::{
    AdditionalMetric, ColumnItem, ColumnMeta, CustomDimension, CustomDimensionType, SortField,
    TableCalculation,
};
pub use menu::{build_column_menu, MenuAction, MenuEntry, MenuIcon, MenuItem, MenuLabel};
pub use sort::{sort_direction_label, sort_menu_entries, SortDirection};
