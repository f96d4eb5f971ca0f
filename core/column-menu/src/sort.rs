//! FILENAME: core/column-menu/src/sort.rs
//! Sort options of the column header menu.

use engine::FieldValueType;
use serde::{Deserialize, Serialize};

use crate::definition::{ColumnItem, CustomDimensionType, SortField};
use crate::menu::{MenuAction, MenuEntry, MenuIcon, MenuItem, MenuLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        *self == SortDirection::Descending
    }
}

fn value_type_label(value_type: FieldValueType, direction: SortDirection) -> &'static str {
    let (asc, desc) = match value_type {
        FieldValueType::String => ("A-Z", "Z-A"),
        FieldValueType::Boolean => ("False-True", "True-False"),
        t if t.is_date_like() => ("Old-New", "New-Old"),
        _ => ("1-9", "9-1"),
    };
    match direction {
        SortDirection::Ascending => asc,
        SortDirection::Descending => desc,
    }
}

/// Short description of a sort direction for an item, e.g. "A-Z".
pub fn sort_direction_label(item: &ColumnItem, direction: SortDirection) -> &'static str {
    let value_type = match item {
        ColumnItem::Field(field) => field.value_type,
        ColumnItem::TableCalculation(_) => FieldValueType::Number,
        ColumnItem::CustomDimension(dim) => match dim.dimension_type {
            CustomDimensionType::Bin => FieldValueType::Number,
            CustomDimensionType::Sql => dim.value_type.unwrap_or(FieldValueType::String),
        },
    };
    value_type_label(value_type, direction)
}

/// One entry per direction. The active direction is checked and clicking
/// it clears the sort; the other direction replaces it.
pub fn sort_menu_entries(item: &ColumnItem, sort: Option<&SortField>) -> Vec<MenuEntry> {
    let item_id = item.item_id();
    let active = sort
        .filter(|s| s.field_id == item_id)
        .map(|s| if s.descending { SortDirection::Descending } else { SortDirection::Ascending });

    [SortDirection::Ascending, SortDirection::Descending]
        .into_iter()
        .map(|direction| {
            let checked = active == Some(direction);
            let action = if checked {
                MenuAction::RemoveSort { field_id: item_id.clone() }
            } else {
                MenuAction::SetSort {
                    field_id: item_id.clone(),
                    descending: direction.is_descending(),
                }
            };
            let icon = match direction {
                SortDirection::Ascending => MenuIcon::SortAscending,
                SortDirection::Descending => MenuIcon::SortDescending,
            };

            MenuEntry::Item(MenuItem {
                label: MenuLabel::plain(format!("Sort {}", sort_direction_label(item, direction))),
                icon,
                destructive: false,
                checked,
                action,
            })
        })
        .collect()
}
