//! FILENAME: core/column-menu/src/menu.rs
//! Column header menu - which actions a result column offers.
//!
//! The menu is returned as data. The caller renders the entries and, when
//! one is clicked, executes its `MenuAction` against the explorer state.
//!
//! Layout per column kind:
//! - filterable field: filter by, sort, edit custom metric (if any), remove
//! - invalid column: remove
//! - custom dimension: edit, sort, remove
//! - table calculation: edit, sort, delete

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::definition::{AdditionalMetric, ColumnItem, ColumnMeta, CustomDimension};
use crate::sort::sort_menu_entries;

// ============================================================================
// MENU TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuIcon {
    Filter,
    Pencil,
    Trash,
    SortAscending,
    SortDescending,
}

/// Menu text with an optional emphasized suffix ("Filter by **Status**").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuLabel {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
}

impl MenuLabel {
    pub fn plain(text: impl Into<String>) -> Self {
        MenuLabel {
            text: text.into(),
            emphasis: None,
        }
    }

    pub fn emphasized(text: impl Into<String>, emphasis: impl Into<String>) -> Self {
        MenuLabel {
            text: text.into(),
            emphasis: Some(emphasis.into()),
        }
    }
}

impl fmt::Display for MenuLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.emphasis {
            Some(emphasis) => write!(f, "{} {}", self.text, emphasis),
            None => write!(f, "{}", self.text),
        }
    }
}

/// What clicking a menu item does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MenuAction {
    /// Add an empty filter rule for the field.
    #[serde(rename_all = "camelCase")]
    AddFilter { field_id: String },

    #[serde(rename_all = "camelCase")]
    SetSort { field_id: String, descending: bool },

    #[serde(rename_all = "camelCase")]
    RemoveSort { field_id: String },

    /// Open the custom metric editor on an existing metric.
    EditCustomMetric { metric: AdditionalMetric },

    /// Open the custom dimension editor on an existing dimension.
    EditCustomDimension { dimension: CustomDimension },

    /// Open the table calculation editor.
    EditTableCalculation { name: String },

    /// Ask for confirmation, then delete the table calculation.
    DeleteTableCalculation { name: String },

    /// Drop the field from the query.
    #[serde(rename_all = "camelCase")]
    RemoveActiveField { field_id: String },

    /// Drop the custom dimension, addressed by its field id.
    #[serde(rename_all = "camelCase")]
    RemoveCustomDimension { field_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub label: MenuLabel,
    pub icon: MenuIcon,

    /// Rendered in red.
    pub destructive: bool,

    /// Marks the currently active option (sorts).
    pub checked: bool,

    pub action: MenuAction,
}

impl MenuItem {
    fn new(label: MenuLabel, icon: MenuIcon, action: MenuAction) -> Self {
        MenuItem {
            label,
            icon,
            destructive: false,
            checked: false,
            action,
        }
    }

    fn remove(action: MenuAction) -> Self {
        MenuItem {
            destructive: true,
            ..MenuItem::new(MenuLabel::plain("Remove"), MenuIcon::Trash, action)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MenuEntry {
    Item(MenuItem),
    Divider,
}

impl MenuEntry {
    pub fn item(&self) -> Option<&MenuItem> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Divider => None,
        }
    }
}

// ============================================================================
// MENU BUILDING
// ============================================================================

/// Builds the header menu of a column.
///
/// Returns `None` when the column has no menu at all (no item and not
/// flagged invalid). A field that cannot be filtered gets an empty menu.
pub fn build_column_menu(
    meta: &ColumnMeta,
    additional_metrics: &[AdditionalMetric],
) -> Option<Vec<MenuEntry>> {
    if meta.item.is_none() && !meta.is_invalid_item {
        return None;
    }

    let mut entries = Vec::new();

    match &meta.item {
        Some(item @ ColumnItem::Field(field)) if field.is_filterable() => {
            let field_id = field.field_id();

            entries.push(MenuEntry::Item(MenuItem::new(
                MenuLabel::emphasized("Filter by", field.label.clone()),
                MenuIcon::Filter,
                MenuAction::AddFilter { field_id: field_id.clone() },
            )));
            entries.push(MenuEntry::Divider);
            entries.extend(sort_menu_entries(item, meta.sort.as_ref()));
            entries.push(MenuEntry::Divider);

            if let Some(metric) = additional_metrics.iter().find(|m| m.field_id() == field_id) {
                entries.push(MenuEntry::Item(MenuItem::new(
                    MenuLabel::plain("Edit custom metric"),
                    MenuIcon::Pencil,
                    MenuAction::EditCustomMetric { metric: metric.clone() },
                )));
            }

            entries.push(MenuEntry::Item(MenuItem::remove(MenuAction::RemoveActiveField {
                field_id,
            })));
        }
        _ if meta.is_invalid_item => {
            entries.push(MenuEntry::Item(MenuItem::remove(MenuAction::RemoveActiveField {
                field_id: meta.column_id.clone(),
            })));
        }
        Some(item @ ColumnItem::CustomDimension(dimension)) => {
            entries.push(MenuEntry::Item(MenuItem::new(
                MenuLabel::plain("Edit custom dimension"),
                MenuIcon::Pencil,
                MenuAction::EditCustomDimension { dimension: dimension.clone() },
            )));
            entries.push(MenuEntry::Divider);
            entries.extend(sort_menu_entries(item, meta.sort.as_ref()));
            entries.push(MenuEntry::Divider);
            entries.push(MenuEntry::Item(MenuItem::remove(MenuAction::RemoveCustomDimension {
                field_id: dimension.field_id(),
            })));
        }
        Some(item @ ColumnItem::TableCalculation(calc)) => {
            entries.push(MenuEntry::Item(MenuItem::new(
                MenuLabel::plain("Edit calculation"),
                MenuIcon::Pencil,
                MenuAction::EditTableCalculation { name: calc.name.clone() },
            )));
            entries.push(MenuEntry::Divider);
            entries.extend(sort_menu_entries(item, meta.sort.as_ref()));
            entries.push(MenuEntry::Divider);
            entries.push(MenuEntry::Item(MenuItem::remove(MenuAction::DeleteTableCalculation {
                name: calc.name.clone(),
            })));
        }
        // Fields that cannot be filtered offer nothing
        Some(ColumnItem::Field(_)) | None => {}
    }

    Some(entries)
}
