//! FILENAME: core/filter-engine/src/definition.rs
//! Filter Definition - The serializable filter state of an explore.
//!
//! These types DESCRIBE which rows a query keeps:
//! - `FilterRule`: one predicate on one field
//! - `FilterGroup`: AND / OR combination of rules and nested groups
//! - `Filters`: the dimension and metric trees sent with a query
//! - `DashboardFilters`: the flat rule lists a dashboard applies to its tiles

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ============================================================================
// VALUES
// ============================================================================

/// A single filter value.
///
/// On the wire values are untyped JSON. A string holding a local date-time
/// without offset (`2024-01-05T10:30:00`) is read as a date; strings that
/// carry an offset marker stay text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Boolean(bool),
    Number(Number),
    /// Local wall-clock date-time picked in the UI.
    Date(NaiveDateTime),
    Text(String),
    /// Anything else (null, arrays, objects). Passed through untouched.
    Other(Value),
}

impl FilterValue {
    pub fn text(s: impl Into<String>) -> Self {
        FilterValue::Text(s.into())
    }

    pub fn is_date(&self) -> bool {
        matches!(self, FilterValue::Date(_))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(FilterValue::Number)
            .unwrap_or(FilterValue::Other(Value::Null))
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(Number::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(value: NaiveDateTime) -> Self {
        FilterValue::Date(value)
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Comparison applied by a filter rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    IsNull,
    NotNull,
    Equals,
    NotEquals,
    StartsWith,
    Include,
    DoesNotInclude,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    InThePast,
    NotInThePast,
    InTheNext,
    InTheCurrent,
    InBetween,
}

/// The field a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTarget {
    pub field_id: String,
}

/// A leaf predicate: field, operator and values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRule {
    pub id: String,

    pub target: FieldTarget,

    pub operator: FilterOperator,

    /// Operator settings (e.g. unit of time for `inThePast`). Opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Values in insertion order. `None` and an empty list are distinct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<FilterValue>>,

    /// Properties not modeled here. Carried through every rewrite.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FilterRule {
    pub fn new(id: impl Into<String>, field_id: impl Into<String>, operator: FilterOperator) -> Self {
        FilterRule {
            id: id.into(),
            target: FieldTarget { field_id: field_id.into() },
            operator,
            settings: None,
            disabled: None,
            values: None,
            extra: Map::new(),
        }
    }

    pub fn with_values(mut self, values: Vec<FilterValue>) -> Self {
        self.values = Some(values);
        self
    }
}

// ============================================================================
// GROUPS
// ============================================================================

/// Boolean combinator of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterGroupKind {
    And,
    Or,
}

impl FilterGroupKind {
    /// Name of the property holding the group's items on the wire.
    pub fn items_property_name(&self) -> &'static str {
        match self {
            FilterGroupKind::And => "and",
            FilterGroupKind::Or => "or",
        }
    }
}

/// Item of a group: a nested group or a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterGroupItem {
    Group(FilterGroup),
    Rule(FilterRule),
}

impl FilterGroupItem {
    pub fn is_filter_group(&self) -> bool {
        matches!(self, FilterGroupItem::Group(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndFilterGroup {
    pub id: String,
    pub and: Vec<FilterGroupItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrFilterGroup {
    pub id: String,
    pub or: Vec<FilterGroupItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A group is keyed by its combinator: `{id, and: [...]}` or `{id, or: [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterGroup {
    And(AndFilterGroup),
    Or(OrFilterGroup),
}

impl FilterGroup {
    pub fn and(id: impl Into<String>, items: Vec<FilterGroupItem>) -> Self {
        FilterGroup::And(AndFilterGroup {
            id: id.into(),
            and: items,
            extra: Map::new(),
        })
    }

    pub fn or(id: impl Into<String>, items: Vec<FilterGroupItem>) -> Self {
        FilterGroup::Or(OrFilterGroup {
            id: id.into(),
            or: items,
            extra: Map::new(),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            FilterGroup::And(g) => &g.id,
            FilterGroup::Or(g) => &g.id,
        }
    }

    pub fn kind(&self) -> FilterGroupKind {
        match self {
            FilterGroup::And(_) => FilterGroupKind::And,
            FilterGroup::Or(_) => FilterGroupKind::Or,
        }
    }

    pub fn items(&self) -> &[FilterGroupItem] {
        match self {
            FilterGroup::And(g) => &g.and,
            FilterGroup::Or(g) => &g.or,
        }
    }

    pub fn items_property_name(&self) -> &'static str {
        self.kind().items_property_name()
    }

    /// Returns a copy of this group holding `items`. Kind, id and any
    /// unmodeled properties are kept.
    pub fn with_items(&self, items: Vec<FilterGroupItem>) -> FilterGroup {
        match self {
            FilterGroup::And(g) => FilterGroup::And(AndFilterGroup {
                id: g.id.clone(),
                and: items,
                extra: g.extra.clone(),
            }),
            FilterGroup::Or(g) => FilterGroup::Or(OrFilterGroup {
                id: g.id.clone(),
                or: items,
                extra: g.extra.clone(),
            }),
        }
    }

    /// Number of rules in this group and all nested groups.
    pub fn rule_count(&self) -> usize {
        self.items()
            .iter()
            .map(|item| match item {
                FilterGroupItem::Group(group) => group.rule_count(),
                FilterGroupItem::Rule(_) => 1,
            })
            .sum()
    }
}

// ============================================================================
// TOP LEVEL
// ============================================================================

/// Filters of an explore query. Either tree may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<FilterGroup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<FilterGroup>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_none() && self.metrics.is_none()
    }

    pub fn rule_count(&self) -> usize {
        self.dimensions.as_ref().map_or(0, FilterGroup::rule_count)
            + self.metrics.as_ref().map_or(0, FilterGroup::rule_count)
    }
}

/// A dashboard rule: a filter rule plus the tiles it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilterRule {
    #[serde(flatten)]
    pub rule: FilterRule,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Per-tile field mapping. Opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_targets: Option<Value>,
}

impl From<FilterRule> for DashboardFilterRule {
    fn from(rule: FilterRule) -> Self {
        DashboardFilterRule {
            rule,
            label: None,
            tile_targets: None,
        }
    }
}

/// Dashboard-level filters: flat rule lists, no nesting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardFilters {
    #[serde(default)]
    pub dimensions: Vec<DashboardFilterRule>,

    #[serde(default)]
    pub metrics: Vec<DashboardFilterRule>,
}
