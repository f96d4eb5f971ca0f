//! FILENAME: core/filter-engine/src/rule.rs
//! Adding filters from a field (the "Filter by ..." action of a column).

use engine::Field;
use serde_json::Value;
use uuid::Uuid;

use crate::definition::{FilterGroup, FilterGroupItem, FilterOperator, FilterRule, FilterValue, Filters};

/// Creates a rule targeting `field`.
///
/// - no value: `equals` with an empty value list, ready for the user to fill
/// - JSON null: `isNull`
/// - any other value: `equals` that value
pub fn create_filter_rule_from_field(field: &Field, value: Option<FilterValue>) -> FilterRule {
    let (operator, values) = match value {
        None => (FilterOperator::Equals, Vec::new()),
        Some(FilterValue::Other(Value::Null)) => (FilterOperator::IsNull, Vec::new()),
        Some(v) => (FilterOperator::Equals, vec![v]),
    };

    FilterRule::new(Uuid::new_v4().to_string(), field.field_id(), operator).with_values(values)
}

/// Returns `filters` with a new rule for `field` appended.
///
/// Dimensions go to the dimension tree and metrics to the metric tree.
/// An existing top-level group keeps its id and kind; a missing one is
/// created as an AND group.
pub fn add_filter_rule(filters: &Filters, field: &Field, value: Option<FilterValue>) -> Filters {
    let rule = FilterGroupItem::Rule(create_filter_rule_from_field(field, value));

    let append = |group: &Option<FilterGroup>| -> Option<FilterGroup> {
        Some(match group {
            Some(existing) => {
                let mut items = existing.items().to_vec();
                items.push(rule.clone());
                existing.with_items(items)
            }
            None => FilterGroup::and(Uuid::new_v4().to_string(), vec![rule.clone()]),
        })
    };

    if field.is_dimension() {
        Filters {
            dimensions: append(&filters.dimensions),
            metrics: filters.metrics.clone(),
        }
    } else {
        Filters {
            dimensions: filters.dimensions.clone(),
            metrics: append(&filters.metrics),
        }
    }
}
