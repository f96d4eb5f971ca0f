//! FILENAME: core/pivot-engine/src/resolver.rs
//! Label resolution for pivot headers.
//!
//! Metric levels carry field ids (`orders_revenue`) where the reader wants
//! labels (`Revenue`). The caller injects the lookup.

use engine::Field;
use rustc_hash::FxHashMap;

/// Maps a field id to a display label. Called once per resolved cell;
/// implementations must not have side effects.
pub trait LabelResolver {
    fn resolve(&self, field_id: Option<&str>) -> String;
}

impl<F> LabelResolver for F
where
    F: Fn(Option<&str>) -> String,
{
    fn resolve(&self, field_id: Option<&str>) -> String {
        self(field_id)
    }
}

/// Resolver backed by the labels of the explore's fields.
/// Unknown ids resolve to themselves; a missing id resolves to "".
#[derive(Debug, Clone, Default)]
pub struct FieldLabels {
    labels: FxHashMap<String, String>,
}

impl FieldLabels {
    pub fn new() -> Self {
        FieldLabels::default()
    }

    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Self {
        let mut labels = FieldLabels::new();
        for field in fields {
            labels.insert(field.field_id(), field.label.clone());
        }
        labels
    }

    pub fn insert(&mut self, field_id: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(field_id.into(), label.into());
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.labels.get(field_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl LabelResolver for FieldLabels {
    fn resolve(&self, field_id: Option<&str>) -> String {
        match field_id {
            Some(id) => self.get(id).unwrap_or(id).to_string(),
            None => String::new(),
        }
    }
}
