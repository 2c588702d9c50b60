//! Backend-declared filterable fields of an entity type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterDescriptor {
    pub text_filters: Vec<String>,
    pub choice_filters: BTreeMap<String, Vec<String>>,
    pub date_filters: Vec<String>,
    pub number_filters: Vec<String>,
}

impl FilterDescriptor {
    pub fn is_empty(&self) -> bool {
        self.text_filters.is_empty()
            && self.choice_filters.is_empty()
            && self.date_filters.is_empty()
            && self.number_filters.is_empty()
    }
}

/// `snake_case` field name as a label: `created_at` becomes `Created at`.
pub fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
