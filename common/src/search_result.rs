use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity_type::EntityType;
use crate::selection::SelectionId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// CRM record ids are numeric. A response holding any other id fails to decode as a whole.
    pub id: u64,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

const TITLE_FIELDS: [&str; 5] = ["name", "title", "subject", "number", "email"];
const SUBTITLE_FIELDS: [&str; 4] = ["status", "stage", "company", "phone"];

fn first_string(fields: &serde_json::Map<String, serde_json::Value>, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| match fields.get(*name) {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl SearchResultItem {
    pub fn display_title(&self) -> String {
        first_string(&self.fields, &TITLE_FIELDS).unwrap_or_else(|| format!("#{}", self.id))
    }

    pub fn display_subtitle(&self) -> Option<String> {
        first_string(&self.fields, &SUBTITLE_FIELDS)
    }

    pub fn selection_id(&self, entity_type: EntityType) -> SelectionId {
        SelectionId::new(entity_type, self.id)
    }
}

/// Flat list for a scoped search, grouped by entity type for a global one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResultSet {
    Flat(Vec<SearchResultItem>),
    Grouped(BTreeMap<String, Vec<SearchResultItem>>),
}

impl Default for SearchResultSet {
    fn default() -> Self {
        SearchResultSet::Flat(Vec::new())
    }
}

impl SearchResultSet {
    pub fn total_len(&self) -> usize {
        match self {
            SearchResultSet::Flat(items) => items.len(),
            SearchResultSet::Grouped(groups) => groups.values().map(|v| v.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Items per entity type in display order. A flat list belongs to `scope`;
    /// grouped keys that are not known entity types are skipped.
    pub fn groups(&self, scope: EntityType) -> Vec<(EntityType, Vec<SearchResultItem>)> {
        match self {
            SearchResultSet::Flat(items) => {
                if items.is_empty() {
                    vec![]
                } else {
                    vec![(scope, items.clone())]
                }
            }
            SearchResultSet::Grouped(groups) => EntityType::ALL
                .iter()
                .filter_map(|t| {
                    let items = groups.get(t.as_str())?;
                    if items.is_empty() { None } else { Some((*t, items.clone())) }
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchResponse {
    pub results: SearchResultSet,
    pub total_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn failed(message: impl Into<String>) -> Self {
        Self { results: SearchResultSet::Flat(Vec::new()), total_count: 0, error: Some(message.into()) }
    }

    pub fn loaded_count(&self) -> u64 {
        self.results.total_len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoadMoreResponse {
    pub results: Vec<SearchResultItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_flat_scoped_results() {
        let r: SearchResponse = serde_json::from_str(
            r#"{"results": [{"id": 1, "name": "Acme"}, {"id": 2, "title": "Call back"}], "total_count": 120}"#,
        )
        .unwrap();
        assert_eq!(r.total_count, 120);
        assert_eq!(r.loaded_count(), 2);
        let groups = r.results.groups(EntityType::Accounts);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, EntityType::Accounts);
        assert_eq!(groups[0].1[0].display_title(), "Acme");
        assert_eq!(groups[0].1[1].display_title(), "Call back");
    }

    #[test]
    fn decodes_grouped_global_results_in_type_order() {
        let r: SearchResponse = serde_json::from_str(
            r#"{"results": {"contacts": [{"id": 1, "email": "a@b.c"}], "accounts": [{"id": 1}], "deals": [], "unknown": [{"id": 9}]}, "total_count": 2}"#,
        )
        .unwrap();
        let groups = r.results.groups(EntityType::Global);
        let types = groups.iter().map(|(t, _)| *t).collect::<Vec<_>>();
        assert_eq!(types, vec![EntityType::Accounts, EntityType::Contacts]);
        assert_eq!(groups[0].1[0].display_title(), "#1");
        assert_eq!(groups[1].1[0].display_title(), "a@b.c");
    }

    #[test]
    fn non_numeric_id_rejects_the_response() {
        let r = serde_json::from_str::<SearchResponse>(r#"{"results": [{"id": 1}, {"id": "abc"}], "total_count": 2}"#);
        assert!(r.is_err());
    }

    #[test]
    fn missing_fields_default_and_error_is_kept() {
        let r: SearchResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(r.error.as_deref(), Some("boom"));
        assert!(r.results.is_empty());
        assert_eq!(SearchResponse::failed("x").error.as_deref(), Some("x"));
    }
}
