//! Shared search payload models and query-string flattening.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity_type::EntityType;
use crate::search_const::{DEFAULT_SORT_BY, DEFAULT_SORT_ORDER, FILTER_PARAM_PREFIX, RANGE_GTE_SUFFIX, RANGE_LTE_SUFFIX, SEARCH_PAGE_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Bounds of a ranged filter. Bounds are kept as typed by the user and are not
/// checked to be numeric; the backend validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RangeBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<String>,
}

impl RangeBounds {
    pub fn is_empty(&self) -> bool {
        self.gte.is_none() && self.lte.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Range(RangeBounds),
}

impl FilterValue {
    /// Values that must never reach the backend.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Range(r) => r.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s.as_str()),
            FilterValue::Range(_) => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeBounds> {
        match self {
            FilterValue::Text(_) => None,
            FilterValue::Range(r) => Some(r),
        }
    }
}

/// Entity field name to value; keys are not namespaced by entity type.
pub type FilterMap = BTreeMap<String, FilterValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPayload {
    pub q: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub filters: FilterMap,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub offset: u64,
    pub limit: u64,
}

impl Default for SearchPayload {
    fn default() -> Self {
        Self {
            q: String::new(),
            entity_type: EntityType::Global,
            filters: FilterMap::new(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: DEFAULT_SORT_ORDER,
            offset: 0,
            limit: SEARCH_PAGE_LIMIT,
        }
    }
}

impl SearchPayload {
    pub fn with_offset(&self, offset: u64) -> Self {
        Self { offset, ..self.clone() }
    }

    /// Flattens the payload into the query parameters of `GET /api/search/`.
    ///
    /// Top-level fields are only emitted when non-empty (`offset` and `limit`
    /// are skipped at zero). Each filter becomes `filter_<key>=<value>`; range
    /// filters expand into `filter_<key>__gte` and `filter_<key>__lte` for
    /// each present bound. Empty values are never emitted.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.q.is_empty() {
            pairs.push(("q".to_string(), self.q.clone()));
        }
        pairs.push(("type".to_string(), self.entity_type.as_str().to_string()));
        for (key, value) in self.filters.iter() {
            match value {
                FilterValue::Text(text) => {
                    if !text.is_empty() {
                        pairs.push((format!("{FILTER_PARAM_PREFIX}{key}"), text.clone()));
                    }
                }
                FilterValue::Range(range) => {
                    if let Some(gte) = range.gte.as_ref().filter(|v| !v.is_empty()) {
                        pairs.push((format!("{FILTER_PARAM_PREFIX}{key}{RANGE_GTE_SUFFIX}"), gte.clone()));
                    }
                    if let Some(lte) = range.lte.as_ref().filter(|v| !v.is_empty()) {
                        pairs.push((format!("{FILTER_PARAM_PREFIX}{key}{RANGE_LTE_SUFFIX}"), lte.clone()));
                    }
                }
            }
        }
        if !self.sort_by.is_empty() {
            pairs.push(("sort_by".to_string(), self.sort_by.clone()));
        }
        pairs.push(("sort_order".to_string(), self.sort_order.as_str().to_string()));
        if self.offset > 0 {
            pairs.push(("offset".to_string(), self.offset.to_string()));
        }
        if self.limit > 0 {
            pairs.push(("limit".to_string(), self.limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(p: &SearchPayload) -> Vec<(String, String)> {
        p.to_query_pairs()
    }

    fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn has(flat: &[(String, String)], key: &str, value: &str) -> bool {
        flat.iter().any(|(k, v)| k == key && v == value)
    }

    #[test]
    fn default_global_payload_flattens_to_type_sort_and_limit() {
        let p = SearchPayload::default();
        assert_eq!(
            pairs(&p),
            owned(&[("type", "global"), ("sort_by", "created_at"), ("sort_order", "desc"), ("limit", "50")])
        );
    }

    #[test]
    fn filters_are_prefixed_and_empty_values_skipped() {
        let mut p = SearchPayload { q: "acme".to_string(), entity_type: EntityType::Accounts, offset: 100, ..Default::default() };
        p.filters.insert("industry".to_string(), FilterValue::Text("Retail".to_string()));
        p.filters.insert("city".to_string(), FilterValue::Text(String::new()));
        p.filters.insert("empty_range".to_string(), FilterValue::Range(RangeBounds::default()));

        assert_eq!(
            pairs(&p),
            owned(&[
                ("q", "acme"),
                ("type", "accounts"),
                ("filter_industry", "Retail"),
                ("sort_by", "created_at"),
                ("sort_order", "desc"),
                ("offset", "100"),
                ("limit", "50"),
            ])
        );
    }

    #[test]
    fn range_filters_expand_per_bound() {
        let mut p = SearchPayload { entity_type: EntityType::Deals, ..Default::default() };
        p.filters.insert(
            "value".to_string(),
            FilterValue::Range(RangeBounds { gte: Some("10".to_string()), lte: None }),
        );
        p.filters.insert(
            "probability".to_string(),
            FilterValue::Range(RangeBounds { gte: Some("20".to_string()), lte: Some("80".to_string()) }),
        );
        let flat = pairs(&p);
        assert!(has(&flat, "filter_value__gte", "10"));
        assert!(!flat.iter().any(|(k, _)| k == "filter_value__lte"));
        assert!(has(&flat, "filter_probability__gte", "20"));
        assert!(has(&flat, "filter_probability__lte", "80"));
        assert!(!flat.iter().any(|(_, v)| v.contains("object")));
    }

    #[test]
    fn non_numeric_range_bounds_pass_through() {
        let mut p = SearchPayload::default();
        p.filters.insert(
            "amount".to_string(),
            FilterValue::Range(RangeBounds { gte: Some("lots".to_string()), lte: None }),
        );
        assert!(has(&pairs(&p), "filter_amount__gte", "lots"));
    }

    #[test]
    fn payload_json_uses_type_key_and_sparse_ranges() {
        let mut p = SearchPayload { q: "jo".to_string(), entity_type: EntityType::Contacts, ..Default::default() };
        p.filters.insert(
            "age".to_string(),
            FilterValue::Range(RangeBounds { gte: None, lte: Some("40".to_string()) }),
        );
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "q": "jo",
                "type": "contacts",
                "filters": {"age": {"lte": "40"}},
                "sort_by": "created_at",
                "sort_order": "desc",
                "offset": 0,
                "limit": 50
            })
        );
        let back: SearchPayload = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }
}
