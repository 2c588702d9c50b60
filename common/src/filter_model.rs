//! Filter widget state and payload composition.
//!
//! Widgets write into a flat [`FilterMap`] keyed by entity field name. Date
//! ranges use three key shapes depending on which ends are filled: the
//! combined `field = "<start> to <end>"`, or a single `field__gte` /
//! `field__lte`. Only one shape exists for a field at any time.

use crate::entity_type::EntityType;
use crate::search_const::{DEFAULT_SORT_BY, DEFAULT_SORT_ORDER, RANGE_GTE_SUFFIX, RANGE_LTE_SUFFIX, SEARCH_PAGE_LIMIT};
use crate::search_query::{FilterMap, FilterValue, RangeBounds, SearchPayload, SortOrder};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterModel {
    pub query: String,
    pub entity_type: EntityType,
    pub filters: FilterMap,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl Default for FilterModel {
    fn default() -> Self {
        Self {
            query: String::new(),
            entity_type: EntityType::Global,
            filters: FilterMap::new(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: DEFAULT_SORT_ORDER,
        }
    }
}

fn present(v: Option<&str>) -> Option<String> {
    v.filter(|s| !s.is_empty()).map(|s| s.to_string())
}

impl FilterModel {
    pub fn new(query: impl Into<String>, entity_type: EntityType) -> Self {
        Self { query: query.into(), entity_type, ..Default::default() }
    }

    /// Overwrites the value. An empty string is kept as a transient value
    /// until the payload is composed.
    pub fn set_text_filter(&mut self, key: &str, value: &str) {
        self.filters.insert(key.to_string(), FilterValue::Text(value.to_string()));
    }

    /// Picking the empty option of a choice widget removes the filter.
    pub fn set_choice_filter(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), FilterValue::Text(value.to_string()));
        }
    }

    pub fn set_date_range_filter(&mut self, key: &str, start: Option<&str>, end: Option<&str>) {
        let gte_key = format!("{key}{RANGE_GTE_SUFFIX}");
        let lte_key = format!("{key}{RANGE_LTE_SUFFIX}");
        self.filters.remove(key);
        self.filters.remove(&gte_key);
        self.filters.remove(&lte_key);
        match (present(start), present(end)) {
            (Some(start), Some(end)) => {
                self.filters.insert(key.to_string(), FilterValue::Text(format!("{start} to {end}")));
            }
            (Some(start), None) => {
                self.filters.insert(gte_key, FilterValue::Text(start));
            }
            (None, Some(end)) => {
                self.filters.insert(lte_key, FilterValue::Text(end));
            }
            (None, None) => {}
        }
    }

    /// Stores only the bounds that are present; drops the key when none are.
    pub fn set_number_range_filter(&mut self, key: &str, min: Option<&str>, max: Option<&str>) {
        let bounds = RangeBounds { gte: present(min), lte: present(max) };
        if bounds.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), FilterValue::Range(bounds));
        }
    }

    pub fn remove_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    /// Start and end of a date filter as currently stored, for redisplay.
    pub fn date_range_bounds(&self, key: &str) -> (String, String) {
        if let Some(FilterValue::Text(combined)) = self.filters.get(key) {
            if let Some((start, end)) = combined.split_once(" to ") {
                return (start.to_string(), end.to_string());
            }
        }
        let bound = |suffix: &str| {
            self.filters
                .get(&format!("{key}{suffix}"))
                .and_then(|v| v.as_text())
                .unwrap_or_default()
                .to_string()
        };
        (bound(RANGE_GTE_SUFFIX), bound(RANGE_LTE_SUFFIX))
    }

    pub fn number_range_bounds(&self, key: &str) -> (String, String) {
        match self.filters.get(key).and_then(|v| v.as_range()) {
            Some(r) => (r.gte.clone().unwrap_or_default(), r.lte.clone().unwrap_or_default()),
            None => (String::new(), String::new()),
        }
    }

    pub fn text_value(&self, key: &str) -> String {
        self.filters.get(key).and_then(|v| v.as_text()).unwrap_or_default().to_string()
    }

    /// Resets query and filters. Type and sort survive.
    pub fn clear_all(&mut self) {
        self.query.clear();
        self.filters.clear();
    }

    pub fn compose_payload(&self, offset: u64) -> SearchPayload {
        let filters = self
            .filters
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        SearchPayload {
            q: self.query.clone(),
            entity_type: self.entity_type,
            filters,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
            offset,
            limit: SEARCH_PAGE_LIMIT,
        }
    }
}
