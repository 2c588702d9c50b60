use serde::{Deserialize, Serialize};

use crate::entity_type::EntityType;
use crate::search_query::{FilterMap, SearchPayload, SortOrder};

/// Named snapshot of a search, persisted server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub name: String,
    pub description: String,
    pub search_type: EntityType,
    pub search_query: String,
    pub filters: FilterMap,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub is_public: bool,
}

impl SavedSearch {
    pub fn from_payload(name: String, description: String, is_public: bool, payload: &SearchPayload) -> Self {
        Self {
            name,
            description,
            search_type: payload.entity_type,
            search_query: payload.q.clone(),
            filters: payload.filters.clone(),
            sort_by: payload.sort_by.clone(),
            sort_order: payload.sort_order,
            is_public,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearchCreated {
    pub id: u64,
    pub name: String,
}
