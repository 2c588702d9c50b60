//! Search endpoint for result lists.

use common::{search_query::SearchPayload, search_result::SearchResponse};

use crate::crm_utils::crm_client::CrmClient;

pub const SEARCH_PATH: &str = "/api/search/";

pub async fn search_for_results(client: &CrmClient, payload: &SearchPayload) -> anyhow::Result<SearchResponse> {
    let params = payload.to_query_pairs();
    tracing::info!(entity_type = %payload.entity_type, q = %payload.q, filters = payload.filters.len(), offset = payload.offset, "search");
    let response: SearchResponse = client.get_json(SEARCH_PATH, &params).await?;
    tracing::debug!(loaded = response.loaded_count(), total_count = response.total_count, "search results");
    Ok(response)
}
