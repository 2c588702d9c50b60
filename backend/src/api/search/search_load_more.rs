//! Next page of a flat result list.

use common::{search_query::SearchPayload, search_result::{LoadMoreResponse, SearchResultItem}};

use crate::crm_utils::crm_client::CrmClient;

pub const SEARCH_ADVANCED_PATH: &str = "/api/search/advanced/";

/// Filtered queries page through the advanced endpoint, free-text ones
/// through the plain search endpoint.
pub fn load_more_path(payload: &SearchPayload) -> &'static str {
    if payload.filters.is_empty() {
        super::search_for_results::SEARCH_PATH
    } else {
        SEARCH_ADVANCED_PATH
    }
}

pub async fn load_more_results(client: &CrmClient, query: &SearchPayload, offset: u64) -> anyhow::Result<Vec<SearchResultItem>> {
    let body = query.with_offset(offset);
    let path = load_more_path(&body);
    tracing::info!(path, offset, "load more");
    let response: LoadMoreResponse = client.post_json(path, &body).await?;
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_query::FilterValue;

    #[test]
    fn filtered_queries_use_the_advanced_endpoint() {
        let mut payload = SearchPayload::default();
        assert_eq!(load_more_path(&payload), "/api/search/");
        payload.filters.insert("stage".to_string(), FilterValue::Text("won".to_string()));
        assert_eq!(load_more_path(&payload), "/api/search/advanced/");
    }
}
