use common::{entity_type::EntityType, search_result::SuggestionsResponse};

use crate::crm_utils::crm_client::CrmClient;

pub const SEARCH_SUGGESTIONS_PATH: &str = "/api/search/suggestions/";

pub async fn fetch_search_suggestions(client: &CrmClient, query: &str, entity_type: EntityType) -> anyhow::Result<Vec<String>> {
    let params = [
        ("q".to_string(), query.to_string()),
        ("type".to_string(), entity_type.as_str().to_string()),
    ];
    let response: SuggestionsResponse = client.get_json(SEARCH_SUGGESTIONS_PATH, &params).await?;
    Ok(response.suggestions)
}
