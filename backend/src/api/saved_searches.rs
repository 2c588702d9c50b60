//! Saved search persistence.

use common::saved_search::{SavedSearch, SavedSearchCreated};

use crate::crm_utils::crm_client::CrmClient;

pub const SAVED_SEARCHES_PATH: &str = "/api/saved-searches/";

pub async fn create_saved_search(client: &CrmClient, saved_search: &SavedSearch) -> anyhow::Result<SavedSearchCreated> {
    if saved_search.name.trim().is_empty() {
        anyhow::bail!("Saved search name is required");
    }
    tracing::info!(name = %saved_search.name, search_type = %saved_search.search_type, is_public = saved_search.is_public, "create saved search");
    client.post_json(SAVED_SEARCHES_PATH, saved_search).await
}
