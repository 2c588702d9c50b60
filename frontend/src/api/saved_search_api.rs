use common::saved_search::{SavedSearch, SavedSearchCreated};
use dioxus::prelude::*;

#[server]
pub async fn create_saved_search(saved_search: SavedSearch) -> Result<SavedSearchCreated, ServerFnError> {
    let client = backend::crm_utils::crm_client::get_crm_client().map_err(crate::api::server_error)?;
    let x = backend::api::saved_searches::create_saved_search(&client, &saved_search).await;
    x.map_err(crate::api::server_error)
}
