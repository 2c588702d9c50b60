//! Client API calls for search endpoints.

use common::{
    bulk_operation::BulkOperationRequest,
    entity_type::EntityType,
    filter_descriptor::FilterDescriptor,
    search_query::SearchPayload,
    search_result::{SearchResponse, SearchResultItem},
};
use dioxus::prelude::*;

#[server]
pub async fn fetch_filter_descriptor(entity_type: EntityType) -> Result<FilterDescriptor, ServerFnError> {
    let client = backend::crm_utils::crm_client::get_crm_client().map_err(crate::api::server_error)?;
    let x = backend::api::search::fetch_filter_descriptor(&client, entity_type).await;
    x.map_err(crate::api::server_error)
}

#[server]
pub async fn fetch_search_suggestions(query: String, entity_type: EntityType) -> Result<Vec<String>, ServerFnError> {
    let client = backend::crm_utils::crm_client::get_crm_client().map_err(crate::api::server_error)?;
    let x = backend::api::search::fetch_search_suggestions(&client, &query, entity_type).await;
    x.map_err(crate::api::server_error)
}

#[server]
pub async fn search_for_results(payload: SearchPayload) -> Result<SearchResponse, ServerFnError> {
    let client = backend::crm_utils::crm_client::get_crm_client().map_err(crate::api::server_error)?;
    let x = backend::api::search::search_for_results(&client, &payload).await;
    x.map_err(crate::api::server_error)
}

#[server]
pub async fn load_more_results(query: SearchPayload, offset: u64) -> Result<Vec<SearchResultItem>, ServerFnError> {
    let client = backend::crm_utils::crm_client::get_crm_client().map_err(crate::api::server_error)?;
    let x = backend::api::search::load_more_results(&client, &query, offset).await;
    x.map_err(crate::api::server_error)
}

#[server]
pub async fn apply_bulk_operation(request: BulkOperationRequest) -> Result<(), ServerFnError> {
    let client = backend::crm_utils::crm_client::get_crm_client().map_err(crate::api::server_error)?;
    let x = backend::api::search::apply_bulk_operation(&client, &request).await;
    x.map(|_answer| ()).map_err(crate::api::server_error)
}
