//! Filter descriptors per entity type.

use std::collections::BTreeMap;

use common::{entity_type::EntityType, filter_descriptor::FilterDescriptor};

use crate::crm_utils::crm_client::CrmClient;

pub const SEARCH_FILTERS_PATH: &str = "/api/search/filters/";

/// The backend answers `{<type>: descriptor}`; a missing entry means the type
/// has no filterable fields.
pub async fn fetch_filter_descriptor(client: &CrmClient, entity_type: EntityType) -> anyhow::Result<FilterDescriptor> {
    let params = [("entity_type".to_string(), entity_type.as_str().to_string())];
    let mut response: BTreeMap<String, FilterDescriptor> = client.get_json(SEARCH_FILTERS_PATH, &params).await?;
    Ok(response.remove(entity_type.as_str()).unwrap_or_default())
}
