use common::bulk_operation::BulkOperationRequest;

use crate::crm_utils::crm_client::CrmClient;

pub const BULK_OPERATIONS_PATH: &str = "/api/search/bulk-operations/";

pub async fn apply_bulk_operation(client: &CrmClient, request: &BulkOperationRequest) -> anyhow::Result<serde_json::Value> {
    if request.items.is_empty() {
        anyhow::bail!("Bulk {} without selected items", request.action.as_str());
    }
    tracing::info!(action = request.action.as_str(), items = request.items.len(), "bulk operation");
    client.post_for_value(BULK_OPERATIONS_PATH, request).await
}
