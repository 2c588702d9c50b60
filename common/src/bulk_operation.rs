use serde::{Deserialize, Serialize};

use crate::selection::SelectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Update,
    Delete,
    Export,
}

impl BulkAction {
    pub const ALL: [BulkAction; 3] = [BulkAction::Update, BulkAction::Delete, BulkAction::Export];

    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::Update => "update",
            BulkAction::Delete => "delete",
            BulkAction::Export => "export",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Update => "Update status",
            BulkAction::Delete => "Delete",
            BulkAction::Export => "Export",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        BulkAction::ALL.iter().find(|a| a.as_str() == s).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Pdf];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ExportFormat::ALL.iter().find(|f| f.as_str() == s).copied()
    }
}

pub const BULK_STATUS_CHOICES: [&str; 4] = ["active", "inactive", "pending", "completed"];

/// Form values of the confirmation dialog; only the field of the chosen
/// action is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BulkActionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ExportFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkOperationRequest {
    pub action: BulkAction,
    pub items: Vec<SelectionId>,
    pub data: BulkActionData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_type::EntityType;

    #[test]
    fn request_body_uses_composite_ids_and_sparse_data() {
        let req = BulkOperationRequest {
            action: BulkAction::Export,
            items: vec![SelectionId::new(EntityType::Contacts, 3), SelectionId::new(EntityType::Accounts, 3)],
            data: BulkActionData { format: Some(ExportFormat::Xlsx), ..Default::default() },
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "action": "export",
                "items": ["contacts:3", "accounts:3"],
                "data": {"format": "xlsx"}
            })
        );
    }
}
