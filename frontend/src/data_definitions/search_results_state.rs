//! Display, selection and bulk-action state of the result list.

use common::{
    bulk_operation::{BulkAction, BulkActionData, BulkOperationRequest, ExportFormat},
    entity_type::EntityType,
    search_result::{SearchResponse, SearchResultItem},
    selection::{SelectionId, SelectionSet},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResultsDisplay {
    Placeholder,
    Error(String),
    Results(Vec<(EntityType, Vec<SearchResultItem>)>),
}

impl SearchResultsDisplay {
    /// An error wins over any partial data; nothing to show is never an error.
    pub fn from_response(response: Option<&SearchResponse>, scope: EntityType) -> Self {
        let Some(response) = response else {
            return SearchResultsDisplay::Placeholder;
        };
        if let Some(error) = &response.error {
            return SearchResultsDisplay::Error(error.clone());
        }
        let groups = response.results.groups(scope);
        if groups.is_empty() {
            SearchResultsDisplay::Placeholder
        } else {
            SearchResultsDisplay::Results(groups)
        }
    }
}

pub fn show_load_more(response: Option<&SearchResponse>, has_load_more: bool) -> bool {
    match response {
        Some(response) => has_load_more && response.total_count > response.loaded_count(),
        None => false,
    }
}

/// How the select-all checkbox of a type group renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Partial,
    Checked,
}

impl SelectAllState {
    pub fn checked(self) -> bool {
        self == SelectAllState::Checked
    }

    pub fn is_partial(self) -> bool {
        self == SelectAllState::Partial
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulkDialog {
    pub action: BulkAction,
    pub data: BulkActionData,
}

impl BulkDialog {
    fn new(action: BulkAction) -> Self {
        let data = match action {
            BulkAction::Update => BulkActionData { status: Some(common::bulk_operation::BULK_STATUS_CHOICES[0].to_string()), ..Default::default() },
            BulkAction::Delete => BulkActionData { confirmation: Some(String::new()), ..Default::default() },
            BulkAction::Export => BulkActionData { format: Some(ExportFormat::default()), ..Default::default() },
        };
        Self { action, data }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResultsState {
    pub selected: SelectionSet,
    pub bulk_action: Option<BulkAction>,
    pub bulk_dialog: Option<BulkDialog>,
}

impl SearchResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_item(&mut self, id: SelectionId) {
        self.selected.toggle(id);
    }

    pub fn toggle_select_all(&mut self, entity_type: EntityType, items: &[SearchResultItem]) {
        self.selected.toggle_all_of_type(entity_type, items.iter().map(|i| i.id));
    }

    pub fn select_all_state(&self, entity_type: EntityType, items: &[SearchResultItem]) -> SelectAllState {
        let selected = items.iter().filter(|i| self.selected.contains(&SelectionId::new(entity_type, i.id))).count();
        match selected {
            0 => SelectAllState::Unchecked,
            n if n == items.len() => SelectAllState::Checked,
            _ => SelectAllState::Partial,
        }
    }

    pub fn select_bulk_action(&mut self, action: Option<BulkAction>) {
        self.bulk_action = action;
    }

    /// Needs both an action and a selection.
    pub fn open_bulk_dialog(&mut self) -> bool {
        match self.bulk_action {
            Some(action) if !self.selected.is_empty() => {
                self.bulk_dialog = Some(BulkDialog::new(action));
                true
            }
            _ => false,
        }
    }

    pub fn edit_bulk_dialog(&mut self, edit: impl FnOnce(&mut BulkActionData)) {
        if let Some(dialog) = self.bulk_dialog.as_mut() {
            edit(&mut dialog.data);
        }
    }

    pub fn cancel_bulk_dialog(&mut self) {
        self.bulk_dialog = None;
    }

    /// Builds the request and resets selection and action right away. The
    /// outcome of the request does not restore them.
    pub fn confirm_bulk_action(&mut self) -> Option<BulkOperationRequest> {
        let dialog = self.bulk_dialog.take()?;
        let request = BulkOperationRequest { action: dialog.action, items: self.selected.ids(), data: dialog.data };
        self.selected.clear();
        self.bulk_action = None;
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_result::SearchResultSet;

    fn items(ids: &[u64]) -> Vec<SearchResultItem> {
        ids.iter().map(|id| SearchResultItem { id: *id, fields: serde_json::Map::new() }).collect()
    }

    fn flat_response(ids: &[u64], total_count: u64) -> SearchResponse {
        SearchResponse { results: SearchResultSet::Flat(items(ids)), total_count, error: None }
    }

    #[test]
    fn nothing_to_show_is_a_placeholder() {
        assert_eq!(SearchResultsDisplay::from_response(None, EntityType::Global), SearchResultsDisplay::Placeholder);
        let empty_grouped: SearchResponse = serde_json::from_str(r#"{"results": {"contacts": [], "accounts": []}, "total_count": 0}"#).unwrap();
        assert_eq!(SearchResultsDisplay::from_response(Some(&empty_grouped), EntityType::Global), SearchResultsDisplay::Placeholder);
    }

    #[test]
    fn error_takes_priority_over_data() {
        let mut response = flat_response(&[1, 2], 2);
        response.error = Some("Search failed. Please try again.".to_string());
        assert_eq!(
            SearchResultsDisplay::from_response(Some(&response), EntityType::Contacts),
            SearchResultsDisplay::Error("Search failed. Please try again.".to_string())
        );
    }

    #[test]
    fn select_all_after_one_selected_empties_the_type() {
        let contacts = items(&[1, 2, 3]);
        let mut s = SearchResultsState::new();
        s.toggle_item(SelectionId::new(EntityType::Contacts, 2));
        s.toggle_select_all(EntityType::Contacts, &contacts);
        assert_eq!(s.selected.count_of_type(EntityType::Contacts), 0);
        s.toggle_select_all(EntityType::Contacts, &contacts);
        assert_eq!(s.selected.count_of_type(EntityType::Contacts), 3);
    }

    #[test]
    fn partly_selected_type_is_partial_not_checked() {
        let contacts = items(&[1, 2, 3]);
        let mut s = SearchResultsState::new();
        assert_eq!(s.select_all_state(EntityType::Contacts, &contacts), SelectAllState::Unchecked);

        s.toggle_item(SelectionId::new(EntityType::Contacts, 2));
        s.toggle_item(SelectionId::new(EntityType::Accounts, 1));
        let state = s.select_all_state(EntityType::Contacts, &contacts);
        assert_eq!(state, SelectAllState::Partial);
        assert!(state.is_partial());
        assert!(!state.checked());

        s.toggle_select_all(EntityType::Contacts, &contacts);
        s.toggle_select_all(EntityType::Contacts, &contacts);
        let state = s.select_all_state(EntityType::Contacts, &contacts);
        assert_eq!(state, SelectAllState::Checked);
        assert!(state.checked());
        assert!(!state.is_partial());

        assert_eq!(s.select_all_state(EntityType::Deals, &[]), SelectAllState::Unchecked);
    }

    #[test]
    fn load_more_only_while_results_remain() {
        let partial = flat_response(&[1, 2], 3);
        assert!(show_load_more(Some(&partial), true));
        assert!(!show_load_more(Some(&partial), false));
        let complete = flat_response(&[1, 2, 3], 3);
        assert!(!show_load_more(Some(&complete), true));
        assert!(!show_load_more(None, true));
    }

    #[test]
    fn bulk_dialog_needs_action_and_selection() {
        let mut s = SearchResultsState::new();
        s.select_bulk_action(Some(BulkAction::Delete));
        assert!(!s.open_bulk_dialog());
        s.toggle_item(SelectionId::new(EntityType::Tasks, 9));
        s.select_bulk_action(None);
        assert!(!s.open_bulk_dialog());
        s.select_bulk_action(Some(BulkAction::Delete));
        assert!(s.open_bulk_dialog());
        assert_eq!(s.bulk_dialog.as_ref().unwrap().data.confirmation.as_deref(), Some(""));
    }

    #[test]
    fn cancel_keeps_selection() {
        let mut s = SearchResultsState::new();
        s.toggle_item(SelectionId::new(EntityType::Tasks, 9));
        s.select_bulk_action(Some(BulkAction::Update));
        s.open_bulk_dialog();
        s.cancel_bulk_dialog();
        assert!(s.bulk_dialog.is_none());
        assert_eq!(s.selected.len(), 1);
        assert_eq!(s.bulk_action, Some(BulkAction::Update));
    }

    #[test]
    fn confirm_builds_request_and_resets_selection() {
        let mut s = SearchResultsState::new();
        s.toggle_item(SelectionId::new(EntityType::Contacts, 1));
        s.toggle_item(SelectionId::new(EntityType::Accounts, 1));
        s.select_bulk_action(Some(BulkAction::Export));
        s.open_bulk_dialog();
        s.edit_bulk_dialog(|data| data.format = Some(ExportFormat::Pdf));

        let request = s.confirm_bulk_action().expect("request");
        assert_eq!(request.action, BulkAction::Export);
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.data.format, Some(ExportFormat::Pdf));
        assert!(s.selected.is_empty());
        assert_eq!(s.bulk_action, None);
        assert!(s.bulk_dialog.is_none());
        assert_eq!(s.confirm_bulk_action(), None);
    }
}
