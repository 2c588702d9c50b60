//! State machine behind the advanced search form.
//!
//! Every transition returns the side effects the component has to run.
//! Searches only come out of [`AdvancedSearchState::submit`] and the one-time
//! auto-run in [`AdvancedSearchState::start`]; edits never search.

use common::{
    entity_type::EntityType,
    filter_descriptor::FilterDescriptor,
    filter_model::FilterModel,
    saved_search::{SavedSearch, SavedSearchCreated},
    search_const::SUGGESTION_MIN_QUERY_LEN,
    search_query::{SearchPayload, SortOrder},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorPhase {
    Idle,
    Loading(EntityType),
    Ready(EntityType),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdvancedSearchEffect {
    FetchFilterDescriptors(EntityType),
    FetchSuggestions { request_id: u64, query: String, entity_type: EntityType },
    Search(SearchPayload),
    SaveSearch(SavedSearch),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaveSearchDraft {
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub is_saving: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveSearchError {
    NameRequired,
    DialogClosed,
    AlreadySaving,
}

impl std::fmt::Display for SaveSearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => write!(f, "A name is required to save this search."),
            Self::DialogClosed => write!(f, "The save dialog is not open."),
            Self::AlreadySaving => write!(f, "This search is already being saved."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedSearchState {
    pub model: FilterModel,
    pub phase: DescriptorPhase,
    descriptor: Option<(EntityType, FilterDescriptor)>,
    pub suggestions: Vec<String>,
    pub show_suggestions: bool,
    last_suggestion_request: u64,
    pub save_dialog: Option<SaveSearchDraft>,
    started: bool,
}

impl Default for AdvancedSearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvancedSearchState {
    pub fn new() -> Self {
        Self {
            model: FilterModel::default(),
            phase: DescriptorPhase::Idle,
            descriptor: None,
            suggestions: Vec::new(),
            show_suggestions: false,
            last_suggestion_request: 0,
            save_dialog: None,
            started: false,
        }
    }

    /// Mount. Loads descriptors for a non-global initial type and runs the
    /// initial query once when it is non-empty.
    pub fn start(&mut self, initial_query: &str, initial_type: EntityType) -> Vec<AdvancedSearchEffect> {
        if self.started {
            return vec![];
        }
        self.started = true;
        self.model.query = initial_query.to_string();
        self.model.entity_type = initial_type;
        let mut effects = Vec::new();
        if !initial_type.is_global() {
            self.phase = DescriptorPhase::Loading(initial_type);
            effects.push(AdvancedSearchEffect::FetchFilterDescriptors(initial_type));
        }
        if !initial_query.is_empty() {
            effects.push(self.submit());
        }
        effects
    }

    pub fn entity_type(&self) -> EntityType {
        self.model.entity_type
    }

    pub fn set_entity_type(&mut self, entity_type: EntityType) -> Option<AdvancedSearchEffect> {
        if entity_type == self.model.entity_type {
            return None;
        }
        self.model.entity_type = entity_type;
        if entity_type.is_global() {
            return None;
        }
        self.phase = DescriptorPhase::Loading(entity_type);
        Some(AdvancedSearchEffect::FetchFilterDescriptors(entity_type))
    }

    /// Responses for a type that is no longer loading are dropped.
    pub fn filter_descriptors_loaded(&mut self, entity_type: EntityType, result: Result<FilterDescriptor, String>) {
        if self.phase != DescriptorPhase::Loading(entity_type) {
            return;
        }
        self.phase = DescriptorPhase::Ready(entity_type);
        match result {
            Ok(descriptor) => self.descriptor = Some((entity_type, descriptor)),
            Err(e) => {
                dioxus::logger::tracing::warn!("Failed to load filters for {entity_type}: {e}");
                self.descriptor = None;
            }
        }
    }

    /// Descriptor to render: none in the global scope or while loading.
    pub fn visible_descriptor(&self) -> Option<&FilterDescriptor> {
        if self.model.entity_type.is_global() {
            return None;
        }
        match (&self.phase, &self.descriptor) {
            (DescriptorPhase::Ready(phase_type), Some((loaded_type, descriptor))) if phase_type == loaded_type && *loaded_type == self.model.entity_type => Some(descriptor),
            _ => None,
        }
    }

    pub fn is_loading_descriptors(&self) -> bool {
        matches!(self.phase, DescriptorPhase::Loading(_))
    }

    pub fn set_query(&mut self, query: &str) -> Option<AdvancedSearchEffect> {
        self.model.query = query.to_string();
        if query.chars().count() < SUGGESTION_MIN_QUERY_LEN {
            self.suggestions.clear();
            self.dismiss_suggestions();
            return None;
        }
        self.last_suggestion_request += 1;
        Some(AdvancedSearchEffect::FetchSuggestions {
            request_id: self.last_suggestion_request,
            query: query.to_string(),
            entity_type: self.model.entity_type,
        })
    }

    /// Only the response to the latest request is applied. Errors keep the
    /// previous suggestions.
    pub fn suggestions_loaded(&mut self, request_id: u64, result: Result<Vec<String>, String>) {
        if request_id != self.last_suggestion_request {
            dioxus::logger::tracing::debug!("Dropping stale suggestions #{request_id}");
            return;
        }
        match result {
            Ok(suggestions) => {
                self.show_suggestions = !suggestions.is_empty();
                self.suggestions = suggestions;
            }
            Err(e) => dioxus::logger::tracing::warn!("Failed to load suggestions: {e}"),
        }
    }

    pub fn choose_suggestion(&mut self, suggestion: &str) {
        self.model.query = suggestion.to_string();
        self.dismiss_suggestions();
    }

    pub fn hide_suggestions(&mut self) {
        self.dismiss_suggestions();
    }

    /// Hides the list and orphans any suggestion request still in flight.
    fn dismiss_suggestions(&mut self) {
        self.show_suggestions = false;
        self.last_suggestion_request += 1;
    }

    pub fn set_text_filter(&mut self, key: &str, value: &str) {
        self.model.set_text_filter(key, value);
    }

    pub fn set_choice_filter(&mut self, key: &str, value: &str) {
        self.model.set_choice_filter(key, value);
    }

    pub fn set_date_range_filter(&mut self, key: &str, start: Option<&str>, end: Option<&str>) {
        self.model.set_date_range_filter(key, start, end);
    }

    pub fn set_number_range_filter(&mut self, key: &str, min: Option<&str>, max: Option<&str>) {
        self.model.set_number_range_filter(key, min, max);
    }

    pub fn set_sort_by(&mut self, sort_by: &str) {
        self.model.sort_by = sort_by.to_string();
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.model.sort_order = sort_order;
    }

    pub fn clear_all(&mut self) {
        self.model.clear_all();
        self.suggestions.clear();
        self.dismiss_suggestions();
    }

    pub fn submit(&mut self) -> AdvancedSearchEffect {
        self.dismiss_suggestions();
        AdvancedSearchEffect::Search(self.model.compose_payload(0))
    }

    pub fn open_save_dialog(&mut self) {
        if self.save_dialog.is_none() {
            self.save_dialog = Some(SaveSearchDraft::default());
        }
    }

    pub fn close_save_dialog(&mut self) {
        self.save_dialog = None;
    }

    pub fn edit_save_draft(&mut self, edit: impl FnOnce(&mut SaveSearchDraft)) {
        if let Some(draft) = self.save_dialog.as_mut() {
            edit(draft);
        }
    }

    pub fn submit_save_dialog(&mut self) -> Result<AdvancedSearchEffect, SaveSearchError> {
        let payload = self.model.compose_payload(0);
        let draft = self.save_dialog.as_mut().ok_or(SaveSearchError::DialogClosed)?;
        if draft.is_saving {
            return Err(SaveSearchError::AlreadySaving);
        }
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(SaveSearchError::NameRequired);
        }
        draft.is_saving = true;
        let saved = SavedSearch::from_payload(name, draft.description.trim().to_string(), draft.is_public, &payload);
        Ok(AdvancedSearchEffect::SaveSearch(saved))
    }

    /// Closes the dialog on success and hands back what the parent is told.
    /// On failure the dialog stays open with the draft intact.
    pub fn saved_search_finished(&mut self, result: Result<SavedSearchCreated, String>) -> Option<SavedSearchCreated> {
        match result {
            Ok(created) => {
                self.save_dialog = None;
                Some(created)
            }
            Err(e) => {
                dioxus::logger::tracing::error!("Failed to save search: {e}");
                if let Some(draft) = self.save_dialog.as_mut() {
                    draft.is_saving = false;
                }
                None
            }
        }
    }
}
