//! Advanced search form: type, query with suggestions, filters, sort and
//! saved searches. Searches only leave this component on submit.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_content_icons::MdSave, md_navigation_icons::MdClose}};

use common::{
    entity_type::EntityType,
    saved_search::SavedSearchCreated,
    search_const::{MAX_SUGGESTIONS_SHOWN, SORT_FIELDS},
    search_query::{SearchPayload, SortOrder},
};
use crate::{
    api::{
        saved_search_api::create_saved_search,
        search_api::{fetch_filter_descriptor, fetch_search_suggestions},
    },
    components::{
        page_notification::show_page_notification,
        search_components::{filter_controls::FilterControls, save_search_dialog::SaveSearchDialog},
    },
    data_definitions::{
        advanced_search_state::{AdvancedSearchEffect, AdvancedSearchState},
        search_page_state::PageNotification,
    },
};

#[derive(Clone, Copy)]
pub struct AdvancedSearchContext {
    pub state: Signal<AdvancedSearchState>,
    pub run_effect: Callback<AdvancedSearchEffect>,
}

#[component]
pub fn AdvancedSearch(
    initial_query: ReadSignal<String>,
    initial_type: ReadSignal<EntityType>,
    on_search: Callback<SearchPayload>,
    is_searching: ReadSignal<bool>,
    on_saved_search: Option<Callback<SavedSearchCreated>>,
) -> Element {
    let mut state = use_signal(AdvancedSearchState::new);

    let run_effect = use_callback(move |effect: AdvancedSearchEffect| {
        tracing::debug!("advanced search effect: {:?}", effect);
        match effect {
            AdvancedSearchEffect::FetchFilterDescriptors(entity_type) => {
                spawn(async move {
                    let result = fetch_filter_descriptor(entity_type).await.map_err(|e| e.to_string());
                    state.write().filter_descriptors_loaded(entity_type, result);
                });
            }
            AdvancedSearchEffect::FetchSuggestions { request_id, query, entity_type } => {
                spawn(async move {
                    let result = fetch_search_suggestions(query, entity_type).await.map_err(|e| e.to_string());
                    state.write().suggestions_loaded(request_id, result);
                });
            }
            AdvancedSearchEffect::Search(payload) => on_search.call(payload),
            AdvancedSearchEffect::SaveSearch(saved_search) => {
                spawn(async move {
                    let result = create_saved_search(saved_search).await.map_err(|e| e.to_string());
                    let error = result.as_ref().err().cloned();
                    let created = state.write().saved_search_finished(result);
                    match (created, error) {
                        (Some(created), _) => {
                            show_page_notification(PageNotification::success("Search saved", created.name.as_str()));
                            if let Some(on_saved_search) = on_saved_search {
                                on_saved_search.call(created);
                            }
                        }
                        (None, Some(e)) => show_page_notification(PageNotification::failure("Failed to save search", e)),
                        (None, None) => {}
                    }
                });
            }
        }
    });

    use_effect(move || {
        let effects = state.write().start(&initial_query.peek(), *initial_type.peek());
        for effect in effects {
            run_effect.call(effect);
        }
    });

    use_context_provider(|| AdvancedSearchContext { state, run_effect });

    let entity_type = state.read().entity_type();
    let save_dialog_open = state.read().save_dialog.is_some();

    rsx! {
        div {
            id: "x-advanced-search",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 16px;
                background-color: #F8FCFF;
                border-bottom: 1px solid rgb(164, 164, 164);
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    flex-wrap: wrap;
                ",
                SearchTypeSelect {}
                QueryInputWithSuggestions {}
                if !entity_type.is_global() {
                    SortControls {}
                }
            }
            if !entity_type.is_global() {
                FilterControls {}
            }
            ActionButtons { is_searching }
        }
        if save_dialog_open {
            SaveSearchDialog {}
        }
    }
}

#[component]
fn SearchTypeSelect() -> Element {
    let AdvancedSearchContext { mut state, run_effect } = use_context::<AdvancedSearchContext>();
    let current = state.read().entity_type();
    rsx! {
        label { class: "sr-only", r#for: "x-search-type", "Search type" }
        select {
            id: "x-search-type",
            class: "x-select",
            value: "{current.as_str()}",
            onchange: move |event: Event<FormData>| {
                let Ok(entity_type) = event.value().parse::<EntityType>() else {
                    tracing::warn!("unknown search type {:?}", event.value());
                    return;
                };
                let effect = state.write().set_entity_type(entity_type);
                if let Some(effect) = effect {
                    run_effect.call(effect);
                }
            },
            for entity_type in EntityType::ALL {
                option {
                    value: "{entity_type.as_str()}",
                    selected: entity_type == current,
                    "{entity_type.display_name()}"
                }
            }
        }
    }
}

#[component]
fn QueryInputWithSuggestions() -> Element {
    let AdvancedSearchContext { mut state, run_effect } = use_context::<AdvancedSearchContext>();
    let query = state.read().model.query.clone();
    let show_suggestions = state.read().show_suggestions;
    let suggestions = state.read().suggestions.iter().take(MAX_SUGGESTIONS_SHOWN).cloned().collect::<Vec<_>>();

    rsx! {
        div {
            style: "position: relative; flex: 1; min-width: 300px; max-width: 600px;",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 24px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
                label { class: "sr-only", r#for: "x-search-query", "Search query" }
                input {
                    id: "x-search-query",
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: "Search accounts, contacts, deals...",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 18px;
                    ",
                    value: "{query}",
                    oninput: move |event: Event<FormData>| {
                        let effect = state.write().set_query(&event.value());
                        if let Some(effect) = effect {
                            run_effect.call(effect);
                        }
                    },
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            event.prevent_default();
                            let effect = state.write().submit();
                            run_effect.call(effect);
                        } else if event.key() == Key::Escape {
                            state.write().hide_suggestions();
                        }
                    },
                    onblur: move |_| state.write().hide_suggestions(),
                }
            }
            if show_suggestions && !suggestions.is_empty() {
                ul {
                    class: "x-suggestions",
                    role: "listbox",
                    for suggestion in suggestions {
                        li {
                            key: "{suggestion}",
                            role: "option",
                            // mousedown fires before the input loses focus
                            onmousedown: {
                                let suggestion = suggestion.clone();
                                move |event: Event<MouseData>| {
                                    event.prevent_default();
                                    state.write().choose_suggestion(&suggestion);
                                }
                            },
                            "{suggestion}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SortControls() -> Element {
    let AdvancedSearchContext { mut state, .. } = use_context::<AdvancedSearchContext>();
    let sort_by = state.read().model.sort_by.clone();
    let sort_order = state.read().model.sort_order;
    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            label { r#for: "x-sort-by", style: "font-size: 14px; color: #374151;", "Sort by" }
            select {
                id: "x-sort-by",
                class: "x-select",
                onchange: move |event: Event<FormData>| state.write().set_sort_by(&event.value()),
                for (field, label) in SORT_FIELDS {
                    option { value: "{field}", selected: field == sort_by, "{label}" }
                }
            }
            label { class: "sr-only", r#for: "x-sort-order", "Sort order" }
            select {
                id: "x-sort-order",
                class: "x-select",
                onchange: move |event: Event<FormData>| {
                    if let Some(order) = SortOrder::parse(&event.value()) {
                        state.write().set_sort_order(order);
                    }
                },
                option { value: "desc", selected: sort_order == SortOrder::Desc, "Descending" }
                option { value: "asc", selected: sort_order == SortOrder::Asc, "Ascending" }
            }
        }
    }
}

#[component]
fn ActionButtons(is_searching: ReadSignal<bool>) -> Element {
    let AdvancedSearchContext { mut state, run_effect } = use_context::<AdvancedSearchContext>();
    let searching = is_searching();
    let active_filters = state.read().model.filters.len();
    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 10px;",
            button {
                class: "x-button x-button-primary",
                disabled: searching,
                onclick: move |_| {
                    let effect = state.write().submit();
                    run_effect.call(effect);
                },
                Icon { icon: MdSearch, style: "width: 18px; height: 18px;" }
                if searching { "Searching..." } else { "Search" }
            }
            button {
                class: "x-button",
                onclick: move |_| state.write().clear_all(),
                Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                "Clear filters"
            }
            button {
                class: "x-button",
                onclick: move |_| state.write().open_save_dialog(),
                Icon { icon: MdSave, style: "width: 18px; height: 18px;" }
                "Save search"
            }
            if active_filters > 0 {
                span {
                    style: "font-size: 14px; color: #4F46E5;",
                    "{active_filters} active filter(s)"
                }
            }
        }
    }
}
