//! Result list with per-type selection, bulk actions and "load more".

use dioxus::prelude::*;
use common::{
    bulk_operation::{BulkAction, BulkOperationRequest},
    entity_type::EntityType,
    search_result::{SearchResponse, SearchResultItem},
};

use crate::{
    components::search_components::{
        bulk_action_dialog::BulkActionDialog,
        search_result_item_card::{EntityTypeIcon, SearchResultItemCard},
    },
    data_definitions::search_results_state::{SearchResultsDisplay, SearchResultsState, show_load_more},
};

#[component]
pub fn SearchResults(
    results: ReadSignal<Option<SearchResponse>>,
    scope: ReadSignal<EntityType>,
    on_bulk_action: Callback<BulkOperationRequest>,
    on_load_more: Option<Callback<()>>,
    is_loading_more: ReadSignal<bool>,
) -> Element {
    let state = use_signal(SearchResultsState::new);
    let display = SearchResultsDisplay::from_response(results.read().as_ref(), scope());
    let total_count = results.read().as_ref().map(|r| r.total_count).unwrap_or(0);
    let can_load_more = show_load_more(results.read().as_ref(), on_load_more.is_some());
    let dialog_open = state.read().bulk_dialog.is_some();

    match display {
        SearchResultsDisplay::Placeholder => rsx! {
            div {
                id: "x-search-results-placeholder",
                style: "
                    padding: 40px;
                    text-align: center;
                    font-size: 20px;
                    color: rgba(0, 0, 0, 0.5);
                ",
                "Enter search terms to find records."
            }
        },
        SearchResultsDisplay::Error(message) => rsx! {
            div {
                id: "x-search-results-error",
                role: "alert",
                style: "
                    color: darkred;
                    font-size: 18px;
                    border: 1px solid red;
                    padding: 10px;
                    border-radius: 5px;
                    margin: 15px;
                ",
                "{message}"
            }
        },
        SearchResultsDisplay::Results(groups) => rsx! {
            div {
                id: "x-search-results",
                style: "display: flex; flex-direction: column; gap: 8px; padding: 8px;",
                BulkActionBar { state, total_count }
                for (entity_type, items) in groups {
                    ResultGroup { key: "{entity_type}", state, entity_type, items }
                }
                if can_load_more {
                    div {
                        style: "display: flex; justify-content: center; padding: 12px;",
                        button {
                            class: "x-button",
                            disabled: is_loading_more(),
                            onclick: move |_| {
                                if let Some(on_load_more) = on_load_more {
                                    on_load_more.call(());
                                }
                            },
                            if is_loading_more() { "Loading..." } else { "Load more" }
                        }
                    }
                }
            }
            if dialog_open {
                BulkActionDialog { state, on_bulk_action }
            }
        },
    }
}

#[component]
fn BulkActionBar(state: Signal<SearchResultsState>, total_count: u64) -> Element {
    let mut state = state;
    let selected_count = state.read().selected.len();
    let bulk_action = state.read().bulk_action;
    let action_value = bulk_action.map(|a| a.as_str()).unwrap_or("");
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 8px 12px;
                background-color: white;
                border-radius: 8px;
                border: 1px solid #E5E7EB;
            ",
            span { style: "font-size: 16px; color: #111827;", "{total_count} results" }
            div { style: "flex: 1;" }
            span { style: "font-size: 14px; color: #4F46E5;", "{selected_count} selected" }
            label { class: "sr-only", r#for: "x-bulk-action", "Bulk action" }
            select {
                id: "x-bulk-action",
                class: "x-select",
                value: "{action_value}",
                onchange: move |event: Event<FormData>| state.write().select_bulk_action(BulkAction::parse(&event.value())),
                option { value: "", selected: bulk_action.is_none(), "Bulk actions..." }
                for action in BulkAction::ALL {
                    option { value: "{action.as_str()}", selected: Some(action) == bulk_action, "{action.label()}" }
                }
            }
            button {
                class: "x-button x-button-primary",
                disabled: bulk_action.is_none() || selected_count == 0,
                onclick: move |_| {
                    state.write().open_bulk_dialog();
                },
                "Apply"
            }
        }
    }
}

#[component]
fn ResultGroup(state: Signal<SearchResultsState>, entity_type: EntityType, items: Vec<SearchResultItem>) -> Element {
    let mut state = state;
    let select_all = state.read().select_all_state(entity_type, &items);
    let selected_of_type = state.read().selected.count_of_type(entity_type);
    let item_count = items.len();
    let group_items = items.clone();
    rsx! {
        section {
            aria_label: "{entity_type.display_name()}",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 10px;
                    padding: 6px 16px;
                    font-size: 18px;
                    font-weight: 500;
                ",
                label { class: "sr-only", r#for: "x-select-all-{entity_type}", "Select all {entity_type.display_name()}" }
                input {
                    id: "x-select-all-{entity_type}",
                    r#type: "checkbox",
                    checked: select_all.checked(),
                    onchange: move |_| state.write().toggle_select_all(entity_type, &group_items),
                }
                EntityTypeIcon { entity_type }
                span { "{entity_type.display_name()} ({item_count})" }
                if select_all.is_partial() {
                    span { style: "font-size: 14px; font-weight: 400; color: #4F46E5;", "{selected_of_type} selected" }
                }
            }
            for item in items {
                ResultRow { key: "{item.id}", state, entity_type, item }
            }
        }
    }
}

#[component]
fn ResultRow(state: Signal<SearchResultsState>, entity_type: EntityType, item: SearchResultItem) -> Element {
    let mut state = state;
    let selection_id = item.selection_id(entity_type);
    let selected = state.read().selected.contains(&selection_id);
    rsx! {
        SearchResultItemCard {
            item,
            entity_type,
            selected,
            on_toggle: move |_| state.write().toggle_item(selection_id),
        }
    }
}
