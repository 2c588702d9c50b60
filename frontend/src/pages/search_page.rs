use dioxus::{logger::tracing, prelude::*};

use common::{
    bulk_operation::BulkOperationRequest,
    entity_type::EntityType,
    saved_search::SavedSearchCreated,
    search_query::SearchPayload,
};
use crate::{
    api::search_api::{apply_bulk_operation, load_more_results, search_for_results},
    components::{
        error_boundary::ComponentErrorBoundary,
        page_notification::show_page_notification,
        search_components::{advanced_search::AdvancedSearch, search_results::SearchResults},
    },
    data_definitions::search_page_state::SearchPageState,
};

fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Search page
#[component]
pub fn SearchPage(q: String, search_type: EntityType) -> Element {
    let title = if q.is_empty() { "Search".to_string() } else { title_ellipsis(q.clone()) };
    rsx! {
        Title { "CRM Search: {title}" }
        // remount on navigation so the initial query runs for the new URL
        SearchPageRootComponent { key: "{search_type}:{q}", initial_query: q.clone(), initial_type: search_type }
    }
}

#[component]
fn SearchPageRootComponent(initial_query: ReadSignal<String>, initial_type: ReadSignal<EntityType>) -> Element {
    let mut page = use_signal(SearchPageState::new);

    let run_search = use_callback(move |payload: SearchPayload| {
        tracing::info!("searching {:?} in {}", payload.q, payload.entity_type);
        let generation = page.write().begin_search(payload.clone());
        spawn(async move {
            let result = search_for_results(payload).await.map_err(|e| e.to_string());
            page.write().search_finished(generation, result);
        });
    });

    let load_more = use_callback(move |_: ()| {
        let request = page.write().load_more_request();
        let Some(request) = request else {
            return;
        };
        spawn(async move {
            let result = load_more_results(request.query, request.offset).await.map_err(|e| e.to_string());
            let notification = page.write().load_more_finished(request.generation, result);
            if let Some(notification) = notification {
                show_page_notification(notification);
            }
        });
    });

    let bulk_action = use_callback(move |request: BulkOperationRequest| {
        tracing::info!("bulk {} on {} item(s)", request.action.as_str(), request.items.len());
        spawn(async move {
            let result = apply_bulk_operation(request).await.map_err(|e| e.to_string());
            let (notification, rerun) = page.write().bulk_action_finished(result);
            show_page_notification(notification);
            if let Some(payload) = rerun {
                run_search.call(payload);
            }
        });
    });

    let saved_search = use_callback(move |created: SavedSearchCreated| {
        tracing::info!("saved search #{} {:?}", created.id, created.name);
    });

    let is_searching = use_memo(move || page.read().is_loading);
    let is_loading_more = use_memo(move || page.read().is_loading_more);
    let results = use_memo(move || page.read().results.clone());
    let scope = use_memo(move || page.read().current_query.as_ref().map(|q| q.entity_type).unwrap_or_default());

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            AdvancedSearch {
                initial_query,
                initial_type,
                on_search: run_search,
                is_searching,
                on_saved_search: saved_search,
            }
            div {
                id: "x-search-results-space",
                style: "
                    flex-grow: 1;
                    overflow-y: auto;
                    background-color: #ECEEF2;
                ",
                ComponentErrorBoundary {
                    SearchResults {
                        results,
                        scope,
                        on_bulk_action: bulk_action,
                        on_load_more: load_more,
                        is_loading_more,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::title_ellipsis;

    #[test]
    fn long_titles_are_shortened() {
        assert_eq!(title_ellipsis("acme".to_string()), "acme");
        assert_eq!(title_ellipsis("a".repeat(25)), format!("{}...", "a".repeat(18)));
    }
}
