use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::entity_type::EntityType;
use crate::components::search_components::search_result_item_card::EntityTypeIcon;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "CRM Search - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 46px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Find anything in your CRM"
            }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                TextSearchCard {}
                EntityTypeCard {}
            }
        }
    }
}

#[component]
fn TextSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-text-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 30px; font-weight: 500;", "Search" }
            div {
                style: "
                    font-size: 18px;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Search accounts, contacts, tasks, deals, quotes and invoices at once. Pick a type on the search page to filter and sort."
            }
            SearchCardInput {}
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            label { class: "sr-only", r#for: "x-home-search", "Search" }
            input {
                id: "x-home-search",
                r#type: "text",
                placeholder: "Search the CRM",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        n2.push(Route::search_page(search_q.read().clone(), EntityType::Global));
                    }
                },
            }
        }
    }
}

#[component]
fn EntityTypeCard() -> Element {
    rsx! {
        div {
            id: "x-card-entity-types",
            style: "
                display:flex;
                flex-direction: column;
                gap: 10px;
                width: 320px;
                border-radius: 16px;
                padding: 18px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            div { style: "font-size: 20px; font-weight: 500;", "Browse by type" }
            for entity_type in EntityType::ALL.into_iter().filter(|t| !t.is_global()) {
                Link {
                    key: "{entity_type}",
                    to: Route::search_page(String::new(), entity_type),
                    span {
                        style: "display:flex; flex-direction: row; align-items: center; gap: 8px; color: #4F46E5;",
                        EntityTypeIcon { entity_type }
                        "{entity_type.display_name()}"
                    }
                }
            }
        }
    }
}
