//! Filter inputs generated from the descriptor of the selected type.

use dioxus::prelude::*;

use common::filter_descriptor::field_label;
use crate::components::search_components::advanced_search::AdvancedSearchContext;

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

#[component]
pub fn FilterControls() -> Element {
    let AdvancedSearchContext { state, .. } = use_context::<AdvancedSearchContext>();
    if state.read().is_loading_descriptors() {
        return rsx! {
            div { style: "font-size: 14px; color: #6B7280;", "Loading filters..." }
        };
    }
    let Some(descriptor) = state.read().visible_descriptor().cloned() else {
        return rsx! {};
    };
    if descriptor.is_empty() {
        return rsx! {
            div { style: "font-size: 14px; color: #6B7280;", "No filters available for this type." }
        };
    }

    rsx! {
        div {
            id: "x-filter-controls",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                gap: 12px;
                padding: 12px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
            ",
            for name in descriptor.text_filters {
                TextFilterInput { key: "text-{name}", field: name.clone() }
            }
            for (name, choices) in descriptor.choice_filters {
                ChoiceFilterSelect { key: "choice-{name}", field: name.clone(), choices }
            }
            for name in descriptor.date_filters {
                DateRangeFilterInput { key: "date-{name}", field: name.clone() }
            }
            for name in descriptor.number_filters {
                NumberRangeFilterInput { key: "number-{name}", field: name.clone() }
            }
        }
    }
}

#[component]
fn FilterField(field: String, children: Element) -> Element {
    rsx! {
        fieldset {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                border: none;
                margin: 0;
                padding: 0;
            ",
            legend { style: "font-size: 13px; font-weight: 500; color: #374151; padding: 0;", "{field_label(&field)}" }
            {children}
        }
    }
}

#[component]
fn TextFilterInput(field: String) -> Element {
    let AdvancedSearchContext { mut state, .. } = use_context::<AdvancedSearchContext>();
    let value = state.read().model.text_value(&field);
    let input_id = format!("x-filter-{field}");
    let filter_key = field.clone();
    rsx! {
        FilterField { field: field.clone(),
            label { class: "sr-only", r#for: "{input_id}", "{field_label(&field)}" }
            input {
                id: "{input_id}",
                class: "x-input",
                r#type: "text",
                value: "{value}",
                oninput: move |event: Event<FormData>| state.write().set_text_filter(&filter_key, &event.value()),
            }
        }
    }
}

#[component]
fn ChoiceFilterSelect(field: String, choices: Vec<String>) -> Element {
    let AdvancedSearchContext { mut state, .. } = use_context::<AdvancedSearchContext>();
    let value = state.read().model.text_value(&field);
    let input_id = format!("x-filter-{field}");
    let filter_key = field.clone();
    rsx! {
        FilterField { field: field.clone(),
            label { class: "sr-only", r#for: "{input_id}", "{field_label(&field)}" }
            select {
                id: "{input_id}",
                class: "x-select",
                onchange: move |event: Event<FormData>| state.write().set_choice_filter(&filter_key, &event.value()),
                option { value: "", selected: value.is_empty(), "Any" }
                for choice in choices {
                    option { value: "{choice}", selected: choice == value, "{field_label(&choice)}" }
                }
            }
        }
    }
}

#[component]
fn DateRangeFilterInput(field: String) -> Element {
    let AdvancedSearchContext { mut state, .. } = use_context::<AdvancedSearchContext>();
    let (start, end) = state.read().model.date_range_bounds(&field);
    let start_field = field.clone();
    let end_field = field.clone();
    rsx! {
        FilterField { field: field.clone(),
            div {
                style: "display: flex; flex-direction: row; gap: 6px; align-items: center;",
                label { class: "sr-only", r#for: "x-filter-{field}-start", "{field_label(&field)} from" }
                input {
                    id: "x-filter-{field}-start",
                    class: "x-input",
                    r#type: "date",
                    value: "{start}",
                    onchange: move |event: Event<FormData>| {
                        let (_, end) = state.peek().model.date_range_bounds(&start_field);
                        state.write().set_date_range_filter(&start_field, non_empty(&event.value()), non_empty(&end));
                    },
                }
                span { "to" }
                label { class: "sr-only", r#for: "x-filter-{field}-end", "{field_label(&field)} until" }
                input {
                    id: "x-filter-{field}-end",
                    class: "x-input",
                    r#type: "date",
                    value: "{end}",
                    onchange: move |event: Event<FormData>| {
                        let (start, _) = state.peek().model.date_range_bounds(&end_field);
                        state.write().set_date_range_filter(&end_field, non_empty(&start), non_empty(&event.value()));
                    },
                }
            }
        }
    }
}

/// Bounds are passed through unvalidated; the CRM rejects non-numeric input.
#[component]
fn NumberRangeFilterInput(field: String) -> Element {
    let AdvancedSearchContext { mut state, .. } = use_context::<AdvancedSearchContext>();
    let (min, max) = state.read().model.number_range_bounds(&field);
    let min_field = field.clone();
    let max_field = field.clone();
    rsx! {
        FilterField { field: field.clone(),
            div {
                style: "display: flex; flex-direction: row; gap: 6px; align-items: center;",
                label { class: "sr-only", r#for: "x-filter-{field}-min", "{field_label(&field)} minimum" }
                input {
                    id: "x-filter-{field}-min",
                    class: "x-input",
                    r#type: "number",
                    placeholder: "Min",
                    value: "{min}",
                    oninput: move |event: Event<FormData>| {
                        let (_, max) = state.peek().model.number_range_bounds(&min_field);
                        state.write().set_number_range_filter(&min_field, non_empty(&event.value()), non_empty(&max));
                    },
                }
                span { "to" }
                label { class: "sr-only", r#for: "x-filter-{field}-max", "{field_label(&field)} maximum" }
                input {
                    id: "x-filter-{field}-max",
                    class: "x-input",
                    r#type: "number",
                    placeholder: "Max",
                    value: "{max}",
                    oninput: move |event: Event<FormData>| {
                        let (min, _) = state.peek().model.number_range_bounds(&max_field);
                        state.write().set_number_range_filter(&max_field, non_empty(&min), non_empty(&event.value()));
                    },
                }
            }
        }
    }
}
