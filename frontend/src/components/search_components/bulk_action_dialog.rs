//! Confirmation dialog for a bulk action. The form depends on the action.

use dioxus::prelude::*;
use common::bulk_operation::{BULK_STATUS_CHOICES, BulkAction, BulkOperationRequest, ExportFormat};

use crate::data_definitions::search_results_state::SearchResultsState;

#[component]
pub fn BulkActionDialog(state: Signal<SearchResultsState>, on_bulk_action: Callback<BulkOperationRequest>) -> Element {
    let mut state = state;
    let Some(dialog) = state.read().bulk_dialog.clone() else {
        return rsx! {};
    };
    let selected_count = state.read().selected.len();
    let action_label = dialog.action.label();

    rsx! {
        div {
            class: "x-modal-backdrop",
            div {
                class: "x-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "x-bulk-dialog-title",
                h2 { id: "x-bulk-dialog-title", "{action_label} {selected_count} selected item(s)" }
                match dialog.action {
                    BulkAction::Update => rsx! {
                        label { r#for: "x-bulk-status", "New status" }
                        select {
                            id: "x-bulk-status",
                            class: "x-select",
                            onchange: move |event: Event<FormData>| state.write().edit_bulk_dialog(|data| data.status = Some(event.value())),
                            for status in BULK_STATUS_CHOICES {
                                option { value: "{status}", selected: dialog.data.status.as_deref() == Some(status), "{status}" }
                            }
                        }
                    },
                    BulkAction::Delete => rsx! {
                        p { style: "color: #B91C1C;", "This permanently deletes the selected records." }
                        label { r#for: "x-bulk-confirmation", "Type DELETE to confirm" }
                        input {
                            id: "x-bulk-confirmation",
                            class: "x-input",
                            r#type: "text",
                            value: "{dialog.data.confirmation.clone().unwrap_or_default()}",
                            oninput: move |event: Event<FormData>| state.write().edit_bulk_dialog(|data| data.confirmation = Some(event.value())),
                        }
                    },
                    BulkAction::Export => rsx! {
                        label { r#for: "x-bulk-format", "Export format" }
                        select {
                            id: "x-bulk-format",
                            class: "x-select",
                            onchange: move |event: Event<FormData>| {
                                if let Some(format) = ExportFormat::parse(&event.value()) {
                                    state.write().edit_bulk_dialog(|data| data.format = Some(format));
                                }
                            },
                            for format in ExportFormat::ALL {
                                option { value: "{format.as_str()}", selected: dialog.data.format == Some(format), "{format.as_str().to_uppercase()}" }
                            }
                        }
                    },
                }
                div {
                    class: "x-modal-actions",
                    button {
                        class: "x-button",
                        onclick: move |_| state.write().cancel_bulk_dialog(),
                        "Cancel"
                    }
                    button {
                        class: "x-button x-button-primary",
                        onclick: move |_| {
                            let request = state.write().confirm_bulk_action();
                            if let Some(request) = request {
                                on_bulk_action.call(request);
                            }
                        },
                        "Confirm"
                    }
                }
            }
        }
    }
}
