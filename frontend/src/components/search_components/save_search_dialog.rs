use dioxus::prelude::*;

use crate::{
    components::search_components::advanced_search::AdvancedSearchContext,
    data_definitions::advanced_search_state::SaveSearchDraft,
};

#[component]
pub fn SaveSearchDialog() -> Element {
    let AdvancedSearchContext { mut state, run_effect } = use_context::<AdvancedSearchContext>();
    let mut error_message = use_signal(|| None::<String>);
    let Some(SaveSearchDraft { name, description, is_public, is_saving }) = state.read().save_dialog.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "x-modal-backdrop",
            div {
                class: "x-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "x-save-search-title",
                h2 { id: "x-save-search-title", "Save search" }
                label { r#for: "x-save-search-name", "Name" }
                input {
                    id: "x-save-search-name",
                    class: "x-input",
                    r#type: "text",
                    value: "{name}",
                    oninput: move |event: Event<FormData>| {
                        error_message.set(None);
                        state.write().edit_save_draft(|draft| draft.name = event.value());
                    },
                }
                label { r#for: "x-save-search-description", "Description" }
                textarea {
                    id: "x-save-search-description",
                    class: "x-input",
                    rows: "3",
                    value: "{description}",
                    oninput: move |event: Event<FormData>| state.write().edit_save_draft(|draft| draft.description = event.value()),
                }
                label {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                    input {
                        r#type: "checkbox",
                        checked: is_public,
                        onchange: move |event: Event<FormData>| state.write().edit_save_draft(|draft| draft.is_public = event.checked()),
                    }
                    "Share with my team"
                }
                if let Some(message) = error_message() {
                    div { role: "alert", style: "color: #B91C1C; font-size: 14px;", "{message}" }
                }
                div {
                    class: "x-modal-actions",
                    button {
                        class: "x-button",
                        onclick: move |_| {
                            error_message.set(None);
                            state.write().close_save_dialog();
                        },
                        "Cancel"
                    }
                    button {
                        class: "x-button x-button-primary",
                        disabled: is_saving,
                        onclick: move |_| {
                            let submitted = state.write().submit_save_dialog();
                            match submitted {
                                Ok(effect) => run_effect.call(effect),
                                Err(e) => error_message.set(Some(e.to_string())),
                            }
                        },
                        if is_saving { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
