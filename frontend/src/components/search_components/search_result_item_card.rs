//! Search result item card component.

use dioxus::prelude::*;
use common::{entity_type::EntityType, search_result::SearchResultItem};
use dioxus_free_icons::{Icon, icons::{
    md_action_icons::{MdAssignment, MdDescription, MdReceipt, MdSearch},
    md_communication_icons::MdBusiness,
    md_editor_icons::MdAttachMoney,
    md_social_icons::MdPerson,
}};

#[component]
pub fn SearchResultItemCard(item: SearchResultItem, entity_type: EntityType, selected: bool, on_toggle: Callback<()>) -> Element {
    let title = item.display_title();
    let subtitle = item.display_subtitle();
    let selection_id = item.selection_id(entity_type).to_string();
    let border_color = if selected { "#367ED899" } else { "#AAAAAA33" };
    let background_color = if selected { "#4096FF33" } else { "white" };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                background: {background_color};
                border: 3px solid {border_color};
                border-radius: 8px;
                padding: 10px 16px;
                margin: 6px 8px;
                box-sizing: border-box;
            ",
            label { class: "sr-only", r#for: "x-select-{selection_id}", "Select {title}" }
            input {
                id: "x-select-{selection_id}",
                r#type: "checkbox",
                checked: selected,
                onchange: move |_| on_toggle.call(()),
            }
            EntityTypeIcon { entity_type }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 2px;
                    min-width: 0;
                    flex: 1;
                ",
                div {
                    style: "
                        font-size: 18px;
                        line-height: 26px;
                        color: rgb(0, 0, 0);
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{title}"
                }
                if let Some(subtitle) = subtitle {
                    div {
                        style: "font-size: 14px; color: rgba(0, 0, 0, 0.6); overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "{subtitle}"
                    }
                }
            }
            span {
                style: "
                    font-size: 16px;
                    font-weight: 300;
                    color: rgba(0, 0, 0, 0.5);
                    font-style: italic;
                ",
                "{entity_type.display_name()} #{item.id}"
            }
        }
    }
}

#[component]
pub fn EntityTypeIcon(entity_type: EntityType) -> Element {
    match entity_type {
        EntityType::Global => rsx! { Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" } },
        EntityType::Accounts => rsx! { Icon { icon: MdBusiness, style: "width: 20px; height: 20px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" } },
        EntityType::Contacts => rsx! { Icon { icon: MdPerson, style: "width: 20px; height: 20px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" } },
        EntityType::Tasks => rsx! { Icon { icon: MdAssignment, style: "width: 20px; height: 20px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" } },
        EntityType::Deals => rsx! { Icon { icon: MdAttachMoney, style: "width: 20px; height: 20px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" } },
        EntityType::Quotes => rsx! { Icon { icon: MdDescription, style: "width: 20px; height: 20px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" } },
        EntityType::Invoices => rsx! { Icon { icon: MdReceipt, style: "width: 20px; height: 20px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" } },
    }
}
