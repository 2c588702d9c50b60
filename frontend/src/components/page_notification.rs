//! Toasts for outcomes the user is told about without blocking the page.

use std::time::Duration;

use dioxus_primitives::toast::{ToastOptions, consume_toast};

use crate::data_definitions::search_page_state::{NotificationKind, PageNotification};

pub fn show_page_notification(notification: PageNotification) {
    let toast_api = consume_toast();
    let options = ToastOptions::new()
        .description(notification.description.as_str())
        .duration(Duration::from_secs(15))
        .permanent(false);
    match notification.kind {
        NotificationKind::Success => toast_api.success(notification.title, options),
        NotificationKind::Failure => toast_api.error(notification.title, options),
    }
}
