pub mod error_boundary;
pub mod navbar;
pub mod page_notification;
pub mod search_components;
