pub mod search_api;
pub mod saved_search_api;

#[cfg(feature = "server")]
pub(crate) fn server_error(e: anyhow::Error) -> dioxus::prelude::ServerFnError {
    dioxus::prelude::ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }
}
