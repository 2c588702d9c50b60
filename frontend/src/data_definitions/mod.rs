//! State machines and shared state types of the search pages.

pub mod advanced_search_state;
pub mod search_results_state;
pub mod search_page_state;
