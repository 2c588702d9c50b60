pub mod search;
pub mod saved_searches;
