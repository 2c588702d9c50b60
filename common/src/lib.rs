//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod entity_type;
pub mod search_const;
pub mod search_query;
pub mod filter_model;
pub mod filter_descriptor;
pub mod search_result;
pub mod selection;
pub mod saved_search;
pub mod bulk_operation;
