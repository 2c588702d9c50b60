//! Search API calls and module exports.

mod search_for_results;
pub use search_for_results::search_for_results;

mod search_filters;
pub use search_filters::fetch_filter_descriptor;

mod search_suggestions;
pub use search_suggestions::fetch_search_suggestions;

mod search_load_more;
pub use search_load_more::{load_more_path, load_more_results};

mod bulk_operations;
pub use bulk_operations::apply_bulk_operation;
