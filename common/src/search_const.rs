use crate::search_query::SortOrder;

/// Page size of every search request, fixed.
pub const SEARCH_PAGE_LIMIT: u64 = 50;

/// Suggestions are only requested once the query has this many characters.
pub const SUGGESTION_MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS_SHOWN: usize = 8;

pub const DEFAULT_SORT_BY: &str = "created_at";
pub const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Desc;

pub const SORT_FIELDS: [(&str, &str); 4] = [
    ("created_at", "Created"),
    ("updated_at", "Updated"),
    ("name", "Name"),
    ("relevance", "Relevance"),
];

pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Query-string prefix of every flattened filter parameter.
pub const FILTER_PARAM_PREFIX: &str = "filter_";
pub const RANGE_GTE_SUFFIX: &str = "__gte";
pub const RANGE_LTE_SUFFIX: &str = "__lte";
