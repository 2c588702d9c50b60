pub mod advanced_search;
pub mod filter_controls;
pub mod save_search_dialog;
pub mod search_results;
pub mod search_result_item_card;
pub mod bulk_action_dialog;
