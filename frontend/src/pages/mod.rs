pub mod home_page;
pub mod search_page;
