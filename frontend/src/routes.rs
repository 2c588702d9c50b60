use dioxus::prelude::*;

use common::entity_type::EntityType;
use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search?:q&:search_type")]
    SearchPage {
        q: String,
        search_type: EntityType,
    },

}

impl Route {
    pub fn search_page(q: String, search_type: EntityType) -> Self {
        Self::SearchPage { q, search_type }
    }
}
