use common::url_codec::UrlCodec;
use common::url_params::TypedUrlParams;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::SearchUrlQuery;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search?:..params")]
    SearchPage {
        params: SearchUrlQuery,
    },

}

impl Route {
    pub fn search_page_from_params(params: &TypedUrlParams, codec: UrlCodec) -> Self {
        Self::SearchPage {
            params: SearchUrlQuery::from_params(params, codec),
        }
    }
}
