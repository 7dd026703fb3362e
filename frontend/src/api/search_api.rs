//! Handle to the external search service.

use std::{future::Future, rc::Rc};

use common::search_result::{FilingRecord, SearchResultPage};
use common::url_params::TypedUrlParams;
use futures_util::future::{FutureExt, LocalBoxFuture};

pub type FilingPage = SearchResultPage<FilingRecord>;
pub type SearchFuture = LocalBoxFuture<'static, Result<FilingPage, String>>;

/// Async `search(params) -> page` supplied by the host application.
/// The wire format behind it is not this crate's business.
#[derive(Clone)]
pub struct SearchApi(Rc<dyn Fn(TypedUrlParams) -> SearchFuture>);

impl SearchApi {
    pub fn new<F, Fut>(search: F) -> Self
    where
        F: Fn(TypedUrlParams) -> Fut + 'static,
        Fut: Future<Output = Result<FilingPage, String>> + 'static,
    {
        Self(Rc::new(move |params| search(params).boxed_local()))
    }

    pub fn search(&self, params: TypedUrlParams) -> SearchFuture {
        (self.0)(params)
    }
}

impl PartialEq for SearchApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for SearchApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SearchApi")
    }
}
