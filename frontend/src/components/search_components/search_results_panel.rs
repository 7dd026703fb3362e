//! Runs searches for the current URL and renders the latest results.

use common::config::SearchConfig;
use common::search_sequence::LatestSearch;
use dioxus::{logger::tracing, prelude::*};

use crate::api::search_api::{FilingPage, SearchApi};
use crate::components::error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay};
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::search_components::search_result_item_card::SearchResultItemCard;
use crate::components::search_components::search_result_list_controls::SearchResultListControls;
use crate::data_definitions::filter_store_context::use_filter_store;
use crate::data_definitions::url_param::SearchUrlQuery;

#[derive(Copy, Clone)]
pub struct SearchResultsState {
    pub latest: ReadSignal<LatestSearch<FilingPage>>,
}

#[component]
pub fn SearchResultsPanel(params: ReadSignal<SearchUrlQuery>) -> Element {
    let config = use_context::<SearchConfig>();
    let search_api = use_context::<SearchApi>();
    let store = use_filter_store().store;
    let mut latest = use_signal(LatestSearch::<FilingPage>::new);

    // each new url is a new search; responses to older ones are dropped on commit.
    // tasks spawned here die with the page, which cancels them on navigation away.
    use_effect(move || {
        let url_params = params.read().params(config.codec());
        let typed = store.peek().search_params(url_params);
        let ticket = latest.write().begin();
        let search_api = search_api.clone();
        spawn(async move {
            let response = search_api.search(typed).await;
            let outcome = latest.write().commit(ticket, response);
            tracing::debug!(ticket = ticket.sequence(), ?outcome, "search response");
        });
    });

    // leaving the page ends this search context
    use_drop(move || {
        if let Ok(mut latest) = latest.try_write() {
            latest.invalidate();
        }
    });

    use_context_provider(move || SearchResultsState { latest: latest.into() });

    rsx! {
        div {
            id: "x-search-results-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                margin: 1px;
                padding: 7px;
                padding-top: 0px;
                height: 100%;
                width: 100%;
                box-sizing: border-box;
            ",
            SearchResultListControls {}

            div {
                style: "
                flex-grow: 1;
                width: 100%;
                max-height: calc(100% - 56px);
                ",
                ComponentErrorBoundary {
                    SearchResultsView { }
                }
            }
        }
    }
}

#[component]
fn SearchResultsView() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let (page, error) = {
        let latest = search_results_state.latest.read();
        (latest.results().cloned(), latest.last_error().map(str::to_string))
    };
    let page = match (page, error.clone()) {
        (Some(page), _) => page,
        (None, Some(e)) => return rsx! { ComponentErrorDisplay { error_txt: e } },
        (None, None) => return rsx! { LoadingIndicator {} },
    };

    rsx! {
        if let Some(error) = error {
            div {
                style: "color: darkred; border: 1px solid red; border-radius: 5px; padding: 8px; margin: 8px;",
                "Search failed, showing previous results: {error}"
            }
        }
        if page.results.is_empty() {
            div {
                style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); padding: 16px;",
                "No filings match this search."
            }
        }
        ul {
            id: "x-search-panel-results-wrapper",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
                margin: 0;
                padding: 0;
                list-style: none;
            ",
            for (index, filing) in page.results.iter().cloned().enumerate() {
                li {
                    key: "{filing.id}-{index}",
                    SearchResultItemCard { filing, number: page.result_number(index) }
                }
            }
        }
    }
}
