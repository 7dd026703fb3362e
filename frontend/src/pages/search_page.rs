use common::config::SearchConfig;
use common::kessler_filters::kessler_filing_fields;
use dioxus::prelude::*;

use crate::components::error_boundary::{ComponentErrorBoundary, ConfigErrorBanner};
use crate::components::search_components::filter_controls::FilterPanel;
use crate::components::search_components::search_input_top_bar::SearchInputTopBar;
use crate::components::search_components::search_results_panel::SearchResultsPanel;
use crate::data_definitions::filter_store_context::use_filter_store_provider;
use crate::data_definitions::url_param::SearchUrlQuery;

fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search page
#[component]
pub fn SearchPage(params: SearchUrlQuery) -> Element {
    let config = use_context::<SearchConfig>();
    let query = params.params(config.codec()).query.query;

    rsx! {
        Title { "Kessler Search: {title_ellipsis(&query)}" }
        SearchPageRootComponent { params: params.clone() }
    }
}

#[component]
fn SearchPageRootComponent(params: ReadSignal<SearchUrlQuery>) -> Element {
    let config = use_context::<SearchConfig>();
    let filter_store = use_filter_store_provider(config, kessler_filing_fields());

    // back/forward and shared links arrive here as new params
    use_effect(move || {
        filter_store.load_from_url(&params.read().0);
    });

    let committed_query = use_memo(move || params.read().params(config.codec()).query.query);

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",

                SearchInputTopBar { committed_query }
            }

            ConfigErrorBanner {}

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-filters-left-panel",
                    style: "
                        height: 100%;
                        min-width: 260px;
                        width: 25%;
                        overflow-y: auto;
                        border-right: 1px solid rgb(164, 164, 164);
                    ",
                    ComponentErrorBoundary {
                        FilterPanel {}
                    }
                }
                div {
                    id: "x-search-results-right-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-grow: 1;
                        min-width: 400px;
                        width: 75%;
                    ",
                    SearchResultsPanel { params }
                }
            }
        }
    }
}
