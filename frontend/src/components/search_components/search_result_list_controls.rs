//! Result count and pagination controls.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::components::search_components::search_results_panel::SearchResultsState;
use crate::data_definitions::filter_store_context::use_filter_store;

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-panel-left-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                SearchResultRangeString { }
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            PaginationControls {}
        }
    }
}

#[component]
fn PaginationControls() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let filter_store = use_filter_store();
    let store = filter_store.store;

    let current_page = use_memo(move || store.read().pagination().page);
    // no total count comes back: a full page is taken to mean there is another one
    let has_more = use_memo(move || {
        search_results_state
            .latest
            .read()
            .results()
            .map(|page| page.has_more())
            .unwrap_or(false)
    });
    let page_count_hint = use_memo(move || {
        search_results_state
            .latest
            .read()
            .results()
            .map(|page| page.page_count_hint())
            .unwrap_or(1)
    });
    let can_go_to_previous_page = use_memo(move || current_page() > 0);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| filter_store.go_to_page(current_page().saturating_sub(1)),
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    padding: 4px 16px;
                ",
                "{current_page() + 1}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    if has_more() { "/{page_count_hint()}+" } else { "/{page_count_hint()}" }
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !has_more(),
                onclick: move |_| filter_store.go_to_page(current_page() + 1),
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}

#[component]
fn SearchResultRangeString() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let latest = search_results_state.latest.read();

    match latest.results() {
        _ if latest.is_loading() && latest.results().is_none() => rsx! { "..." },
        None => rsx! { "-" },
        Some(page) if page.results.is_empty() => rsx! { "no filings found" },
        Some(page) => {
            let first = page.result_number(0);
            let last = page.result_number(page.results.len() - 1);
            rsx! { "filings {first}-{last}" }
        }
    }
}
