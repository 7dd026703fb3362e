use common::kessler_filters::kessler_datasets;
use dioxus::prelude::*;
use dioxus::logger::tracing;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_editor_icons::MdInsertLink}};

use crate::data_definitions::filter_store_context::use_filter_store;

#[component]
pub fn SearchInputTopBar(committed_query: ReadSignal<String>) -> Element {
    let filter_store = use_filter_store();
    let mut store = filter_store.store;
    let query_text = use_memo(move || store.read().query().to_string());
    let dataset = use_memo(move || store.read().dataset().to_string());
    let query_has_changed = use_memo(move || query_text() != *committed_query.read());
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });

    let search_oninput = move |event: Event<FormData>| {
        store.write().set_query(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            filter_store.submit_search();
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
                box-sizing: border-box;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| filter_store.submit_search(),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search filings, dockets and organizations",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{query_text}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
        select {
            id: "x-search-dataset-select",
            style: "
                margin-left: 16px;
                height: 44px;
                border-radius: 9999px;
                border: 1px solid rgba(101, 101, 101, 0.8);
                padding: 0 14px;
                font-size: 16px;
                background: white;
            ",
            onchange: move |event: Event<FormData>| filter_store.set_dataset(event.value()),
            for opt in kessler_datasets() {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == dataset(),
                    "{opt.label}"
                }
            }
        }
        div { style: "flex-grow: 1;" }
        CopySearchLinkButton {}
    }
}

#[component]
fn CopySearchLinkButton() -> Element {
    let do_copy_link = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(url) = window.location().href() else {
            return;
        };
        let _promise = window.navigator().clipboard().write_text(&url);
        tracing::info!("Search link copied to clipboard: {url}");
    };
    rsx! {
        button {
            title: "Copy a link to this search",
            style: "
                width: 40px;
                height: 40px;
                cursor: pointer;
                border: 1px solid #000;
                border-radius: 8px;
                background: white;
                color: black;
                display: flex;
                align-items: center;
                justify-content: center;
                margin-right: 16px;
            ",
            onclick: do_copy_link,
            Icon { icon: MdInsertLink, style: "width: 24px; height: 24px;" }
        }
    }
}
