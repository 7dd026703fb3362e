use common::config::SearchConfig;
use common::url_params::TypedUrlParams;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use crate::routes::Route;

/// Landing page: one search box that opens the search page.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Kessler Search" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 24px;
                height: 100%;
                background: #F5F6F8;
            ",
            h1 {
                style: "font-size: 40px; font-weight: 400; color: rgb(28, 33, 45); margin: 0;",
                "Regulatory filing search"
            }
            HomeSearchInput {}
        }
    }
}

#[component]
fn HomeSearchInput() -> Element {
    let config = use_context::<SearchConfig>();
    let nav = navigator();
    let mut text = use_signal(String::new);

    let open_search = move || {
        let params = TypedUrlParams::from_query(text.read().trim());
        nav.push(Route::search_page_from_params(&params, config.codec()));
    };

    rsx! {
        form {
            style: "
                display: flex;
                gap: 8px;
                width: 560px;
                max-width: 90%;
            ",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                open_search();
            },
            input {
                r#type: "search",
                autofocus: true,
                placeholder: "Docket number, author, keywords...",
                style: "
                    flex: 1;
                    font-size: 18px;
                    padding: 10px 14px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 8px;
                ",
                value: "{text}",
                oninput: move |e| text.set(e.value()),
            }
            button {
                r#type: "submit",
                title: "Search",
                style: "border: none; background: none; cursor: pointer;",
                Icon { icon: MdSearch, style: "width: 28px; height: 28px; color: rgb(75, 87, 112);" }
            }
        }
    }
}
