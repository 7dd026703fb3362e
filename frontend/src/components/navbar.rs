//! Side navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::url_param::SearchUrlQuery;
use crate::routes::Route;

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
                font-family: Roboto, sans-serif;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 24px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                    align-items: center;
                    box-sizing: border-box;
                ",

                IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
                IconLink { to: Route::SearchPage { params: SearchUrlQuery::default() }, icon: MdSearch, label: "Search" }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
