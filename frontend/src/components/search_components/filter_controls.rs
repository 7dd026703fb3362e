//! Inputs for the configured filter fields.

use common::filter_fields::{FilterFieldDefinition, FilterInputKind, FilterOption, FilterValue};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdFilterList, md_navigation_icons::MdRefresh, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::data_definitions::filter_store_context::use_filter_store;

#[component]
pub fn FilterPanel() -> Element {
    let filter_store = use_filter_store();
    let store = filter_store.store;
    let fields = use_memo(move || {
        store
            .read()
            .fields()
            .iter()
            .filter(|f| !f.is_hidden())
            .cloned()
            .collect::<Vec<_>>()
    });
    let has_errors = use_memo(move || !store.read().validation_errors().is_empty());

    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px;
                height: 100%;
                overflow-y: auto;
                box-sizing: border-box;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    font-size: 20px;
                    font-weight: 400;
                    color: rgb(75, 87, 112);
                ",
                Icon { icon: MdFilterList, style: "width: 22px; height: 22px;" }
                "Filters"
                div { style: "flex: 1 1 auto;" }
                button {
                    title: "Reset filters",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        border: 1px solid rgba(0,0,0,0.3);
                        border-radius: 8px;
                        background: white;
                        cursor: pointer;
                        padding: 4px 8px;
                    ",
                    onclick: move |_| filter_store.reset_filters(),
                    Icon { icon: MdRefresh, style: "width: 18px; height: 18px;" }
                    "Reset"
                }
            }
            if has_errors() {
                div {
                    style: "color: darkred; font-size: 14px;",
                    "Some filters are invalid; fix them to refine the search."
                }
            }
            for field in fields() {
                FilterFieldControl { key: "{field.key}", field: field.clone() }
            }
        }
    }
}

#[component]
fn FilterFieldControl(field: ReadSignal<FilterFieldDefinition>) -> Element {
    let store = use_filter_store().store;
    let definition = field.read().clone();
    let field_key = definition.key.clone();
    let value = store
        .read()
        .value(&field_key)
        .cloned()
        .unwrap_or_else(|| definition.default_value());
    let error = store.read().field_error(&field_key).map(str::to_string);
    let border_color = if error.is_some() { "rgba(200,0,0,0.9)" } else { "rgba(0,0,0,0.3)" };
    let single = value.as_single().unwrap_or_default().to_string();

    let input = match definition.kind {
        FilterInputKind::Text { placeholder } => rsx! {
            TextFilterInput { field_key, placeholder, current: single, border_color: border_color.to_string() }
        },
        FilterInputKind::Select { options } => rsx! {
            SelectFilterInput { field_key, options, current: single, border_color: border_color.to_string() }
        },
        FilterInputKind::MultiSelect { options } => rsx! {
            MultiSelectFilterInput { field_key, options, selected: value.as_many().unwrap_or_default().to_vec() }
        },
        FilterInputKind::Date => rsx! {
            DateFilterInput { field_key, current: single, border_color: border_color.to_string() }
        },
        FilterInputKind::Hidden { .. } => rsx! {},
    };

    rsx! {
        div {
            class: "x-filter-field",
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                style: "font-size: 15px; font-weight: 500; color: rgb(28, 33, 45);",
                "{definition.display_name}"
            }
            {input}
            if let Some(error) = error {
                div {
                    style: "color: darkred; font-size: 13px;",
                    "{error}"
                }
            }
        }
    }
}

const INPUT_STYLE: &str = "
    border-radius: 8px;
    padding: 6px 10px;
    font-size: 15px;
    background: white;
    font-family: Roboto, sans-serif;
";

#[component]
fn TextFilterInput(field_key: String, placeholder: String, current: String, border_color: String) -> Element {
    let filter_store = use_filter_store();
    rsx! {
        input {
            r#type: "text",
            placeholder: "{placeholder}",
            style: "{INPUT_STYLE} border: 1px solid {border_color};",
            value: "{current}",
            oninput: move |event: Event<FormData>| {
                filter_store.update_filter(&field_key, FilterValue::Single(event.value()), true);
            },
        }
    }
}

#[component]
fn SelectFilterInput(field_key: String, options: Vec<FilterOption>, current: String, border_color: String) -> Element {
    let filter_store = use_filter_store();
    rsx! {
        select {
            style: "{INPUT_STYLE} border: 1px solid {border_color};",
            onchange: move |event: Event<FormData>| {
                filter_store.update_filter(&field_key, FilterValue::Single(event.value()), false);
            },
            option { value: "", selected: current.is_empty(), "Any" }
            for opt in options.iter() {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == current,
                    "{opt.label}"
                }
            }
        }
    }
}

#[component]
fn DateFilterInput(field_key: String, current: String, border_color: String) -> Element {
    let filter_store = use_filter_store();
    rsx! {
        input {
            r#type: "date",
            style: "{INPUT_STYLE} border: 1px solid {border_color};",
            value: "{current}",
            oninput: move |event: Event<FormData>| {
                filter_store.update_filter(&field_key, FilterValue::Single(event.value()), false);
            },
        }
    }
}

#[component]
fn MultiSelectFilterInput(field_key: String, options: Vec<FilterOption>, selected: Vec<String>) -> Element {
    rsx! {
        ul {
            style: "display: flex; flex-direction: column; gap: 2px; margin: 0; padding: 0; list-style: none;",
            for opt in options.iter().cloned() {
                li {
                    key: "{opt.value}",
                    MultiSelectCheckbox { field_key: field_key.clone(), option: opt, selected: selected.clone() }
                }
            }
        }
    }
}

#[component]
fn MultiSelectCheckbox(field_key: String, option: FilterOption, selected: Vec<String>) -> Element {
    let filter_store = use_filter_store();
    let is_checked = selected.contains(&option.value);
    let label = option.label.clone();
    rsx! {
        div {
            class: "x-filter-checkbox",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 2px;
                align-items: center;
            ",
            onclick: move |_e| {
                let mut next = selected.clone();
                if is_checked {
                    next.retain(|v| v != &option.value);
                } else {
                    next.push(option.value.clone());
                }
                filter_store.update_filter(&field_key, FilterValue::Many(next), false);
            },
            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "font-size: 15px; line-height: 22px;",
                "{label}"
            }
        }
    }
}
