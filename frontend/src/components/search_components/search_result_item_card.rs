//! Search result item card component.

use common::search_result::FilingRecord;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_editor_icons::MdInsertDriveFile};

#[component]
pub fn SearchResultItemCard(filing: ReadSignal<FilingRecord>, number: u64) -> Element {
    let FilingRecord {
        id: _,
        title,
        docket_id,
        author,
        source,
        date,
        file_class,
        extension,
        snippet,
    } = filing.read().clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
            ",
            // Row 1: NUMBER - ICON - TITLE - SPACER - EXTENSION
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{number}."
                }
                Icon { icon: MdInsertDriveFile, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" }
                span {
                    style: "
                        font-size: 20px;
                        font-weight: 500;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        min-width: 0;
                    ",
                    "{title}"
                }
                div { style: "flex: 1 1 auto;" }
                if !extension.is_empty() {
                    span {
                        style: "font-size: 14px; color: rgba(0,0,0,0.6); border: 1px solid rgba(0,0,0,0.2); border-radius: 4px; padding: 1px 6px;",
                        "{extension}"
                    }
                }
            }
            // Row 2: METADATA
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 16px;
                    font-size: 15px;
                    color: rgba(28, 33, 45, 0.7);
                ",
                MetadataItem { label: "Docket", value: docket_id }
                MetadataItem { label: "Author", value: author }
                MetadataItem { label: "Filed", value: date }
                MetadataItem { label: "Class", value: file_class }
                MetadataItem { label: "Source", value: source }
            }
            // Row 3: SNIPPET
            if !snippet.is_empty() {
                div {
                    style: "
                        font-size: 15px;
                        line-height: 21px;
                        color: rgb(28, 33, 45);
                        overflow: hidden;
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                    ",
                    "{snippet}"
                }
            }
        }
    }
}

#[component]
fn MetadataItem(label: String, value: String) -> Element {
    if value.is_empty() {
        return rsx! {};
    }
    rsx! {
        span {
            span { style: "font-weight: 500;", "{label}: " }
            "{value}"
        }
    }
}
