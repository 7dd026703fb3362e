//! Filter fields offered by the filing search.

use crate::filter_fields::{FilterFieldDefinition, FilterOption};

pub const MATCH_NAME: &str = "match_name";
pub const MATCH_SOURCE: &str = "match_source";
pub const MATCH_DOCTYPE: &str = "match_doctype";
pub const MATCH_DOCKET_ID: &str = "match_docket_id";
pub const MATCH_FILE_CLASS: &str = "match_file_class";
pub const MATCH_AUTHOR: &str = "match_author";
pub const MATCH_AFTER_DATE: &str = "match_after_date";
pub const MATCH_BEFORE_DATE: &str = "match_before_date";
pub const MATCH_FILE_EXTENSION: &str = "match_file_extension";

/// Corpora the search can be narrowed to; the empty value searches all.
pub fn kessler_datasets() -> Vec<FilterOption> {
    vec![
        FilterOption::new("All", ""),
        FilterOption::new("Filings", "filings"),
        FilterOption::new("Dockets", "dockets"),
        FilterOption::new("Organizations", "organizations"),
    ]
}

/// Field set used by the filing search page.
pub fn kessler_filing_fields() -> Vec<FilterFieldDefinition> {
    vec![
        FilterFieldDefinition::text(MATCH_NAME, "Name").with_placeholder("Filing title"),
        FilterFieldDefinition::select(
            MATCH_SOURCE,
            "Jurisdiction",
            vec![
                FilterOption::new("New York PSC", "usa-ny"),
                FilterOption::new("Colorado PUC", "usa-co"),
                FilterOption::new("California PUC", "usa-ca"),
            ],
        ),
        FilterFieldDefinition::select(
            MATCH_DOCTYPE,
            "Document Type",
            vec![
                FilterOption::new("PDF", "pdf"),
                FilterOption::new("Word Document", "docx"),
                FilterOption::new("Spreadsheet", "xlsx"),
                FilterOption::new("HTML", "html"),
            ],
        ),
        FilterFieldDefinition::text(MATCH_DOCKET_ID, "Docket ID").with_placeholder("18-M-0084"),
        FilterFieldDefinition::multi_select(
            MATCH_FILE_CLASS,
            "File Class",
            vec![
                FilterOption::new("Correspondence", "correspondence"),
                FilterOption::new("Comments", "comments"),
                FilterOption::new("Exhibits", "exhibits"),
                FilterOption::new("Orders", "orders"),
                FilterOption::new("Reports", "reports"),
                FilterOption::new("Testimony", "testimony"),
                FilterOption::new("Transcripts", "transcripts"),
            ],
        ),
        FilterFieldDefinition::text(MATCH_AUTHOR, "Author").with_placeholder("Organization or person"),
        FilterFieldDefinition::date(MATCH_AFTER_DATE, "Filed After"),
        FilterFieldDefinition::date(MATCH_BEFORE_DATE, "Filed Before"),
        FilterFieldDefinition::hidden(MATCH_FILE_EXTENSION, ""),
    ]
}
