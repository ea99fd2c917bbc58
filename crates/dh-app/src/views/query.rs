// ABOUTME: Query editor and query results panels.
// ABOUTME: Both are thin mounts for the monaco and results scripts.

use dh_markup::tags::div;
use dh_markup::Element;

use super::chrome::{icon_button, panel_content, panel_header};

pub fn query_editor() -> Element {
    div()
        .id("query-editor")
        .child(panel_header(
            "Query Editor",
            [
                icon_button("save").id("qe-save-query-btn"),
                icon_button("run").id("qe-run-query-btn"),
            ],
        ))
        .child(panel_content(div().id("editor")))
}

pub fn query_results() -> Element {
    div()
        .id("query-results")
        .child(panel_header(
            "Query Results",
            [
                icon_button("copy").id("qe-copy-query-btn"),
                icon_button("export").id("qe-export-query-btn"),
            ],
        ))
        .child(panel_content(div().id("query-results-output")))
}
