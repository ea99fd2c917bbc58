// ABOUTME: Catalog explorer panel.
// ABOUTME: Catalog section list plus the two file-storage modals.

use dh_markup::tags::{button, div, input, li, option, select, span, ul};
use dh_markup::Element;

use super::chrome::{panel_content, panel_header};

const CATALOG_SECTIONS: &[(&str, &str)] = &[
    ("ce-root-data-marts", "Data Marts"),
    ("ce-root-data-warehouse", "Data Warehouse"),
    ("ce-root-external-databases", "External Databases"),
    ("ce-root-file-storage", "File Storage"),
    ("ce-root-saved-queries", "Saved Queries"),
];

pub fn catalog_explorer() -> Element {
    // The modals trail the panel content; the client scripts reparent them
    // when opened.
    div()
        .id("catalog-explorer")
        .child(panel_header("Catalog Explorer", []))
        .child(panel_content(catalog_list()))
        .child(public_url_modal())
        .child(uploaded_file_modal())
}

fn catalog_list() -> Element {
    let mut list = ul();
    for (id, label) in CATALOG_SECTIONS {
        list = list.child(
            li().child(
                ul().id(*id).class("ce-closed ce-catalog").child(
                    div()
                        .class("ce-header")
                        .child(div().class("ce-header-text").child(span(label))),
                ),
            ),
        );
    }
    list
}

fn file_type_select(id: &str) -> Element {
    div()
        .class("data-column-opt type")
        .child(span("Type"))
        .child(
            select()
                .id(id)
                .child(option("Parquet", "parquet"))
                .child(option("CSV", "csv"))
                .child(option("JSON", "json")),
        )
}

fn query_as_input(id: &str) -> Element {
    div()
        .class("modal-opt")
        .child(span("Query as"))
        .child(input().id(id).attr("type", "text"))
}

fn public_url_modal() -> Element {
    div()
        .id("ce-root-file-storage-public-url-modal")
        .class("modal")
        .child(
            div()
                .class("modal-dialog")
                .child(
                    div()
                        .class("modal-opt")
                        .child(span("URL"))
                        .child(
                            input()
                                .id("ce-root-file-storage-public-url-modal-url")
                                .attr("type", "url"),
                        )
                        .child(
                            div()
                                .id("ce-root-file-storage-public-url-modal-url-msg")
                                .class("ce-error-msg"),
                        ),
                )
                .child(file_type_select("ce-root-file-storage-public-url-modal-type"))
                .child(query_as_input("ce-root-file-storage-public-url-modal-id"))
                .child(button().text("Add this Public URL").class("text-button"))
                .child(
                    div()
                        .id("ce-root-file-storage-public-url-modal-submit-msg")
                        .class("ce-error-msg"),
                ),
        )
}

fn uploaded_file_modal() -> Element {
    div()
        .id("ce-root-file-storage-uploaded-modal")
        .class("modal")
        .child(
            div()
                .class("modal-dialog")
                .child(
                    div()
                        .class("modal-opt")
                        .child(span("Select file to upload"))
                        .child(
                            input()
                                .id("ce-root-file-storage-uploaded-modal-file")
                                .attr("type", "file"),
                        )
                        .child(
                            div()
                                .id("ce-root-file-storage-uploaded-modal-file-msg")
                                .class("ce-error-msg"),
                        ),
                )
                .child(file_type_select("ce-root-file-storage-uploaded-modal-type"))
                .child(query_as_input("ce-root-file-storage-uploaded-modal-id"))
                .child(button().text("Add this file").class("text-button"))
                .child(
                    div()
                        .id("ce-root-file-storage-uploaded-modal-submit-msg")
                        .class("ce-error-msg"),
                ),
        )
}
