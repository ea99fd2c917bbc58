// ABOUTME: Chart editor and chart preview panels.
// ABOUTME: The editor form is itself a three-way horizontal split.

use dh_layout::{split_container, LayoutError, Orientation};
use dh_markup::tags::{button, div, h3, input, label, li, option, select, span, ul};
use dh_markup::Element;

use super::chrome::{icon_button, panel_content, panel_header};

const AGGREGATES: &[(&str, &str)] = &[
    ("COUNT", "COUNT(_col_)"),
    ("UNIQUE", "COUNT(DISTINCT _col_)"),
    ("SUM", "SUM(_col_)"),
    ("AVG", "AVG(_col_)"),
    ("MIN", "MIN(_col_)"),
    ("MAX", "MAX(_col_)"),
];

/// The chart editor panel. The only view that splits internally, which is
/// why it alone can fail.
pub fn chart_editor() -> Result<Element, LayoutError> {
    let form_split = split_container(
        Orientation::Horizontal,
        vec![
            data_source_group(),
            data_options_group(),
            chart_options_group(),
        ],
        None,
    )?;
    Ok(div()
        .id("chart-editor")
        .child(chart_list_modal())
        .child(panel_header(
            "Chart Editor",
            [
                icon_button("open").id("che-open-chart-btn"),
                icon_button("save").id("che-save-chart-btn"),
                icon_button("run").id("che-run-chart-btn"),
            ],
        ))
        .child(panel_content(div().id("chart-form").child(form_split))))
}

pub fn chart_preview() -> Element {
    div()
        .id("chart-preview")
        .child(panel_header(
            "Chart Preview",
            [
                icon_button("copy").id("che-copy-chart-btn"),
                icon_button("export").id("che-export-chart-btn"),
            ],
        ))
        .child(panel_content(div().id("chart-render")))
}

fn chart_list_modal() -> Element {
    div().class("modal che-chart-list-modal").child(
        div().class("modal-dialog").child(
            ul().child(
                div()
                    .class("che-chart-list-modal-header")
                    .child(
                        div()
                            .class("che-chart-list-modal-header-text")
                            .child(h3("Saved Charts")),
                    )
                    .child(
                        div()
                            .class("che-chart-list-modal-header-btn-group btn-group")
                            .child(icon_button("refresh")),
                    ),
            ),
        ),
    )
}

fn radio(name: &str, value: &str, text: &str, checked: bool, disabled: bool) -> Element {
    let mut control = input()
        .attr("type", "radio")
        .attr("name", name)
        .attr("value", value);
    if checked {
        control = control.flag("checked");
    }
    if disabled {
        control = control.flag("disabled");
    }
    label().child(control).child(span(text))
}

fn sortable_header(text: &str) -> Element {
    div().class("che-sortable-header").child(span(text))
}

fn data_source_group() -> Element {
    let mut radios = div().id("che-data-source-type").class("radio-group");
    for (n, (value, text)) in [
        ("query-editor", "Query Editor"),
        ("saved-query", "Saved Query"),
        ("table", "Table"),
    ]
    .into_iter()
    .enumerate()
    {
        radios = radios.child(radio("che-data-source-type", value, text, n == 0, false));
    }
    div()
        .class("chart-form-group")
        .child(h3("Data Source"))
        .child(radios)
        .child(
            select()
                .id("che-data-source")
                .attr("data-path", "source")
                .child(option("Active Tab", "_active")),
        )
        .child(
            ul().id("che-sortable-column-list")
                .class("data-source-opt")
                .child(sortable_header("Column List")),
        )
}

fn column_edit_modal() -> Element {
    let mut aggregate = select()
        .id("che-sortable-col-edit-modal-agg")
        .attr("data-tgt-data", "data-column-agg")
        .child(option("None", "_col_").id("none-agg-option"));
    for (text, value) in AGGREGATES {
        aggregate = aggregate.child(option(text, value));
    }
    div()
        .id("che-sortable-col-edit-modal")
        .class("modal")
        .child(
            div()
                .class("modal-dialog")
                .child(
                    div()
                        .class("data-column-opt display")
                        .child(span("Display Name"))
                        .child(
                            input()
                                .id("che-sortable-col-edit-modal-display")
                                .attr("type", "text")
                                .attr("data-tgt-data", "data-column-display"),
                        ),
                )
                .child(
                    div()
                        .class("data-column-opt expr")
                        .child(span("Expression"))
                        .child(
                            input()
                                .id("che-sortable-col-edit-modal-expr")
                                .attr("type", "text")
                                .attr("data-tgt-data", "data-column-expr"),
                        ),
                )
                .child(
                    div()
                        .class("data-column-opt agg")
                        .child(span("Aggregate"))
                        .child(aggregate),
                )
                .child(
                    div()
                        .class("data-column-opt type")
                        .child(span("Type"))
                        .child(
                            select()
                                .id("che-sortable-col-edit-modal-type")
                                .attr("data-tgt-data", "data-column-type")
                                .child(option("Bar", "bar"))
                                .child(option("Line", "line")),
                        ),
                ),
        )
}

fn data_options_group() -> Element {
    let mut chart_types = div().class("radio-group");
    for (n, (value, text)) in [
        ("bar/line", "Bar/Line"),
        ("scatter", "Scatter"),
        ("radial", "Radial"),
        ("card", "Card"),
        ("table", "Table"),
    ]
    .into_iter()
    .enumerate()
    {
        // Only Bar/Line is implemented on the client so far
        chart_types = chart_types.child(radio("che-data-chart-type", value, text, n == 0, n != 0));
    }
    div()
        .class("chart-form-group")
        .child(h3("Data Options"))
        .child(
            div()
                .class("data-source-opt")
                .child(sortable_header("Chart Type"))
                .child(chart_types),
        )
        .child(column_edit_modal())
        .child(x_axis_area())
        .child(y_axis_area())
        .child(facet_list("che-sortable-multiple-v", "Vertical Facet"))
        .child(facet_list("che-sortable-multiple-h", "Horizontal Facet"))
}

fn x_axis_area() -> Element {
    ul().id("che-sortable-x-axis-parent")
        .class("data-source-opt")
        .child(sortable_header("X Axis or Category"))
        .child(
            li().child(
                ul().class("data-source-opt")
                    .child(
                        div()
                            .class("che-sortable-subheader")
                            .child(span("Ticks"))
                            .child(
                                div().class("btn-group").child(
                                    button()
                                        .text("Group By")
                                        .id("che-sortable-group-by")
                                        .class("group-by text-button switch-button active"),
                                ),
                            ),
                    )
                    .child(
                        ul().id("che-sortable-x-axis")
                            .class("sortable sortable-target-cols data-source-opt"),
                    ),
            ),
        )
}

fn y_axis_area() -> Element {
    ul().id("che-sortable-y-axis")
        .class("data-source-opt")
        .child(sortable_header("Y Axis or Metric"))
        .child(
            li().child(
                ul().class("sortable sortable-target-cols che-sortable-y-axis-stack")
                    .child(
                        div()
                            .class("che-sortable-subheader")
                            .child(span("Stack"))
                            .child(
                                div()
                                    .class("btn-group")
                                    .child(icon_button("move-up"))
                                    .child(icon_button("move-down"))
                                    .child(icon_button("remove")),
                            ),
                    ),
            )
            .child(
                ul().class("sortable sortable-target-cols sortable-one che-sortable-y-axis-stack-color-by")
                    .child(div().class("che-sortable-footer").child(span("Color By"))),
            ),
        )
        .child(
            button()
                .text("Add Stack")
                .id("che-sortable-metrics-add-stack-btn"),
        )
}

fn facet_list(id: &str, title: &str) -> Element {
    ul().id(id)
        .class("sortable sortable-target-cols sortable-one data-source-opt")
        .child(sortable_header(title))
}

fn chart_options_group() -> Element {
    let mut group = div()
        .class("chart-form-group")
        .child(h3("Chart Options"))
        .child(text_option("Title", "che-data-chart-title"))
        .child(text_option("Subtitle", "che-data-chart-subtitle"));
    for title in ["X Axis", "Y Axis", "Data Labels", "Legend", "Tooltip"] {
        group = group.child(
            div()
                .class("data-source-opt")
                .child(sortable_header(title))
                .child(div().class("work-in-progress")),
        );
    }
    group
}

fn text_option(title: &str, id: &str) -> Element {
    div()
        .class("data-source-opt")
        .child(sortable_header(title))
        .child(input().attr("type", "text").id(id))
}
