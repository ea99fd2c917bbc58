// ABOUTME: Dashboard editor and preview panels.
// ABOUTME: Also the bare render block for the standalone dashboard page.

use dh_markup::tags::{div, icon, span};
use dh_markup::Element;

use super::chrome::{icon_button, panel_content, panel_header};

pub fn dashboard_editor() -> Element {
    div()
        .id("dashboard-editor")
        .child(panel_header(
            "Dashboard Editor",
            [
                icon_button("open").id("de-open-dashboard-btn"),
                icon_button("save").id("de-save-dashboard-btn"),
                icon_button("run").id("de-run-dashboard-btn"),
            ],
        ))
        .child(panel_content(
            div()
                .id("dashboard-form")
                .child(
                    div()
                        .id("de-form-btn-group")
                        .child(add_button("de-add-text-btn", "Text"))
                        .child(add_button("de-add-chart-btn", "Chart"))
                        .child(add_button("de-add-group-btn", "Group")),
                )
                .child(div().id("dashboard-form-sortable")),
        ))
}

pub fn dashboard_preview() -> Element {
    div()
        .id("dashboard-preview")
        .child(panel_header(
            "Dashboard Preview",
            [
                icon_button("share").id("de-share-dashboard-btn"),
                icon_button("export").id("de-export-dashboard-btn"),
            ],
        ))
        .child(panel_content(div().id("dashboard-render")))
}

/// Render root of the standalone dashboard page.
pub fn dashboard_render() -> Element {
    div().id("dashboard-render")
}

fn add_button(id: &str, text: &str) -> Element {
    div().id(id).child(icon("fa-solid fa-plus")).child(span(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_offers_the_three_add_buttons() {
        let html = dashboard_editor().render();
        for id in ["de-add-text-btn", "de-add-chart-btn", "de-add-group-btn"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
        assert!(html.contains("<i class=\"fa-solid fa-plus\"></i><span>Text</span>"));
        assert!(html.contains("id=\"dashboard-form-sortable\""));
    }

    #[test]
    fn preview_and_standalone_share_the_render_id() {
        assert!(dashboard_preview().render().contains("id=\"dashboard-render\""));
        assert_eq!(
            dashboard_render().render(),
            "<div id=\"dashboard-render\"></div>"
        );
    }
}
