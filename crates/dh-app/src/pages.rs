// ABOUTME: Assembles the two output documents.
// ABOUTME: Workspace page with the nested split tree; standalone dashboard.

use dh_core::Config;
use dh_layout::{split_container, LayoutError, Orientation};
use dh_markup::tags::{classic_script, div, module_script, script_src, stylesheet};
use dh_markup::Document;

use crate::views;

/// Vendor scripts loaded at the end of the workspace body.
const WORKSPACE_SCRIPTS: &[&str] = &[
    "https://html2canvas.hertzen.com/dist/html2canvas.min.js",
    "https://cdn.jsdelivr.net/npm/chart.js",
    "https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns/dist/chartjs-adapter-date-fns.bundle.min.js",
    "https://cdn.jsdelivr.net/npm/chartjs-plugin-datalabels@2.2.0/dist/chartjs-plugin-datalabels.min.js",
    "https://cdnjs.cloudflare.com/ajax/libs/list.js/2.3.1/list.min.js",
    "https://cdn.jsdelivr.net/npm/sortablejs@1.15.6/Sortable.min.js",
    "https://cdnjs.cloudflare.com/ajax/libs/monaco-editor/0.29.1/min/vs/loader.min.js",
    "https://cdn.jsdelivr.net/npm/lz-string@1.5.0/libs/lz-string.min.js",
];

const DASHBOARD_SCRIPTS: &[&str] = &[
    "https://cdn.jsdelivr.net/npm/chart.js",
    "https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns/dist/chartjs-adapter-date-fns.bundle.min.js",
    "https://cdn.jsdelivr.net/npm/chartjs-plugin-datalabels@2.2.0/dist/chartjs-plugin-datalabels.min.js",
    "https://cdn.jsdelivr.net/npm/lz-string@1.5.0/libs/lz-string.min.js",
];

/// The full workspace page: three top-level areas, each itself a split.
pub fn workspace_page(config: &Config) -> Result<Document, LayoutError> {
    // Innermost splits first; every container is finished before the one
    // that holds it.
    let query_stack = split_container(
        Orientation::Vertical,
        vec![views::query_editor(), views::query_results()],
        None,
    )?;
    let catalog_area = split_container(
        Orientation::Horizontal,
        vec![views::catalog_explorer(), query_stack],
        Some(vec![30.0]),
    )?;
    let chart_area = split_container(
        Orientation::Vertical,
        vec![views::chart_editor()?, views::chart_preview()],
        None,
    )?;
    let dashboard_area = split_container(
        Orientation::Horizontal,
        vec![views::dashboard_editor(), views::dashboard_preview()],
        Some(vec![30.0]),
    )?;
    let workspace = split_container(
        Orientation::Horizontal,
        vec![catalog_area, chart_area, dashboard_area],
        None,
    )?;

    let mut doc = Document::new(&config.workspace_title);
    for href in &config.assets.stylesheets {
        doc.add_head(stylesheet(href));
    }
    for src in &config.assets.scripts {
        doc.add_head(classic_script(src));
    }
    for src in &config.assets.modules {
        doc.add_head(module_script(src));
    }

    doc.add_body(views::navbar(&config.banner));
    doc.add_body(div().id("alert-box"));
    doc.add_body(div().id("content").child(workspace));
    for src in WORKSPACE_SCRIPTS {
        doc.add_body(script_src(src));
    }
    doc.add_body(module_script("scripts/main.js"));
    doc.add_body(script_src("scripts/monaco.js"));
    Ok(doc)
}

/// The standalone dashboard page: an independent single-panel pass over
/// the render block, sharing no element with the workspace tree.
pub fn dashboard_page(config: &Config) -> Result<Document, LayoutError> {
    let view = split_container(
        Orientation::Horizontal,
        vec![views::dashboard_render()],
        None,
    )?;

    let mut doc = Document::new(&config.dashboard_title);
    doc.add_head(stylesheet("assets/styles.css"));
    doc.add_body(view);
    for src in DASHBOARD_SCRIPTS {
        doc.add_body(script_src(src));
    }
    doc.add_body(module_script("scripts/dashboard.js"));
    Ok(doc)
}
