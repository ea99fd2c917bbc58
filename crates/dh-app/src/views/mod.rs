// ABOUTME: Workspace content blocks, one function per panel.
// ABOUTME: Every function returns a finished element; no ambient context.

mod catalog;
mod chart;
mod chrome;
mod dashboard;
mod query;

pub use catalog::catalog_explorer;
pub use chart::{chart_editor, chart_preview};
pub use chrome::navbar;
pub use dashboard::{dashboard_editor, dashboard_preview, dashboard_render};
pub use query::{query_editor, query_results};
