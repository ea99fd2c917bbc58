// ABOUTME: Entry point for the datahold generator.
// ABOUTME: Builds the workspace and dashboard pages and writes them out.

mod pages;
mod views;

use anyhow::Result;
use dh_core::Config;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_or_default()?;
    std::fs::create_dir_all(&config.output.dir)?;

    let workspace = pages::workspace_page(&config)?;
    let path = config.output.dir.join(&config.output.workspace_file);
    std::fs::write(&path, workspace.render())?;
    info!("wrote {}", path.display());

    let dashboard = pages::dashboard_page(&config)?;
    let path = config.output.dir.join(&config.output.dashboard_file);
    std::fs::write(&path, dashboard.render())?;
    info!("wrote {}", path.display());

    Ok(())
}
