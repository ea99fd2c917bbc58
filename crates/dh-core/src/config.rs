// ABOUTME: Generator configuration handling.
// ABOUTME: Loads settings from an optional TOML file next to the invocation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the generated pages land.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output directory, created if missing
    pub dir: PathBuf,
    pub workspace_file: String,
    pub dashboard_file: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            workspace_file: "index.html".to_string(),
            dashboard_file: "dashboard.html".to_string(),
        }
    }
}

/// Head asset references for the workspace page.
///
/// The strings are opaque to the generator; they pass through to the
/// emitted `<link>`/`<script>` tags unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub stylesheets: Vec<String>,
    /// Classic (non-module) scripts
    pub scripts: Vec<String>,
    /// ES module scripts
    pub modules: Vec<String>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            stylesheets: vec![
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.0/css/all.min.css"
                    .to_string(),
                "assets/styles.css".to_string(),
            ],
            scripts: Vec::new(),
            modules: vec![
                "scripts/indexedDB.js".to_string(),
                "scripts/duckDB.js".to_string(),
                "scripts/backend.js".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `<title>` of the workspace page
    pub workspace_title: String,

    /// `<title>` of the standalone dashboard page
    pub dashboard_title: String,

    /// Navbar banner text
    pub banner: String,

    /// Output directory and file names
    pub output: OutputSettings,

    /// Workspace page head assets
    pub assets: AssetSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_title: "♖ DataHold".to_string(),
            dashboard_title: "♖ Dashboard".to_string(),
            banner: "♖ DataHold WebBI POC".to_string(),
            output: OutputSettings::default(),
            assets: AssetSettings::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl Config {
    /// Config file looked up relative to the working directory
    pub const DEFAULT_PATH: &'static str = "datahold.toml";

    /// Load config from a path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `datahold.toml` if present. A missing file means defaults;
    /// a malformed one is an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(Self::DEFAULT_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
