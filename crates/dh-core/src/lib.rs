// ABOUTME: Shared configuration for the datahold generator.
// ABOUTME: Defines page titles, output paths, and head asset lists.

pub mod config;

pub use config::{AssetSettings, Config, ConfigError, OutputSettings};
