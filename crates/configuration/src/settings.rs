use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataSettings,
    #[serde(default)] // Use default values if the [report] section is missing
    pub report: ReportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the order export lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Path to the comma-separated order export (header line first).
    pub orders_path: PathBuf,
}

/// Controls what the `report` command prints.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// How many products the top-products section lists.
    #[serde(default = "default_top_products")]
    pub top_products: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// A single JSON document.
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_top_products() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

// --- Default Implementations ---

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_products: default_top_products(),
            format: OutputFormat::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
