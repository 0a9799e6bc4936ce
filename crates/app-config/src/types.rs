// In crates/app-config/src/types.rs

use std::path::PathBuf;

use serde::Deserialize;

use pipeline::PipelineSettings;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    /// The application's general settings.
    #[serde(default)]
    pub app: AppSettings,
    /// Window sizes and the volatility floor for the analysis.
    #[serde(default)]
    pub analysis: PipelineSettings,
    /// Where prices are read from and results are written to.
    #[serde(default)]
    pub io: IoSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The log level for the application (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct IoSettings {
    /// CSV with a header row and the price in the second column.
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    /// Destination of the per-day table.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Destination of the SVG chart.
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,
}

impl Default for IoSettings {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            chart_path: default_chart_path(),
        }
    }
}

/// Helper functions for serde defaults
fn default_log_level() -> String { "info".to_string() }
fn default_input_path() -> PathBuf { PathBuf::from("data/SSNLF_Prices.csv") }
fn default_output_path() -> PathBuf { PathBuf::from("trend_analysis.csv") }
fn default_chart_path() -> PathBuf { PathBuf::from("trend_analysis.svg") }
