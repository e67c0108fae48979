use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing sections and keys fall
/// back to the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calculator: CalculatorDefaults,
    pub chart: ChartConfig,
    pub recommendation: RecommendationConfig,
    pub preferences: PreferencesConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Rejects values that would make the chart or the HTTP client unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.chart.radius.is_finite() && self.chart.radius > 0.0) {
            return Err(ConfigError::ValidationError(
                "chart.radius must be greater than 0".to_string(),
            ));
        }
        if !(self.chart.stroke_width.is_finite() && self.chart.stroke_width > 0.0) {
            return Err(ConfigError::ValidationError(
                "chart.stroke_width must be greater than 0".to_string(),
            ));
        }
        if self.chart.center < self.chart.radius + self.chart.stroke_width / 2.0 {
            return Err(ConfigError::ValidationError(
                "chart.center must leave room for the radius and half the stroke".to_string(),
            ));
        }
        if self.recommendation.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "recommendation.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.recommendation.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "recommendation.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Values pre-filled into the SIP calculator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub monthly_contribution: f64,
    /// Nominal annual rate of return, in percent.
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            monthly_contribution: 5000.0,
            annual_rate_percent: 12.0,
            years: 10,
        }
    }
}

/// Geometry of the rendered donut, in SVG user units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub radius: f64,
    pub stroke_width: f64,
    /// The centre coordinate; the view box is `2 * center` wide and high.
    pub center: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            radius: 80.0,
            stroke_width: 18.0,
            center: 100.0,
        }
    }
}

/// Where the fund recommendation service lives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// JSON file holding the theme and disclaimer flags.
    pub path: PathBuf,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("fundwise_prefs.json"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
}
