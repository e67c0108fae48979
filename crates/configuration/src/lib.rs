use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    CalculatorDefaults, ChartConfig, Config, LogLevel, LoggingConfig, PreferencesConfig,
    RecommendationConfig,
};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. See `load_config_from`.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads and validates the configuration from `path`, layered under
/// `FUNDWISE__`-prefixed environment variables (e.g. `FUNDWISE__CHART__RADIUS=70`).
///
/// The file is optional: without it, defaults apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("FUNDWISE")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_toml(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reexported_config_is_the_loaded_type() {
        let config: settings::Config = load_config_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.chart.radius, 80.0);
        assert_eq!(config.recommendation.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn partial_file_overrides_only_its_keys() {
        let file = temp_toml(
            r#"
            [chart]
            radius = 70.0
            center = 110.0

            [logging]
            level = "debug"
            "#,
        );
        let config = load_config_from(file.path()).unwrap();

        assert_eq!(config.chart.radius, 70.0);
        assert_eq!(config.chart.stroke_width, 18.0);
        assert_eq!(config.chart.center, 110.0);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.calculator.years, 10);
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let file = temp_toml("[chart]\nradius = 0.0\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.recommendation.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
