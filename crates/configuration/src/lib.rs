use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DataSettings, LoggingSettings, OutputFormat, ReportSettings};

/// Prefix for environment overrides, e.g. `ORDERSCOPE_DATA__ORDERS_PATH`.
pub const ENV_PREFIX: &str = "ORDERSCOPE";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Loads the application configuration from `path` (default `config.toml`).
///
/// The default file is optional: every setting can also come from `ORDERSCOPE_*`
/// environment variables, which take precedence over the file. `orders_path`, when
/// given, takes precedence over both.
pub fn load_config(
    path: Option<&Path>,
    orders_path: Option<&Path>,
) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let raw = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option(
            "data.orders_path",
            orders_path.map(|p| p.to_string_lossy().into_owned()),
        )?
        .build()?;

    finish(raw)
}

/// Loads the configuration from TOML text alone, without consulting the environment.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let raw = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    finish(raw)
}

fn finish(raw: config::Config) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = raw.try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.orders_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.orders_path must not be empty".to_string(),
        ));
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "logging.level must be one of {:?}, got '{}'",
            LOG_LEVELS, config.logging.level
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_fill_missing_sections() {
        let config = load_config_from_str("[data]\norders_path = \"orders.csv\"\n").unwrap();
        assert_eq!(config.data.orders_path, PathBuf::from("orders.csv"));
        assert_eq!(config.report.top_products, 5);
        assert_eq!(config.report.format, OutputFormat::Table);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn reads_every_section() {
        let toml = r#"
            [data]
            orders_path = "data/amazon_sales.csv"

            [report]
            top_products = 10
            format = "json"

            [logging]
            level = "debug"
        "#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.report.top_products, 10);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_data_section_fails_to_load() {
        let err = load_config_from_str("[report]\ntop_products = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn rejects_empty_path_and_unknown_level() {
        let err = load_config_from_str("[data]\norders_path = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let toml = "[data]\norders_path = \"orders.csv\"\n[logging]\nlevel = \"loud\"\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn orders_override_stands_in_for_the_data_section() {
        let dir = std::env::temp_dir().join("orderscope-config-override");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("config.toml");
        std::fs::write(&file, "[report]\ntop_products = 2\n").unwrap();

        let config = load_config(Some(file.as_path()), Some(Path::new("cli.csv"))).unwrap();
        assert_eq!(config.data.orders_path, PathBuf::from("cli.csv"));
        assert_eq!(config.report.top_products, 2);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/definitely/not/here/config.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
