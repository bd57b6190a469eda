use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::DEFAULT_PAGE_SIZE;
use crate::i18n::Locale;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub query: QuerySettings,
    #[serde(default)]
    pub i18n: I18nSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct QuerySettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize { DEFAULT_PAGE_SIZE }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nSettings {
    #[serde(default)]
    pub default_locale: Locale,
    /// Refuse to start when locale catalogs define different keys
    #[serde(default)]
    pub strict_parity: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySettings {
    /// JSON seed file; the bundled dataset is used when unset
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

fn environment() -> Environment {
    // e.g., MATRIMONY__SERVER__PORT -> server.port
    Environment::with_prefix("MATRIMONY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATRIMONY__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_query_settings() {
        let settings = Settings::default();
        assert_eq!(settings.query.page_size, 5);
        assert_eq!(settings.i18n.default_locale, Locale::En);
        assert!(!settings.i18n.strict_parity);
        assert!(settings.directory.seed_path.is_none());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_parse_toml_sections() {
        let toml = r#"
            [server]
            port = 9090

            [query]
            page_size = 10

            [i18n]
            default_locale = "ta"
            strict_parity = true
        "#;

        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.query.page_size, 10);
        assert_eq!(settings.i18n.default_locale, Locale::Ta);
        assert!(settings.i18n.strict_parity);
        assert_eq!(settings.logging.format, "json");
    }
}
