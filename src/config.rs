//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::{projections::DEFAULT_SCATTER_SIZE_MAX, RenderOptions};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Largest scatter bubble diameter in pixels
    #[serde(default = "default_scatter_size_max")]
    pub scatter_size_max: f64,

    /// URL of the plotly.js bundle loaded by the page
    #[serde(default = "default_plotly_src")]
    pub plotly_src: String,
}

fn default_scatter_size_max() -> f64 {
    DEFAULT_SCATTER_SIZE_MAX
}

fn default_plotly_src() -> String {
    "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            scatter_size_max: default_scatter_size_max(),
            plotly_src: default_plotly_src(),
        }
    }
}

impl DashboardConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            scatter_size_max: self.scatter_size_max,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is initialized; report with `LoadOutcome::log`.
    pub fn load_default() -> LoadOutcome {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("onu-haiti").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first readable, valid file among `paths`
    ///
    /// Files that exist but fail to load are recorded in `LoadOutcome::errors`
    /// and skipped; so is an invalid environment override. Falls back to
    /// defaults when no file loads.
    pub fn load_first(paths: &[PathBuf]) -> LoadOutcome {
        Self::load_first_with(paths, |key| std::env::var(key).ok())
    }

    fn load_first_with(
        paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> LoadOutcome {
        let mut errors = Vec::new();
        let mut source = None;
        let mut config = Config::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(loaded) => {
                    config = loaded;
                    source = Some(path.clone());
                    break;
                }
                Err(e) => errors.push(e),
            }
        }

        if let Err(e) = config.apply_overrides(lookup) {
            errors.push(e);
        }

        LoadOutcome {
            config,
            source,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Valid overrides are applied even when another one is rejected
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let mut rejected = None;

        // Server overrides
        if let Some(host) = lookup("ONU_HAITI_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ONU_HAITI_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => {
                    rejected = Some(ConfigError::Env {
                        var: "ONU_HAITI_PORT",
                        value: port,
                    })
                }
            }
        }

        // Logging overrides
        if let Some(level) = lookup("ONU_HAITI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ONU_HAITI_LOG_FORMAT") {
            self.logging.format = format;
        }

        rejected.map_or(Ok(()), Err)
    }

    fn check(&self) -> Result<(), String> {
        let size = self.dashboard.scatter_size_max;
        if !size.is_finite() || size <= 0.0 {
            return Err(format!(
                "dashboard.scatter_size_max must be a positive number, got {}",
                size
            ));
        }
        Ok(())
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct LoadOutcome {
    pub config: Config,
    /// File the config came from; `None` when defaults were used
    pub source: Option<PathBuf>,
    /// Files that could not be loaded, then any rejected override
    pub errors: Vec<ConfigError>,
}

impl LoadOutcome {
    /// Report where the config came from and what was skipped
    pub fn log(&self) {
        for error in &self.errors {
            tracing::warn!("Ignoring invalid configuration: {}", error);
        }

        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# ONU Haïti Data Configuration
#
# Environment variables override these settings:
# - ONU_HAITI_HOST
# - ONU_HAITI_PORT
# - ONU_HAITI_LOG_LEVEL
# - ONU_HAITI_LOG_FORMAT

[server]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8501

# Allowed CORS origins (empty = any origin)
cors_origins = []

[dashboard]
# Largest scatter bubble diameter (pixels)
scatter_size_max = 40.0

# plotly.js bundle loaded by the page
plotly_src = "https://cdn.plot.ly/plotly-2.35.2.min.js"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.addr(), "0.0.0.0:8501");
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.dashboard.scatter_size_max, 40.0);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.server.addr(), defaults.server.addr());
        assert_eq!(config.dashboard.scatter_size_max, defaults.dashboard.scatter_size_max);
        assert_eq!(config.dashboard.plotly_src, defaults.dashboard.plotly_src);
        assert_eq!(config.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.dashboard.scatter_size_max, 40.0);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_scatter_size_rejected() {
        let result = Config::parse("[dashboard]\nscatter_size_max = -1.0\n");
        assert!(result.unwrap_err().contains("scatter_size_max"));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Config::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let bad_path = dir.path().join("bad.toml");
        std::fs::write(&bad_path, "[server\nport = ").unwrap();
        let bad = Config::load(&bad_path);
        assert!(matches!(bad, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_bad_default_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let invalid = dir.path().join("invalid.toml");
        std::fs::write(&broken, "bad [[").unwrap();
        std::fs::write(&invalid, "[dashboard]\nscatter_size_max = -5.0\n").unwrap();

        let outcome = Config::load_first(&[
            dir.path().join("absent.toml"),
            broken.clone(),
            invalid.clone(),
        ]);

        assert!(outcome.source.is_none());
        assert_eq!(outcome.errors.len(), 2);
        assert!(matches!(
            &outcome.errors[0],
            ConfigError::Parse { path, .. } if path == &broken
        ));
        assert!(outcome.errors[1].to_string().contains("scatter_size_max"));
        assert_eq!(outcome.config.dashboard.scatter_size_max, 40.0);
    }

    #[test]
    fn test_first_valid_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "bad [[").unwrap();
        std::fs::write(&good, "[dashboard]\nscatter_size_max = 25.0\n").unwrap();

        let outcome = Config::load_first(&[broken, good.clone()]);

        assert_eq!(outcome.source, Some(good));
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.config.dashboard.scatter_size_max, 25.0);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ONU_HAITI_HOST", "127.0.0.1"),
            ("ONU_HAITI_PORT", "8080"),
            ("ONU_HAITI_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.addr(), "127.0.0.1:8080");
        assert!(config.logging.is_json());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| match key {
            "ONU_HAITI_PORT" => Some("http".to_string()),
            "ONU_HAITI_HOST" => Some("127.0.0.1".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::Env { var: "ONU_HAITI_PORT", ref value }) if value == "http"
        ));
        assert_eq!(config.server.addr(), "127.0.0.1:8501");
    }

    #[test]
    fn test_invalid_port_override_is_reported() {
        let outcome =
            Config::load_first_with(&[], |key| (key == "ONU_HAITI_PORT").then(|| "http".to_string()));

        assert!(outcome.source.is_none());
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].to_string().contains("ONU_HAITI_PORT"));
        assert_eq!(outcome.config.server.port, 8501);
    }
}
