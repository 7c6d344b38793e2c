use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub ranking: ServiceConfig,
    #[serde(default = "default_extraction")]
    pub extraction: ServiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// An optional external HTTP service. An empty `url` disables it.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_ranking_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_ms: default_ranking_timeout_ms(),
        }
    }
}

impl ServiceConfig {
    pub fn enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn validate(&self, name: &str) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err(format!("{name} timeout_ms must be greater than 0"));
        }
        if self.enabled() && !(self.url.starts_with("http://") || self.url.starts_with("https://"))
        {
            return Err(format!("{name} url must start with http:// or https://"));
        }
        Ok(())
    }
}

fn default_ranking_timeout_ms() -> u64 {
    3000
}

fn default_extraction() -> ServiceConfig {
    ServiceConfig {
        url: String::new(),
        timeout_ms: 5000,
    }
}

impl Config {
    /// Defaults, then the config file, then `LARDER__*` environment variables.
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("observability.log_level", "info")?
            .set_default("ranking.url", "")?
            .set_default("ranking.timeout_ms", 3000)?
            .set_default("extraction.url", "")?
            .set_default("extraction.timeout_ms", 5000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // LARDER__SERVER__PORT, LARDER__RANKING__URL, ...
        builder = builder.add_source(
            Environment::with_prefix("LARDER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        self.ranking.validate("ranking")?;
        self.extraction.validate("extraction")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            observability: ObservabilityConfig::default(),
            ranking: ServiceConfig::default(),
            extraction: default_extraction(),
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("port"));
    }

    #[test]
    fn test_validation_service_settings() {
        let mut config = config();
        config.ranking.timeout_ms = 0;
        assert!(config.validate().unwrap_err().contains("ranking"));

        let mut config = self::config();
        config.extraction.url = "ftp://parser.local".to_string();
        assert!(config.validate().unwrap_err().contains("extraction"));

        let mut config = self::config();
        config.ranking.url = "https://rank.local/v1".to_string();
        assert!(config.validate().is_ok());
        assert!(config.ranking.enabled());
        assert!(!config.extraction.enabled());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("larder.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[ranking]
url = "http://localhost:9000/rank"
timeout_ms = 1500
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ranking.url, "http://localhost:9000/rank");
        assert_eq!(config.ranking.timeout(), Duration::from_millis(1500));
        assert_eq!(config.extraction.timeout_ms, 5000);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("absent.toml");

        let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(!config.ranking.enabled());
        assert!(config.validate().is_ok());
    }
}
