//! Configuration management using Figment
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults ([`Config::default`])
//! 2. A TOML file (`config.toml` in the working directory, or an explicit path)
//! 3. Environment variables prefixed `DOTNET_REST_`, with `__` separating sections
//!    (e.g. `DOTNET_REST_SERVICE__PORT=9000`, `DOTNET_REST_JWT__SECRET=...`)

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const ENV_PREFIX: &str = "DOTNET_REST_";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("configuration file not found: {0}")]
    MissingFile(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub jwt: JwtConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub host: String,
    /// `0` binds an ephemeral port.
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "dotnet-rest-service".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// HS256 signing settings. `issuer` and `audience` are both stamped on issued tokens and
/// required on incoming ones when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub token_ttl_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: None,
            audience: None,
            token_ttl_secs: 3600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the store actor's request channel.
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 256 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl Config {
    /// Defaults, then `path` (or `config.toml` if present), then the environment.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        match path {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::extract(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads without validating, for callers that fill in values first.
    pub fn extract(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.display().to_string()));
            }
        }
        Self::figment(path)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "service.name cannot be empty".to_string(),
            ));
        }

        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "jwt.secret must be set (e.g. {ENV_PREFIX}JWT__SECRET)"
            )));
        }

        if self.jwt.token_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "jwt.token_ttl_secs must be greater than 0".to_string(),
            ));
        }

        if self.store.buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "store.buffer_size must be greater than 0".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level must be one of: {}",
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }
}
