use serde::Deserialize;

use crate::domain::cache::AUTH_CACHE_MARKER;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub platform: PlatformSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity provider settings handed to the authentication client
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub audience: Option<String>,
    /// Application package id, used as the native redirect scheme
    #[serde(default)]
    pub package_id: String,
    /// Redirect target when running in a plain browser
    #[serde(default = "default_web_origin")]
    pub web_origin: String,
}

/// Durable store backing the native cache
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default)]
    pub backend: BridgeBackend,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_table_name")]
    pub table_name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BridgeBackend {
    #[default]
    Sqlite,
    InMemory,
}

/// Platform override; detected from the build target when unset
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlatformSettings {
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_web_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_marker() -> String {
    AUTH_CACHE_MARKER.to_string()
}

fn default_database_url() -> String {
    "sqlite://auth-cache.db?mode=rwc".to_string()
}

fn default_table_name() -> String {
    "auth_cache".to_string()
}

fn default_max_connections() -> u32 {
    4
}

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            client_id: String::new(),
            audience: None,
            package_id: String::new(),
            web_origin: default_web_origin(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            backend: BridgeBackend::default(),
            database_url: default_database_url(),
            table_name: default_table_name(),
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
