//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub gateway: GatewaySettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Remote table-query gateway endpoint. The base URL and public API key are
/// supplied at deploy time, never baked into the binary.
#[derive(Debug, Deserialize, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub ttl_seconds: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DirectorySettings {
    /// Location shown when a requested nickname does not resolve.
    #[serde(default)]
    pub default_location_id: Option<Uuid>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "portal-server")?
            .set_default("gateway.timeout_seconds", 30)?
            .set_default("session.ttl_seconds", 86400)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
