use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use harmonia_core::HashParams;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

const RECOMMENDED_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    pub email: EmailSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_op_timeout_ms")]
    pub op_timeout_ms: u64,
}

impl DatabaseSettings {
    pub fn op_timeout(&self) -> Duration {
        Duration::from_millis(self.op_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    /// Token lifetime in seconds. Defaults to 7 days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: i64,
    #[serde(default = "default_m_cost")]
    pub hash_m_cost_kib: u32,
    #[serde(default = "default_t_cost")]
    pub hash_t_cost: u32,
    #[serde(default = "default_p_cost")]
    pub hash_p_cost: u32,
}

impl AuthSettings {
    pub fn hash_params(&self) -> HashParams {
        HashParams {
            m_cost_kib: self.hash_m_cost_kib,
            t_cost: self.hash_t_cost,
            p_cost: self.hash_p_cost,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// User cache entry lifetime in seconds. Defaults to 300.
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl(),
        }
    }
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub frontend_base_url: String,
    #[serde(default = "default_email_timeout_ms")]
    pub timeout_ms: u64,
}

impl EmailSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Settings {
    /// Loads configuration from an optional `config/default.json` file with
    /// `HARMONIA__`-prefixed environment variables layered on top
    /// (e.g. `HARMONIA__AUTH__JWT_SECRET`).
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("HARMONIA").separator("__"))
            .build()?
            .try_deserialize()?;

        if settings.auth.jwt_secret.expose_secret().len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                "jwt_secret is shorter than the recommended {RECOMMENDED_SECRET_LEN} characters"
            );
        }

        Ok(settings)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    5
}

fn default_op_timeout_ms() -> u64 {
    5000
}

fn default_token_ttl() -> i64 {
    60 * 60 * 24 * 7
}

fn default_m_cost() -> u32 {
    15000
}

fn default_t_cost() -> u32 {
    2
}

fn default_p_cost() -> u32 {
    1
}

fn default_cache_ttl() -> u64 {
    300
}

fn default_email_timeout_ms() -> u64 {
    10_000
}
