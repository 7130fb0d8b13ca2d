//! Environment-based application configuration.
//!
//! All settings are read from environment variables (a `.env` file is loaded by
//! `main` through dotenvy before this runs). Required variables produce
//! `ConfigError::MissingEnvVar` when absent; optional ones fall back to defaults.

use std::{fmt, str::FromStr, time::Duration};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_RAIDERIO_API_URL: &str = "https://raider.io/api";
const DEFAULT_RAIDERIO_API_VERSION: &str = "v1";
const DEFAULT_RAIDERIO_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_RAIDERIO_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Guilds to register slash commands in; empty registers them globally
    pub discord_guild_ids: Vec<u64>,
    pub sync_commands: bool,

    pub raiderio: RaiderIoConfig,
}

/// Settings for the Raider.IO client.
#[derive(Clone)]
pub struct RaiderIoConfig {
    pub api_url: String,
    pub api_version: String,
    /// Optional access key appended to profile requests
    pub api_key: String,
    /// Lifetime of cached realm listings; zero disables the cache
    pub cache_ttl: Duration,
    /// Upper bound for every outbound request
    pub timeout: Duration,
}

impl Default for RaiderIoConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_RAIDERIO_API_URL.to_string(),
            api_version: DEFAULT_RAIDERIO_API_VERSION.to_string(),
            api_key: String::new(),
            cache_ttl: Duration::from_secs(DEFAULT_RAIDERIO_CACHE_TTL_SECS),
            timeout: Duration::from_secs(DEFAULT_RAIDERIO_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead of
    /// mutating the process environment.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value for a variable name, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values parsed
    /// - `Err(AppError::ConfigErr)` - Missing required variable or unparsable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let defaults = RaiderIoConfig::default();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_ids: parse_guild_ids(&lookup)?,
            sync_commands: parse_or(&lookup, "SYNC_COMMANDS", true)?,
            raiderio: RaiderIoConfig {
                api_url: optional(&lookup, "RAIDERIO_API_URL", |url| url.trim_end_matches('/'))
                    .unwrap_or(defaults.api_url),
                api_version: optional(&lookup, "RAIDERIO_API_VERSION", |version| {
                    version.trim_matches('/')
                })
                .unwrap_or(defaults.api_version),
                api_key: optional(&lookup, "RAIDERIO_API_KEY", str::trim).unwrap_or_default(),
                cache_ttl: Duration::from_secs(parse_or(
                    &lookup,
                    "RAIDERIO_CACHE_TTL_SECS",
                    DEFAULT_RAIDERIO_CACHE_TTL_SECS,
                )?),
                timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "RAIDERIO_TIMEOUT_SECS",
                    DEFAULT_RAIDERIO_TIMEOUT_SECS,
                )?),
            },
        })
    }
}

/// Reads a free-form variable, treating values that are blank after `clean` as unset.
fn optional<F>(lookup: &F, name: &str, clean: impl Fn(&str) -> &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| clean(value.trim()).to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                })
        }
        _ => Ok(default),
    }
}

/// Parses the comma-separated `DISCORD_GUILD_IDS` list.
fn parse_guild_ids<F>(lookup: &F) -> Result<Vec<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup("DISCORD_GUILD_IDS") else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>()
                .ok()
                .filter(|id| *id != 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "DISCORD_GUILD_IDS".to_string(),
                    value: raw.clone(),
                })
        })
        .collect()
}

/// Output format of the log subscriber, selected with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(other.to_string()),
        }
    }
}

impl LogFormat {
    /// Reads `LOG_FORMAT`. This runs before the subscriber exists, so `main`
    /// reports an invalid value once logging is up.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        parse_or(&lookup, "LOG_FORMAT", Self::default())
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.len())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("discord_bot_token", &mask(&self.discord_bot_token))
            .field("discord_guild_ids", &self.discord_guild_ids)
            .field("sync_commands", &self.sync_commands)
            .field("raiderio", &self.raiderio)
            .finish()
    }
}

impl fmt::Debug for RaiderIoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RaiderIoConfig")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("api_key", &mask(&self.api_key))
            .field("cache_ttl", &self.cache_ttl)
            .field("timeout", &self.timeout)
            .finish()
    }
}
