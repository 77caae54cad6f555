use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind host (e.g., 0.0.0.0)
    pub app_host: String,
    /// HTTP bind port (e.g., 5000)
    pub app_port: u16,

    /// Completion API credential, sent as a bearer token
    pub openai_api_key: String,
    /// Completion API base URL, always ending in `/` so `join` keeps the path
    pub openai_base_url: Url,
    /// Model identifier forwarded with every completion request
    pub openai_model: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_host = env_or_default(&lookup, "APP_HOST", "0.0.0.0");
        let app_port = parse_or_default::<u16, _>(&lookup, "PORT", 5000)?;

        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;
        let openai_base_url =
            parse_url_or_default(&lookup, "OPENAI_BASE_URL", "https://api.openai.com/v1/")?;
        let openai_model = env_or_default(&lookup, "OPENAI_MODEL", "gpt-4o-mini");

        Ok(Self {
            app_host,
            app_port,
            openai_api_key,
            openai_base_url,
            openai_model,
        })
    }
}

/* --------------------------- helpers --------------------------- */

fn env_or_default<F>(lookup: &F, key: &'static str, default: &'static str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn parse_or_default<T: FromStr, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => v.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
            name: key,
            value: v,
        }),
        None => Ok(default),
    }
}

fn parse_url_or_default<F>(
    lookup: &F,
    key: &'static str,
    default: &'static str,
) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut raw = env_or_default(lookup, key, default);
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl {
        name: key,
        value: raw,
    })
}
