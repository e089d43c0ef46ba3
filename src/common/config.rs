use std::env;
use std::str::FromStr;

use log::{info, warn};

use crate::common::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "prod" | "production" => Ok(Self::Production),
            _ => Err(format!("invalid environment: {}", s)),
        }
    }
}

/// Server-side settings that are not part of the Leptos options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Absolute origin used for sitemap links, without a trailing slash.
    pub public_origin: String,
    pub environment: Environment,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_origin: "http://localhost:8080".to_string(),
            environment: Environment::Development,
        }
    }
}

impl SiteConfig {
    pub const ORIGIN_KEY: &'static str = "SAFFRON_PUBLIC_ORIGIN";
    pub const ENV_KEY: &'static str = "SAFFRON_ENV";

    /// Reads the process environment; call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let public_origin = match lookup(Self::ORIGIN_KEY) {
            Some(raw) => parse_origin(&raw)?,
            None => {
                info!(
                    "{} not set, using default: {}",
                    Self::ORIGIN_KEY,
                    defaults.public_origin
                );
                defaults.public_origin
            }
        };

        let environment = match lookup(Self::ENV_KEY) {
            Some(raw) => raw.parse::<Environment>().map_err(|reason| {
                warn!("Invalid {} value: {raw}", Self::ENV_KEY);
                ConfigError::Invalid {
                    key: Self::ENV_KEY,
                    value: raw.clone(),
                    reason,
                }
            })?,
            None => {
                info!(
                    "{} not set, using default: {}",
                    Self::ENV_KEY,
                    defaults.environment
                );
                defaults.environment
            }
        };

        Ok(Self {
            public_origin,
            environment,
        })
    }
}

fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let origin = raw.trim().trim_end_matches('/');
    let host = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"));

    if host.is_some_and(|h| !h.is_empty() && !h.contains('/')) {
        return Ok(origin.to_string());
    }

    Err(ConfigError::Invalid {
        key: SiteConfig::ORIGIN_KEY,
        value: raw.to_string(),
        reason: "expected an absolute http(s) origin".to_string(),
    })
}
