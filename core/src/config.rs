//! Loader configuration from the environment.
//!
//! | variable                 | default                                  |
//! |--------------------------|------------------------------------------|
//! | `PLACEHOLDER_BASE_URL`   | `https://jsonplaceholder.typicode.com`   |
//! | `PLACEHOLDER_TIMEOUT_MS` | unset (transport default, no timeout)    |

use std::time::Duration;

use thiserror::Error;

use crate::client::{build_fetch, PlaceholderClient};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const BASE_URL_VAR: &str = "PLACEHOLDER_BASE_URL";
pub const TIMEOUT_MS_VAR: &str = "PLACEHOLDER_TIMEOUT_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not an absolute http(s) URL: {value:?}")]
    InvalidBaseUrl { var: &'static str, value: String },

    #[error("{var} must be a positive integer of milliseconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(BASE_URL_VAR) {
            if build_fetch(&value).is_err() {
                return Err(ConfigError::InvalidBaseUrl {
                    var: BASE_URL_VAR,
                    value,
                });
            }
            config.base_url = value;
        }

        if let Some(value) = get(TIMEOUT_MS_VAR) {
            match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout = Some(Duration::from_millis(ms)),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: TIMEOUT_MS_VAR,
                        value,
                    })
                }
            }
        }

        Ok(config)
    }

    pub fn client(&self) -> PlaceholderClient {
        PlaceholderClient::new(&self.base_url)
    }
}
