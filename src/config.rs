use std::{env, time::Duration};

use derive_getters::Getters;

use crate::errors::{Error, Result};

pub const BASE_URL: &str = "https://api.exchangerate.host/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const BASE_URL_VAR: &str = "EXCHANGE_RATES_BASE_URL";
const ACCESS_KEY_VAR: &str = "EXCHANGE_RATES_ACCESS_KEY";
const TIMEOUT_VAR: &str = "EXCHANGE_RATES_TIMEOUT_SECS";

/// Settings for the HTTP side of the client.
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    access_key: Option<String>,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            access_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment, loading a
    /// `.env` file first if one is present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup. Unset or empty
    /// variables keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(base_url) = var(BASE_URL_VAR) {
            config.base_url = base_url;
        }

        config.access_key = var(ACCESS_KEY_VAR);

        if let Some(secs) = var(TIMEOUT_VAR) {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_VAR, secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
