//! Client configuration baked in at build time.
//!
//! The bundle runs in a browser with no process environment, so values come
//! from `option_env!` at compile time. Parsing is split into helpers over
//! `Option<&str>` so it can be exercised without rebuilding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";
pub const DEFAULT_RESET_CLOSE_DELAY_MS: u32 = 3000;

/// Errors produced while reading build-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    #[error("{var} is not a valid number: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST backend root, without a trailing slash.
    pub api_base_url: String,
    /// Delay before a finished wizard/registration closes its modal.
    pub modal_close_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            modal_close_delay_ms: DEFAULT_RESET_CLOSE_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time variables.
    ///
    /// Optional:
    /// - `SNIUGB_API_BASE_URL`: default `http://127.0.0.1:8000/api/v1`
    /// - `SNIUGB_RESET_CLOSE_DELAY_MS`: default 3000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SNIUGB_API_BASE_URL"), option_env!("SNIUGB_RESET_CLOSE_DELAY_MS"))
    }

    /// Same as [`ClientConfig::from_env`] but over explicit raw values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but unusable.
    pub fn from_values(base_url: Option<&str>, close_delay_ms: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url(base_url)?,
            modal_close_delay_ms: parse_delay_ms(close_delay_ms)?,
        })
    }

    /// Join an endpoint path (starting with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var: "SNIUGB_API_BASE_URL" });
    }
    Ok(trimmed.to_owned())
}

fn parse_delay_ms(raw: Option<&str>) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(DEFAULT_RESET_CLOSE_DELAY_MS),
        Some(value) => value.trim().parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
            var: "SNIUGB_RESET_CLOSE_DELAY_MS",
            value: value.to_owned(),
        }),
    }
}
