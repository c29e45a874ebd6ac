//! Client configuration parsed from environment variables.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Timeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base, without a trailing slash. `/login` and `/logout` hang off it.
    pub api_base_url: String,
    pub csrf_token: Option<String>,
    pub timeouts: Timeouts,
    pub accept_invalid_certs: bool,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base_url", &self.api_base_url)
            .field("csrf_token", &self.csrf_token.as_ref().map(|_| "<redacted>"))
            .field("timeouts", &self.timeouts)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            csrf_token: None,
            timeouts: Timeouts::default(),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `AUTHGATE_API_BASE_URL`: default `https://localhost:8080/api`
    /// - `AUTHGATE_CSRF_TOKEN`: anti-forgery token sent as the `CSRF` header
    /// - `AUTHGATE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `AUTHGATE_CONNECT_TIMEOUT_SECS`: default 10
    /// - `AUTHGATE_ACCEPT_INVALID_CERTS`: default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any present value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any present value fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = match lookup("AUTHGATE_API_BASE_URL") {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let csrf_token = normalize_csrf_token(lookup("AUTHGATE_CSRF_TOKEN"))?;
        let timeouts = Timeouts {
            request_secs: parse_u64(
                "AUTHGATE_REQUEST_TIMEOUT_SECS",
                lookup("AUTHGATE_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_u64(
                "AUTHGATE_CONNECT_TIMEOUT_SECS",
                lookup("AUTHGATE_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let accept_invalid_certs = match lookup("AUTHGATE_ACCEPT_INVALID_CERTS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                var: "AUTHGATE_ACCEPT_INVALID_CERTS",
                message: format!("expected a boolean, got '{raw}'"),
            })?,
            None => false,
        };

        Ok(Self { api_base_url, csrf_token, timeouts, accept_invalid_certs })
    }
}

/// Parse an API base URL and return it without trailing slashes.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] unless the URL is http(s) with a
/// host and carries no query or fragment.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue { var: "AUTHGATE_API_BASE_URL", message };

    let url = reqwest::Url::parse(raw.trim()).map_err(|e| invalid(format!("'{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("expected an http(s) URL, got '{raw}'")));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid(format!("'{raw}' has no host")));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(format!("'{raw}' must not carry a query or fragment")));
    }
    Ok(url.as_str().trim_end_matches('/').to_owned())
}

/// Drop blank tokens and reject ones that cannot travel in a header.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if the token is not a valid header value.
pub fn normalize_csrf_token(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(token) = raw.filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };
    reqwest::header::HeaderValue::from_str(&token).map_err(|_| ConfigError::InvalidValue {
        var: "AUTHGATE_CSRF_TOKEN",
        message: "token is not a valid header value".to_owned(),
    })?;
    Ok(Some(token))
}

fn parse_u64(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue { var, message: format!("'{value}': {e}") }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
