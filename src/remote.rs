//! Remote authentication service: the trait the driver talks to and the
//! HTTP implementation of it.
//!
//! DESIGN
//! ======
//! The anti-forgery token comes from an injected [`TokenProvider`] rather
//! than from process-wide state, so the client can be built and tested in
//! isolation. Every call resolves to a [`TransportResult`]; reqwest errors
//! that happen before a response arrives become `NoResponse`.

use std::sync::Arc;

use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;

use crate::config::{ClientConfig, normalize_base_url};
use crate::error::ClientError;
use crate::types::{Credentials, TransportResult};

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "CSRF";

// =============================================================================
// TRAITS
// =============================================================================

/// Login/logout operations against the remote service.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> TransportResult;

    async fn logout(&self) -> TransportResult;
}

/// Source of the anti-forgery token attached to each request.
pub trait TokenProvider: Send + Sync {
    fn anti_forgery_token(&self) -> Option<String>;
}

/// A token fixed at construction time.
#[derive(Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }
}

impl TokenProvider for StaticToken {
    fn anti_forgery_token(&self) -> Option<String> {
        self.0.clone()
    }
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpAuthService {
    http: reqwest::Client,
    base_url: String,
    ping_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpAuthService {
    /// Build a client from typed config, using the configured CSRF token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let tokens = Arc::new(StaticToken::new(config.csrf_token.clone()));
        Self::new(config, tokens)
    }

    /// Build a client from environment variables. See [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, ClientError> {
        let config = ClientConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Build a client with an explicit token provider.
    ///
    /// Redirects are not followed: a 3xx is the server's answer and is
    /// classified like any other status.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails to build.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(&config.api_base_url)?;
        let ping_url = reqwest::Url::parse(&base_url)
            .and_then(|url| url.join("/ping"))
            .map_err(|e| ClientError::HttpClientBuild(e.to_string()))?
            .to_string();
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .cookie_store(true)
            .redirect(Policy::none())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| ClientError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url, ping_url, tokens })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_csrf(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let Some(token) = self.tokens.anti_forgery_token() else {
            tracing::debug!("no anti-forgery token available; sending request without it");
            return request;
        };
        match HeaderValue::from_str(&token) {
            Ok(value) => request.header(CSRF_HEADER, value),
            Err(_) => {
                tracing::error!("anti-forgery token is not a valid header value; sending request without it");
                request
            }
        }
    }

    /// Check that the server origin answers `GET /ping`.
    pub async fn ping(&self) -> TransportResult {
        tracing::debug!(url = %self.ping_url, "ping");
        send(self.http.get(&self.ping_url)).await
    }
}

#[async_trait::async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: &Credentials) -> TransportResult {
        let url = self.endpoint("login");
        tracing::debug!(%url, identifier = %credentials.identifier, "login request");
        let request = self
            .http
            .post(url)
            .basic_auth(&credentials.identifier, Some(&credentials.secret));
        send(self.with_csrf(request)).await
    }

    async fn logout(&self) -> TransportResult {
        let url = self.endpoint("logout");
        tracing::debug!(%url, "logout request");
        send(self.with_csrf(self.http.post(url))).await
    }
}

async fn send(request: reqwest::RequestBuilder) -> TransportResult {
    match request.send().await {
        Ok(response) => TransportResult::status(response.status().as_u16()),
        Err(e) if e.is_builder() => {
            tracing::error!(error = %e, "request could not be built; nothing was sent");
            TransportResult::no_response(format!("request not sent: {e}"))
        }
        Err(e) => {
            tracing::warn!(error = %e, "request produced no response");
            TransportResult::no_response(e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
