//! Error types for configuration and client construction.
//!
//! Transport failures are not errors here: they become
//! [`crate::types::TransportResult::NoResponse`] and are classified like
//! any other outcome.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment value could not be parsed.
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
