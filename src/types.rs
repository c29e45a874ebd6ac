//! Shared value types passed between the driver, the classifier, and the
//! remote authentication service.

use std::fmt;

use serde::Serialize;

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Login credentials for a single submission.
///
/// Owned by the caller of [`crate::driver::SessionDriver::submit_login`] and
/// dropped when that call returns.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), secret: secret.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// TRANSPORT RESULT
// =============================================================================

/// Raw result of one network call, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResult {
    /// The server answered with this HTTP status.
    Completed { status: u16 },
    /// No response was obtained (connect failure, timeout, DNS, TLS).
    NoResponse { reason: String },
}

impl TransportResult {
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::Completed { status }
    }

    #[must_use]
    pub fn no_response(reason: impl Into<String>) -> Self {
        Self::NoResponse { reason: reason.into() }
    }
}

// =============================================================================
// CONTEXT / VIEWS
// =============================================================================

/// Which operation produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Login,
    Logout,
}

impl Context {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two views the UI collaborator routes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewId {
    #[serde(rename = "/login")]
    Login,
    #[serde(rename = "/dashboard")]
    Dashboard,
}

impl ViewId {
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}
