//! Outcome classification and the transition policy built on top of it.
//!
//! DESIGN
//! ======
//! All branching on transport results lives here. Call sites only ever
//! match on [`OutcomeKind`] or apply a [`Decision`]; they never compare
//! status codes themselves.
//!
//! `classify` is total over [`TransportResult`] and `describe` is a pure
//! table lookup, so the same input always yields the same decision.

use serde::Serialize;

use crate::types::{Context, TransportResult, ViewId};

const UNAUTHORIZED: u16 = 401;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email/password.";

// =============================================================================
// OUTCOME KIND
// =============================================================================

/// Classified meaning of a [`TransportResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Success,
    /// Rejected with 401: wrong credentials on login, expired session on logout.
    InvalidCredentials,
    ServerError,
    NetworkError,
}

impl OutcomeKind {
    /// Stable label for structured logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidCredentials => "invalid_credentials",
            Self::ServerError => "server",
            Self::NetworkError => "network",
        }
    }
}

/// Map a raw transport result to exactly one [`OutcomeKind`].
#[must_use]
pub fn classify(result: &TransportResult) -> OutcomeKind {
    match result {
        TransportResult::Completed { status: 200..=299 } => OutcomeKind::Success,
        TransportResult::Completed { status: UNAUTHORIZED } => OutcomeKind::InvalidCredentials,
        TransportResult::Completed { .. } => OutcomeKind::ServerError,
        TransportResult::NoResponse { .. } => OutcomeKind::NetworkError,
    }
}

// =============================================================================
// DECISION
// =============================================================================

/// What the UI collaborator should do after an operation completes.
///
/// Exactly one of `navigate_to` and a non-empty `message` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub navigate_to: Option<ViewId>,
    pub message: String,
}

/// Borrowed view of a [`Decision`] as the single action it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Navigate(ViewId),
    ShowMessage(&'a str),
}

impl Decision {
    fn navigate(view: ViewId) -> Self {
        Self { navigate_to: Some(view), message: String::new() }
    }

    fn show(message: String) -> Self {
        Self { navigate_to: None, message }
    }

    #[must_use]
    pub fn is_navigation(&self) -> bool {
        self.navigate_to.is_some()
    }

    #[must_use]
    pub fn action(&self) -> Action<'_> {
        match self.navigate_to {
            Some(view) => Action::Navigate(view),
            None => Action::ShowMessage(&self.message),
        }
    }
}

/// Message shown for failures the user cannot fix by retyping.
#[must_use]
pub fn unexpected_error_message(kind: &str) -> String {
    format!("Unexpected {kind} error. Please contact [somebody] for assistance.")
}

/// Derive the [`Decision`] for an outcome in the given context.
///
/// A 401 on logout routes to the login view like a clean logout: a user
/// told "unauthorized" there was not supposed to be on an authenticated view.
#[must_use]
pub fn describe(kind: OutcomeKind, context: Context) -> Decision {
    match (kind, context) {
        (OutcomeKind::Success, Context::Login) => Decision::navigate(ViewId::Dashboard),
        (OutcomeKind::Success | OutcomeKind::InvalidCredentials, Context::Logout) => {
            Decision::navigate(ViewId::Login)
        }
        (OutcomeKind::InvalidCredentials, Context::Login) => Decision::show(INVALID_CREDENTIALS_MESSAGE.to_owned()),
        (OutcomeKind::ServerError, _) => Decision::show(unexpected_error_message("server")),
        (OutcomeKind::NetworkError, _) => Decision::show(unexpected_error_message("network")),
    }
}

/// Classify `result` and describe it in one step.
#[must_use]
pub fn decide(result: &TransportResult, context: Context) -> Decision {
    describe(classify(result), context)
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
