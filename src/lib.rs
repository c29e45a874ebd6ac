//! # authgate
//!
//! Login/logout client for a two-view application (login form and
//! dashboard). The interesting part is [`classifier`]: it turns the raw
//! result of a login or logout call into one of four outcomes and decides
//! whether the UI should navigate or show a message.
//!
//! [`driver`] wires a [`remote::AuthService`] to a [`driver::ViewSink`];
//! [`remote::HttpAuthService`] is the reqwest-backed service.

pub mod classifier;
pub mod config;
pub mod driver;
pub mod error;
pub mod remote;
pub mod types;

pub use classifier::{Decision, OutcomeKind, classify, decide, describe};
pub use driver::{SessionDriver, ViewSink};
pub use remote::{AuthService, HttpAuthService, StaticToken, TokenProvider};
pub use types::{Context, Credentials, TransportResult, ViewId};
