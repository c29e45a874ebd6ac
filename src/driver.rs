//! Session transition driver: the login and logout call sites.
//!
//! Each submission issues one remote call, classifies the result, and
//! applies the decision to the view: either a navigation or a message,
//! never both. Nothing is retried or deduplicated here, and no state is
//! kept between submissions.

use crate::classifier::{Action, Decision, classify, describe};
use crate::remote::AuthService;
use crate::types::{Context, Credentials, TransportResult, ViewId};

/// The UI collaborator a [`SessionDriver`] applies decisions to.
pub trait ViewSink {
    fn navigate(&mut self, view: ViewId);

    fn show_message(&mut self, message: &str);

    fn clear_message(&mut self);
}

pub struct SessionDriver<S, V> {
    service: S,
    view: V,
}

impl<S: AuthService, V: ViewSink> SessionDriver<S, V> {
    #[must_use]
    pub fn new(service: S, view: V) -> Self {
        Self { service, view }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    #[must_use]
    pub fn into_parts(self) -> (S, V) {
        (self.service, self.view)
    }

    /// Submit credentials and route to the dashboard or show why not.
    pub async fn submit_login(&mut self, credentials: Credentials) -> Decision {
        self.view.clear_message();
        let result = self.service.login(&credentials).await;
        drop(credentials);
        self.apply(&result, Context::Login)
    }

    /// Log out and route to the login view or show why not.
    ///
    /// An already-expired session (401) routes to the login view too.
    pub async fn submit_logout(&mut self) -> Decision {
        self.view.clear_message();
        let result = self.service.logout().await;
        self.apply(&result, Context::Logout)
    }

    fn apply(&mut self, result: &TransportResult, context: Context) -> Decision {
        let kind = classify(result);
        let decision = describe(kind, context);
        tracing::info!(%context, outcome = kind.label(), navigate_to = ?decision.navigate_to, "auth outcome");

        match decision.action() {
            Action::Navigate(view) => self.view.navigate(view),
            Action::ShowMessage(message) => self.view.show_message(message),
        }
        decision
    }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
