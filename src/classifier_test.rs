use super::*;

const SERVER_MESSAGE: &str = "Unexpected server error. Please contact [somebody] for assistance.";
const NETWORK_MESSAGE: &str = "Unexpected network error. Please contact [somebody] for assistance.";

const ALL_KINDS: [OutcomeKind; 4] =
    [OutcomeKind::Success, OutcomeKind::InvalidCredentials, OutcomeKind::ServerError, OutcomeKind::NetworkError];
const ALL_CONTEXTS: [Context; 2] = [Context::Login, Context::Logout];

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_2xx_is_success() {
    for status in [200, 201, 204, 299] {
        assert_eq!(classify(&TransportResult::status(status)), OutcomeKind::Success, "status {status}");
    }
}

#[test]
fn classify_401_is_invalid_credentials() {
    assert_eq!(classify(&TransportResult::status(401)), OutcomeKind::InvalidCredentials);
}

#[test]
fn classify_other_statuses_are_server_errors() {
    for status in [100, 199, 300, 302, 400, 403, 404, 429, 500, 502, 503] {
        assert_eq!(classify(&TransportResult::status(status)), OutcomeKind::ServerError, "status {status}");
    }
}

#[test]
fn classify_no_response_is_network_error() {
    let result = TransportResult::no_response("connection refused");
    assert_eq!(classify(&result), OutcomeKind::NetworkError);
}

#[test]
fn classify_is_total_over_every_status() {
    for status in 0..=u16::MAX {
        let kind = classify(&TransportResult::status(status));
        let expected = match status {
            200..=299 => OutcomeKind::Success,
            401 => OutcomeKind::InvalidCredentials,
            _ => OutcomeKind::ServerError,
        };
        assert_eq!(kind, expected, "status {status}");
    }
}

// =============================================================================
// describe — login
// =============================================================================

#[test]
fn login_success_navigates_to_dashboard() {
    let decision = describe(OutcomeKind::Success, Context::Login);
    assert_eq!(decision, Decision { navigate_to: Some(ViewId::Dashboard), message: String::new() });
}

#[test]
fn login_invalid_credentials_shows_actionable_message() {
    let decision = describe(OutcomeKind::InvalidCredentials, Context::Login);
    assert_eq!(decision.navigate_to, None);
    assert_eq!(decision.message, "Invalid email/password.");
}

#[test]
fn login_server_error_shows_contact_message() {
    let decision = describe(OutcomeKind::ServerError, Context::Login);
    assert_eq!(decision.navigate_to, None);
    assert_eq!(decision.message, SERVER_MESSAGE);
}

#[test]
fn login_network_error_shows_contact_message() {
    let decision = describe(OutcomeKind::NetworkError, Context::Login);
    assert_eq!(decision.navigate_to, None);
    assert_eq!(decision.message, NETWORK_MESSAGE);
}

// =============================================================================
// describe — logout
// =============================================================================

#[test]
fn logout_success_navigates_to_login() {
    let decision = describe(OutcomeKind::Success, Context::Logout);
    assert_eq!(decision, Decision { navigate_to: Some(ViewId::Login), message: String::new() });
}

#[test]
fn logout_expired_session_behaves_like_success() {
    assert_eq!(
        describe(OutcomeKind::InvalidCredentials, Context::Logout),
        describe(OutcomeKind::Success, Context::Logout)
    );
}

#[test]
fn failure_messages_match_across_contexts() {
    for kind in [OutcomeKind::ServerError, OutcomeKind::NetworkError] {
        assert_eq!(describe(kind, Context::Login), describe(kind, Context::Logout));
    }
}

// =============================================================================
// invariants
// =============================================================================

#[test]
fn every_decision_has_exactly_one_action() {
    for kind in ALL_KINDS {
        for context in ALL_CONTEXTS {
            let decision = describe(kind, context);
            assert_ne!(
                decision.navigate_to.is_some(),
                !decision.message.is_empty(),
                "{kind:?}/{context:?} must either navigate or show a message"
            );
        }
    }
}

#[test]
fn success_always_navigates() {
    for context in ALL_CONTEXTS {
        assert!(describe(OutcomeKind::Success, context).is_navigation());
    }
}

#[test]
fn failures_never_navigate() {
    for kind in [OutcomeKind::ServerError, OutcomeKind::NetworkError] {
        for context in ALL_CONTEXTS {
            assert!(!describe(kind, context).is_navigation(), "{kind:?}/{context:?}");
        }
    }
}

#[test]
fn describe_is_idempotent() {
    for kind in ALL_KINDS {
        for context in ALL_CONTEXTS {
            assert_eq!(describe(kind, context), describe(kind, context));
        }
    }
}

#[test]
fn action_reflects_decision() {
    let nav = describe(OutcomeKind::Success, Context::Login);
    assert_eq!(nav.action(), Action::Navigate(ViewId::Dashboard));

    let msg = describe(OutcomeKind::InvalidCredentials, Context::Login);
    assert_eq!(msg.action(), Action::ShowMessage("Invalid email/password."));
}

#[test]
fn labels_are_stable() {
    let labels: Vec<&str> = ALL_KINDS.iter().map(|k| k.label()).collect();
    assert_eq!(labels, ["success", "invalid_credentials", "server", "network"]);
}

// =============================================================================
// scenarios
// =============================================================================

#[test]
fn scenario_login_valid_credentials() {
    let decision = decide(&TransportResult::status(200), Context::Login);
    assert_eq!(decision.navigate_to.map(ViewId::route), Some("/dashboard"));
    assert_eq!(decision.message, "");
}

#[test]
fn scenario_login_wrong_password() {
    let decision = decide(&TransportResult::status(401), Context::Login);
    assert_eq!(decision, Decision { navigate_to: None, message: "Invalid email/password.".into() });
}

#[test]
fn scenario_login_backend_outage() {
    let decision = decide(&TransportResult::status(500), Context::Login);
    assert_eq!(decision, Decision { navigate_to: None, message: SERVER_MESSAGE.into() });
}

#[test]
fn scenario_logout_expired_session() {
    let decision = decide(&TransportResult::status(401), Context::Logout);
    assert_eq!(decision.navigate_to.map(ViewId::route), Some("/login"));
    assert_eq!(decision.message, "");
}

#[test]
fn scenario_logout_without_network() {
    let decision = decide(&TransportResult::no_response("dns failure"), Context::Logout);
    assert_eq!(decision, Decision { navigate_to: None, message: NETWORK_MESSAGE.into() });
}

#[test]
fn decision_serializes_with_route_names() {
    let json = serde_json::to_value(describe(OutcomeKind::Success, Context::Login)).unwrap();
    assert_eq!(json, serde_json::json!({ "navigate_to": "/dashboard", "message": "" }));

    let json = serde_json::to_value(describe(OutcomeKind::ServerError, Context::Logout)).unwrap();
    assert_eq!(json["navigate_to"], serde_json::Value::Null);
}
