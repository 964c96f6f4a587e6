use super::*;

#[test]
fn token_in_fragment_yields_handoff() {
    let outcome = callback_outcome(
        "access_token=tok123&token_type=bearer&expires_in=3600",
        &QueryParams::parse("next=%2Fadmin"),
    );
    assert_eq!(
        outcome,
        CallbackOutcome::Token { access_token: "tok123".to_owned(), next: "/admin".to_owned() }
    );
}

#[test]
fn missing_next_defaults_to_dashboard() {
    match callback_outcome("access_token=t", &QueryParams::default()) {
        CallbackOutcome::Token { next, .. } => assert_eq!(next, "/dashboard"),
        CallbackOutcome::Failed(_) => panic!("expected token"),
    }
}

#[test]
fn provider_error_is_surfaced() {
    let outcome = callback_outcome("error=access_denied&error_description=Link+expired", &QueryParams::default());
    assert_eq!(outcome, CallbackOutcome::Failed("Link expired".to_owned()));
}

#[test]
fn empty_fragment_fails_with_generic_reason() {
    match callback_outcome("", &QueryParams::default()) {
        CallbackOutcome::Failed(reason) => assert!(reason.contains("missing")),
        CallbackOutcome::Token { .. } => panic!("expected failure"),
    }
}
