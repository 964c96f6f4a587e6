use super::*;

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn loading_state_is_not_signed_in() {
    let state = AuthState::loading();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn signed_in_when_user_present_and_loaded() {
    let state = AuthState {
        user: Some(SessionUser { id: "u1".to_owned(), email: Some("a@b.com".to_owned()) }),
        loading: false,
    };
    assert!(state.is_signed_in());
    assert_eq!(state.display_name(), "a@b.com");
}

#[test]
fn display_name_falls_back_without_email() {
    let state = AuthState { user: Some(SessionUser { id: "u1".to_owned(), email: None }), loading: false };
    assert_eq!(state.display_name(), "Account");
}
