//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided via context by the root component. The header uses it to switch
//! between "Log in" and "Sign out"; pages under `/dashboard` and `/admin` are
//! already guarded by the server before they render, so this state only
//! drives presentation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// State while `/api/auth/me` is in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// Short label for the header: the user's email or a generic fallback.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_else(|| "Account".to_owned())
    }
}
