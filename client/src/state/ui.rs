//! Local UI chrome state (navigation menu, promo banner).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the auth state so the header
//! can evolve independently of session data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::FlagCheck;

/// Feature gate controlling the promo banner above the header.
pub const PROMO_BANNER_GATE: &str = "promo_banner";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile navigation drawer.
    pub nav_open: bool,
    pub promo_banner: bool,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Apply a gate check. Fallback answers never enable the banner.
    pub fn apply_flag(&mut self, check: &FlagCheck) {
        if check.gate == PROMO_BANNER_GATE {
            self.promo_banner = check.enabled && !check.fallback.unwrap_or(false);
        }
    }
}
