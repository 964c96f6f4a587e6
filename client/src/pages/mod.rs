//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages that read the query string or fragment wrap those
//! readers in `components::deferred::Deferred`.

pub mod admin;
pub mod auth_callback;
pub mod booking;
pub mod case_studies;
pub mod checkout_success;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod offers;
pub mod services;
