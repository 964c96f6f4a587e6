//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps browser-side REST calls and `types` defines the schema shared
//! with the server's handlers.

pub mod api;
pub mod types;
