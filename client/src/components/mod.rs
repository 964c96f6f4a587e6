//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `deferred` and `failure` are the render boundaries every page composes;
//! `layout` and `service_card` are shared presentation.

pub mod deferred;
pub mod failure;
pub mod layout;
pub mod service_card;
