//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. `session` is the single source of truth for identity;
//! `ui` keeps transient chrome preferences out of it.

pub mod session;
pub mod ui;
