//! Networking modules for the platform REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls with bearer auth and timeouts, `error` defines
//! the failure taxonomy pages display, and `types` defines the shared wire
//! schema.

pub mod api;
pub mod error;
pub mod types;
