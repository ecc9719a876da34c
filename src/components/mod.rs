//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and list items while reading session
//! state from Leptos context providers. `guard` wraps protected pages.

pub mod event_card;
pub mod guard;
pub mod navbar;
