//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form handling,
//! post-submit navigation) and delegates shared rendering to `components`.
//! Protected pages are wrapped in `components::guard::Protected` at route
//! registration time.

pub mod about;
pub mod browse;
pub mod contact;
pub mod event_detail;
pub mod event_form;
pub mod event_teams;
pub mod login;
pub mod manager_dashboard;
pub mod manager_events;
pub mod my_registrations;
pub mod register;
pub mod student_dashboard;
pub mod team_register;
