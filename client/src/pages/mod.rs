//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (device requests, the report
//! flow, dashboard filters) and delegates rendering details to `components`.
//! Bundled complaint data arrives through context from `app::App`.

pub mod authority_dashboard;
pub mod authority_login;
pub mod citizen_dashboard;
pub mod citizen_login;
pub mod home;
pub mod not_found;
pub mod report_issue;
