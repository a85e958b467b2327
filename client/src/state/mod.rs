//! Page-local client state.
//!
//! DESIGN
//! ======
//! Pure models that pages keep inside signals. Domain machines (report flow,
//! camera, location) come from `reports`; what lives here is presentation
//! state those machines do not cover.

pub mod dashboard;
pub mod map;
