//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the report form's input widgets. Widgets
//! own their device resources and report results upward through callbacks;
//! pages own the domain state.

pub mod camera_capture;
pub mod complaint_list;
pub mod header;
pub mod location_map;
pub mod stat_card;
