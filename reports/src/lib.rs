//! Civic issue reporting domain model and state machines.
//!
//! This crate owns everything in the reporting app that is not browser glue:
//! the complaint data model, the camera-capture and location-picker state
//! machines, the report submission flow and its verifier seam, complaint
//! filtering, and the slippy-map projection math used by the location map.
//!
//! DESIGN
//! ======
//! Device access (camera, geolocation) is modelled as traits with
//! single-resolution async methods. The `client` crate implements them on top
//! of `web-sys`; tests implement them with in-memory fakes. Static demo data is
//! compiled in as JSON and handed to listing code through [`ComplaintSource`]
//! rather than read from globals.

pub mod camera;
pub mod fixtures;
pub mod geo;
pub mod listing;
pub mod location;
pub mod model;
pub mod submission;

pub use camera::{Camera, CameraCapture, CameraError, CameraPhase, CaptureError, FacingMode, VideoStream};
pub use fixtures::{FixtureError, StaticComplaints};
pub use geo::MapViewport;
pub use listing::{ComplaintFilter, ComplaintSource, ComplaintSummary, ReportHistorySummary, filter_complaints};
pub use location::{Geolocator, GeolocationError, LocationPicker, LocationSource, PositionOptions};
pub use model::{
    CapturedImage, CitizenReport, Complaint, ComplaintStatus, Coordinate, IssueType, ParseError, Priority,
    RecentIssue, ReportStatus, Severity,
};
pub use submission::{
    Accepted, Rejected, Report, ReportDraft, ReportFlow, SimulatedVerifier, SubmissionState, SubmitError, Verifier,
};
