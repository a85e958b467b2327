//! Core data model: coordinates, captured images, and complaint records.
//!
//! Enum string forms match the fixture JSON and the `<select>` option values
//! used by the client (`water_leakage`, `In Progress`, ...).

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown issue type: {0}")]
    IssueType(String),
    #[error("unknown severity: {0}")]
    Severity(String),
    #[error("unknown priority: {0}")]
    Priority(String),
    #[error("unknown status: {0}")]
    Status(String),
    #[error("not an image data URL")]
    DataUrl,
}

// =============================================================================
// COORDINATE
// =============================================================================

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Fallback position used when the device cannot report one (New Delhi).
    pub const DEFAULT: Self = Self { lat: 28.6139, lng: 77.209 };

    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Human-readable `"lat, lng"` with five decimal places.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lng)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// =============================================================================
// CAPTURED IMAGE
// =============================================================================

/// A still frame encoded as a `data:` URL (for example `data:image/jpeg;base64,...`).
///
/// Held in memory only; the reporting flow replaces or drops it on user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    data_url: String,
}

impl CapturedImage {
    /// Wrap an encoded data URL.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DataUrl`] if `data_url` is not of the form
    /// `data:image/<type>[;params],<payload>`.
    pub fn from_data_url(data_url: impl Into<String>) -> Result<Self, ParseError> {
        let data_url = data_url.into();
        let Some(rest) = data_url.strip_prefix("data:image/") else {
            return Err(ParseError::DataUrl);
        };
        match rest.split_once(',') {
            Some((header, _)) if !header.is_empty() => Ok(Self { data_url }),
            _ => Err(ParseError::DataUrl),
        }
    }

    /// The full data URL, suitable for an `<img src>`.
    #[must_use]
    pub fn as_data_url(&self) -> &str {
        &self.data_url
    }
}

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Category of a reported civic issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Pothole,
    Garbage,
    Drainage,
    WaterLeakage,
    Other,
}

impl IssueType {
    /// Every issue type in display order.
    pub const ALL: [Self; 5] = [Self::Pothole, Self::Garbage, Self::Drainage, Self::WaterLeakage, Self::Other];

    /// Stable identifier used in fixtures and form values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pothole => "pothole",
            Self::Garbage => "garbage",
            Self::Drainage => "drainage",
            Self::WaterLeakage => "water_leakage",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pothole => "Pothole",
            Self::Garbage => "Garbage",
            Self::Drainage => "Drainage",
            Self::WaterLeakage => "Water Leakage",
            Self::Other => "Other",
        }
    }
}

impl FromStr for IssueType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pothole" => Ok(Self::Pothole),
            "garbage" => Ok(Self::Garbage),
            "drainage" => Ok(Self::Drainage),
            "water_leakage" => Ok(Self::WaterLeakage),
            "other" => Ok(Self::Other),
            other => Err(ParseError::IssueType(other.to_owned())),
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How bad the issue is on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(ParseError::Severity(other.to_owned())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage priority assigned to a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Critical" => Ok(Self::Critical),
            other => Err(ParseError::Priority(other.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status of a complaint on the authority side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Open,
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a report as seen by the citizen who filed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    Submitted,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ReportStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A complaint shown on the authority dashboard. Demo data; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: u32,
    pub title: String,
    pub issue_type: IssueType,
    pub severity: Severity,
    pub priority: Priority,
    pub status: ComplaintStatus,
    pub area: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Number of citizen reports clustered into this complaint.
    pub duplicate_count: u32,
    pub image_url: String,
    /// Verification confidence, 0-100.
    pub ai_confidence: u8,
    pub description: String,
}

/// One entry in a citizen's own report history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenReport {
    pub id: u32,
    pub title: String,
    pub status: ReportStatus,
    pub category: String,
    pub date: String,
}

/// A row in the authority "recent submissions" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentIssue {
    pub id: u32,
    pub title: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    pub area: String,
    pub date: String,
}
