//! Compiled-in demo data.
//!
//! The JSON files under `fixtures/` are embedded at build time and parsed on
//! demand. Pages receive a [`StaticComplaints`] value and query it through
//! [`ComplaintSource`]; nothing reads the fixtures through globals.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod tests;

use serde::de::DeserializeOwned;

use crate::listing::ComplaintSource;
use crate::model::{CitizenReport, Complaint, RecentIssue};

const COMPLAINTS_JSON: &str = include_str!("../fixtures/complaints.json");
const CITIZEN_REPORTS_JSON: &str = include_str!("../fixtures/citizen_reports.json");
const RECENT_ISSUES_JSON: &str = include_str!("../fixtures/recent_issues.json");

/// Error returned when a fixture document fails to parse.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture {name} is malformed: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory demo collections backing the dashboards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticComplaints {
    complaints: Vec<Complaint>,
    citizen_reports: Vec<CitizenReport>,
    recent_issues: Vec<RecentIssue>,
}

impl StaticComplaints {
    /// Parse the embedded fixture documents.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Parse`] if an embedded document is malformed.
    pub fn load() -> Result<Self, FixtureError> {
        Ok(Self {
            complaints: parse("complaints.json", COMPLAINTS_JSON)?,
            citizen_reports: parse("citizen_reports.json", CITIZEN_REPORTS_JSON)?,
            recent_issues: parse("recent_issues.json", RECENT_ISSUES_JSON)?,
        })
    }

    /// Build a source from explicit collections.
    #[must_use]
    pub fn new(complaints: Vec<Complaint>, citizen_reports: Vec<CitizenReport>, recent_issues: Vec<RecentIssue>) -> Self {
        Self { complaints, citizen_reports, recent_issues }
    }

    #[must_use]
    pub fn citizen_reports(&self) -> &[CitizenReport] {
        &self.citizen_reports
    }

    #[must_use]
    pub fn recent_issues(&self) -> &[RecentIssue] {
        &self.recent_issues
    }
}

impl ComplaintSource for StaticComplaints {
    fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<T, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Parse { name, source })
}
