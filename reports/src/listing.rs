//! Complaint listing: filtering and dashboard summaries.
//!
//! Everything here is a pure function of a collection and some criteria.
//! Results keep source order; there is no sorting or pagination.

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;

use crate::model::{CitizenReport, Complaint, ComplaintStatus, IssueType, ParseError, ReportStatus, Severity};

/// Value used by the filter `<select>` elements to mean "no constraint".
pub const ALL: &str = "all";

/// Read-only access to a collection of complaints.
pub trait ComplaintSource {
    fn complaints(&self) -> &[Complaint];
}

impl ComplaintSource for [Complaint] {
    fn complaints(&self) -> &[Complaint] {
        self
    }
}

impl ComplaintSource for Vec<Complaint> {
    fn complaints(&self) -> &[Complaint] {
        self
    }
}

/// Criteria for narrowing the complaint list. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub severity: Option<Severity>,
    pub issue_type: Option<IssueType>,
}

impl ComplaintFilter {
    /// Build a filter from `<select>` values, where `"all"` disables a criterion.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if a value is neither `"all"` nor a known variant.
    pub fn from_form(severity: &str, issue_type: &str) -> Result<Self, ParseError> {
        Ok(Self {
            severity: parse_optional(severity)?,
            issue_type: parse_optional(issue_type)?,
        })
    }

    #[must_use]
    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.severity.is_none_or(|s| complaint.severity == s)
            && self.issue_type.is_none_or(|t| complaint.issue_type == t)
    }
}

fn parse_optional<T: std::str::FromStr<Err = ParseError>>(raw: &str) -> Result<Option<T>, ParseError> {
    if raw == ALL { Ok(None) } else { raw.parse().map(Some) }
}

/// Complaints from `source` matching `filter`, in source order.
pub fn filter_complaints<'a, S>(source: &'a S, filter: &ComplaintFilter) -> Vec<&'a Complaint>
where
    S: ComplaintSource + ?Sized,
{
    source
        .complaints()
        .iter()
        .filter(|c| filter.matches(c))
        .collect()
}

/// Counters shown in the authority dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintSummary {
    pub total: usize,
    /// Open or assigned but not yet being worked.
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// Sum of duplicate reports folded into the listed complaints.
    pub total_reports: u64,
}

impl ComplaintSummary {
    #[must_use]
    pub fn from_complaints<'a>(complaints: impl IntoIterator<Item = &'a Complaint>) -> Self {
        complaints.into_iter().fold(Self::default(), |mut acc, c| {
            acc.total += 1;
            acc.total_reports += u64::from(c.duplicate_count);
            match c.status {
                ComplaintStatus::Open | ComplaintStatus::Assigned => acc.open += 1,
                ComplaintStatus::InProgress => acc.in_progress += 1,
                ComplaintStatus::Resolved => acc.resolved += 1,
            }
            acc
        })
    }
}

/// Counters shown on the citizen dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportHistorySummary {
    pub total: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl ReportHistorySummary {
    #[must_use]
    pub fn from_reports(reports: &[CitizenReport]) -> Self {
        Self {
            total: reports.len(),
            in_progress: reports.iter().filter(|r| r.status == ReportStatus::InProgress).count(),
            resolved: reports.iter().filter(|r| r.status == ReportStatus::Resolved).count(),
        }
    }
}
