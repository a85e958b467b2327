//! Authority dashboard chrome and filter state.
//!
//! DESIGN
//! ======
//! The sidebar section only retitles the page; every section shows the same
//! stats, filters, and lists. Filter criteria are held parsed so rendering
//! never re-reads raw `<select>` strings.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use reports::{ComplaintFilter, IssueType, ParseError, Severity};

/// Sidebar navigation entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Overview,
    OpenIssues,
    Resolved,
    MapView,
    Analytics,
    Settings,
}

impl Section {
    pub const ALL: [Self; 6] =
        [Self::Overview, Self::OpenIssues, Self::Resolved, Self::MapView, Self::Analytics, Self::Settings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::OpenIssues => "Open Issues",
            Self::Resolved => "Resolved",
            Self::MapView => "Map View",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub section: Section,
    /// Mobile drawer visibility.
    pub sidebar_open: bool,
    pub filter: ComplaintFilter,
}

impl DashboardState {
    /// Switch section and close the mobile drawer.
    pub fn select(&mut self, section: Section) {
        self.section = section;
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Apply a severity `<select>` value. Invalid values leave the filter
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for values other than `"all"` or a severity.
    pub fn set_severity(&mut self, raw: &str) -> Result<(), ParseError> {
        self.filter = ComplaintFilter::from_form(raw, issue_type_value(self.filter.issue_type))?;
        Ok(())
    }

    /// Apply an issue type `<select>` value. Invalid values leave the filter
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for values other than `"all"` or an issue type.
    pub fn set_issue_type(&mut self, raw: &str) -> Result<(), ParseError> {
        self.filter = ComplaintFilter::from_form(severity_value(self.filter.severity), raw)?;
        Ok(())
    }
}

/// `<select>` value for a severity criterion.
#[must_use]
pub fn severity_value(severity: Option<Severity>) -> &'static str {
    severity.map_or(reports::listing::ALL, Severity::as_str)
}

/// `<select>` value for an issue type criterion.
#[must_use]
pub fn issue_type_value(issue_type: Option<IssueType>) -> &'static str {
    issue_type.map_or(reports::listing::ALL, IssueType::as_str)
}
