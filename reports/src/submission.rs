//! Report submission flow and the verification seam.
//!
//! DESIGN
//! ======
//! `ReportFlow` holds the form draft, the location picker, and a four-state
//! machine:
//!
//! ```text
//! Idle --submit--> Verifying --verdict--> Success (terminal)
//!   ^                             \-----> Failure --retry--> Idle
//! ```
//!
//! Submitting requires an image, an issue type, and `Idle`; anything else is
//! a no-op that reports why. The verdict comes from a [`Verifier`], injected
//! by the caller. [`SimulatedVerifier`] stands in for a real service with a
//! weighted coin flip drawn from an injected random source. Retrying after a
//! failure keeps every draft field.
//!
//! The report location is read from the flow's own [`LocationPicker`], so the
//! coordinate on screen is always the one that gets submitted. Map moves are
//! user edits and follow the edit lock. The one-time device read is not: it
//! lands whenever it answers, even mid-verification, and the in-flight report
//! keeps the coordinate it was submitted with.

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::location::{GeolocationError, LocationPicker};
use crate::model::{CapturedImage, Coordinate, IssueType};

/// Simulated processing time before a verdict is produced.
pub const VERIFICATION_DELAY: Duration = Duration::from_secs(3);

/// Draws at or below this value are rejected (about one in five).
pub const SUCCESS_THRESHOLD: f64 = 0.2;

/// Rejection reason used by [`SimulatedVerifier`].
pub const UNVERIFIED_REASON: &str =
    "AI could not verify the issue from the provided image. Please try again with a clearer photo.";

// =============================================================================
// PAYLOAD
// =============================================================================

/// Form state collected from the camera and detail fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub image: Option<CapturedImage>,
    pub issue_type: Option<IssueType>,
    /// Optional free text.
    pub description: String,
}

/// A complete report handed to the verifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub image: CapturedImage,
    pub location: Coordinate,
    pub issue_type: IssueType,
    pub description: String,
}

// =============================================================================
// VERIFIER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub reason: String,
}

/// Decides whether a submitted report is accepted.
pub trait Verifier {
    /// # Errors
    ///
    /// Returns [`Rejected`] when the report is not accepted.
    fn verify(&mut self, report: &Report) -> Result<Accepted, Rejected>;
}

impl<F> Verifier for F
where
    F: FnMut(&Report) -> Result<Accepted, Rejected>,
{
    fn verify(&mut self, report: &Report) -> Result<Accepted, Rejected> {
        self(report)
    }
}

/// Local stand-in for a verification service: accepts when a uniform draw in
/// `[0, 1)` exceeds the threshold.
#[derive(Debug, Clone)]
pub struct SimulatedVerifier<R> {
    rng: R,
    threshold: f64,
}

impl<R: RngCore> SimulatedVerifier<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng, threshold: SUCCESS_THRESHOLD }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl SimulatedVerifier<StdRng> {
    /// Deterministic verifier for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Verifier for SimulatedVerifier<R> {
    fn verify(&mut self, _report: &Report) -> Result<Accepted, Rejected> {
        let draw: f64 = self.rng.random();
        if draw > self.threshold {
            Ok(Accepted)
        } else {
            Err(Rejected { reason: UNVERIFIED_REASON.to_owned() })
        }
    }
}

// =============================================================================
// FLOW
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Verifying,
    Success,
    Failure,
}

impl SubmissionState {
    /// Whether a result view replaces the form.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

/// Why a submit request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a photo is required")]
    MissingImage,
    #[error("an issue type is required")]
    MissingIssueType,
    #[error("cannot submit while {0:?}")]
    NotIdle(SubmissionState),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFlow {
    draft: ReportDraft,
    location: LocationPicker,
    state: SubmissionState,
    rejection: Option<Rejected>,
}

impl ReportFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    #[must_use]
    pub fn location(&self) -> &LocationPicker {
        &self.location
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Reason for the last failure, while in `Failure`.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejected> {
        self.rejection.as_ref()
    }

    /// Apply `edit` to the draft. Ignored (returns `false`) while verifying or
    /// after success.
    pub fn edit(&mut self, edit: impl FnOnce(&mut ReportDraft)) -> bool {
        if self.is_locked() {
            return false;
        }
        edit(&mut self.draft);
        true
    }

    /// Apply the one-time device position read. Ignored once the picker has
    /// left its pending state; not subject to the edit lock.
    pub fn resolve_location(&mut self, result: Result<Coordinate, GeolocationError>) -> Option<Coordinate> {
        if !self.location.is_locating() {
            return None;
        }
        Some(self.location.resolve(result))
    }

    /// Move the location from a map click or marker drag. Ignored (returns
    /// `None`) while verifying or after success.
    pub fn move_location(&mut self, to: Coordinate) -> Option<Coordinate> {
        if self.is_locked() {
            return None;
        }
        Some(self.location.set(to))
    }

    fn is_locked(&self) -> bool {
        matches!(self.state, SubmissionState::Verifying | SubmissionState::Success)
    }

    /// Check every submit precondition.
    ///
    /// # Errors
    ///
    /// Returns the first unmet precondition.
    pub fn check_submit(&self) -> Result<(), SubmitError> {
        if self.state != SubmissionState::Idle {
            return Err(SubmitError::NotIdle(self.state));
        }
        if self.draft.image.is_none() {
            return Err(SubmitError::MissingImage);
        }
        if self.draft.issue_type.is_none() {
            return Err(SubmitError::MissingIssueType);
        }
        Ok(())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    /// Move to `Verifying` and return the report to verify.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] and leaves the flow untouched if a
    /// precondition fails.
    pub fn submit(&mut self) -> Result<Report, SubmitError> {
        self.check_submit()?;
        let (Some(image), Some(issue_type)) = (self.draft.image.clone(), self.draft.issue_type) else {
            return Err(SubmitError::MissingImage);
        };
        self.state = SubmissionState::Verifying;
        Ok(Report {
            image,
            location: self.location.coordinate(),
            issue_type,
            description: self.draft.description.clone(),
        })
    }

    /// Record the verdict for an in-flight submission. No-op unless verifying.
    pub fn complete(&mut self, verdict: Result<Accepted, Rejected>) -> SubmissionState {
        if self.state != SubmissionState::Verifying {
            return self.state;
        }
        match verdict {
            Ok(Accepted) => {
                self.state = SubmissionState::Success;
                self.rejection = None;
            }
            Err(rejected) => {
                self.state = SubmissionState::Failure;
                self.rejection = Some(rejected);
            }
        }
        self.state
    }

    /// Return to `Idle` after a failure, keeping the draft. No-op otherwise.
    pub fn retry(&mut self) -> bool {
        if self.state != SubmissionState::Failure {
            return false;
        }
        self.state = SubmissionState::Idle;
        self.rejection = None;
        true
    }
}
