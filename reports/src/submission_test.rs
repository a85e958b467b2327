use super::*;
use crate::location::LocationSource;

// =============================================================
// Helpers
// =============================================================

/// Random source that always yields the same uniform `f64` draw.
struct FixedDraw(u64);

impl FixedDraw {
    fn at(value: f64) -> Self {
        // `f64` sampling keeps the top 53 bits of `next_u64`.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let bits = (value * (1u64 << 53) as f64) as u64;
        Self(bits << 11)
    }
}

impl RngCore for FixedDraw {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for (i, byte) in dst.iter_mut().enumerate() {
            *byte = self.0.to_le_bytes()[i % 8];
        }
    }
}

fn image() -> CapturedImage {
    CapturedImage::from_data_url("data:image/jpeg;base64,AAAA").unwrap()
}

fn ready_flow() -> ReportFlow {
    let mut flow = ReportFlow::new();
    flow.edit(|d| {
        d.image = Some(image());
        d.issue_type = Some(IssueType::Pothole);
        d.description = "Deep pothole".to_owned();
    });
    flow.move_location(Coordinate::new(12.97, 77.59));
    flow
}

fn accept(_: &Report) -> Result<Accepted, Rejected> {
    Ok(Accepted)
}

fn reject(_: &Report) -> Result<Accepted, Rejected> {
    Err(Rejected { reason: "blurry".to_owned() })
}

// =============================================================
// Preconditions
// =============================================================

#[test]
fn submit_without_image_is_a_no_op() {
    let mut flow = ReportFlow::new();
    flow.edit(|d| d.issue_type = Some(IssueType::Garbage));

    assert_eq!(flow.submit(), Err(SubmitError::MissingImage));
    assert_eq!(flow.state(), SubmissionState::Idle);
    assert!(!flow.can_submit());
}

#[test]
fn submit_without_issue_type_is_a_no_op() {
    let mut flow = ReportFlow::new();
    flow.edit(|d| d.image = Some(image()));

    assert_eq!(flow.submit(), Err(SubmitError::MissingIssueType));
    assert_eq!(flow.state(), SubmissionState::Idle);
}

#[test]
fn submit_while_verifying_is_a_no_op() {
    let mut flow = ready_flow();
    flow.submit().unwrap();

    assert_eq!(flow.submit(), Err(SubmitError::NotIdle(SubmissionState::Verifying)));
    assert_eq!(flow.state(), SubmissionState::Verifying);
}

#[test]
fn submit_with_image_and_type_starts_verifying() {
    let mut flow = ready_flow();
    assert!(flow.can_submit());

    let report = flow.submit().unwrap();

    assert_eq!(flow.state(), SubmissionState::Verifying);
    assert_eq!(report.issue_type, IssueType::Pothole);
    assert_eq!(report.location, Coordinate::new(12.97, 77.59));
    assert_eq!(report.description, "Deep pothole");
    assert_eq!(report.image, image());
}

#[test]
fn description_is_optional() {
    let mut flow = ready_flow();
    flow.edit(|d| d.description.clear());
    assert!(flow.submit().is_ok());
}

// =============================================================
// Verdicts
// =============================================================

#[test]
fn accepted_verdict_is_terminal_success() {
    let mut flow = ready_flow();
    let report = flow.submit().unwrap();

    assert_eq!(flow.complete(accept(&report)), SubmissionState::Success);
    assert!(!flow.retry());
    assert!(!flow.edit(|d| d.issue_type = None));
    assert_eq!(flow.submit(), Err(SubmitError::NotIdle(SubmissionState::Success)));
    assert_eq!(flow.state(), SubmissionState::Success);
}

#[test]
fn verdict_outside_verifying_is_ignored() {
    let mut flow = ready_flow();
    assert_eq!(flow.complete(Ok(Accepted)), SubmissionState::Idle);
}

#[test]
fn edits_are_ignored_while_verifying() {
    let mut flow = ready_flow();
    flow.submit().unwrap();
    assert!(!flow.edit(|d| d.description = "changed".to_owned()));
    assert_eq!(flow.draft().description, "Deep pothole");
}

#[test]
fn retry_after_failure_keeps_draft() {
    let mut flow = ready_flow();
    let report = flow.submit().unwrap();
    assert_eq!(flow.complete(reject(&report)), SubmissionState::Failure);
    assert_eq!(flow.rejection().map(|r| r.reason.as_str()), Some("blurry"));

    assert!(flow.retry());

    assert_eq!(flow.state(), SubmissionState::Idle);
    assert!(flow.rejection().is_none());
    assert_eq!(flow.draft().image, Some(image()));
    assert_eq!(flow.draft().issue_type, Some(IssueType::Pothole));
    assert_eq!(flow.location().coordinate(), Coordinate::new(12.97, 77.59));
    assert_eq!(flow.draft().description, "Deep pothole");
    assert!(flow.can_submit());
}

#[test]
fn retry_outside_failure_is_a_no_op() {
    let mut flow = ready_flow();
    assert!(!flow.retry());
    assert_eq!(flow.state(), SubmissionState::Idle);
}

// =============================================================
// Simulated verifier
// =============================================================

#[test]
fn draw_above_threshold_is_accepted() {
    let report = ready_flow().submit().unwrap();
    assert_eq!(SimulatedVerifier::new(FixedDraw::at(0.25)).verify(&report), Ok(Accepted));
    assert_eq!(SimulatedVerifier::new(FixedDraw(u64::MAX)).verify(&report), Ok(Accepted));
}

#[test]
fn draw_at_or_below_threshold_is_rejected() {
    let report = ready_flow().submit().unwrap();
    for draw in [0.0, 0.1, 0.19] {
        let verdict = SimulatedVerifier::new(FixedDraw::at(draw)).verify(&report);
        assert_eq!(verdict, Err(Rejected { reason: UNVERIFIED_REASON.to_owned() }));
    }
}

#[test]
fn custom_threshold_is_respected() {
    let report = ready_flow().submit().unwrap();
    let mut strict = SimulatedVerifier::new(FixedDraw::at(0.5)).with_threshold(0.75);
    assert!(strict.verify(&report).is_err());
    let mut lenient = SimulatedVerifier::new(FixedDraw::at(0.5)).with_threshold(0.25);
    assert!(lenient.verify(&report).is_ok());
}

#[test]
fn same_seed_gives_same_outcomes() {
    let report = ready_flow().submit().unwrap();
    let mut a = SimulatedVerifier::seeded(42);
    let mut b = SimulatedVerifier::seeded(42);
    for _ in 0..64 {
        assert_eq!(a.verify(&report).is_ok(), b.verify(&report).is_ok());
    }
}

#[test]
fn seeded_acceptance_rate_is_about_eighty_percent() {
    let report = ready_flow().submit().unwrap();
    let mut verifier = SimulatedVerifier::seeded(7);
    let accepted = (0..1000).filter(|_| verifier.verify(&report).is_ok()).count();
    assert!((750..=850).contains(&accepted), "accepted {accepted} of 1000");
}

// =============================================================
// Location
// =============================================================

fn complete_draft(flow: &mut ReportFlow) {
    flow.edit(|d| {
        d.image = Some(image());
        d.issue_type = Some(IssueType::Drainage);
    });
}

#[test]
fn new_flow_reports_from_default_while_locating() {
    let mut flow = ReportFlow::new();
    complete_draft(&mut flow);

    assert!(flow.location().is_locating());
    assert_eq!(flow.submit().unwrap().location, Coordinate::DEFAULT);
}

#[test]
fn device_fix_becomes_report_location() {
    let mut flow = ReportFlow::new();
    complete_draft(&mut flow);

    let fix = Coordinate::new(19.076, 72.8777);
    assert_eq!(flow.resolve_location(Ok(fix)), Some(fix));

    assert_eq!(flow.submit().unwrap().location, fix);
}

#[test]
fn failed_device_read_reports_fallback() {
    let mut flow = ReportFlow::new();
    complete_draft(&mut flow);
    flow.resolve_location(Err(GeolocationError::PermissionDenied));

    assert_eq!(flow.location().source(), LocationSource::Fallback);
    assert_eq!(flow.submit().unwrap().location, Coordinate::DEFAULT);
}

#[test]
fn only_the_first_device_read_applies() {
    let mut flow = ReportFlow::new();
    flow.resolve_location(Ok(Coordinate::new(1.0, 2.0)));
    flow.move_location(Coordinate::new(3.0, 4.0));

    assert_eq!(flow.resolve_location(Ok(Coordinate::new(5.0, 6.0))), None);
    assert_eq!(flow.location().coordinate(), Coordinate::new(3.0, 4.0));
}

#[test]
fn map_moves_are_ignored_while_verifying() {
    let mut flow = ready_flow();
    flow.submit().unwrap();

    assert_eq!(flow.move_location(Coordinate::new(0.0, 0.0)), None);
    assert_eq!(flow.location().coordinate(), Coordinate::new(12.97, 77.59));
}

#[test]
fn late_device_fix_during_verification_is_shown_and_resubmitted() {
    let mut flow = ReportFlow::new();
    complete_draft(&mut flow);
    let in_flight = flow.submit().unwrap();
    assert_eq!(in_flight.location, Coordinate::DEFAULT);

    let fix = Coordinate::new(19.076, 72.8777);
    assert_eq!(flow.resolve_location(Ok(fix)), Some(fix));
    assert_eq!(flow.location().label(), "19.07600, 72.87770");

    flow.complete(reject(&in_flight));
    assert!(flow.retry());

    let resubmitted = flow.submit().unwrap();
    assert_eq!(resubmitted.location, flow.location().coordinate());
    assert_eq!(resubmitted.location, fix);
}

// =============================================================
// Page sequence
// =============================================================

/// Submit, then deliver the verifier's verdict, as the report page does
/// after its delay.
fn run_round<V: Verifier>(flow: &mut ReportFlow, verifier: &mut V) -> Result<SubmissionState, SubmitError> {
    let report = flow.submit()?;
    Ok(flow.complete(verifier.verify(&report)))
}

#[test]
fn round_applies_verdict() {
    let mut flow = ready_flow();
    let mut verifier = SimulatedVerifier::new(FixedDraw::at(0.9));
    assert_eq!(run_round(&mut flow, &mut verifier), Ok(SubmissionState::Success));
}

#[test]
fn failed_round_can_be_retried_and_resubmitted() {
    let mut flow = ready_flow();
    let mut rejecting = reject;
    assert_eq!(run_round(&mut flow, &mut rejecting), Ok(SubmissionState::Failure));

    flow.retry();
    let mut accepting = accept;
    assert_eq!(run_round(&mut flow, &mut accepting), Ok(SubmissionState::Success));
}

#[test]
fn round_without_image_never_reaches_verifier() {
    let mut flow = ReportFlow::new();
    let asked = std::cell::Cell::new(false);
    let mut verifier = |_: &Report| -> Result<Accepted, Rejected> {
        asked.set(true);
        Ok(Accepted)
    };
    assert_eq!(run_round(&mut flow, &mut verifier), Err(SubmitError::MissingImage));
    assert!(!asked.get());
}

#[test]
fn finished_states() {
    assert!(SubmissionState::Success.is_finished());
    assert!(SubmissionState::Failure.is_finished());
    assert!(!SubmissionState::Idle.is_finished());
    assert!(!SubmissionState::Verifying.is_finished());
}
