use super::*;

#[test]
fn each_status_has_its_own_badge() {
    let classes: Vec<_> = [ReportStatus::Submitted, ReportStatus::InProgress, ReportStatus::Resolved]
        .into_iter()
        .map(status_badge_class)
        .collect();
    assert_eq!(classes, ["badge badge--outline", "badge badge--secondary", "badge badge--primary"]);
}

#[test]
fn resolved_reports_get_a_check() {
    assert_eq!(status_icon(ReportStatus::Resolved), "✓");
}
