use super::*;

#[test]
fn summary_cards_show_counts_from_fixtures() {
    let data = StaticComplaints::load().unwrap();
    let summary = ComplaintSummary::from_complaints(reports::ComplaintSource::complaints(&data));
    let cards = summary_cards(&summary);

    let labels: Vec<_> = cards.iter().map(|(label, _, _)| *label).collect();
    assert_eq!(labels, ["Open Issues", "In Progress", "Resolved", "Total Reports"]);
    assert_eq!(cards[0].1, "7");
    assert_eq!(cards[1].1, "1");
    assert_eq!(cards[2].1, "0");
    assert_eq!(cards[3].1, "36");
}
