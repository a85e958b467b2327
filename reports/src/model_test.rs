use super::*;

// =============================================================
// Coordinate
// =============================================================

#[test]
fn default_coordinate_label_has_five_decimals() {
    assert_eq!(Coordinate::DEFAULT.label(), "28.61390, 77.20900");
    assert_eq!(Coordinate::default(), Coordinate::DEFAULT);
}

#[test]
fn coordinate_label_rounds_to_five_places() {
    let c = Coordinate::new(12.345_678_9, -98.765_432_1);
    assert_eq!(c.to_string(), "12.34568, -98.76543");
}

// =============================================================
// CapturedImage
// =============================================================

#[test]
fn captured_image_keeps_data_url() {
    let image = CapturedImage::from_data_url("data:image/jpeg;base64,AAAA").unwrap();
    assert_eq!(image.as_data_url(), "data:image/jpeg;base64,AAAA");
}

#[test]
fn captured_image_rejects_non_image_urls() {
    assert_eq!(CapturedImage::from_data_url("data:text/plain,hi"), Err(ParseError::DataUrl));
    assert_eq!(CapturedImage::from_data_url("https://example.com/a.jpg"), Err(ParseError::DataUrl));
    assert_eq!(CapturedImage::from_data_url("data:image/jpeg;base64"), Err(ParseError::DataUrl));
}

// =============================================================
// Enumerations
// =============================================================

#[test]
fn issue_type_parses_form_values() {
    for kind in IssueType::ALL {
        assert_eq!(kind.as_str().parse::<IssueType>(), Ok(kind));
    }
    assert_eq!(
        "sinkhole".parse::<IssueType>(),
        Err(ParseError::IssueType("sinkhole".to_owned()))
    );
}

#[test]
fn issue_type_labels_are_human_readable() {
    assert_eq!(IssueType::WaterLeakage.label(), "Water Leakage");
    assert_eq!(IssueType::Pothole.to_string(), "Pothole");
}

#[test]
fn severity_and_priority_parse_capitalized_names() {
    assert_eq!("High".parse::<Severity>(), Ok(Severity::High));
    assert!("high".parse::<Severity>().is_err());
    assert_eq!("Critical".parse::<Priority>(), Ok(Priority::Critical));
}

#[test]
fn in_progress_status_serializes_with_space() {
    let json = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
    assert_eq!(json, "\"In Progress\"");
    let parsed: ReportStatus = serde_json::from_str("\"In Progress\"").unwrap();
    assert_eq!(parsed, ReportStatus::InProgress);
}

#[test]
fn complaint_deserializes_camel_case_fields() {
    let json = r#"{
        "id": 7,
        "title": "t",
        "issueType": "water_leakage",
        "severity": "Low",
        "priority": "Medium",
        "status": "Assigned",
        "area": "Ward 9",
        "date": "2026-02-01",
        "duplicateCount": 2,
        "imageUrl": "https://example.test/x.jpg",
        "aiConfidence": 81,
        "description": "d"
    }"#;
    let complaint: Complaint = serde_json::from_str(json).unwrap();
    assert_eq!(complaint.issue_type, IssueType::WaterLeakage);
    assert_eq!(complaint.status, ComplaintStatus::Assigned);
    assert_eq!(complaint.duplicate_count, 2);
    assert_eq!(complaint.ai_confidence, 81);
}
