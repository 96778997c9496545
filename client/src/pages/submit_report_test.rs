#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn coordinates_round_to_six_decimals() {
    let report = build_report("theft", "Bike stolen", "-1.28638389", "36.8172261").unwrap();
    assert_eq!(report.latitude, -1.286384);
    assert_eq!(report.longitude, 36.817226);
    assert_eq!(report.category, ReportCategory::Theft);
    assert_eq!(report.description, "Bike stolen");
}

#[test]
fn unknown_category_falls_back_to_other() {
    let report = build_report("arson", "Smoke", "0", "0").unwrap();
    assert_eq!(report.category, ReportCategory::Other);
}

#[test]
fn blank_description_rejected() {
    assert_eq!(build_report("theft", "  ", "0", "0"), Err("Describe the incident."));
}

#[test]
fn out_of_range_or_garbage_coordinates_rejected() {
    assert!(build_report("theft", "x", "91", "0").is_err());
    assert!(build_report("theft", "x", "0", "-180.5").is_err());
    assert!(build_report("theft", "x", "north", "0").is_err());
    assert!(build_report("theft", "x", "NaN", "0").is_err());
    assert!(build_report("theft", "x", "", "0").is_err());
}

#[test]
fn boundary_coordinates_accepted() {
    let report = build_report("fraud", "x", "90", "-180").unwrap();
    assert_eq!(report.latitude, 90.0);
    assert_eq!(report.longitude, -180.0);
}
