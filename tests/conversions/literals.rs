use decarb_pathways::{
    GuidanceStatus, PathwayError, StatusIndicator,
    core::conversions::{hex_to_rgb, hex_to_rgba, percent_label, potential_amount, potential_year},
};

use crate::common;

#[test]
fn potential_figures() {
    assert!(common::approx_eq(potential_amount("11.4 GtCO2-eq by 2030").unwrap(), 11.4));
    assert_eq!(potential_year("11.4 GtCO2-eq by 2030"), Some(2030));
    assert_eq!(potential_year("11.4 GtCO2-eq"), None);
    assert!(matches!(potential_amount(""), Err(PathwayError::Parse(_))));
    assert!(matches!(potential_amount("about 3 Gt"), Err(PathwayError::Parse(_))));
}

#[test]
fn hex_colours() {
    assert_eq!(hex_to_rgb("#9C27B0").unwrap(), (156, 39, 176));
    assert_eq!(hex_to_rgb("#fff").unwrap(), (255, 255, 255));
    assert_eq!(hex_to_rgba("#F44336", 0.7).unwrap(), "rgba(244, 67, 54, 0.7)");
    assert!(hex_to_rgb("#12345").is_err());
    assert!(hex_to_rgb("#GGGGGG").is_err());
}

#[test]
fn percent_labels_drop_trailing_zero() {
    assert_eq!(percent_label(40.0), "40%");
    assert_eq!(percent_label(99.98), "99.98%");
}

#[test]
fn guidance_indicator_levels() {
    let cases = [
        ("Available", StatusIndicator::Covered),
        ("Generic only", StatusIndicator::Partial),
        ("Recent (2024)", StatusIndicator::Partial),
        ("Limited", StatusIndicator::Missing),
        ("None", StatusIndicator::Missing),
        ("PCAF available", StatusIndicator::Missing),
        ("Draft (2026)", StatusIndicator::Missing),
    ];
    for (label, want) in cases {
        assert_eq!(GuidanceStatus::from(label).indicator(), want, "{label}");
    }
}

#[test]
fn guidance_status_is_open_ended() {
    let status = GuidanceStatus::new("Sector pilot");
    assert_eq!(status.as_str(), "Sector pilot");
    assert!(!status.is_available());
    assert_eq!(status.to_string(), "Sector pilot");
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"Sector pilot\"");
}
