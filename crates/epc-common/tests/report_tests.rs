//! Tests for the rating report builder and its serialized form.

use epc_common::{AssessmentType, EncodeOptions, EpcError, OutputFormat, RatingReport, RatingRole};

// ============================================================================
// Builder tests
// ============================================================================

#[test]
fn test_report_can_be_created() {
    let report = RatingReport::new()
        .with_address("1 Test Address, Success street.")
        .with_reference("ABC123")
        .with_current_energy_efficiency(40)
        .with_potential_energy_efficiency(50)
        .with_current_environmental_impact(60)
        .with_potential_environmental_impact(70);

    assert_eq!(report.address(), Some("1 Test Address, Success street."));
    assert_eq!(report.reference(), Some("ABC123"));
    assert_eq!(report.current_energy_efficiency(), Some(40));
    assert_eq!(report.potential_energy_efficiency(), Some(50));
    assert_eq!(report.current_environmental_impact(), Some(60));
    assert_eq!(report.potential_environmental_impact(), Some(70));
    assert_eq!(report.assessment_type(), AssessmentType::Epc);
}

#[test]
fn test_empty_report() {
    let report = RatingReport::new();
    assert_eq!(report.address(), None);
    assert_eq!(report.reference(), None);
    assert_eq!(report.rating(RatingRole::CurrentEnergyEfficiency), None);
}

#[test]
fn test_assessment_normalizes_every_casing() {
    for name in ["epc", "pea", "eer", "eir"] {
        let upper = name.to_uppercase();
        let capitalized = format!("{}{}", &upper[..1], &name[1..]);
        let mixed = format!("{}{}{}", &name[..1], &upper[1..2], &name[2..]);

        for input in [name.to_string(), upper.clone(), capitalized, mixed] {
            let report = RatingReport::new().assessment(&input).unwrap();
            assert_eq!(report.assessment_type().as_str(), name, "input {input}");
        }
    }
}

#[test]
fn test_assessment_rejects_other_strings() {
    for input in ["epcs", "sap", "", "e p c"] {
        let err = RatingReport::new().assessment(input).unwrap_err();
        assert!(matches!(err, EpcError::InvalidAssessment(_)), "input {input:?}");
        assert!(err.to_string().contains("epc, pea, eer, eir"));
    }
}

#[test]
fn test_with_rating_by_role() {
    let report = RatingReport::new()
        .with_rating(RatingRole::PotentialEnvironmentalImpact, 88)
        .with_rating(RatingRole::CurrentEnergyEfficiency, 12);

    assert_eq!(report.potential_environmental_impact(), Some(88));
    assert_eq!(report.rating(RatingRole::CurrentEnergyEfficiency), Some(12));
    assert_eq!(report.rating(RatingRole::PotentialEnergyEfficiency), None);
}

#[test]
fn test_setters_overwrite() {
    let report = RatingReport::new()
        .with_address("first")
        .with_address("second")
        .with_current_energy_efficiency(1)
        .with_current_energy_efficiency(99);

    assert_eq!(report.address(), Some("second"));
    assert_eq!(report.current_energy_efficiency(), Some(99));
}

// ============================================================================
// Serialization tests
// ============================================================================

#[test]
fn test_report_from_json() {
    let json = r#"{
        "assessment_type": "PEA",
        "address": "2 Example Road",
        "current_energy_efficiency": 64,
        "current_environmental_impact": 58
    }"#;

    let report: RatingReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.assessment_type(), AssessmentType::Pea);
    assert_eq!(report.address(), Some("2 Example Road"));
    assert_eq!(report.reference(), None);
    assert_eq!(report.current_environmental_impact(), Some(58));
}

#[test]
fn test_report_json_rejects_unknown_assessment() {
    let json = r#"{ "assessment_type": "sap" }"#;
    let err = serde_json::from_str::<RatingReport>(json).unwrap_err();
    assert!(err.to_string().contains("sap"));
}

#[test]
fn test_report_json_serializes_lowercase_assessment() {
    let report = RatingReport::new().with_assessment_type(AssessmentType::Eir);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["assessment_type"], "eir");
}

#[test]
fn test_encode_options_from_json() {
    let opts: EncodeOptions = serde_json::from_str(r#"{ "format": "jpeg" }"#).unwrap();
    assert_eq!(opts.format, OutputFormat::Jpeg);
    assert_eq!(opts.quality, 70);
}
