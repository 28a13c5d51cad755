//! Common test fixtures for diagram tests.

use epc_common::{AssessmentType, RatingReport};

/// Values of the reference report used across the test suite.
pub mod reference {
    pub const ADDRESS: &str = "1 Test Address, Success street.";
    pub const REFERENCE: &str = "ABC123";
    pub const CURRENT_EER: i32 = 40;
    pub const POTENTIAL_EER: i32 = 50;
    pub const CURRENT_EIR: i32 = 60;
    pub const POTENTIAL_EIR: i32 = 70;
}

/// The reference report: epc assessment with all four ratings, an address
/// and a reference.
pub fn reference_report() -> RatingReport {
    ratings_only(AssessmentType::Epc)
        .with_address(reference::ADDRESS)
        .with_reference(reference::REFERENCE)
}

/// A report with all four reference ratings and no captions.
pub fn ratings_only(assessment: AssessmentType) -> RatingReport {
    RatingReport::new()
        .with_assessment_type(assessment)
        .with_current_energy_efficiency(reference::CURRENT_EER)
        .with_potential_energy_efficiency(reference::POTENTIAL_EER)
        .with_current_environmental_impact(reference::CURRENT_EIR)
        .with_potential_environmental_impact(reference::POTENTIAL_EIR)
}

/// PNG file signature.
pub const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
