//! The rating record a diagram is rendered from.

use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentType;
use crate::error::EpcResult;
use crate::rating::RatingRole;

/// Assessment type, ratings and optional caption text for one diagram.
///
/// Built with consuming setters:
///
/// ```
/// use epc_common::{AssessmentType, RatingReport};
///
/// let report = RatingReport::new()
///     .with_address("1 Test Address, Success street.")
///     .with_current_energy_efficiency(40)
///     .with_potential_energy_efficiency(50);
/// assert_eq!(report.assessment_type(), AssessmentType::Epc);
/// assert_eq!(report.current_energy_efficiency(), Some(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingReport {
    #[serde(default)]
    assessment_type: AssessmentType,

    #[serde(default)]
    address: Option<String>,

    #[serde(default)]
    reference: Option<String>,

    #[serde(default)]
    current_energy_efficiency: Option<i32>,

    #[serde(default)]
    potential_energy_efficiency: Option<i32>,

    #[serde(default)]
    current_environmental_impact: Option<i32>,

    #[serde(default)]
    potential_environmental_impact: Option<i32>,
}

impl RatingReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assessment type from a string such as `"EPC"` or `"pea"`.
    ///
    /// Fails immediately for anything outside epc, pea, eer and eir.
    pub fn assessment(self, assessment: &str) -> EpcResult<Self> {
        Ok(self.with_assessment_type(assessment.parse()?))
    }

    pub fn with_assessment_type(mut self, assessment_type: AssessmentType) -> Self {
        self.assessment_type = assessment_type;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_current_energy_efficiency(mut self, value: i32) -> Self {
        self.current_energy_efficiency = Some(value);
        self
    }

    pub fn with_potential_energy_efficiency(mut self, value: i32) -> Self {
        self.potential_energy_efficiency = Some(value);
        self
    }

    pub fn with_current_environmental_impact(mut self, value: i32) -> Self {
        self.current_environmental_impact = Some(value);
        self
    }

    pub fn with_potential_environmental_impact(mut self, value: i32) -> Self {
        self.potential_environmental_impact = Some(value);
        self
    }

    /// Set the rating for a role.
    pub fn with_rating(self, role: RatingRole, value: i32) -> Self {
        match role {
            RatingRole::CurrentEnergyEfficiency => self.with_current_energy_efficiency(value),
            RatingRole::PotentialEnergyEfficiency => self.with_potential_energy_efficiency(value),
            RatingRole::CurrentEnvironmentalImpact => self.with_current_environmental_impact(value),
            RatingRole::PotentialEnvironmentalImpact => {
                self.with_potential_environmental_impact(value)
            }
        }
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.assessment_type
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn current_energy_efficiency(&self) -> Option<i32> {
        self.current_energy_efficiency
    }

    pub fn potential_energy_efficiency(&self) -> Option<i32> {
        self.potential_energy_efficiency
    }

    pub fn current_environmental_impact(&self) -> Option<i32> {
        self.current_environmental_impact
    }

    pub fn potential_environmental_impact(&self) -> Option<i32> {
        self.potential_environmental_impact
    }

    /// Look up the rating for a role.
    pub fn rating(&self, role: RatingRole) -> Option<i32> {
        match role {
            RatingRole::CurrentEnergyEfficiency => self.current_energy_efficiency,
            RatingRole::PotentialEnergyEfficiency => self.potential_energy_efficiency,
            RatingRole::CurrentEnvironmentalImpact => self.current_environmental_impact,
            RatingRole::PotentialEnvironmentalImpact => self.potential_environmental_impact,
        }
    }
}
