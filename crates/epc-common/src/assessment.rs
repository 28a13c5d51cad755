//! Energy assessment types.
//!
//! The assessment type picks the template image and decides which rating
//! pointers are drawn onto it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EpcError;

/// Kind of energy assessment a diagram is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AssessmentType {
    /// Energy Performance Certificate: both scales, current and potential.
    #[default]
    Epc,
    /// Predicted Energy Assessment: both scales, current only.
    Pea,
    /// Energy efficiency rating only.
    Eer,
    /// Environmental impact rating only.
    Eir,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 4] = [
        AssessmentType::Epc,
        AssessmentType::Pea,
        AssessmentType::Eer,
        AssessmentType::Eir,
    ];

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Epc => "epc",
            AssessmentType::Pea => "pea",
            AssessmentType::Eer => "eer",
            AssessmentType::Eir => "eir",
        }
    }

    /// File name of the background template inside the assets directory.
    pub fn template_file_name(&self) -> String {
        format!("{}.png", self.as_str())
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = EpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "epc" => Ok(AssessmentType::Epc),
            "pea" => Ok(AssessmentType::Pea),
            "eer" => Ok(AssessmentType::Eer),
            "eir" => Ok(AssessmentType::Eir),
            _ => Err(EpcError::InvalidAssessment(s.to_string())),
        }
    }
}

impl TryFrom<String> for AssessmentType {
    type Error = EpcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssessmentType> for String {
    fn from(value: AssessmentType) -> Self {
        value.as_str().to_string()
    }
}
