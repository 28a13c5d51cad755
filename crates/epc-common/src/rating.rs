//! Rating scales and the roles a rating can play on a diagram.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color table a rating is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingScale {
    /// Energy efficiency rating (green to red).
    Eer,
    /// Environmental impact rating (blue to grey).
    Eir,
}

/// Which of the four ratings a pointer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingRole {
    CurrentEnergyEfficiency,
    PotentialEnergyEfficiency,
    CurrentEnvironmentalImpact,
    PotentialEnvironmentalImpact,
}

impl RatingRole {
    pub fn scale(&self) -> RatingScale {
        match self {
            RatingRole::CurrentEnergyEfficiency | RatingRole::PotentialEnergyEfficiency => {
                RatingScale::Eer
            }
            RatingRole::CurrentEnvironmentalImpact | RatingRole::PotentialEnvironmentalImpact => {
                RatingScale::Eir
            }
        }
    }

    /// Human-readable name used in error messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            RatingRole::CurrentEnergyEfficiency => "current energy efficiency",
            RatingRole::PotentialEnergyEfficiency => "potential energy efficiency",
            RatingRole::CurrentEnvironmentalImpact => "current environmental impact",
            RatingRole::PotentialEnvironmentalImpact => "potential environmental impact",
        }
    }
}

impl fmt::Display for RatingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
