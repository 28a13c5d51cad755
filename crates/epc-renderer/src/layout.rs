//! Where things go on each template.
//!
//! Pointer positions are data: every assessment type lists the ratings it
//! shows and the column each pointer sits in.

use epc_common::{AssessmentType, RatingRole};

/// One pointer on a template: the rating it shows and its left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSlot {
    pub role: RatingRole,
    pub x: i64,
}

const fn slot(role: RatingRole, x: i64) -> PointerSlot {
    PointerSlot { role, x }
}

static EPC_SLOTS: [PointerSlot; 4] = [
    slot(RatingRole::CurrentEnergyEfficiency, 545),
    slot(RatingRole::CurrentEnvironmentalImpact, 1327),
    slot(RatingRole::PotentialEnergyEfficiency, 635),
    slot(RatingRole::PotentialEnvironmentalImpact, 1415),
];

static PEA_SLOTS: [PointerSlot; 2] = [
    slot(RatingRole::CurrentEnergyEfficiency, 545),
    slot(RatingRole::CurrentEnvironmentalImpact, 1238),
];

static EER_SLOTS: [PointerSlot; 2] = [
    slot(RatingRole::CurrentEnergyEfficiency, 545),
    slot(RatingRole::PotentialEnergyEfficiency, 635),
];

static EIR_SLOTS: [PointerSlot; 2] = [
    slot(RatingRole::CurrentEnvironmentalImpact, 545),
    slot(RatingRole::PotentialEnvironmentalImpact, 635),
];

/// Pointer slots for an assessment type, in drawing order.
pub fn pointer_slots(assessment: AssessmentType) -> &'static [PointerSlot] {
    match assessment {
        AssessmentType::Epc => &EPC_SLOTS,
        AssessmentType::Pea => &PEA_SLOTS,
        AssessmentType::Eer => &EER_SLOTS,
        AssessmentType::Eir => &EIR_SLOTS,
    }
}

/// Caption lines written below the diagram.
pub mod caption {
    /// Height added to the canvas for one caption line.
    pub const BAND_HEIGHT: u32 = 65;
    /// Baseline of a caption, measured from the top of its band.
    pub const BASELINE: i32 = 50;
    /// Spacing removed from the reference band when an address precedes it.
    pub const STACKED_SHRINK: u32 = 15;
    /// Left margin of caption text.
    pub const LEFT: i32 = 15;
    pub const FONT_SIZE: f32 = 24.0;
}
