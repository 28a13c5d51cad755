//! Synthetic template images.
//!
//! Stand-ins for the real certificate artwork: a white sheet with a grey
//! rating bar, large enough to hold every pointer slot of its assessment
//! type.

use epc_common::AssessmentType;
use image::{ImageResult, Rgba, RgbaImage};
use std::path::Path;

/// Height of every generated template.
pub const TEMPLATE_HEIGHT: u32 = 640;

const SHEET: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BAR: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// Width of the generated template for an assessment type.
///
/// Each is the right edge of the widest pointer slot plus a margin.
pub fn template_width(assessment: AssessmentType) -> u32 {
    match assessment {
        AssessmentType::Epc => 1520,
        AssessmentType::Pea => 1340,
        AssessmentType::Eer | AssessmentType::Eir => 740,
    }
}

/// Creates a template image for an assessment type.
pub fn create_template(assessment: AssessmentType) -> RgbaImage {
    let width = template_width(assessment);
    let mut img = RgbaImage::from_pixel(width, TEMPLATE_HEIGHT, SHEET);

    // Rating bar down the left side, where the band labels would be
    for y in 100..600 {
        for x in 40..500 {
            img.put_pixel(x, y, BAR);
        }
    }
    img
}

/// Writes all four templates as `<assessment>.png` into `dir`.
pub fn write_templates(dir: &Path) -> ImageResult<()> {
    for assessment in AssessmentType::ALL {
        create_template(assessment).save(dir.join(assessment.template_file_name()))?;
    }
    Ok(())
}
