//! Diagram compositing.
//!
//! A render is one blocking pass over a freshly loaded template:
//! 1. Validate every rating the template needs
//! 2. Overlay one pointer per layout slot
//! 3. Grow the canvas for the address and reference captions
//! 4. Encode

use epc_common::{EncodeOptions, EpcError, EpcResult, OutputFormat, RatingReport};
use image::{imageops, Rgba, RgbaImage};
use std::path::Path;

use crate::backend::{FontWeight, RenderBackend, TextAnchor, TextStyle};
use crate::encode::encode;
use crate::layout::{caption, pointer_slots, PointerSlot};
use crate::pointer::render_pointer;
use crate::position::vertical_offset;

const CAPTION_STYLE: TextStyle = TextStyle {
    weight: FontWeight::Regular,
    size: caption::FONT_SIZE,
    color: Rgba([0, 0, 0, 255]),
    anchor: TextAnchor::BaselineLeft,
};

const CANVAS_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A pointer ready to be drawn: which slot, the rating and its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPointer {
    pub slot: PointerSlot,
    pub value: i32,
    pub y: i64,
}

/// Renders rating reports onto their templates.
#[derive(Debug, Clone)]
pub struct DiagramComposer<B> {
    backend: B,
}

impl<B: RenderBackend> DiagramComposer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Resolve the pointer placements for a report.
    ///
    /// Fails if a rating the template shows is unset or below 1.
    pub fn place_pointers(&self, report: &RatingReport) -> EpcResult<Vec<PlacedPointer>> {
        pointer_slots(report.assessment_type())
            .iter()
            .map(|&slot| {
                let value = report
                    .rating(slot.role)
                    .ok_or(EpcError::MissingRating(slot.role))?;
                let y = vertical_offset(value).ok_or(EpcError::RatingOutOfRange {
                    role: slot.role,
                    value,
                })?;
                Ok(PlacedPointer {
                    slot,
                    value,
                    y: y as i64,
                })
            })
            .collect()
    }

    /// Build the diagram image without encoding it.
    pub fn compose(&self, report: &RatingReport) -> EpcResult<RgbaImage> {
        let assessment = report.assessment_type();
        let placements = self.place_pointers(report)?;

        let mut canvas = self.backend.load_template(assessment)?;
        tracing::debug!(
            assessment = %assessment,
            width = canvas.width(),
            height = canvas.height(),
            pointers = placements.len(),
            "Loaded diagram template"
        );

        for placed in &placements {
            let glyph = render_pointer(&self.backend, placed.value, placed.slot.role.scale())?;
            imageops::overlay(&mut canvas, &glyph, placed.slot.x, placed.y);
            tracing::debug!(
                role = %placed.slot.role,
                value = placed.value,
                x = placed.slot.x,
                y = placed.y,
                "Placed rating pointer"
            );
        }

        if let Some(address) = report.address() {
            self.append_caption(&mut canvas, &format!("Address: {}", address), 0)?;
        }

        if let Some(reference) = report.reference() {
            let shrink = if report.address().is_some() {
                caption::STACKED_SHRINK
            } else {
                0
            };
            self.append_caption(&mut canvas, &format!("Reference: {}", reference), shrink)?;
        }

        Ok(canvas)
    }

    /// Render and encode, returning the encoded bytes.
    pub fn stream(&self, report: &RatingReport, options: &EncodeOptions) -> EpcResult<Vec<u8>> {
        let canvas = self.compose(report)?;
        let data = encode(&canvas, options)?;

        tracing::info!(
            assessment = %report.assessment_type(),
            format = %options.format,
            quality = options.quality,
            width = canvas.width(),
            height = canvas.height(),
            bytes = data.len(),
            "Rendered energy rating diagram"
        );

        Ok(data)
    }

    /// Render, encode and write the result to `path`.
    ///
    /// The file holds exactly the bytes [`stream`](Self::stream) returns.
    pub fn save(
        &self,
        report: &RatingReport,
        path: impl AsRef<Path>,
        options: &EncodeOptions,
    ) -> EpcResult<()> {
        let path = path.as_ref();
        let data = self.stream(report, options)?;
        std::fs::write(path, &data)?;

        tracing::info!(path = %path.display(), bytes = data.len(), "Saved energy rating diagram");
        Ok(())
    }

    /// Like [`save`](Self::save), with the format taken from the path's extension.
    pub fn save_inferred(
        &self,
        report: &RatingReport,
        path: impl AsRef<Path>,
        quality: u8,
    ) -> EpcResult<()> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        self.save(report, path, &EncodeOptions::new(format, quality))
    }

    /// Grow the canvas downward and write one caption line in the new band.
    fn append_caption(&self, canvas: &mut RgbaImage, text: &str, shrink: u32) -> EpcResult<()> {
        let top = canvas.height();
        extend_canvas(canvas, caption::BAND_HEIGHT - shrink, CANVAS_FILL);

        let baseline = top as i32 + caption::BASELINE - shrink as i32;
        self.backend
            .draw_text(canvas, text, caption::LEFT, baseline, &CAPTION_STYLE)?;

        tracing::debug!(height = canvas.height(), baseline, "Appended caption line");
        Ok(())
    }
}

/// Grow an image by `extra` rows at the bottom, keeping the content anchored
/// to the top and filling the new rows with `fill`.
pub fn extend_canvas(canvas: &mut RgbaImage, extra: u32, fill: Rgba<u8>) {
    if extra == 0 {
        return;
    }
    let mut grown = RgbaImage::from_pixel(canvas.width(), canvas.height() + extra, fill);
    imageops::replace(&mut grown, &*canvas, 0, 0);
    *canvas = grown;
}
