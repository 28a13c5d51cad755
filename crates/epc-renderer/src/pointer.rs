//! The arrow-shaped pointer that marks a rating on the bar.

use epc_common::{EpcResult, RatingScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

use crate::backend::{FontWeight, RenderBackend, TextAnchor, TextStyle};
use crate::color::color_for;

pub const POINTER_WIDTH: u32 = 80;
pub const POINTER_HEIGHT: u32 = 60;

/// Arrow outline, tip on the left edge at half height.
pub const POINTER_VERTICES: [(i32, i32); 5] = [(0, 30), (10, 0), (80, 0), (80, 60), (10, 60)];

/// Style of the rating number drawn inside the pointer.
pub const LABEL_STYLE: TextStyle = TextStyle {
    weight: FontWeight::Bold,
    size: 38.0,
    color: Rgba([255, 255, 255, 255]),
    anchor: TextAnchor::Center,
};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Render the pointer for a rating: a filled arrow in the rating's band
/// color with the number centered on it.
pub fn render_pointer<B: RenderBackend>(
    backend: &B,
    value: i32,
    scale: RatingScale,
) -> EpcResult<RgbaImage> {
    let mut glyph = RgbaImage::from_pixel(POINTER_WIDTH, POINTER_HEIGHT, BACKGROUND);

    let outline: Vec<Point<i32>> = POINTER_VERTICES
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();
    draw_polygon_mut(&mut glyph, &outline, color_for(value, scale));

    backend.draw_text(
        &mut glyph,
        &value.to_string(),
        (POINTER_WIDTH / 2) as i32,
        (POINTER_HEIGHT / 2) as i32,
        &LABEL_STYLE,
    )?;

    Ok(glyph)
}
