//! Asset-backed drawing primitives.
//!
//! The compositor never touches the filesystem or fonts directly: templates
//! and text go through a [`RenderBackend`] handed to it by the caller.

use epc_common::{AssessmentType, EpcError, EpcResult};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Rect, Scale};
use std::path::Path;

use crate::config::AssetConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// How the text position relates to the drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left end of the baseline.
    BaselineLeft,
    /// The position is the center of the inked glyph box.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub weight: FontWeight,
    /// Pixel height of the font.
    pub size: f32,
    pub color: Rgba<u8>,
    pub anchor: TextAnchor,
}

/// Primitives that depend on on-disk assets.
pub trait RenderBackend {
    /// Load a fresh copy of the template for an assessment type.
    fn load_template(&self, assessment: AssessmentType) -> EpcResult<RgbaImage>;

    /// Draw a single line of text onto the canvas.
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> EpcResult<()>;
}

impl<B: RenderBackend + ?Sized> RenderBackend for &B {
    fn load_template(&self, assessment: AssessmentType) -> EpcResult<RgbaImage> {
        (**self).load_template(assessment)
    }

    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> EpcResult<()> {
        (**self).draw_text(canvas, text, x, y, style)
    }
}

/// Backend reading templates and TrueType fonts from an assets directory.
///
/// Fonts are loaded once, templates on every render.
pub struct FileBackend {
    config: AssetConfig,
    regular: Font<'static>,
    bold: Font<'static>,
}

impl FileBackend {
    /// Load the fonts named by `config`. Missing or invalid fonts fail here.
    pub fn new(config: AssetConfig) -> EpcResult<Self> {
        let regular = load_font(&config.regular_font_path())?;
        let bold = load_font(&config.bold_font_path())?;

        tracing::debug!(
            assets_dir = %config.assets_dir().display(),
            "Loaded diagram fonts"
        );

        Ok(Self {
            config,
            regular,
            bold,
        })
    }

    fn font(&self, weight: FontWeight) -> &Font<'static> {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

impl std::fmt::Debug for FileBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RenderBackend for FileBackend {
    fn load_template(&self, assessment: AssessmentType) -> EpcResult<RgbaImage> {
        let path = self.config.template_path(assessment);
        let img = image::open(&path).map_err(|e| asset_error(&path, e))?;
        Ok(img.to_rgba8())
    }

    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> EpcResult<()> {
        let font = self.font(style.weight);
        let scale = Scale::uniform(style.size);

        // draw_text_mut positions the top of the line box
        let (left, top) = match style.anchor {
            TextAnchor::BaselineLeft => {
                let ascent = font.v_metrics(scale).ascent;
                (x, y - ascent.round() as i32)
            }
            TextAnchor::Center => match ink_bounds(font, scale, text) {
                Some(ink) => (
                    x - (ink.min.x + ink.max.x) / 2,
                    y - (ink.min.y + ink.max.y) / 2,
                ),
                None => return Ok(()),
            },
        };

        draw_text_mut(canvas, style.color, left, top, scale, font, text);
        Ok(())
    }
}

/// Pixels covered by `text` laid out the way `draw_text_mut` lays it out,
/// relative to the top-left of the line box. `None` when nothing is inked.
fn ink_bounds(font: &Font<'_>, scale: Scale, text: &str) -> Option<Rect<i32>> {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(0.0, ascent))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .reduce(|a, b| Rect {
            min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
            max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
        })
}

fn load_font(path: &Path) -> EpcResult<Font<'static>> {
    let data = std::fs::read(path).map_err(|e| asset_error(path, e))?;
    Font::try_from_vec(data).ok_or_else(|| EpcError::Asset {
        path: path.display().to_string(),
        message: "not a valid TrueType font".to_string(),
    })
}

fn asset_error(path: &Path, err: impl std::fmt::Display) -> EpcError {
    EpcError::Asset {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    /// Backend over the DejaVu fonts checked in under `assets/`.
    pub(crate) fn dejavu_backend() -> FileBackend {
        let config = AssetConfig {
            regular_font: "DejaVuSans.ttf".to_string(),
            bold_font: "DejaVuSans-Bold.ttf".to_string(),
            ..AssetConfig::default()
        };
        FileBackend::new(config).unwrap()
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of the pixels inside
    /// `area` that differ from `background`.
    pub(crate) fn ink_box(
        canvas: &RgbaImage,
        background: Rgba<u8>,
        area: (u32, u32, u32, u32),
    ) -> Option<(u32, u32, u32, u32)> {
        let (x0, y0, x1, y1) = area;
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for y in y0..y1 {
            for x in x0..x1 {
                if *canvas.get_pixel(x, y) == background {
                    continue;
                }
                found = Some(match found {
                    None => (x, y, x, y),
                    Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x), d.max(y)),
                });
            }
        }
        found
    }

    #[test]
    fn test_baseline_anchor_sits_text_on_baseline() {
        let backend = dejavu_backend();
        let mut canvas = RgbaImage::from_pixel(400, 80, WHITE);
        let style = TextStyle {
            weight: FontWeight::Regular,
            size: 24.0,
            color: BLACK,
            anchor: TextAnchor::BaselineLeft,
        };

        backend
            .draw_text(&mut canvas, "Address", 15, 50, &style)
            .unwrap();

        let (min_x, min_y, _, max_y) = ink_box(&canvas, WHITE, (0, 0, 400, 80)).unwrap();
        assert!((15..=17).contains(&min_x), "left edge at {min_x}");
        assert!((48..=52).contains(&max_y), "bottom of ink at {max_y}");
        assert!(min_y < 40, "cap height too small: top at {min_y}");
    }

    #[test]
    fn test_center_anchor_centers_ink() {
        let backend = dejavu_backend();
        let mut canvas = RgbaImage::from_pixel(200, 100, WHITE);
        let style = TextStyle {
            weight: FontWeight::Bold,
            size: 38.0,
            color: BLACK,
            anchor: TextAnchor::Center,
        };

        backend.draw_text(&mut canvas, "55", 100, 50, &style).unwrap();

        let (min_x, min_y, max_x, max_y) = ink_box(&canvas, WHITE, (0, 0, 200, 100)).unwrap();
        let center_x = (min_x + max_x) as f32 / 2.0;
        let center_y = (min_y + max_y) as f32 / 2.0;
        assert!((center_x - 100.0).abs() <= 1.5, "x center {center_x}");
        assert!((center_y - 50.0).abs() <= 1.5, "y center {center_y}");
    }

    #[test]
    fn test_blank_text_draws_nothing() {
        let backend = dejavu_backend();
        let mut canvas = RgbaImage::from_pixel(40, 40, WHITE);
        let style = TextStyle {
            weight: FontWeight::Bold,
            size: 38.0,
            color: BLACK,
            anchor: TextAnchor::Center,
        };

        backend.draw_text(&mut canvas, " ", 20, 20, &style).unwrap();
        assert!(ink_box(&canvas, WHITE, (0, 0, 40, 40)).is_none());
    }

    #[test]
    fn test_missing_fonts_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetConfig::default().with_assets_dir(dir.path());

        let err = FileBackend::new(config).unwrap_err();
        match err {
            EpcError::Asset { path, .. } => assert!(path.ends_with("Arial.ttf")),
            other => panic!("expected asset error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_font_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Arial.ttf"), b"not a font").unwrap();
        let config = AssetConfig::default().with_assets_dir(dir.path());

        let err = FileBackend::new(config).unwrap_err();
        assert!(err.to_string().contains("TrueType"), "{err}");
    }
}
