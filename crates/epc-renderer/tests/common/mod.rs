//! Common helpers for renderer integration tests
//!
//! Provides a backend that loads generated templates and records text
//! draws instead of rasterizing them, so no font files are needed.

use epc_common::{AssessmentType, EpcError, EpcResult};
use epc_renderer::{AssetConfig, RenderBackend, TextStyle};
use image::RgbaImage;
use std::cell::RefCell;
use tempfile::TempDir;

/// A text draw captured by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub style: TextStyle,
    /// Canvas height at the time of the draw.
    pub canvas_height: u32,
}

pub struct RecordingBackend {
    config: AssetConfig,
    texts: RefCell<Vec<DrawnText>>,
    // Keeps the generated templates alive for the backend's lifetime
    _templates: TempDir,
}

impl RecordingBackend {
    pub fn new() -> Self {
        let templates = test_utils::template_dir();
        let config = AssetConfig::default().with_assets_dir(templates.path());
        Self {
            config,
            texts: RefCell::new(Vec::new()),
            _templates: templates,
        }
    }

    pub fn texts(&self) -> Vec<DrawnText> {
        self.texts.borrow().clone()
    }

    /// Rating numbers drawn inside pointers.
    pub fn pointer_labels(&self) -> Vec<String> {
        self.texts()
            .into_iter()
            .filter(|t| t.style == epc_renderer::pointer::LABEL_STYLE)
            .map(|t| t.text)
            .collect()
    }

    pub fn clear(&self) {
        self.texts.borrow_mut().clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn load_template(&self, assessment: AssessmentType) -> EpcResult<RgbaImage> {
        let path = self.config.template_path(assessment);
        image::open(&path)
            .map(|img| img.to_rgba8())
            .map_err(|e| EpcError::Asset {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> EpcResult<()> {
        self.texts.borrow_mut().push(DrawnText {
            text: text.to_string(),
            x,
            y,
            style: *style,
            canvas_height: canvas.height(),
        });
        Ok(())
    }
}

/// A backend whose templates never load.
pub struct MissingTemplateBackend;

impl RenderBackend for MissingTemplateBackend {
    fn load_template(&self, assessment: AssessmentType) -> EpcResult<RgbaImage> {
        Err(EpcError::Asset {
            path: assessment.template_file_name(),
            message: "No such file or directory".to_string(),
        })
    }

    fn draw_text(
        &self,
        _canvas: &mut RgbaImage,
        _text: &str,
        _x: i32,
        _y: i32,
        _style: &TextStyle,
    ) -> EpcResult<()> {
        Ok(())
    }
}
