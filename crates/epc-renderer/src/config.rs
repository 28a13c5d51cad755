//! Asset locations for the file-backed renderer.

use epc_common::AssessmentType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where templates and fonts are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory holding `<assessment>.png` templates and the fonts.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Font used for caption lines.
    #[serde(default = "default_regular_font")]
    pub regular_font: String,

    /// Font used for the rating number inside pointers.
    #[serde(default = "default_bold_font")]
    pub bold_font: String,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

fn default_regular_font() -> String {
    "Arial.ttf".to_string()
}

fn default_bold_font() -> String {
    "Arial Bold.ttf".to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            regular_font: default_regular_font(),
            bold_font: default_bold_font(),
        }
    }
}

impl AssetConfig {
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn template_path(&self, assessment: AssessmentType) -> PathBuf {
        self.assets_dir.join(assessment.template_file_name())
    }

    pub fn regular_font_path(&self) -> PathBuf {
        self.assets_dir.join(&self.regular_font)
    }

    pub fn bold_font_path(&self) -> PathBuf {
        self.assets_dir.join(&self.bold_font)
    }
}
