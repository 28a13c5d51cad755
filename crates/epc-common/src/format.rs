//! Output formats and encoding options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::EpcError;

/// Default encoding quality (0-100).
pub const DEFAULT_QUALITY: u8 = 70;

/// Encoded output format of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    WebP,
    /// PNG wrapped in a base64 `data:` URL.
    DataUrl,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Gif => "gif",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tif",
            OutputFormat::WebP => "webp",
            OutputFormat::DataUrl => "data-url",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Gif => "image/gif",
            OutputFormat::Bmp => "image/bmp",
            OutputFormat::Tiff => "image/tiff",
            OutputFormat::WebP => "image/webp",
            OutputFormat::DataUrl => "text/plain",
        }
    }

    /// File extension conventionally used for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::DataUrl => "txt",
            other => other.as_str(),
        }
    }

    /// Infer the format from a file path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EpcError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| EpcError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = EpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "webp" => Ok(OutputFormat::WebP),
            "data-url" => Ok(OutputFormat::DataUrl),
            _ => Err(EpcError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = EpcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(value: OutputFormat) -> Self {
        value.as_str().to_string()
    }
}

/// Format and quality used when encoding a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    #[serde(default)]
    pub format: OutputFormat,

    /// 0-100. Only lossy formats honor it.
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl EncodeOptions {
    pub fn new(format: OutputFormat, quality: u8) -> Self {
        Self {
            format,
            quality: quality.min(100),
        }
    }
}
