//! Energy rating diagram rendering.
//!
//! Draws rating pointers and caption lines onto EPC/PEA template images:
//! - Rating to color and rating to row mappings
//! - Pointer glyphs
//! - Compositing and encoding

pub mod backend;
pub mod color;
pub mod composer;
pub mod config;
pub mod encode;
pub mod layout;
pub mod pointer;
pub mod position;

pub use backend::{FileBackend, FontWeight, RenderBackend, TextAnchor, TextStyle};
pub use color::{color_for, color_hex};
pub use composer::{DiagramComposer, PlacedPointer};
pub use config::AssetConfig;
pub use position::vertical_offset;

pub use epc_common::{
    AssessmentType, EncodeOptions, EpcError, EpcResult, OutputFormat, RatingReport, RatingRole,
    RatingScale,
};
