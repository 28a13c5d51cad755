//! Common types shared by the energy rating diagram crates.

pub mod assessment;
pub mod error;
pub mod format;
pub mod rating;
pub mod report;

pub use assessment::AssessmentType;
pub use error::{EpcError, EpcResult};
pub use format::{EncodeOptions, OutputFormat};
pub use rating::{RatingRole, RatingScale};
pub use report::RatingReport;
