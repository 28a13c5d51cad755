//! Shared test utilities for the epc-diagram workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Reference rating reports
//! - Synthetic template images
//! - Temporary asset directories
//! - Skip macros for optional assets
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, template_dir};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro to skip a test if any of the real diagram assets are missing.
///
/// Templates and fonts are not checked in, so tests against them only run
/// where they have been installed.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_assets;
///
/// #[test]
/// fn test_real_render() {
///     let dir = require_assets!();
///     // Test code using dir...
/// }
/// ```
#[macro_export]
macro_rules! require_assets {
    () => {{
        match $crate::find_assets_dir() {
            Some(dir) => dir,
            None => {
                eprintln!(
                    "SKIPPED: Diagram assets not found. Install them under crates/epc-renderer/assets or set EPC_ASSETS_DIR."
                );
                return;
            }
        }
    }};
}
