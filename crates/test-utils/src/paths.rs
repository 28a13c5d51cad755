//! Path utilities for locating diagram assets and creating temp directories.

use std::path::PathBuf;

/// Files a complete assets directory holds.
pub const ASSET_FILES: [&str; 6] = [
    "epc.png",
    "pea.png",
    "eer.png",
    "eir.png",
    "Arial.ttf",
    "Arial Bold.ttf",
];

/// Returns the workspace root directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Searches for a directory holding every file in [`ASSET_FILES`].
///
/// This function checks the following locations in order:
/// 1. Environment variable `EPC_ASSETS_DIR` (if set)
/// 2. `crates/epc-renderer/assets/`
///
/// The variable is a test-only switch; the renderer never reads it.
pub fn find_assets_dir() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(dir) = std::env::var("EPC_ASSETS_DIR") {
        candidates.push(PathBuf::from(dir));
    }
    candidates.push(workspace_root().join("crates/epc-renderer/assets"));

    candidates
        .into_iter()
        .find(|dir| ASSET_FILES.iter().all(|name| dir.join(name).exists()))
}

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Creates a temporary directory holding generated templates for every
/// assessment type.
pub fn template_dir() -> tempfile::TempDir {
    let dir = tempfile::Builder::new()
        .prefix("epc_templates")
        .tempdir()
        .expect("Failed to create temporary test directory");
    crate::generators::write_templates(dir.path()).expect("Failed to write templates");
    dir
}
