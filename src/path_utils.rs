//! Cross-platform path utilities for agentsmd
//!
//! Skill locations end up inside the generated markdown, so they are always
//! written with forward slashes regardless of the host platform.

use std::path::{Path, PathBuf};

/// Convert a path to a string with forward slashes.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Path for user-facing messages: relative to `root` when inside it.
pub fn display_relative(root: &Path, path: &Path) -> String {
    let shown = path.strip_prefix(root).unwrap_or(path);
    to_forward_slashes(shown)
}
