//! Skill document discovery in a workspace
//!
//! Walks the workspace root and picks every file whose root-relative path
//! matches the skill glob (by default `*/skills/*/SKILL.md`). Each match
//! becomes a [`RawDocument`] located at the skill directory, i.e. the
//! parent of the matched file.

use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use super::collector::RawDocument;
use crate::error::{self, Result};
use crate::path_utils;

/// Default glob for skill documents, relative to the workspace root
pub const DEFAULT_PATTERN: &str = "*/skills/*/SKILL.md";

/// Directories never descended into
const SKIPPED_DIRS: &[&str] = &[".git"];

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Deepest directory level a pattern can match, `None` when unbounded.
///
/// Repetitions (`<...>`) and alternatives (`{...}`) may span any number of
/// components, so they are treated like `**`.
fn max_depth(pattern: &str) -> Option<usize> {
    if pattern.contains("**") || pattern.contains(['<', '{']) {
        None
    } else {
        Some(pattern.split('/').filter(|c| !c.is_empty()).count())
    }
}

fn location_of(relative: &Path) -> String {
    relative
        .parent()
        .map(path_utils::to_forward_slashes)
        .unwrap_or_default()
}

/// Result of a workspace walk
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Matching documents in walk order
    pub documents: Vec<RawDocument>,
    /// Entries the walk could not visit (dangling links, link loops, ...)
    pub unreachable: Vec<String>,
}

/// Find and read all skill documents under `root` matching `pattern`.
///
/// Documents are returned in a stable order (directory walk sorted by file
/// name), so repeated runs over the same tree produce identical output.
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<RawDocument>> {
    discover_detailed(root, pattern).map(|discovery| discovery.documents)
}

/// Like [`discover`], also reporting the entries the walk had to skip.
///
/// Only a failure to read `root` itself is fatal. Broken entries below it
/// are recorded in [`Discovery::unreachable`] and the walk goes on.
pub fn discover_detailed(root: &Path, pattern: &str) -> Result<Discovery> {
    let glob =
        Glob::new(pattern).map_err(|e| error::discovery::invalid_pattern(pattern, e.to_string()))?;

    let mut walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name();
    if let Some(depth) = max_depth(pattern) {
        walker = walker.max_depth(depth);
    }

    let mut discovery = Discovery::default();
    for entry in walker.into_iter().filter_entry(|e| !is_skipped_dir(e)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(error::discovery::walk_failed(
                    root.display().to_string(),
                    e.to_string(),
                ));
            }
            Err(e) => {
                discovery.unreachable.push(e.to_string());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let candidate = path_utils::to_forward_slashes(relative);
        if !glob.is_match(CandidatePath::from(candidate.as_str())) {
            continue;
        }

        let text = fs::read_to_string(entry.path()).map_err(|e| {
            error::fs::read_failed(entry.path().display().to_string(), e.to_string())
        })?;
        discovery
            .documents
            .push(RawDocument::new(location_of(relative), text));
    }

    Ok(discovery)
}
