//! Turn discovered skill documents into the ordered entry list.

use std::collections::BTreeMap;
use std::fmt;

use super::frontmatter;

/// A skill document as handed over by discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Location relative to the workspace root, forward slashes.
    /// Rendered verbatim as `{{path}}`.
    pub location: String,
    /// Decoded document text
    pub text: String,
}

impl RawDocument {
    pub fn new(location: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            text: text.into(),
        }
    }
}

/// A renderable skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub description: String,
    pub path: String,
}

/// Why a document produced no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingName,
    MissingDescription,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "missing 'name' in frontmatter"),
            SkipReason::MissingDescription => write!(f, "missing 'description' in frontmatter"),
        }
    }
}

/// A document that was dropped during collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub location: String,
    pub reason: SkipReason,
}

/// Result of collecting a document set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Entries sorted case-insensitively by name, ties in discovery order
    pub entries: Vec<Entry>,
    /// Dropped documents in discovery order
    pub skipped: Vec<Skipped>,
}

fn required(meta: &frontmatter::Frontmatter, key: &str) -> Option<String> {
    meta.get(key).filter(|v| !v.is_empty()).cloned()
}

fn to_entry(document: &RawDocument) -> Result<Entry, SkipReason> {
    let meta = frontmatter::parse(&document.text);
    let name = required(&meta, "name").ok_or(SkipReason::MissingName)?;
    let description = required(&meta, "description").ok_or(SkipReason::MissingDescription)?;
    Ok(Entry {
        name,
        description,
        path: document.location.clone(),
    })
}

/// Collect entries and record every dropped document.
pub fn collect_detailed(documents: &[RawDocument]) -> Collection {
    let mut collection = Collection::default();

    for document in documents {
        match to_entry(document) {
            Ok(entry) => collection.entries.push(entry),
            Err(reason) => collection.skipped.push(Skipped {
                location: document.location.clone(),
                reason,
            }),
        }
    }

    // Stable sort keeps discovery order for names that compare equal
    collection
        .entries
        .sort_by_cached_key(|entry| entry.name.to_lowercase());
    collection
}

/// Collect the sorted entry list, silently dropping incomplete documents.
pub fn collect(documents: &[RawDocument]) -> Vec<Entry> {
    collect_detailed(documents).entries
}

/// Names that appear on more than one entry, compared case-insensitively.
///
/// Returned in entry order, one per duplicated name, using the first spelling.
pub fn duplicate_names(entries: &[Entry]) -> Vec<&str> {
    let mut seen: BTreeMap<String, (&str, usize)> = BTreeMap::new();
    let mut order = Vec::new();

    for entry in entries {
        let key = entry.name.to_lowercase();
        let slot = seen.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (entry.name.as_str(), 0)
        });
        slot.1 += 1;
    }

    order
        .iter()
        .filter_map(|key| seen.get(key))
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| *name)
        .collect()
}
