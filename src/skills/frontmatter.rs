//! Minimal `key: value` frontmatter between `---` delimiters.
//!
//! This is deliberately not YAML: values are plain strings, there is no
//! nesting, quoting or multi-line scalar support. Parsing is a two-phase
//! scan: find the delimiter lines, then split each body line on its first
//! colon.

use std::collections::BTreeMap;

/// Flat frontmatter mapping. Keys are unique; the last occurrence wins.
pub type Frontmatter = BTreeMap<String, String>;

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Return the lines strictly between the opening and closing `---`.
///
/// The opening delimiter must be the first line of `text`. Returns `None`
/// when either delimiter is missing.
pub fn block(text: &str) -> Option<Vec<&str>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut lines = text.lines();
    if !is_delimiter(lines.next()?) {
        return None;
    }

    let mut body = Vec::new();
    for line in lines {
        if is_delimiter(line) {
            return Some(body);
        }
        body.push(line);
    }
    None
}

fn field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Parse the frontmatter of `text` into a flat mapping.
///
/// Missing or malformed frontmatter yields an empty mapping.
pub fn parse(text: &str) -> Frontmatter {
    let Some(lines) = block(text) else {
        return Frontmatter::new();
    };

    let mut data = Frontmatter::new();
    for (key, value) in lines.into_iter().filter_map(field) {
        data.insert(key.to_string(), value.to_string());
    }
    data
}
