//! Tiny Mustache-like renderer with a single `{{#skills}}` loop
//!
//! The only construct understood is the skills block:
//!
//! ```text
//! {{#skills}}
//! - [{{name}}]({{path}}): {{description}}
//! {{/skills}}
//! ```
//!
//! Inside the block the three [`Placeholder`] tokens are replaced per entry.
//! Everything else, including other `{{...}}` tokens, is copied verbatim.

use crate::skills::Entry;

/// Name of the only loop block the renderer understands
pub const BLOCK_NAME: &str = "skills";

const BLOCK_OPEN: &str = "{{#skills}}";
const BLOCK_CLOSE: &str = "{{/skills}}";
const TOKEN_START: &str = "{{";

/// Entry fields that may be substituted inside the skills block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Description,
    Path,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [
        Placeholder::Name,
        Placeholder::Description,
        Placeholder::Path,
    ];

    /// Literal token as written in templates
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Name => "{{name}}",
            Placeholder::Description => "{{description}}",
            Placeholder::Path => "{{path}}",
        }
    }

    pub fn value(self, entry: &Entry) -> &str {
        match self {
            Placeholder::Name => &entry.name,
            Placeholder::Description => &entry.description,
            Placeholder::Path => &entry.path,
        }
    }

    /// Placeholder whose token starts `text`, if any.
    fn at_start(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.token()))
    }
}

/// Replace placeholders in one left-to-right pass.
///
/// Substituted values are never rescanned, so an entry whose description
/// contains `{{name}}` is rendered literally.
fn substitute(body: &str, entry: &Entry) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(idx) = rest.find(TOKEN_START) {
        out.push_str(&rest[..idx]);
        let candidate = &rest[idx..];
        match Placeholder::at_start(candidate) {
            Some(placeholder) => {
                out.push_str(placeholder.value(entry));
                rest = &candidate[placeholder.token().len()..];
            }
            None => {
                // Advance a single brace so "{{{name}}" still matches at offset 1
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Strip one line break (`\r\n` or `\n`) from the start of `text`.
fn strip_leading_newline(text: &str) -> Option<&str> {
    text.strip_prefix("\r\n").or_else(|| text.strip_prefix('\n'))
}

fn strip_trailing_newline(text: &str) -> Option<&str> {
    text.strip_suffix("\r\n").or_else(|| text.strip_suffix('\n'))
}

/// Expand one block body for all entries.
///
/// A body framed by CRLF line breaks is joined with CRLF as well.
fn expand(body: &str, entries: &[Entry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let newline = if body.starts_with("\r\n") || body.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    };
    let body = strip_leading_newline(body).unwrap_or(body);
    let (body, trailing_newline) = match strip_trailing_newline(body) {
        Some(stripped) => (stripped, true),
        None => (body, false),
    };

    let mut rendered = entries
        .iter()
        .map(|entry| substitute(body, entry))
        .collect::<Vec<_>>()
        .join(newline);
    if trailing_newline {
        rendered.push_str(newline);
    }
    rendered
}

/// Render `template`, expanding every `{{#skills}} ... {{/skills}}` span.
///
/// Spans are matched left to right, each opener pairing with the nearest
/// following closer. An opener without a closer leaves the rest of the
/// template untouched.
pub fn render(template: &str, entries: &[Entry]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(BLOCK_OPEN) {
        let after_open = &rest[start + BLOCK_OPEN.len()..];
        let Some(end) = after_open.find(BLOCK_CLOSE) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&expand(&after_open[..end], entries));
        rest = &after_open[end + BLOCK_CLOSE.len()..];
    }

    out.push_str(rest);
    out
}
