//! Skill documents: frontmatter, discovery and collection
//!
//! A skill is a directory containing a `SKILL.md` whose frontmatter carries
//! at least `name` and `description`. Discovery reads the documents from
//! disk; parsing and collection are pure and never fail.

pub mod collector;
pub mod discovery;
pub mod frontmatter;

pub use collector::{
    Collection, Entry, RawDocument, SkipReason, Skipped, collect, collect_detailed,
    duplicate_names,
};
pub use discovery::{DEFAULT_PATTERN, Discovery, discover, discover_detailed};
pub use frontmatter::Frontmatter;
