//! agentsmd - generate AGENTS.md from skill frontmatter
//!
//! The generator is three pure steps glued to the file system:
//! [`skills::frontmatter::parse`] extracts `key: value` metadata,
//! [`skills::collect`] turns documents into a sorted entry list and
//! [`template::render`] expands the `{{#skills}}` block of the template.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod path_utils;
pub mod skills;
pub mod template;
pub mod ui;

pub use error::{AgentsMdError, Result};
pub use skills::{Entry, RawDocument, collect};
pub use template::render;
