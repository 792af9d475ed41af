//! Error types and handling for agentsmd
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only the I/O edges of the generator can fail. Frontmatter parsing,
//! entry collection and template rendering never return errors.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Workspace and configuration errors
//! - [`discovery`]: Skill document discovery errors
//! - [`fs`]: File system errors

pub mod config;
pub mod discovery;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for agentsmd operations
#[derive(Error, Diagnostic, Debug)]
pub enum AgentsMdError {
    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(agentsmd::workspace::not_found),
        help("Pass an existing directory with --workspace or AGENTSMD_WORKSPACE")
    )]
    WorkspaceNotFound { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(agentsmd::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(agentsmd::config::parse_failed),
        help("Supported keys are: template, output, pattern")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(agentsmd::config::invalid))]
    ConfigInvalid { message: String },

    // Discovery errors
    #[error("Invalid skill pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(agentsmd::discovery::invalid_pattern),
        help("Patterns are globs relative to the workspace root, e.g. */skills/*/SKILL.md")
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to scan directory: {path}: {reason}")]
    #[diagnostic(code(agentsmd::discovery::walk_failed))]
    DiscoveryFailed { path: String, reason: String },

    // File system errors
    #[error("Template not found: {path}")]
    #[diagnostic(
        code(agentsmd::fs::template_not_found),
        help("Create the template or point to one with --template")
    )]
    TemplateNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(agentsmd::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(agentsmd::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("{path} is out of date")]
    #[diagnostic(
        code(agentsmd::fs::out_of_date),
        help("Run 'agentsmd' without --check to regenerate it")
    )]
    OutputOutOfDate { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agentsmd::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AgentsMdError {
    fn from(err: std::io::Error) -> Self {
        AgentsMdError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AgentsMdError {
    fn from(err: serde_yaml::Error) -> Self {
        AgentsMdError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AgentsMdError>;
