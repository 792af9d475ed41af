//! Skill document discovery errors

use super::AgentsMdError;

/// Creates an invalid pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> AgentsMdError {
    AgentsMdError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates a discovery failed error
pub fn walk_failed(path: impl Into<String>, reason: impl Into<String>) -> AgentsMdError {
    AgentsMdError::DiscoveryFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
