//! Workspace and configuration errors

use super::AgentsMdError;

/// Creates a workspace not found error
pub fn workspace_not_found(path: impl Into<String>) -> AgentsMdError {
    AgentsMdError::WorkspaceNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AgentsMdError {
    AgentsMdError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AgentsMdError {
    AgentsMdError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AgentsMdError {
    AgentsMdError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
