//! File system errors

use super::AgentsMdError;

/// Creates a template not found error
pub fn template_not_found(path: impl Into<String>) -> AgentsMdError {
    AgentsMdError::TemplateNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AgentsMdError {
    AgentsMdError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AgentsMdError {
    AgentsMdError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an output out of date error
pub fn out_of_date(path: impl Into<String>) -> AgentsMdError {
    AgentsMdError::OutputOutOfDate { path: path.into() }
}
