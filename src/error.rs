//! Error handling for result lookup operations.
//!
//! Malformed spreadsheet rows are never errors; these types cover the
//! surrounding concerns: unreadable sources, form validation, configuration
//! and the fetch collaborator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source {source_name} is not valid UTF-8 text (invalid byte at offset {offset})")]
    NotText { source_name: String, offset: usize },

    #[error("{message}")]
    InvalidQuery { message: String },

    #[error("Unknown college: {id}")]
    UnknownCollege { id: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Could not load results from {location}: {reason}")]
    SourceUnavailable { location: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PortalError {
    /// Create a form validation error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a source failure with the location it was read from
    pub fn source_unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// True for errors the user can fix by correcting the form
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PortalError::InvalidQuery { .. } | PortalError::UnknownCollege { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_query_displays_bare_message() {
        let error = PortalError::invalid_query("Please enter your roll number");
        assert_eq!(error.to_string(), "Please enter your roll number");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_source_unavailable_message() {
        let error = PortalError::source_unavailable("results.csv", "HTTP status 404");
        assert_eq!(
            error.to_string(),
            "Could not load results from results.csv: HTTP status 404"
        );
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: PortalError = io.into();
        assert!(matches!(error, PortalError::Io(_)));
    }
}
