//! Error types for the nbstrip core library.

use thiserror::Error;

/// All errors that can occur within the nbstrip core library.
#[derive(Debug, Error)]
pub enum NbStripError {
    /// An I/O operation on the filesystem failed (backup copy, read, or
    /// write-back).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file's content could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed as JSON but is not shaped like a notebook document.
    #[error("Invalid notebook: {0}")]
    InvalidNotebook(String),
}

/// Convenience alias that pins the error type to [`NbStripError`].
pub type Result<T> = std::result::Result<T, NbStripError>;

impl NbStripError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Not a valid notebook file: {e}"),
            Self::InvalidNotebook(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: NbStripError = io.into();
        assert!(e.to_string().contains("denied"));
        assert!(e.user_message().starts_with("File error"));
    }

    #[test]
    fn test_json_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e: NbStripError = bad.into();
        assert!(e.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_invalid_notebook_message_passthrough() {
        let e = NbStripError::InvalidNotebook("top level is not a JSON object".to_string());
        assert_eq!(e.user_message(), "top level is not a JSON object");
    }
}
