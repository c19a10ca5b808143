use thiserror::Error;

/// Core error types for pagefmt
#[derive(Debug, Error)]
pub enum Error {
    /// Base64 payload could not be decoded
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input validation failed
    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },
}

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Short hint shown under the error line by the CLI.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::InvalidEncoding(_) => Some(
                "Expected standard base64, optionally prefixed with data:image/svg+xml;base64,",
            ),
            Error::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Some("Check write permissions on the output directory")
            }
            Error::Io(e) if e.kind() == std::io::ErrorKind::StorageFull => {
                Some("Disk full: free up space and try again")
            }
            Error::Validation { .. } => {
                Some("File names must be a single path component without control characters")
            }
            Error::Io(_) | Error::Serialization(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn test_invalid_encoding_from_decode_error() {
        let err: Error = base64::engine::general_purpose::STANDARD
            .decode("@@@")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::InvalidEncoding(_)));
        assert!(err.to_string().starts_with("Invalid encoding"));
        assert!(err.hint().is_some_and(|h| h.contains("base64")));
    }

    #[test]
    fn test_validation_message() {
        let err = Error::validation("file name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation error in file name: must not be empty"
        );
    }

    #[test]
    fn test_io_hint_permission_denied() {
        let err = Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(err.hint().is_some_and(|h| h.contains("permissions")));
    }

    #[test]
    fn test_io_hint_generic() {
        let err = Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.hint().is_none());
    }
}
