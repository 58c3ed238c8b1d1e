use larder_types::{ItemId, ValidationError};
use std::fmt;

/// Result type for larder-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Fields rejected before any state changed
    Validation(ValidationError),

    /// No item with this id (or id prefix)
    NotFound(String),

    /// Id prefix matched more than one item
    AmbiguousId { prefix: String, matches: usize },

    /// SQLite operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Sync document could not be encoded or decoded
    Document(serde_json::Error),

    /// File watcher could not be started
    Watch(notify::Error),

    /// Backend refused the operation (offline, read-only, ...)
    Unavailable(String),
}

/// Coarse classification used by callers to decide how to surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Persistence,
}

impl Error {
    pub fn not_found(id: &ItemId) -> Self {
        Error::NotFound(id.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound(_) | Error::AmbiguousId { .. } => ErrorKind::NotFound,
            Error::Database(_)
            | Error::Io(_)
            | Error::Document(_)
            | Error::Watch(_)
            | Error::Unavailable(_) => ErrorKind::Persistence,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(err) => write!(f, "{}", err),
            Error::NotFound(id) => write!(f, "No item with id '{}'", id),
            Error::AmbiguousId { prefix, matches } => write!(
                f,
                "Ambiguous id prefix '{}': {} items match, use more characters",
                prefix, matches
            ),
            Error::Database(err) => {
                let msg = err.to_string();
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(
                        f,
                        "Storage schema mismatch: {}. The database may come from another larder version.",
                        msg
                    )
                } else {
                    write!(f, "Storage error: {}", err)
                }
            }
            Error::Io(err) => write!(f, "Storage IO error: {}", err),
            Error::Document(err) => write!(f, "Sync document error: {}", err),
            Error::Watch(err) => write!(f, "Could not watch sync document: {}", err),
            Error::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(err) => Some(err),
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Document(err) => Some(err),
            Error::Watch(err) => Some(err),
            Error::NotFound(_) | Error::AmbiguousId { .. } | Error::Unavailable(_) => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Document(err)
    }
}

impl From<notify::Error> for Error {
    fn from(err: notify::Error) -> Self {
        Error::Watch(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("no such column: location".to_string()),
        );
        let msg = Error::Database(sqlite_err).to_string();

        assert!(msg.contains("Storage schema mismatch"));
        assert!(msg.contains("another larder version"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            Error::Validation(ValidationError::EmptyName).kind(),
            ErrorKind::Validation
        );
        assert_eq!(Error::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            Error::Unavailable("offline".into()).kind(),
            ErrorKind::Persistence
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = Error::from(ValidationError::MissingDate);
        assert_eq!(err.to_string(), "Please select a date");
    }
}
