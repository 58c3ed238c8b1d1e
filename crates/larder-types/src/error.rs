use std::fmt;

use crate::domain::ValidationError;

/// Result type for larder-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// User-supplied item fields were rejected
    Validation(ValidationError),

    /// Location name did not match any known storage location
    UnknownLocation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(err) => write!(f, "{}", err),
            Error::UnknownLocation(name) => write!(
                f,
                "Unknown location '{}': expected one of fridge, freezer, pantry",
                name
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(err) => Some(err),
            Error::UnknownLocation(_) => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}
