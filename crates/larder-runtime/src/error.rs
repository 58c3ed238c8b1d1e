use std::fmt;
use std::path::PathBuf;

/// Result type for larder-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Item store or backend error
    Store(larder_store::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Configuration file exists and overwriting was not requested
    AlreadyInitialized(PathBuf),
}

impl Error {
    /// Store errors keep their coarse classification; everything else is a
    /// persistence/configuration problem.
    pub fn kind(&self) -> larder_store::ErrorKind {
        match self {
            Error::Store(err) => err.kind(),
            _ => larder_store::ErrorKind::Persistence,
        }
    }

    /// True only for a missing item, not for an ambiguous id prefix.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(err) if err.is_not_found())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::AlreadyInitialized(path) => write!(
                f,
                "Already initialized: {} exists (use --force to overwrite)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::AlreadyInitialized(_) => None,
        }
    }
}

impl From<larder_store::Error> for Error {
    fn from(err: larder_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<larder_types::ValidationError> for Error {
    fn from(err: larder_types::ValidationError) -> Self {
        Error::Store(err.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
