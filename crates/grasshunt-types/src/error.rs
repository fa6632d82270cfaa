use std::fmt;

/// Result type for grasshunt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can abort a log-processing run
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// A line matched the event grammar but carried an unknown kind token.
    /// Distinct from a line that simply is not an event (which is skipped):
    /// a malformed known-shape line points at a corrupted or adversarial log.
    InvalidKind(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidKind(kind) => write!(f, "Unrecognized event kind: {}", kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InvalidKind(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
