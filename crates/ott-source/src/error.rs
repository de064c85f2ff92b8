use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The driver rejected or failed an operation. Carries its message as-is.
    Driver(String),
    /// No client could be created at startup.
    Unavailable(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Driver(msg) => f.write_str(msg),
            SourceError::Unavailable(msg) => write!(f, "database unavailable: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<mongodb::error::Error> for SourceError {
    fn from(e: mongodb::error::Error) -> Self {
        SourceError::Driver(e.to_string())
    }
}
