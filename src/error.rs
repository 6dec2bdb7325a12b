use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SnipkitError {
    Io(io::Error),
    Json(serde_json::Error),
    ConfigLoad(String),
    ConfigSave(String),
    EditSessionActive,
    NameNotFound(String),
    Other(String),
}

impl fmt::Display for SnipkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnipkitError::Io(err) => write!(f, "I/O error: {}", err),
            SnipkitError::Json(err) => write!(f, "JSON error: {}", err),
            SnipkitError::ConfigLoad(msg) => write!(f, "Failed to load snippets: {}", msg),
            SnipkitError::ConfigSave(msg) => write!(f, "Failed to save snippets: {}", msg),
            SnipkitError::EditSessionActive => {
                write!(f, "An edit session is already open")
            }
            SnipkitError::NameNotFound(name) => write!(f, "Snippet '{}' not found", name),
            SnipkitError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for SnipkitError {}

impl From<io::Error> for SnipkitError {
    fn from(err: io::Error) -> Self {
        SnipkitError::Io(err)
    }
}

impl From<serde_json::Error> for SnipkitError {
    fn from(err: serde_json::Error) -> Self {
        SnipkitError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, SnipkitError>;
