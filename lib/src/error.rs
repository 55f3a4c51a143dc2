use std::path::PathBuf;

/// Custom error type for the bmtree library
///
/// Read and write failures carry the path involved.
#[derive(Debug, thiserror::Error)]
pub enum BmtreeError {
    /// Source document could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output artifact could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors not tied to a specific input or output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using BmtreeError
pub type Result<T> = std::result::Result<T, BmtreeError>;

impl From<String> for BmtreeError {
    fn from(s: String) -> Self {
        BmtreeError::Other(s)
    }
}

impl From<&str> for BmtreeError {
    fn from(s: &str) -> Self {
        BmtreeError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for BmtreeError {
    fn from(err: serde_yaml::Error) -> Self {
        BmtreeError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for BmtreeError {
    fn from(err: serde_json::Error) -> Self {
        BmtreeError::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_names_path() {
        let err = BmtreeError::Read {
            path: PathBuf::from("imports/bookmarks.html"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("imports/bookmarks.html"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_from_str() {
        let err: BmtreeError = "boom".into();
        assert!(matches!(err, BmtreeError::Other(ref s) if s == "boom"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: BmtreeError = json_err.into();
        assert!(matches!(err, BmtreeError::Json(_)));
    }
}
