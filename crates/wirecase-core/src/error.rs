//! Error types for the wirecase core library
//!
//! The key-casing transform itself is total and never fails. Errors only arise
//! in the request/response pipeline, where payloads are parsed from or rendered
//! to wire JSON.

use thiserror::Error;

/// Main error type for wirecase operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The wire body parsed, but its client model does not fit the requested type
    #[error("Cannot decode response into {target}: {source}")]
    Deserialize {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_deserialize_error_names_target() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = Error::Deserialize {
            target: "u32",
            source,
        };
        assert!(err.to_string().contains("into u32"));
    }
}
