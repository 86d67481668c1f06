//! Shared utilities for command handlers

use crate::error::{Error, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;
use wirecase_core::Value;

/// Path argument that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Read a JSON payload from a file, or from stdin for `-`
pub async fn read_payload(path: &Path) -> Result<Value> {
    let content = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        tokio::fs::read_to_string(path).await?
    };

    parse_payload(path, &content)
}

/// Parse payload text, reporting which input was malformed
pub fn parse_payload(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "Payload is not valid JSON");
        Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        }
    })
}

/// Display name of an input for messages
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_payload_invalid() {
        let err = parse_payload(Path::new("bad.json"), "{").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("-")), "<stdin>");
        assert_eq!(display_name(&PathBuf::from("a.json")), "a.json");
    }

    #[tokio::test]
    async fn test_read_payload_missing_file() {
        let err = read_payload(Path::new("/nonexistent/payload.json")).await.unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_read_payload_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");
        std::fs::write(&path, r#"{"user_name": "John"}"#).unwrap();

        let value = read_payload(&path).await.unwrap();

        assert_eq!(value.get("user_name"), Some(&Value::from("John")));
    }
}
