//! Wirecase Core - Key-casing transform for JSON payloads at an API boundary
//!
//! The remote service exchanges `snake_case` keys; client models use
//! `camelCase`. This crate converts payloads between the two notations.
//!
//! # Main Components
//!
//! - **Casing**: Key converters and the deep, stateless transform
//! - **Pipeline**: Request/response codec that applies the transform around
//!   JSON (de)serialization
//! - **Error Handling**: Pipeline error types using `thiserror`
//!
//! # Example
//!
//! ```
//! use wirecase_core::{decode_response, encode_request, Result};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct User {
//!     user_name: String,
//! }
//!
//! fn example() -> Result<()> {
//!     let body = encode_request(&User { user_name: "John".into() })?;
//!     assert_eq!(body, r#"{"user_name":"John"}"#);
//!
//!     let user: User = decode_response(&body)?;
//!     assert_eq!(user.user_name, "John");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod casing;
pub mod error;
pub mod pipeline;

// Re-export main types for convenience
pub use casing::{
    find_collisions, is_simple_wire_key, key_to_client, key_to_wire, to_client_json,
    to_client_model, to_wire_json, to_wire_model, CaseDirection, CaseTransformer, KeyCollision,
    Record, Value,
};
pub use error::{Error, Result};
pub use pipeline::{
    decode_response, decode_response_value, encode_request, encode_request_value, WireCodec,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_agree() {
        assert_eq!(key_to_client("zip_code"), casing::keys::key_to_client("zip_code"));
        assert_eq!(CaseTransformer::new(), CaseTransformer);
    }
}
