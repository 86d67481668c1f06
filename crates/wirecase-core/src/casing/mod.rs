//! Bidirectional key casing for payloads crossing the API boundary
//!
//! The remote service speaks `snake_case` keys while client models use
//! `camelCase`. This module converts between the two, deeply, without touching
//! values.
//!
//! # Module Organization
//!
//! - [`keys`] - Single-key converters
//! - [`value`] - The [`Value`] payload model, including instants
//! - [`transform`] - The deep transform shared by both directions
//! - [`collisions`] - Reports of keys the transform would overwrite
//!
//! # Examples
//!
//! ```
//! use wirecase_core::casing::{to_client_model, to_wire_model, Value};
//! use serde_json::json;
//!
//! let wire = Value::from(json!({
//!     "user_name": "John",
//!     "address": { "zip_code": "12345" }
//! }));
//!
//! let client = to_client_model(&wire);
//! assert_eq!(
//!     client.into_json(),
//!     json!({ "userName": "John", "address": { "zipCode": "12345" } })
//! );
//!
//! let back = to_wire_model(&to_client_model(&wire));
//! assert_eq!(back, wire);
//! ```
//!
//! Copyright (c) 2025 Wirecase Team
//! Licensed under the Apache-2.0 license

pub mod collisions;
pub mod keys;
pub mod transform;
pub mod value;


pub use collisions::{find_collisions, KeyCollision};
pub use keys::{is_simple_wire_key, key_to_client, key_to_wire};
pub use transform::{
    to_client_json, to_client_model, to_wire_json, to_wire_model, CaseDirection, CaseTransformer,
};
pub use value::{Record, Value};
