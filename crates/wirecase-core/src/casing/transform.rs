//! Deep key-casing transform
//!
//! One traversal serves both directions. [`CaseDirection`] picks the key
//! converter and the instant rule; everything else (record rebuilding, array
//! order, scalar pass-through) is shared.
//!
//! Copyright (c) 2025 Wirecase Team
//! Licensed under the Apache-2.0 license

use super::keys::{key_to_client, key_to_wire};
use super::value::{Record, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a key-casing transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseDirection {
    /// Wire (`snake_case`) to client (`camelCase`), applied to responses
    ToClient,
    /// Client (`camelCase`) to wire (`snake_case`), applied to requests
    ToWire,
}

impl CaseDirection {
    /// Convert a single key in this direction
    pub fn convert_key(self, key: &str) -> String {
        match self {
            CaseDirection::ToClient => key_to_client(key),
            CaseDirection::ToWire => key_to_wire(key),
        }
    }

    /// The opposite direction
    pub fn reverse(self) -> Self {
        match self {
            CaseDirection::ToClient => CaseDirection::ToWire,
            CaseDirection::ToWire => CaseDirection::ToClient,
        }
    }
}

impl fmt::Display for CaseDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseDirection::ToClient => write!(f, "client"),
            CaseDirection::ToWire => write!(f, "wire"),
        }
    }
}

/// Stateless bidirectional key-casing transformer
///
/// All methods borrow their input and return a freshly built value; the input
/// is never modified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseTransformer;

impl CaseTransformer {
    pub fn new() -> Self {
        CaseTransformer
    }

    /// Rewrite wire keys to client keys, deeply. Instants pass through.
    pub fn to_client_model(self, value: &Value) -> Value {
        transform_value(value, CaseDirection::ToClient)
    }

    /// Rewrite client keys to wire keys, deeply. Instants become wire text.
    pub fn to_wire_model(self, value: &Value) -> Value {
        transform_value(value, CaseDirection::ToWire)
    }

    /// Apply the transform for an explicit direction
    pub fn transform(self, value: &Value, direction: CaseDirection) -> Value {
        transform_value(value, direction)
    }

    /// Same as [`CaseTransformer::transform`] for plain JSON
    pub fn transform_json(
        self,
        json: &serde_json::Value,
        direction: CaseDirection,
    ) -> serde_json::Value {
        transform_json_value(json, direction)
    }
}

/// Wire to client, deep. See [`CaseTransformer::to_client_model`].
pub fn to_client_model(value: &Value) -> Value {
    transform_value(value, CaseDirection::ToClient)
}

/// Client to wire, deep. See [`CaseTransformer::to_wire_model`].
pub fn to_wire_model(value: &Value) -> Value {
    transform_value(value, CaseDirection::ToWire)
}

/// Wire to client on plain JSON
pub fn to_client_json(json: &serde_json::Value) -> serde_json::Value {
    transform_json_value(json, CaseDirection::ToClient)
}

/// Client to wire on plain JSON
pub fn to_wire_json(json: &serde_json::Value) -> serde_json::Value {
    transform_json_value(json, CaseDirection::ToWire)
}

fn transform_value(value: &Value, direction: CaseDirection) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
        Value::Instant(at) => match direction {
            CaseDirection::ToClient => Value::Instant(*at),
            CaseDirection::ToWire => Value::String(Value::instant_to_wire(at)),
        },
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| transform_value(item, direction))
                .collect(),
        ),
        Value::Object(record) => {
            let mut out = Record::new();
            for (key, item) in record {
                let converted = direction.convert_key(key);
                if out.contains_key(&converted) {
                    tracing::debug!(
                        source_key = %key,
                        target_key = %converted,
                        %direction,
                        "Key collision, later source key overwrites earlier value"
                    );
                }
                out.insert(converted, transform_value(item, direction));
            }
            Value::Object(out)
        }
    }
}

fn transform_json_value(json: &serde_json::Value, direction: CaseDirection) -> serde_json::Value {
    transform_value(&Value::from(json.clone()), direction).into_json()
}
