//! Request/response codec around the key-casing transform
//!
//! Outbound bodies are serialized, rewritten to wire keys and rendered as JSON.
//! Inbound bodies are parsed, rewritten to client keys and deserialized. The
//! codec knows nothing about HTTP; callers hand it bodies and get bodies back.

use crate::casing::{to_client_model, to_wire_model, Value};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Codec settings, constructed by the caller and passed where needed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireCodec {
    /// Render outbound bodies with indentation
    pub pretty: bool,
}

impl WireCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pretty-printed output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serialize a client-side payload to a wire body
    pub fn encode_request<T: Serialize + ?Sized>(&self, payload: &T) -> Result<String> {
        let value = Value::from(serde_json::to_value(payload)?);
        self.encode_request_value(&value)
    }

    /// Render a [`Value`] as a wire body, converting keys and instants
    pub fn encode_request_value(&self, payload: &Value) -> Result<String> {
        let wire = to_wire_model(payload);
        tracing::trace!(pretty = self.pretty, "Encoding request body");
        let body = if self.pretty {
            serde_json::to_string_pretty(&wire)?
        } else {
            serde_json::to_string(&wire)?
        };
        Ok(body)
    }

    /// Parse a wire body and deserialize its client model into `T`
    pub fn decode_response<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        let client = self.decode_response_value(body)?;
        serde_json::from_value(client.into_json()).map_err(|source| Error::Deserialize {
            target: std::any::type_name::<T>(),
            source,
        })
    }

    /// Parse a wire body into its client model
    ///
    /// An empty or whitespace-only body is an absent payload and yields
    /// [`Value::Null`].
    pub fn decode_response_value(&self, body: &str) -> Result<Value> {
        if body.trim().is_empty() {
            tracing::trace!("Empty response body treated as null");
            return Ok(Value::Null);
        }
        let wire: Value = serde_json::from_str(body)?;
        Ok(to_client_model(&wire))
    }
}

/// Encode with the default codec. See [`WireCodec::encode_request`].
pub fn encode_request<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    WireCodec::default().encode_request(payload)
}

/// Encode with the default codec. See [`WireCodec::encode_request_value`].
pub fn encode_request_value(payload: &Value) -> Result<String> {
    WireCodec::default().encode_request_value(payload)
}

/// Decode with the default codec. See [`WireCodec::decode_response`].
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    WireCodec::default().decode_response(body)
}

/// Decode with the default codec. See [`WireCodec::decode_response_value`].
pub fn decode_response_value(body: &str) -> Result<Value> {
    WireCodec::default().decode_response_value(body)
}
