//! Payload data model shared by both transform directions
//!
//! [`Value`] mirrors `serde_json::Value` with one extra variant,
//! [`Value::Instant`], for points in time held by client code. Instants have a
//! canonical textual wire form (see [`Value::instant_to_wire`]); they are never
//! produced by parsing, only by callers that construct them explicitly.
//!
//! Copyright (c) 2025 Wirecase Team
//! Licensed under the Apache-2.0 license

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::collections::BTreeMap;

/// A structured record: keys mapped to values, iterated in ascending key order
pub type Record = BTreeMap<String, Value>;

/// A JSON-like payload value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`, also used for an absent body
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A point in time with a canonical textual wire representation
    Instant(DateTime<Utc>),
    Array(Vec<Value>),
    Object(Record),
}

impl Value {
    /// Construct an instant value
    pub fn instant(at: DateTime<Utc>) -> Self {
        Value::Instant(at)
    }

    /// Canonical wire text of an instant, e.g. `2024-01-01T00:00:00.000Z`
    ///
    /// Precision is cut to milliseconds. Years outside `0..=9999` use the
    /// expanded six-digit signed form (`+010000-01-01T00:00:00.000Z`,
    /// `-000001-01-01T00:00:00.000Z`).
    pub fn instant_to_wire(at: &DateTime<Utc>) -> String {
        let year = at.year();
        if (0..=9999).contains(&year) {
            return at.to_rfc3339_opts(SecondsFormat::Millis, true);
        }

        let sign = if year < 0 { '-' } else { '+' };
        format!(
            "{}{:06}-{}",
            sign,
            year.unsigned_abs(),
            at.format("%m-%dT%H:%M:%S%.3fZ")
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a field of a record; `None` for missing keys and non-records
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|record| record.get(key))
    }

    /// Whether any instant occurs anywhere in this value
    pub fn contains_instant(&self) -> bool {
        match self {
            Value::Instant(_) => true,
            Value::Array(items) => items.iter().any(Value::contains_instant),
            Value::Object(record) => record.values().any(Value::contains_instant),
            _ => false,
        }
    }

    /// Convert into plain JSON, rendering instants as their wire text
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Instant(at) => serde_json::Value::String(Value::instant_to_wire(&at)),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Value::into_json).collect())
            }
            Value::Object(record) => serde_json::Value::Object(
                record
                    .into_iter()
                    .map(|(key, value)| (key, value.into_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        value.into_json()
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(at: DateTime<Utc>) -> Self {
        Value::Instant(at)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Instant(at) => serializer.serialize_str(&Value::instant_to_wire(at)),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(record) => record.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_instant_wire_text() {
        assert_eq!(Value::instant_to_wire(&new_year()), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_instant_wire_text_expanded_years() {
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Value::instant_to_wire(&far), "+010000-01-01T00:00:00.000Z");

        let before_epoch = Utc.with_ymd_and_hms(-1, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Value::instant_to_wire(&before_epoch), "-000001-01-01T00:00:00.000Z");

        let last_plain = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(Value::instant_to_wire(&last_plain), "9999-12-31T23:59:59.000Z");

        let year_zero = Utc.with_ymd_and_hms(0, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(Value::instant_to_wire(&year_zero), "0000-06-01T00:00:00.000Z");
    }

    #[test]
    fn test_from_json_and_back() {
        let json = json!({"a": [1, "two", null, true], "b": {"c": 1.5}});
        let value = Value::from(json.clone());
        assert!(value.get("a").and_then(Value::as_array).is_some());
        assert_eq!(value.into_json(), json);
    }

    #[test]
    fn test_into_json_renders_instants() {
        let mut record = Record::new();
        record.insert("createdAt".to_string(), Value::instant(new_year()));
        let json = Value::Object(record).into_json();
        assert_eq!(json, json!({"createdAt": "2024-01-01T00:00:00.000Z"}));
    }

    #[test]
    fn test_serialize_matches_into_json() {
        let value = Value::Array(vec![Value::from(new_year()), Value::from(3_i64), Value::Null]);
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"["2024-01-01T00:00:00.000Z",3,null]"#);
    }

    #[test]
    fn test_deserialize_never_produces_instants() {
        let value: Value = serde_json::from_str(r#"{"at": "2024-01-01T00:00:00.000Z"}"#).unwrap();
        assert!(!value.contains_instant());
        assert_eq!(value.get("at").and_then(Value::as_str), Some("2024-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_contains_instant_is_deep() {
        let value = Value::Array(vec![Value::Array(vec![Value::from(new_year())])]);
        assert!(value.contains_instant());
        assert!(!Value::from("2024-01-01").contains_instant());
    }
}
