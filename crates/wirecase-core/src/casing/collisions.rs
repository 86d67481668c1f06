//! Key collision diagnostics
//!
//! The transform has no collision policy: when two source keys in one record
//! convert to the same target key, the later one overwrites. This module only
//! reports where that would happen so callers can inspect a payload before
//! sending it. It never changes what the transform produces.

use super::transform::CaseDirection;
use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A record in which several source keys convert to one target key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCollision {
    /// JSON pointer of the record, `""` for the root
    pub path: String,
    /// Converted key shared by all `source_keys`
    pub target_key: String,
    /// Colliding source keys in processing order
    pub source_keys: Vec<String>,
    /// Source key whose value ends up under `target_key`
    pub kept: String,
}

/// List every key collision the transform in `direction` would resolve by overwrite
pub fn find_collisions(value: &Value, direction: CaseDirection) -> Vec<KeyCollision> {
    let mut found = Vec::new();
    walk(value, direction, &mut String::new(), &mut found);
    found
}

fn walk(value: &Value, direction: CaseDirection, path: &mut String, found: &mut Vec<KeyCollision>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let len = path.len();
                path.push('/');
                path.push_str(&index.to_string());
                walk(item, direction, path, found);
                path.truncate(len);
            }
        }
        Value::Object(record) => {
            let mut targets: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for key in record.keys() {
                targets
                    .entry(direction.convert_key(key))
                    .or_default()
                    .push(key.clone());
            }

            for (target_key, source_keys) in targets {
                if source_keys.len() > 1 {
                    let kept = source_keys.last().cloned().unwrap_or_default();
                    found.push(KeyCollision {
                        path: path.clone(),
                        target_key,
                        source_keys,
                        kept,
                    });
                }
            }

            for (key, item) in record {
                let len = path.len();
                path.push('/');
                path.push_str(&escape_pointer_segment(key));
                walk(item, direction, path, found);
                path.truncate(len);
            }
        }
        _ => {}
    }
}

/// Escape a key for use as a JSON pointer segment (RFC 6901)
fn escape_pointer_segment(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_collisions_in_clean_payload() {
        let value = Value::from(json!({"user_name": "a", "items": [{"item_id": 1}]}));
        assert!(find_collisions(&value, CaseDirection::ToClient).is_empty());
    }

    #[test]
    fn test_root_collision_reports_last_key_as_kept() {
        let value = Value::from(json!({"userName": "camel", "user_name": "snake"}));
        let collisions = find_collisions(&value, CaseDirection::ToClient);
        assert_eq!(collisions.len(), 1);

        let collision = &collisions[0];
        assert_eq!(collision.path, "");
        assert_eq!(collision.target_key, "userName");
        assert_eq!(collision.source_keys, vec!["userName", "user_name"]);
        assert_eq!(collision.kept, "user_name");
    }

    #[test]
    fn test_nested_collision_path() {
        let value = Value::from(json!({
            "rows": [{"ok": 1}, {"a/b": {"zipCode": 1, "zip_code": 2}}]
        }));
        let collisions = find_collisions(&value, CaseDirection::ToWire);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].path, "/rows/1/a~1b");
        assert_eq!(collisions[0].target_key, "zip_code");
    }

    #[test]
    fn test_collision_matches_transform_outcome() {
        let value = Value::from(json!({"userName": "camel", "user_name": "snake"}));
        let collision = &find_collisions(&value, CaseDirection::ToClient)[0];
        let transformed = super::super::transform::to_client_model(&value);
        assert_eq!(transformed.get(&collision.target_key), value.get(&collision.kept));
    }
}
