//! Check command handler
//!
//! Reports what converting a payload would do without writing anything:
//! which keys collide, which wire keys fall outside the simple subset, and
//! whether converting there and back reproduces the input.

use super::utils::{display_name, read_payload};
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use serde::Serialize;
use std::collections::BTreeSet;
use wirecase_core::{
    find_collisions, is_simple_wire_key, to_wire_model, CaseDirection, CaseTransformer,
    KeyCollision, Value,
};

/// Result of checking one payload
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Input the payload was read from
    pub source: String,
    /// Direction the payload was checked for
    pub direction: CaseDirection,
    /// Keys the conversion would overwrite
    pub collisions: Vec<KeyCollision>,
    /// Wire-side keys that are not simple wire keys, sorted and deduplicated
    pub non_simple_keys: Vec<String>,
    /// Whether converting and converting back reproduces the payload
    pub round_trip_safe: bool,
}

impl CheckReport {
    /// Inspect `payload` for conversion in `direction`
    pub fn build(source: impl Into<String>, payload: &Value, direction: CaseDirection) -> Self {
        let transformer = CaseTransformer::new();
        let converted = transformer.transform(payload, direction);
        let restored = transformer.transform(&converted, direction.reverse());

        // Keys as they appear on the wire: the input itself when it came from
        // the wire, otherwise what the conversion would send.
        let wire_side = match direction {
            CaseDirection::ToClient => payload.clone(),
            CaseDirection::ToWire => to_wire_model(payload),
        };
        let mut keys = BTreeSet::new();
        collect_keys(&wire_side, &mut keys);

        Self {
            source: source.into(),
            direction,
            collisions: find_collisions(payload, direction),
            non_simple_keys: keys.into_iter().filter(|k| !is_simple_wire_key(k)).collect(),
            round_trip_safe: &restored == payload,
        }
    }
}

fn collect_keys(value: &Value, keys: &mut BTreeSet<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| collect_keys(item, keys)),
        Value::Object(record) => {
            for (key, item) in record {
                keys.insert(key.clone());
                collect_keys(item, keys);
            }
        }
        _ => {}
    }
}

/// Handle the check command
pub async fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let payload = read_payload(&args.input).await?;
    let report = CheckReport::build(display_name(&args.input), &payload, args.direction.into());

    tracing::info!(
        source = %report.source,
        collisions = report.collisions.len(),
        round_trip_safe = report.round_trip_safe,
        "Payload checked"
    );

    output.check_report(&report)?;

    if (args.strict || config.check.strict) && !report.collisions.is_empty() {
        return Err(Error::CollisionsFound {
            path: args.input,
            count: report.collisions.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_wire_payload() {
        let payload = Value::from(json!({"user_name": "a", "items": [{"item_id": 1}]}));
        let report = CheckReport::build("p.json", &payload, CaseDirection::ToClient);

        assert!(report.collisions.is_empty());
        assert!(report.non_simple_keys.is_empty());
        assert!(report.round_trip_safe);
    }

    #[test]
    fn test_colliding_wire_payload() {
        let payload = Value::from(json!({"userName": "a", "user_name": "b"}));
        let report = CheckReport::build("p.json", &payload, CaseDirection::ToClient);

        assert_eq!(report.collisions.len(), 1);
        assert_eq!(report.non_simple_keys, vec!["userName"]);
        assert!(!report.round_trip_safe);
    }

    #[test]
    fn test_client_payload_with_acronym() {
        let payload = Value::from(json!({"userID": 1, "zip2Code": "x", "Id": 2}));
        let report = CheckReport::build("p.json", &payload, CaseDirection::ToWire);

        assert!(report.collisions.is_empty());
        assert_eq!(report.non_simple_keys, vec!["_id", "zip2_code"]);
        assert!(report.round_trip_safe);
    }
}
