//! Key command handler

use crate::cli::{KeyArgs, OutputFormat};
use crate::error::Result;
use crate::output::OutputWriter;
use serde::Serialize;
use wirecase_core::CaseDirection;

/// A single converted key
#[derive(Debug, Serialize, PartialEq)]
pub struct KeyConversion {
    pub input: String,
    pub output: String,
}

/// Convert keys in the requested direction, preserving argument order
pub fn convert_keys(keys: &[String], direction: CaseDirection) -> Vec<KeyConversion> {
    keys.iter()
        .map(|key| KeyConversion {
            input: key.clone(),
            output: direction.convert_key(key),
        })
        .collect()
}

/// Handle the key command
pub fn handle_key(args: KeyArgs, output: &mut OutputWriter) -> Result<()> {
    let conversions = convert_keys(&args.keys, args.to.into());

    if output.format() == OutputFormat::Human {
        for conversion in &conversions {
            output.writeln(&format!("{} -> {}", conversion.input, conversion.output))?;
        }
        Ok(())
    } else {
        output.data(&conversions)
    }
}
