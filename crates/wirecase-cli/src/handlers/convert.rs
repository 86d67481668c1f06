//! Convert command handler

use super::utils::{display_name, read_payload, STDIN_PATH};
use crate::cli::{ConvertArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use wirecase_core::{find_collisions, CaseDirection, CaseTransformer, Value};

/// File name used when stdin is written into an output directory
const STDIN_FILE_NAME: &str = "stdin.json";

/// Handle the convert command
pub async fn handle_convert(
    args: ConvertArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let direction = CaseDirection::from(args.to);
    let pretty = args.pretty || config.convert.pretty;
    let transformer = CaseTransformer::new();

    // Resolve every target up front so a clash fails before anything is written
    let targets = match &args.out_dir {
        Some(dir) => {
            let targets = plan_output_paths(dir, &args.inputs)?;
            tokio::fs::create_dir_all(dir).await?;
            Some(targets)
        }
        None => None,
    };

    let progress = if args.inputs.len() > 1 {
        output.progress_bar(args.inputs.len() as u64, "Converting")
    } else {
        None
    };

    for (index, input) in args.inputs.iter().enumerate() {
        let name = display_name(input);
        let _timer = Timer::with_details("convert_file", &name);

        let payload = read_payload(input).await?;
        for collision in find_collisions(&payload, direction) {
            tracing::warn!(
                input = %name,
                path = %collision.path,
                target_key = %collision.target_key,
                kept = %collision.kept,
                "Key collision, only one value is kept"
            );
        }

        let converted = transformer.transform(&payload, direction);

        match targets.as_ref().map(|targets| &targets[index]) {
            Some(target) => {
                tokio::fs::write(target, render_json(&converted, pretty)?).await?;
                output.success(&format!("✓ {} -> {}", name, target.display()))?;
            }
            None => write_payload(output, &converted, pretty)?,
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    tracing::info!(
        files = args.inputs.len(),
        %direction,
        "Conversion finished"
    );

    Ok(())
}

/// Target file for `input` inside `dir`, keeping the input's file name
fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let file_name = if input.as_os_str() == STDIN_PATH {
        None
    } else {
        input.file_name()
    };
    dir.join(file_name.unwrap_or_else(|| STDIN_FILE_NAME.as_ref()))
}

/// Output targets for a batch, one per input, refusing two inputs on one target
fn plan_output_paths(dir: &Path, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::with_capacity(inputs.len());
    let mut targets = Vec::with_capacity(inputs.len());

    for input in inputs {
        let target = output_path(dir, input);
        if let Some(first) = claimed.insert(target.clone(), input.as_path()) {
            return Err(Error::OutputClash {
                target,
                first: display_name(first),
                second: display_name(input),
            });
        }
        targets.push(target);
    }

    Ok(targets)
}

fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let mut body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    body.push('\n');
    Ok(body)
}

fn write_payload(output: &mut OutputWriter, value: &Value, pretty: bool) -> Result<()> {
    match output.format() {
        OutputFormat::Human => output.write(&render_json(value, pretty)?),
        _ => output.data(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_path_keeps_file_name() {
        let target = output_path(Path::new("out"), Path::new("data/page_one.json"));
        assert_eq!(target, PathBuf::from("out/page_one.json"));
    }

    #[test]
    fn test_output_path_for_stdin() {
        let target = output_path(Path::new("out"), Path::new("-"));
        assert_eq!(target, PathBuf::from("out/stdin.json"));
    }

    #[test]
    fn test_plan_output_paths_distinct_names() {
        let inputs = vec![PathBuf::from("a/one.json"), PathBuf::from("b/two.json")];
        let targets = plan_output_paths(Path::new("out"), &inputs).unwrap();
        assert_eq!(
            targets,
            vec![PathBuf::from("out/one.json"), PathBuf::from("out/two.json")]
        );
    }

    #[test]
    fn test_plan_output_paths_rejects_shared_file_name() {
        let inputs = vec![PathBuf::from("a/page.json"), PathBuf::from("b/page.json")];
        match plan_output_paths(Path::new("out"), &inputs).unwrap_err() {
            Error::OutputClash { target, first, second } => {
                assert_eq!(target, PathBuf::from("out/page.json"));
                assert_eq!(first, "a/page.json");
                assert_eq!(second, "b/page.json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_plan_output_paths_rejects_repeated_stdin() {
        let inputs = vec![PathBuf::from("-"), PathBuf::from("-")];
        let err = plan_output_paths(Path::new("out"), &inputs).unwrap_err();
        assert!(matches!(err, Error::OutputClash { .. }));
    }

    #[test]
    fn test_render_json() {
        let value = Value::from(json!({"a_b": [1]}));
        assert_eq!(render_json(&value, false).unwrap(), "{\"a_b\":[1]}\n");
        assert_eq!(
            render_json(&value, true).unwrap(),
            "{\n  \"a_b\": [\n    1\n  ]\n}\n"
        );
    }
}
