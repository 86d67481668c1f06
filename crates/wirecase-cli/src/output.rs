//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) along with progress
//! indicators for batch conversions.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::handlers::check::CheckReport;
use crate::logging::redaction;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a payload check report
    fn format_check_report(&self, report: &CheckReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty | OutputFormat::Human => {
                Ok(serde_json::to_string_pretty(value)?)
            }
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }

    fn format_check_report(&self, report: &CheckReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_check_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: progress && !quiet && io::stderr().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(format: OutputFormat, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color: false,
            show_progress: false,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let mut value_json = serde_json::to_value(value)?;
        redaction::redact_json_value(&mut value_json);
        trace!(
            "Outputting data: {}",
            serde_json::to_string(&value_json).unwrap_or_else(|_| "[failed to serialize]".to_string())
        );

        let formatted = self.format.format(value)?;
        if formatted.ends_with('\n') {
            self.write(&formatted)
        } else {
            self.writeln(&formatted)
        }
    }

    /// Write a check report with specialized formatting
    pub fn check_report(&mut self, report: &CheckReport) -> Result<()> {
        let formatted = self.format.format_check_report(report)?;
        self.writeln(formatted.trim_end())
    }

    /// Create a progress bar for batch operations
    pub fn progress_bar(&self, length: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(length);
        pb.set_style(default_progress_style());
        pb.set_message(message.to_string());
        Some(pb)
    }
}

/// Default progress bar style
pub fn default_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

fn format_check_report_human(report: &CheckReport) -> String {
    let mut lines = vec![format!(
        "Checked {} for conversion to {} notation",
        report.source, report.direction
    )];

    if report.collisions.is_empty() {
        lines.push("✓ No key collisions".to_string());
    } else {
        lines.push(format!("✗ {} key collision(s):", report.collisions.len()));
        for collision in &report.collisions {
            let at = if collision.path.is_empty() { "/" } else { &collision.path };
            lines.push(format!(
                "  {} -> '{}' from [{}], '{}' wins",
                at,
                collision.target_key,
                collision.source_keys.join(", "),
                collision.kept
            ));
        }
    }

    if report.non_simple_keys.is_empty() {
        lines.push("✓ All wire keys are simple".to_string());
    } else {
        lines.push(format!(
            "• {} wire key(s) outside the simple subset: {}",
            report.non_simple_keys.len(),
            report.non_simple_keys.join(", ")
        ));
    }

    lines.push(if report.round_trip_safe {
        format!("✓ Survives conversion to {} notation and back", report.direction)
    } else {
        format!("✗ Changes on conversion to {} notation and back", report.direction)
    });

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use wirecase_core::{CaseDirection, KeyCollision};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn sample_report() -> CheckReport {
        CheckReport {
            source: "page.json".to_string(),
            direction: CaseDirection::ToClient,
            collisions: vec![KeyCollision {
                path: String::new(),
                target_key: "userName".to_string(),
                source_keys: vec!["userName".to_string(), "user_name".to_string()],
                kept: "user_name".to_string(),
            }],
            non_simple_keys: vec!["userName".to_string()],
            round_trip_safe: false,
        }
    }

    #[test]
    fn test_human_check_report() {
        let text = format_check_report_human(&sample_report());
        assert!(text.contains("1 key collision(s)"));
        assert!(text.contains("/ -> 'userName' from [userName, user_name], 'user_name' wins"));
        assert!(text.contains("Changes on conversion to client notation and back"));
    }

    #[test]
    fn test_json_check_report() {
        let text = OutputFormat::Json.format_check_report(&sample_report()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["direction"], "to_client");
        assert_eq!(parsed["round_trip_safe"], false);
    }

    #[test]
    fn test_quiet_suppresses_info() {
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(OutputFormat::Human, true, Box::new(buffer.clone()));

        output.info("hidden").unwrap();
        output.data(&serde_json::json!({"a": 1})).unwrap();

        assert_eq!(buffer.contents(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_machine_format_skips_messages() {
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(OutputFormat::Json, false, Box::new(buffer.clone()));

        output.success("done").unwrap();
        output.warning("careful").unwrap();
        output.data(&serde_json::json!([1, 2])).unwrap();

        assert_eq!(buffer.contents(), "[1,2]\n");
    }
}
