//! Output formatting and writing utilities
//!
//! Command reports are plain serializable structs. Machine formats
//! (JSON, YAML) serialize them as-is; the human format renders each
//! report as a short line or a small key/value block.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::trace;

/// Trait for formatting output
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => format_human(&serde_json::to_value(value)?),
        }
    }
}

/// Render a value for people
///
/// Scalars print bare. Objects print one `key: value` line per field;
/// nested values fall back to compact JSON.
pub fn format_human(value: &Value) -> Result<String> {
    match value {
        Value::Object(map) => {
            let width = map.keys().map(String::len).max().unwrap_or(0);
            let lines: Vec<String> = map
                .iter()
                .map(|(key, val)| format!("{:width$}  {}", key, scalar_text(val), width = width))
                .collect();
            Ok(lines.join("\n"))
        }
        other => Ok(scalar_text(other)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message (human format only)
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message (human format only)
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

    /// Write data in the configured format
    ///
    /// Data is the command's result, so it is written even in quiet mode.
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), format = ?self.format, "Outputting data");

        if self.format == OutputFormat::Yaml {
            // serde_yaml already ends documents with a newline
            write!(self.writer, "{}", formatted)?;
            self.writer.flush()?;
            Ok(())
        } else {
            self.writeln(&formatted)
        }
    }
}
