//! Required-parameter command handler

use crate::cli::{OutputFormat, RequiredArgs};
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use prockit_core::{required, RequireMode};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Result of a required-parameter check
#[derive(Debug, Serialize)]
pub struct RequiredReport {
    pub ok: bool,
    pub mode: RequireMode,
    pub missing: Vec<String>,
}

/// Handle the required command
#[instrument(skip(args, output), fields(fields = args.fields.len(), any = args.any))]
pub fn handle_required(args: RequiredArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("required_command");

    output.info(&format!("Checking {} required field(s)", args.fields.len()))?;

    let body = load_request_body(&args.data)?;
    if !body.is_object() {
        return Err(Error::invalid_args("DATA must be a JSON object"));
    }
    debug!("Request body parsed");

    let mode = RequireMode::from_any(args.any);
    match required(&body, &args.fields, args.any) {
        None if output.format() == OutputFormat::Human => {
            output.success("All required params present")
        }
        None => output.data(&RequiredReport {
            ok: true,
            mode,
            missing: Vec::new(),
        }),
        Some(missing) => {
            if output.format() != OutputFormat::Human {
                output.data(&RequiredReport {
                    ok: false,
                    mode,
                    missing: missing.missing().to_vec(),
                })?;
            }
            Err(missing.into())
        }
    }
}

/// Parse inline JSON, or read it from a file when prefixed with `@`
pub fn load_request_body(data: &str) -> Result<Value> {
    match data.strip_prefix('@') {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(Error::FileNotFound { path });
            }
            let content = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(serde_json::from_str(data)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    fn sink(format: OutputFormat) -> OutputWriter {
        OutputWriter::with_writer(format, false, false, Box::new(std::io::sink()))
    }

    fn args(data: &str, fields: &[&str], any: bool) -> RequiredArgs {
        RequiredArgs {
            data: data.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            any,
        }
    }

    #[test]
    fn test_passes_with_zero_value() {
        let mut out = sink(OutputFormat::Json);
        assert!(handle_required(args(r#"{"id": 0}"#, &["id"], false), &mut out).is_ok());
    }

    #[test]
    fn test_reports_missing_fields() {
        let mut out = sink(OutputFormat::Human);
        let err = handle_required(args(r#"{"id": 0}"#, &["id", "key"], false), &mut out)
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "missing required params: key");
    }

    #[test]
    fn test_any_mode() {
        let mut out = sink(OutputFormat::Json);
        assert!(handle_required(args(r#"{"id": 1}"#, &["id", "key"], true), &mut out).is_ok());
        let err = handle_required(args("{}", &["id", "key"], true), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "missing required params: id|key");
    }

    #[test]
    fn test_rejects_non_object_body() {
        let mut out = sink(OutputFormat::Json);
        let err = handle_required(args("[1, 2]", &["id"], false), &mut out).unwrap_err();
        assert!(err.should_show_help());
    }

    #[test]
    fn test_body_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"token": "abc"}}"#).unwrap();
        let data = format!("@{}", file.path().display());

        let body = load_request_body(&data).unwrap();
        assert_eq!(body["token"], "abc");
    }

    #[test]
    fn test_missing_body_file() {
        let err = load_request_body("@/nonexistent/body.json").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
