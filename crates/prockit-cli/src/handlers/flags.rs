//! Boolean coercion command handler

use crate::cli::IsTrueArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use prockit_core::is_true;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Result of a flag coercion
#[derive(Debug, Serialize)]
pub struct IsTrueReport {
    pub input: Option<Value>,
    pub value: bool,
}

/// Handle the is-true command
#[instrument(skip(args, output), fields(json = args.json))]
pub fn handle_is_true(args: IsTrueArgs, output: &mut OutputWriter) -> Result<()> {
    let input = match args.value {
        None => None,
        Some(raw) if args.json => Some(serde_json::from_str::<Value>(&raw)?),
        Some(raw) => Some(Value::String(raw)),
    };

    let value = is_true(input.as_ref());
    debug!(value, "Coerced flag");

    if output.format() == crate::cli::OutputFormat::Human {
        output.data(&value)
    } else {
        output.data(&IsTrueReport { input, value })
    }
}
