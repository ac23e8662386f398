//! Hex token and timestamp command handlers

use crate::cli::{HexArgs, OutputFormat, StampArgs};
use crate::config::{Config, MAX_HEX_LENGTH};
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use chrono::{DateTime, FixedOffset, Local};
use prockit_core::{file_stamp, format_date, format_full, format_time, random_value_hex};
use serde::Serialize;
use tracing::{debug, instrument};

/// Instant rendered in every supported layout
#[derive(Debug, Serialize)]
pub struct StampReport {
    pub time: String,
    pub date: String,
    pub full: String,
    pub file_stamp: String,
}

impl StampReport {
    fn from_instant(instant: &DateTime<FixedOffset>) -> Self {
        Self {
            time: format_time(instant),
            date: format_date(instant),
            full: format_full(instant),
            file_stamp: file_stamp(instant),
        }
    }
}

/// Handle the hex command
#[instrument(skip_all)]
pub fn handle_hex(args: HexArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let length = match args.length {
        Some(length) => length as usize,
        None => config.hex.length,
    };
    if length == 0 {
        return Err(Error::invalid_args("token length must be at least 1"));
    }
    if length > MAX_HEX_LENGTH {
        return Err(Error::invalid_args(format!(
            "token length must be at most {}",
            MAX_HEX_LENGTH
        )));
    }

    let _timer = Timer::with_details("hex_command", &format!("length: {}", length));
    let token = random_value_hex(length);
    debug!(length, "Generated hex token");

    output.data(&token)
}

/// Handle the stamp command
#[instrument(skip_all)]
pub fn handle_stamp(args: StampArgs, output: &mut OutputWriter) -> Result<()> {
    let instant = match args.at.as_deref() {
        Some(at) => parse_instant(at)?,
        None => Local::now().fixed_offset(),
    };

    let report = StampReport::from_instant(&instant);
    if output.format() == OutputFormat::Human {
        output.data(&report.full)?;
        output.data(&report.file_stamp)
    } else {
        output.data(&report)
    }
}

/// Parse an RFC 3339 instant such as `2024-03-07T14:30:00Z`
pub fn parse_instant(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| Error::invalid_args(format!("invalid --at '{}': {}", value, e)))
}
