//! Logging utilities for the prockit CLI
//!
//! This module provides:
//! - Structured logging setup on top of `tracing-subscriber`
//! - Session request ids drawn from `random_value_hex`
//! - Performance timing spans
//! - Multiple output formats (compact, full, JSON)

use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing::{field, Span};
use tracing_subscriber::EnvFilter;

/// Global request ID for the current session
static REQUEST_ID: OnceLock<String> = OnceLock::new();

/// Length of the hex part of a request id
const REQUEST_ID_HEX_LEN: usize = 16;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Enable console output
    pub console: bool,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact format for production
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "compact" => Some(LogFormat::Compact),
            "full" => Some(LogFormat::Full),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            console: true,
            thread_ids: false,
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {
                config.level = "warn".to_string();
            }
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.format = LogFormat::Full;
                config.source_location = true;
                config.thread_ids = true;
            }
        }

        config
    }

    /// Apply settings from the config file
    ///
    /// A configured level only applies when no `-v` flag raised verbosity.
    pub fn merge_with_config(&mut self, config: &Config, verbosity: u8) {
        if verbosity == 0 {
            if let Some(level) = &config.logging.level {
                self.level = level.clone();
            }
        }
        if let Some(format) = config.logging.format.as_deref().and_then(LogFormat::parse) {
            self.format = format;
        }
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        // RUST_LOG takes precedence
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }

        // PROCKIT_LOG_FORMAT
        if let Ok(format) = std::env::var("PROCKIT_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Some(parsed) => self.format = parsed,
                None => tracing::warn!("Invalid log format: {}, using default", format),
            }
        }

        // PROCKIT_LOG_CONSOLE
        if let Ok(console) = std::env::var("PROCKIT_LOG_CONSOLE") {
            self.console = prockit_core::is_true_str(&console);
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config);
    let ansi = config.console && std::io::stderr().is_terminal();

    // One arm per format keeps the subscriber types apart
    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .compact()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .json()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Full => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
    }

    let request_id = generate_request_id();
    REQUEST_ID
        .set(request_id.clone())
        .map_err(|_| Error::other("Failed to set request ID"))?;

    tracing::info!(
        request_id = %request_id,
        config = ?config,
        "Logging system initialized"
    );

    Ok(())
}

/// Create environment filter based on configuration
fn create_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Generate a unique request ID for this session
pub fn generate_request_id() -> String {
    format!("req_{}", prockit_core::random_value_hex(REQUEST_ID_HEX_LEN))
}

/// Get the current request ID
pub fn current_request_id() -> Option<&'static str> {
    REQUEST_ID.get().map(|s| s.as_str())
}

/// Create a span with request ID and timing
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        request_id = current_request_id().unwrap_or("unknown"),
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::Span;

    /// A timer that automatically logs duration when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: String,
    }

    impl Timer {
        pub fn new(operation: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, None),
                operation: operation.to_string(),
            }
        }

        pub fn with_details(operation: &str, details: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, Some(details)),
                operation: operation.to_string(),
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration.as_millis() as u64,
                "Operation completed"
            );
        }
    }
}
