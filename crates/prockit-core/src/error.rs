//! Error types for the prockit core library
//!
//! Validation failures are reported as values. `required` hands back an
//! `Option<MissingParams>`, and the `Error` enum wraps the same value for
//! callers that prefer `?` propagation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for prockit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more required request parameters were absent
    #[error(transparent)]
    MissingParams(#[from] MissingParams),

    /// A caller-supplied value could not be used
    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// How a list of required parameters is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequireMode {
    /// Every listed field must be present
    All,
    /// At least one listed field must be present
    Any,
}

impl RequireMode {
    /// Map the boolean `any` flag onto a mode
    pub fn from_any(any: bool) -> Self {
        if any {
            RequireMode::Any
        } else {
            RequireMode::All
        }
    }

    /// Separator used when listing missing names
    pub fn separator(self) -> &'static str {
        match self {
            RequireMode::All => ",",
            RequireMode::Any => "|",
        }
    }
}

impl fmt::Display for RequireMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequireMode::All => write!(f, "all"),
            RequireMode::Any => write!(f, "any"),
        }
    }
}

/// Required fields that were absent from a request
///
/// The names keep the order in which they were requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingParams {
    missing: Vec<String>,
    mode: RequireMode,
}

impl MissingParams {
    pub(crate) fn new(missing: Vec<String>, mode: RequireMode) -> Self {
        Self { missing, mode }
    }

    /// Names of the missing fields, in request order
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Mode the check ran in
    pub fn mode(&self) -> RequireMode {
        self.mode
    }

    /// Missing names joined with `,` (all mode) or `|` (any mode)
    pub fn joined(&self) -> String {
        self.missing.join(self.mode.separator())
    }

    /// Consume the error and return the missing names
    pub fn into_missing(self) -> Vec<String> {
        self.missing
    }
}

impl fmt::Display for MissingParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required params: {}", self.joined())
    }
}

impl std::error::Error for MissingParams {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_message_all_mode() {
        let err = MissingParams::new(vec!["id".into(), "key".into()], RequireMode::All);
        assert_eq!(err.to_string(), "missing required params: id,key");
    }

    #[test]
    fn test_missing_params_message_any_mode() {
        let err = MissingParams::new(vec!["id".into(), "key".into()], RequireMode::Any);
        assert_eq!(err.to_string(), "missing required params: id|key");
    }

    #[test]
    fn test_error_wraps_missing_params_transparently() {
        let err: Error = MissingParams::new(vec!["key".into()], RequireMode::All).into();
        assert_eq!(err.to_string(), "missing required params: key");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("len", "must be positive");
        assert_eq!(err.to_string(), "Invalid input: len - must be positive");
    }

    #[test]
    fn test_require_mode_from_any() {
        assert_eq!(RequireMode::from_any(false), RequireMode::All);
        assert_eq!(RequireMode::from_any(true), RequireMode::Any);
        assert_eq!(RequireMode::Any.to_string(), "any");
    }
}
