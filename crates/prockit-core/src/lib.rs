//! Prockit Core - shared request helpers
//!
//! This crate is the aggregation point for the utility routines request
//! handlers lean on: parameter validation, flag coercion, email and URI
//! checks, date/time display and random tokens.
//!
//! # Main Components
//!
//! - **Error Handling**: `MissingParams` as a returned value plus a `thiserror` enum
//! - **Utils**: stateless functions, also re-exported at the crate root
//!
//! # Example
//!
//! ```
//! use prockit_core::{required, is_true_str, random_value_hex};
//! use serde_json::json;
//!
//! let request = json!({"id": 0, "debug": "off"});
//! assert!(required(&request, &["id"], false).is_none());
//! assert!(!is_true_str("off"));
//! assert_eq!(random_value_hex(9).len(), 9);
//! ```

pub mod error;
pub mod utils;

// Re-export main types for convenience
pub use error::{Error, MissingParams, RequireMode, Result};
pub use utils::{
    // Parameter checks
    ensure_required, is_missing, required, RequestData,

    // Coercion
    is_true, is_true_str,

    // Pattern checks
    is_valid_email, is_http_uri, is_https_uri, is_uri, is_web_uri,

    // Date/time display
    file_stamp, format_date, format_full, format_time,

    // Tokens
    random_value_hex,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
