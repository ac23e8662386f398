//! Utility routines shared across request handlers
//!
//! Everything here is a free function with no shared state:
//! - **params**: required-parameter checks with all/any semantics
//! - **coerce**: loose string-to-boolean coercion
//! - **email**: email address heuristic
//! - **uri**: web URI validation with optional scheme prefixing
//! - **datetime**: fixed date/time layouts in the local zone
//! - **random**: CSPRNG-backed hex tokens

pub mod coerce;
pub mod datetime;
pub mod email;
pub mod params;
pub mod random;
pub mod uri;

pub use coerce::{is_true, is_true_str, loose_string, FALSY_TOKENS};
pub use datetime::{file_stamp, format_date, format_full, format_time};
pub use email::is_valid_email;
pub use params::{ensure_required, is_missing, required, RequestData};
pub use random::random_value_hex;
pub use uri::{is_http_uri, is_https_uri, is_uri, is_web_uri};
