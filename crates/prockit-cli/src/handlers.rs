//! Command handlers for CLI subcommands
//!
//! Each handler turns parsed arguments into a call to `prockit-core` and
//! writes a serializable report through the `OutputWriter`.

mod checks;
mod config;
mod flags;
mod params;
mod tokens;

pub use checks::{handle_email, handle_uri};
pub use config::handle_config;
pub use flags::handle_is_true;
pub use params::handle_required;
pub use tokens::{handle_hex, handle_stamp};
