//! Random hex tokens
//!
//! Bytes come from the operating system's CSPRNG, so the output is suitable
//! for nonces, session ids and similar tokens.

use rand::rngs::OsRng;
use rand::RngCore;

/// Generate `len` random lowercase hex characters
///
/// Draws `ceil(len / 2)` bytes, hex-encodes them and drops the trailing
/// character when `len` is odd. `len == 0` yields an empty string.
pub fn random_value_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len.div_ceil(2)];
    OsRng.fill_bytes(&mut bytes);

    let mut hex = hex::encode(bytes);
    hex.truncate(len);
    hex
}
