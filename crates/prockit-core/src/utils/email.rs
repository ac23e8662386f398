//! Email address heuristic
//!
//! Syntactic check only: local part, `@`, domain, and a 2 to 4 letter
//! top-level domain. Inputs are matched as given, without trimming or case
//! folding.

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,4}$")
            .expect("email pattern is a valid regex")
    })
}

/// Check whether `email` looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}
