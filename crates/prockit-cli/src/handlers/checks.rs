//! Email and URI command handlers

use crate::cli::{EmailArgs, OutputFormat, UriArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use prockit_core::{is_valid_email, is_web_uri};
use serde::Serialize;
use tracing::{info, instrument};

/// Result of an email check
#[derive(Debug, Serialize)]
pub struct EmailReport {
    pub email: String,
    pub valid: bool,
}

/// Result of a web URI check
#[derive(Debug, Serialize)]
pub struct UriReport {
    pub input: String,
    pub strict: bool,
    pub uri: Option<String>,
}

/// Handle the email command
#[instrument(skip_all)]
pub fn handle_email(args: EmailArgs, output: &mut OutputWriter) -> Result<()> {
    let valid = is_valid_email(&args.address);
    info!(valid, "Checked email address");

    if output.format() != OutputFormat::Human {
        output.data(&EmailReport {
            email: args.address.clone(),
            valid,
        })?;
    }

    if valid {
        output.success(&format!("{} looks valid", args.address))
    } else {
        Err(Error::rejected("email", args.address))
    }
}

/// Handle the uri command
///
/// `--strict` and `--no-strict` win over `uri.strict` from the config file.
#[instrument(skip_all, fields(strict = args.strict_mode(config.uri.strict)))]
pub fn handle_uri(args: UriArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let strict = args.strict_mode(config.uri.strict);
    let uri = is_web_uri(Some(&args.url), strict);
    info!(valid = uri.is_some(), "Checked web URI");

    match uri {
        Some(uri) => {
            if output.format() == OutputFormat::Human {
                output.data(&uri)
            } else {
                output.data(&UriReport {
                    input: args.url,
                    strict,
                    uri: Some(uri),
                })
            }
        }
        None => {
            if output.format() != OutputFormat::Human {
                output.data(&UriReport {
                    input: args.url.clone(),
                    strict,
                    uri: None,
                })?;
            }
            Err(Error::rejected("URI", args.url))
        }
    }
}
