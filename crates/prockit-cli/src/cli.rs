//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use crate::config::MAX_HEX_LENGTH;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Prockit CLI - request parameter checks, flag coercion and token helpers
///
/// Runs the prockit utility routines from the shell: validate request
/// bodies, coerce flags, check emails and URIs, format timestamps and mint
/// random hex tokens.
#[derive(Parser, Debug)]
#[command(
    name = "prockit",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PROCKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a request body carries the required fields
    Required(RequiredArgs),

    /// Coerce a flag value to true or false
    IsTrue(IsTrueArgs),

    /// Check an email address
    Email(EmailArgs),

    /// Validate a web URI, prefixing http:// unless strict
    Uri(UriArgs),

    /// Generate a random lowercase hex token
    Hex(HexArgs),

    /// Render an instant in the standard date/time layouts
    Stamp(StampArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),
}

/// Arguments for the required command
#[derive(Parser, Debug)]
pub struct RequiredArgs {
    /// Request body as a JSON object, or @PATH to read it from a file
    #[arg(value_name = "DATA")]
    pub data: String,

    /// Field names that must be present
    #[arg(value_name = "FIELD", required = true)]
    pub fields: Vec<String>,

    /// Succeed when at least one field is present
    #[arg(long)]
    pub any: bool,
}

/// Arguments for the is-true command
#[derive(Parser, Debug)]
pub struct IsTrueArgs {
    /// Value to coerce; omit to test an absent value
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// Parse VALUE as a JSON literal instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the email command
#[derive(Parser, Debug)]
pub struct EmailArgs {
    /// Address to check
    #[arg(value_name = "ADDRESS")]
    pub address: String,
}

/// Arguments for the uri command
#[derive(Parser, Debug)]
pub struct UriArgs {
    /// URI or bare host name to validate
    #[arg(value_name = "URL")]
    pub url: String,

    /// Require an explicit web scheme (overrides `uri.strict` in config)
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Prefix bare host names with http:// even when `uri.strict` is set
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,
}

impl UriArgs {
    /// Resolve strict mode: the flags win, then the config default
    pub fn strict_mode(&self, config_default: bool) -> bool {
        if self.strict {
            true
        } else if self.no_strict {
            false
        } else {
            config_default
        }
    }
}

/// Arguments for the hex command
#[derive(Parser, Debug)]
pub struct HexArgs {
    /// Number of hex characters (defaults to `hex.length` in config)
    #[arg(
        value_name = "LEN",
        value_parser = clap::value_parser!(u32).range(1..=MAX_HEX_LENGTH as i64)
    )]
    pub length: Option<u32>,
}

/// Arguments for the stamp command
#[derive(Parser, Debug)]
pub struct StampArgs {
    /// RFC 3339 instant to render (defaults to now)
    #[arg(long, value_name = "INSTANT")]
    pub at: Option<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init(ConfigInitArgs),

    /// Show the effective configuration
    Show,
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file (defaults to the user config directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: OutputFormat::Human,
            no_color: false,
            command: Commands::Email(EmailArgs {
                address: "a@b.com".to_string(),
            }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_required_parsing() {
        let cli = Cli::parse_from(["prockit", "required", r#"{"id":0}"#, "id", "key", "--any"]);
        match cli.command {
            Commands::Required(args) => {
                assert_eq!(args.fields, vec!["id", "key"]);
                assert!(args.any);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_hex_length_range() {
        assert!(Cli::try_parse_from(["prockit", "hex", "0"]).is_err());
        assert!(Cli::try_parse_from(["prockit", "hex", "4097"]).is_err());
        assert!(Cli::try_parse_from(["prockit", "hex", "4096"]).is_ok());
        let cli = Cli::parse_from(["prockit", "hex", "12"]);
        match cli.command {
            Commands::Hex(args) => assert_eq!(args.length, Some(12)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn strict_mode(argv: &[&str], config_default: bool) -> bool {
        match Cli::parse_from(argv).command {
            Commands::Uri(args) => args.strict_mode(config_default),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_uri_strict_flags() {

        assert!(!strict_mode(&["prockit", "uri", "a.com"], false));
        assert!(strict_mode(&["prockit", "uri", "a.com"], true));
        assert!(strict_mode(&["prockit", "uri", "a.com", "--strict"], false));
        assert!(!strict_mode(&["prockit", "uri", "a.com", "--no-strict"], true));
        // last flag wins
        assert!(strict_mode(&["prockit", "uri", "a.com", "--no-strict", "--strict"], false));
        assert!(!strict_mode(&["prockit", "uri", "a.com", "--strict", "--no-strict"], true));
    }

    #[test]
    fn test_is_true_without_value() {
        let cli = Cli::parse_from(["prockit", "-o", "json", "is-true"]);
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Commands::IsTrue(args) => assert!(args.value.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
