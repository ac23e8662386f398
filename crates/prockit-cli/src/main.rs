//! Prockit CLI - shell access to the prockit utility routines
//!
//! This is the main entry point for the prockit CLI application, providing
//! commands for checking request parameters, coercing flags, validating
//! emails and URIs, rendering timestamps and generating hex tokens.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so the file can pick the log format
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e, cli.use_color()),
    };

    // Set up colored output
    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, &config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

fn exit_with(error: &error::Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(error, use_color));

    if error.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(error.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let mut output = OutputWriter::new(cli.output, cli.use_color() && config.output.color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Required(args) => handlers::handle_required(args, &mut output),
        Commands::IsTrue(args) => handlers::handle_is_true(args, &mut output),
        Commands::Email(args) => handlers::handle_email(args, &mut output),
        Commands::Uri(args) => handlers::handle_uri(args, config, &mut output),
        Commands::Hex(args) => handlers::handle_hex(args, config, &mut output),
        Commands::Stamp(args) => handlers::handle_stamp(args, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    // Config file first, then environment overrides
    logging_config.merge_with_config(config, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
