//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigInitArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use tracing::info;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show => output.data(config),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?,
    };

    if path.exists() && !args.force {
        return Err(Error::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save(&path)?;
    info!(path = %path.display(), "Wrote default configuration");
    output.success(&format!("Created {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::TempDir;

    fn sink() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prockit.yaml");
        let mut out = sink();

        let init = |force| ConfigInitArgs {
            path: Some(path.clone()),
            force,
        };

        handle_config_init(init(false), &mut out).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());

        let err = handle_config_init(init(false), &mut out).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        assert!(handle_config_init(init(true), &mut out).is_ok());
    }
}
