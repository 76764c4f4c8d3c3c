//! `arcgen init`: create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default arcgen configuration file.
pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    let config_path = if args.local {
        std::env::current_dir()
            .with_cli_context(|| "reading the current directory")?
            .join(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    write_default(config_path.clone(), args.force)?;
    output.success(&format!("Configuration created at {}", config_path.display()))?;
    output.info("Edit it directly or use 'arcgen config set <key> <value>'")?;
    Ok(())
}

fn write_default(path: PathBuf, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists { path });
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn writes_a_loadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default(path.clone(), false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[defaults]"));
        assert!(AppConfig::load(Some(&path)).is_ok());
    }

    #[test]
    fn refuses_to_replace_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "workspaces = []\n").unwrap();

        assert!(matches!(
            write_default(path.clone(), false),
            Err(CliError::ConfigExists { .. })
        ));
        write_default(path.clone(), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[output]"));
    }
}
