//! `arcgen config`: read and write configuration values.

use std::path::{Path, PathBuf};

use toml::{Table, Value};

use arcgen_core::domain::{Feature, StyleTier};

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Every key `get` and `set` understand.
const KNOWN_KEYS: &[&str] = &[
    "workspaces",
    "defaults.features",
    "defaults.style",
    "templates.subpath",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<&PathBuf>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = active_path(explicit, Path::new(LOCAL_CONFIG_FILE));
            set_config_value(&path, &key, &value)?;
            output.success(&format!("{key} = {value}  ({})", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = active_path(explicit, Path::new(LOCAL_CONFIG_FILE));
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// The file `set` writes to: `--config`, else a local file if present,
/// else the global file.
fn active_path(explicit: Option<&PathBuf>, local: &Path) -> PathBuf {
    match explicit {
        Some(path) => path.clone(),
        None if local.is_file() => local.to_path_buf(),
        None => AppConfig::config_path(),
    }
}

fn ensure_known(key: &str) -> CliResult<()> {
    if KNOWN_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(CliError::UnknownConfigKey { key: key.into() })
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    ensure_known(key)?;
    let value = match key {
        "workspaces" => config
            .workspaces
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(","),
        "defaults.features" => config.defaults.features.join(","),
        "defaults.style" => config.defaults.style.clone().unwrap_or_default(),
        "templates.subpath" => config
            .templates
            .subpath
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        "output.no_color" => config.output.no_color.to_string(),
        _ => config.output.format.clone(),
    };
    Ok(value)
}

/// Parse `raw` into the TOML value stored under `key`.
fn typed_value(key: &str, raw: &str) -> CliResult<Value> {
    let invalid = |message: String| CliError::InvalidInput {
        message,
        source: None,
    };

    let list = || -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    };

    let value = match key {
        "workspaces" => Value::Array(list().into_iter().map(Value::String).collect()),
        "defaults.features" => {
            let names = list();
            for name in &names {
                name.parse::<Feature>().map_err(|e| invalid(e.to_string()))?;
            }
            Value::Array(names.into_iter().map(Value::String).collect())
        }
        "defaults.style" => {
            let tier = raw.parse::<StyleTier>().map_err(|e| invalid(e.to_string()))?;
            Value::String(tier.as_str().to_owned())
        }
        "output.no_color" => Value::Boolean(
            raw.trim()
                .parse::<bool>()
                .map_err(|_| invalid(format!("'{raw}' is not true or false")))?,
        ),
        "output.format" => match raw.trim() {
            f @ ("auto" | "human" | "plain" | "json") => Value::String(f.into()),
            other => return Err(invalid(format!("'{other}' is not auto, human, plain or json"))),
        },
        _ => Value::String(raw.to_owned()),
    };
    Ok(value)
}

/// Write one dotted key into the file at `path`, keeping everything else.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    ensure_known(key)?;
    let value = typed_value(key, raw)?;

    let mut table = if path.is_file() {
        std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?
            .parse::<Table>()
            .with_cli_context(|| format!("'{}' is not valid TOML", path.display()))?
    } else {
        Table::new()
    };

    let (sections, leaf) = match key.rsplit_once('.') {
        Some((sections, leaf)) => (Some(sections), leaf),
        None => (None, key),
    };

    let mut cursor = &mut table;
    for section in sections.into_iter().flat_map(|s| s.split('.')) {
        let entry = cursor
            .entry(section.to_owned())
            .or_insert(Value::Table(Table::new()));
        cursor = entry.as_table_mut().ok_or_else(|| CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        })?;
    }
    cursor.insert(leaf.to_owned(), value);

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_cli_context(|| format!("Failed to write '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
