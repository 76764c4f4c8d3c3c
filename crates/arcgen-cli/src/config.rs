//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the pieces it is handed
//! (workspace roots, defaults, template subpath).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `ARCGEN__SECTION__KEY`
//! 3. `.arcgen.toml` in the current directory
//! 4. The global config file (or the file given with `--config`)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use arcgen_core::application::ScaffoldDefaults;
use arcgen_core::domain::{Feature, StyleTier};

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".arcgen.toml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "ARCGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workspace roots searched when `--workspace` is not given.
    pub workspaces: Vec<PathBuf>,
    /// Answers used when a prompt is skipped.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Features pre-selected in the feature prompt.
    pub features: Vec<String>,
    /// Tier pre-selected in the stylesheet prompt.
    pub style: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            features: Feature::ALL.iter().map(|f| f.as_str().to_owned()).collect(),
            style: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template directory relative to the folder holding `reactium-config.js`.
    pub subpath: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then files, then environment.
    ///
    /// With `config_file` set, that file replaces the global and local files
    /// and must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let global = Self::config_path();
        Self::load_from(config_file.map(PathBuf::as_path), &global, Path::new(LOCAL_CONFIG_FILE))
    }

    fn load_from(explicit: Option<&Path>, global: &Path, local: &Path) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder
                .add_source(File::from(global).required(false))
                .add_source(File::from(local).required(false)),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("workspaces")
                    .with_list_parse_key("defaults.features")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.arcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "arcgen", "arcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Convert the `[defaults]` table into core defaults.
    pub fn scaffold_defaults(&self) -> anyhow::Result<ScaffoldDefaults> {
        let features = self
            .defaults
            .features
            .iter()
            .map(|name| {
                name.parse::<Feature>()
                    .map_err(|e| anyhow::anyhow!("defaults.features: {e}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let style = self
            .defaults
            .style
            .as_deref()
            .map(|name| {
                name.parse::<StyleTier>()
                    .map_err(|e| anyhow::anyhow!("defaults.style: {e}"))
            })
            .transpose()?;

        Ok(ScaffoldDefaults { features, style })
    }

    /// Workspace roots to search, relative entries resolved against `cwd`.
    ///
    /// Flags win over configuration; with neither, `cwd` is the only root.
    pub fn workspace_roots(&self, flags: &[PathBuf], cwd: &Path) -> Vec<PathBuf> {
        let chosen = if !flags.is_empty() {
            flags
        } else {
            self.workspaces.as_slice()
        };

        if chosen.is_empty() {
            return vec![cwd.to_path_buf()];
        }
        chosen.iter().map(|root| cwd.join(root)).collect()
    }
}
