//! Template manifest: the ordered list of candidate output files.
//!
//! Every key is always present in the manifest (except the ones a variant
//! strips); `enabled` says whether the writer acts on it. Keeping disabled
//! entries makes the manifest easy to show in `--dry-run` style listings.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::params::GenerationParams,
    value_objects::{DEFAULT_STYLE_FILE, ProjectVariant},
};

/// Template file names inside the template root.
pub mod templates {
    pub const HOOKS: &str = "reactium-hooks.hbs";
    pub const COMPONENT: &str = "index-functional.hbs";
    pub const DOMAIN: &str = "domain.hbs";
    pub const ROUTE: &str = "route.hbs";
}

/// Output file names.
pub mod outputs {
    pub const HOOKS: &str = "reactium-hooks.js";
    pub const COMPONENT: &str = "index.js";
    pub const DOMAIN: &str = "domain.js";
    pub const ROUTE: &str = "route.js";
}

/// Manifest entry key, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKey {
    Hooks,
    Component,
    Domain,
    Route,
    Style,
}

impl ManifestKey {
    pub const ALL: [ManifestKey; 5] = [
        Self::Hooks,
        Self::Component,
        Self::Domain,
        Self::Route,
        Self::Style,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hooks => "hooks",
            Self::Component => "component",
            Self::Domain => "domain",
            Self::Route => "route",
            Self::Style => "style",
        }
    }

    /// Native projects express routes and styles inline.
    const fn applies_to(self, variant: ProjectVariant) -> bool {
        !(variant.is_native() && matches!(self, Self::Route | Self::Style))
    }
}

impl fmt::Display for ManifestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub key: ManifestKey,
    pub output_file: String,
    /// `None` means "create an empty file".
    pub template: Option<String>,
    pub enabled: bool,
}

impl ManifestEntry {
    fn for_key(key: ManifestKey, params: &GenerationParams) -> Self {
        let (output_file, template, enabled) = match key {
            ManifestKey::Hooks => (outputs::HOOKS, Some(templates::HOOKS), params.hooks()),
            ManifestKey::Component => (
                outputs::COMPONENT,
                Some(templates::COMPONENT),
                params.index(),
            ),
            ManifestKey::Domain => (outputs::DOMAIN, Some(templates::DOMAIN), params.domain()),
            ManifestKey::Route => (
                outputs::ROUTE,
                Some(templates::ROUTE),
                params.route().resolved().is_some(),
            ),
            ManifestKey::Style => (
                params.style_type().unwrap_or(DEFAULT_STYLE_FILE),
                None,
                params.style(),
            ),
        };

        Self {
            key,
            output_file: output_file.to_string(),
            template: template.map(str::to_string),
            enabled,
        }
    }
}

/// Ordered manifest bound to a template root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateManifest {
    template_root: PathBuf,
    entries: Vec<ManifestEntry>,
}

impl TemplateManifest {
    /// Build the manifest for `params`.
    ///
    /// Order is fixed: hooks, component, domain, route, style.
    pub fn resolve(params: &GenerationParams, template_root: impl Into<PathBuf>) -> Self {
        let entries = ManifestKey::ALL
            .into_iter()
            .filter(|key| key.applies_to(params.variant()))
            .map(|key| ManifestEntry::for_key(key, params))
            .collect();

        Self {
            template_root: template_root.into(),
            entries,
        }
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn enabled(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    pub fn get(&self, key: ManifestKey) -> Option<&ManifestEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Absolute path of an entry's template, if it has one.
    pub fn template_path(&self, entry: &ManifestEntry) -> Option<PathBuf> {
        entry
            .template
            .as_ref()
            .map(|name| self.template_root.join(name))
    }
}
