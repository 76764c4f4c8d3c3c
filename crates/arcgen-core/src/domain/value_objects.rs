//! Domain value objects: ProjectVariant, Feature, StyleTier.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. Variant-dependent rules
//! (which features a variant offers, how routes are formatted) live next to
//! the code that applies them.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Style type used for native projects, which register styles inline.
pub const NATIVE_STYLE_TYPE: &str = "react-native";

/// Stylesheet written when no tier was chosen.
pub const DEFAULT_STYLE_FILE: &str = "_reactium-style.scss";

// ── ProjectVariant ───────────────────────────────────────────────────────────

/// Classification of the project enclosing a target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectVariant {
    ReactiumWeb,
    ReactiumNative,
    /// An Actinium (server) install. Nothing to scaffold.
    Actinium,
    None,
}

impl ProjectVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReactiumWeb => "reactium-web",
            Self::ReactiumNative => "reactium-native",
            Self::Actinium => "actinium",
            Self::None => "none",
        }
    }

    pub const fn is_reactium(self) -> bool {
        matches!(self, Self::ReactiumWeb | Self::ReactiumNative)
    }

    pub const fn is_native(self) -> bool {
        matches!(self, Self::ReactiumNative)
    }

    /// Features the user may pick for this variant, in prompt order.
    ///
    /// Native projects keep their domain inline, so `Domain` is not offered
    /// there (it is forced on instead).
    pub const fn available_features(self) -> &'static [Feature] {
        match self {
            Self::ReactiumWeb => &[Feature::Hooks, Feature::Style, Feature::Route, Feature::Domain],
            Self::ReactiumNative => &[Feature::Hooks, Feature::Style, Feature::Route],
            Self::Actinium | Self::None => &[],
        }
    }
}

impl fmt::Display for ProjectVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Feature ──────────────────────────────────────────────────────────────────

/// A selectable generation feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Hooks,
    Style,
    Route,
    /// Shown as "Zone" in prompts; writes `domain.js`.
    #[serde(alias = "zone")]
    Domain,
}

impl Feature {
    pub const ALL: [Feature; 4] = [Self::Hooks, Self::Style, Self::Route, Self::Domain];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hooks => "hooks",
            Self::Style => "style",
            Self::Route => "route",
            Self::Domain => "domain",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hooks => "Reactium hooks",
            Self::Style => "Stylesheet",
            Self::Route => "Route",
            Self::Domain => "Zone",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Hooks => "Creates the reactium-hooks.js file",
            Self::Style => "Creates the _reactium-style.scss file",
            Self::Route => "Creates the route.js file",
            Self::Domain => "Creates the domain.js file",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hooks" | "hook" => Ok(Self::Hooks),
            "style" | "styles" => Ok(Self::Style),
            "route" | "routes" => Ok(Self::Route),
            "domain" | "zone" => Ok(Self::Domain),
            other => Err(DomainError::UnknownFeature(other.to_string())),
        }
    }
}

// ── StyleTier ────────────────────────────────────────────────────────────────

/// Stylesheet category, listed in prompt order.
///
/// The order (and the priority shown next to each tier) only drives the
/// prompt; it never reaches file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTier {
    Default,
    Mixins,
    Variables,
    Base,
    Atoms,
    Molecules,
    Organisms,
    Overrides,
}

impl StyleTier {
    pub const ALL: [StyleTier; 8] = [
        Self::Default,
        Self::Mixins,
        Self::Variables,
        Self::Base,
        Self::Atoms,
        Self::Molecules,
        Self::Organisms,
        Self::Overrides,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Mixins => "mixins",
            Self::Variables => "variables",
            Self::Base => "base",
            Self::Atoms => "atoms",
            Self::Molecules => "molecules",
            Self::Organisms => "organisms",
            Self::Overrides => "overrides",
        }
    }

    /// Stylesheet file written for this tier.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Default => DEFAULT_STYLE_FILE,
            Self::Mixins => "_reactium-style-mixins.scss",
            Self::Variables => "_reactium-style-variables.scss",
            Self::Base => "_reactium-style-base.scss",
            Self::Atoms => "_reactium-style-atoms.scss",
            Self::Molecules => "_reactium-style-molecules.scss",
            Self::Organisms => "_reactium-style-organisms.scss",
            Self::Overrides => "_reactium-style-overrides.scss",
        }
    }

    /// Load priority of the tier's partial, if it has one.
    pub const fn priority(&self) -> Option<i32> {
        match self {
            Self::Default => None,
            Self::Mixins => Some(-1000),
            Self::Variables => Some(-900),
            Self::Base => Some(-800),
            Self::Atoms => Some(0),
            Self::Molecules => Some(800),
            Self::Organisms => Some(900),
            Self::Overrides => Some(1000),
        }
    }
}

impl fmt::Display for StyleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == needle || tier.file_name() == needle)
            .ok_or(DomainError::UnknownStyleTier(needle))
    }
}
