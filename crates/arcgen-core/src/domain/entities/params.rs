//! `GenerationParams`: the record threaded from the builder to the writer.
//!
//! Params are assembled in two phases. The builder fixes everything that
//! follows from the target directory, the name and the selected features.
//! Answers that need another prompt (route text, style tier) are applied
//! afterwards through [`GenerationParams::with_route_input`] and
//! [`GenerationParams::with_style_tier`], which refuse to materialize a value
//! whose feature was not selected.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    detection::normalize_path,
    error::DomainError,
    naming,
    value_objects::{Feature, NATIVE_STYLE_TYPE, ProjectVariant, StyleTier},
};

/// State of the route feature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteSetting {
    /// Not selected.
    #[default]
    Off,
    /// Selected; waiting for the route text.
    Prompt,
    /// Selected and formatted for the template.
    Resolved(String),
}

impl RouteSetting {
    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Off)
    }

    pub fn resolved(&self) -> Option<&str> {
        match self {
            Self::Resolved(route) => Some(route),
            _ => None,
        }
    }
}

/// Where generated files go relative to the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputPlacement {
    /// A new `<target>/<PascalName>` directory.
    #[default]
    NewDirectory,
    /// The target directory itself.
    InPlace,
}

/// Fully-resolved generation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    dir: PathBuf,
    name: String,
    raw_name: String,
    workspace: PathBuf,
    variant: ProjectVariant,
    index: bool,
    hooks: bool,
    style: bool,
    domain: bool,
    route: RouteSetting,
    style_type: Option<String>,
    class_name: Option<String>,
}

impl GenerationParams {
    pub fn builder(
        variant: ProjectVariant,
        target_dir: impl Into<PathBuf>,
        workspace: impl Into<PathBuf>,
    ) -> GenerationParamsBuilder {
        GenerationParamsBuilder::new(variant, target_dir.into(), workspace.into())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
    pub const fn variant(&self) -> ProjectVariant {
        self.variant
    }
    pub const fn index(&self) -> bool {
        self.index
    }
    pub const fn hooks(&self) -> bool {
        self.hooks
    }
    pub const fn style(&self) -> bool {
        self.style
    }
    pub const fn domain(&self) -> bool {
        self.domain
    }
    pub fn route(&self) -> &RouteSetting {
        &self.route
    }
    pub fn style_type(&self) -> Option<&str> {
        self.style_type.as_deref()
    }
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }
    pub fn is_reactium_web(&self) -> bool {
        self.variant == ProjectVariant::ReactiumWeb
    }
    pub fn is_reactium_native(&self) -> bool {
        self.variant.is_native()
    }

    /// Whether a route prompt is still outstanding.
    pub fn needs_route(&self) -> bool {
        self.route == RouteSetting::Prompt
    }

    /// Whether a style tier prompt is still outstanding.
    pub fn needs_style_tier(&self) -> bool {
        self.style && self.style_type.is_none()
    }

    /// Apply the user's route text.
    ///
    /// Native projects take a single slug; web projects take a list of paths
    /// rendered as an array literal.
    ///
    /// # Errors
    ///
    /// - [`DomainError::FeatureNotSelected`] if the route feature is off
    /// - [`DomainError::EmptyRoute`] if the input holds no usable path
    pub fn with_route_input(mut self, input: &str) -> Result<Self, DomainError> {
        if !self.route.is_selected() {
            return Err(DomainError::FeatureNotSelected("route"));
        }

        let route = if self.variant.is_native() {
            naming::native_route_slug(input)
        } else if naming::route_paths(input).is_empty() {
            String::new()
        } else {
            naming::web_route_literal(input)
        };

        if route.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        self.route = RouteSetting::Resolved(route);
        Ok(self)
    }

    /// Apply the chosen stylesheet tier (web only).
    pub fn with_style_tier(mut self, tier: StyleTier) -> Result<Self, DomainError> {
        if !self.style {
            return Err(DomainError::FeatureNotSelected("style"));
        }
        if self.variant.is_native() {
            return Err(DomainError::UnsupportedForVariant {
                operation: "style tier".into(),
                variant: self.variant.to_string(),
            });
        }

        self.style_type = Some(tier.file_name().to_string());
        Ok(self)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`GenerationParams`].
///
/// `features` rejects anything the variant does not offer; `build` checks
/// the variant is generatable and derives the remaining fields.
#[derive(Debug, Clone)]
pub struct GenerationParamsBuilder {
    variant: ProjectVariant,
    target_dir: PathBuf,
    workspace: PathBuf,
    name: Option<String>,
    features: BTreeSet<Feature>,
    index: bool,
    placement: OutputPlacement,
}

impl GenerationParamsBuilder {
    fn new(variant: ProjectVariant, target_dir: PathBuf, workspace: PathBuf) -> Self {
        Self {
            variant,
            target_dir,
            workspace,
            name: None,
            features: BTreeSet::new(),
            index: false,
            placement: OutputPlacement::default(),
        }
    }

    /// Component name as typed. Blank falls back to the target's base name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Select features.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnsupportedFeature`] for a feature the variant does not
    /// offer. `domain` on a native project is accepted since it is forced on.
    pub fn features<I>(mut self, features: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Feature>,
    {
        let offered = self.variant.available_features();
        for feature in features {
            let forced = feature == Feature::Domain && self.variant.is_native();
            if !offered.contains(&feature) && !forced {
                return Err(DomainError::UnsupportedFeature {
                    feature: feature.to_string(),
                    variant: self.variant.to_string(),
                });
            }
            self.features.insert(feature);
        }
        Ok(self)
    }

    /// Generate the `index.js` barrel.
    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    pub fn placement(mut self, placement: OutputPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn build(self) -> Result<GenerationParams, DomainError> {
        if !self.variant.is_reactium() {
            return Err(DomainError::NotGeneratable {
                variant: self.variant.to_string(),
            });
        }

        let target_dir = normalize_path(&self.target_dir);
        let raw_name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => target_dir
                .file_name()
                .map(|base| base.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        let name = naming::to_pascal_case(&raw_name);
        if name.is_empty() {
            return Err(DomainError::InvalidName {
                name: raw_name,
                reason: "must contain at least one letter or digit".into(),
            });
        }

        let dir = match self.placement {
            OutputPlacement::NewDirectory => target_dir.join(&name),
            OutputPlacement::InPlace => target_dir,
        };

        let native = self.variant.is_native();
        let selected = |feature| self.features.contains(&feature);
        let style = selected(Feature::Style);

        Ok(GenerationParams {
            dir,
            workspace: normalize_path(&self.workspace),
            variant: self.variant,
            index: self.index,
            hooks: selected(Feature::Hooks),
            style,
            domain: native || selected(Feature::Domain),
            route: if selected(Feature::Route) {
                RouteSetting::Prompt
            } else {
                RouteSetting::Off
            },
            style_type: (native && style).then(|| NATIVE_STYLE_TYPE.to_string()),
            class_name: (!native && style).then(|| naming::slugify(&raw_name)),
            name,
            raw_name,
        })
    }
}
