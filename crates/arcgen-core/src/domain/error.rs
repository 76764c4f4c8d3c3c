//! Domain errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can record them in reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid component name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Unknown style tier: {0}")]
    UnknownStyleTier(String),

    #[error("Feature '{feature}' is not available for {variant} projects")]
    UnsupportedFeature { feature: String, variant: String },

    #[error("'{operation}' is not supported for {variant} projects")]
    UnsupportedForVariant { operation: String, variant: String },

    #[error("No routes given")]
    EmptyRoute,

    #[error("Feature '{0}' was not selected")]
    FeatureNotSelected(&'static str),

    // ========================================================================
    // Detection Errors
    // ========================================================================
    #[error("{target} is not inside workspace {workspace}")]
    OutsideWorkspace { target: String, workspace: String },

    #[error("Cannot generate for {variant} projects")]
    NotGeneratable { variant: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use letters, digits, spaces, '-' or '_'".into(),
                "Examples: Header, main-menu, user_card".into(),
            ],
            Self::UnknownFeature(feature) => vec![
                format!("'{}' is not a feature", feature),
                "Available features: hooks, style, route, domain (alias: zone)".into(),
            ],
            Self::UnknownStyleTier(tier) => vec![
                format!("'{}' is not a style tier", tier),
                "Tiers: default, mixins, variables, base, atoms, molecules, organisms, overrides"
                    .into(),
            ],
            Self::UnsupportedFeature { variant, .. }
            | Self::UnsupportedForVariant { variant, .. } => vec![
                format!("{} projects define routes and styles inline", variant),
                "Run `arcgen component` and select the feature there instead".into(),
            ],
            Self::EmptyRoute => vec![
                "Enter one or more paths separated by commas or spaces".into(),
                "Example: /route-1, /route-2, /route/with/:param".into(),
            ],
            Self::OutsideWorkspace { workspace, .. } => vec![
                format!("Target must live under {}", workspace),
                "Pass --workspace <DIR> to choose another workspace root".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::UnknownFeature(_)
            | Self::UnknownStyleTier(_)
            | Self::EmptyRoute
            | Self::FeatureNotSelected(_)
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnsupportedFeature { .. } | Self::UnsupportedForVariant { .. } => {
                ErrorCategory::Compatibility
            }
            Self::OutsideWorkspace { .. } | Self::NotGeneratable { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Configuration,
}
