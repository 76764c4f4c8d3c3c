//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No configured workspace root contains the target.
    #[error("No workspace contains {target}")]
    WorkspaceNotFound { target: PathBuf },

    /// No Reactium marker between the target and the workspace root.
    #[error("{target} is not inside a Reactium project")]
    NotReactiumProject { target: PathBuf },

    /// The target belongs to an Actinium install.
    #[error("{target} is inside an Actinium project")]
    ActiniumProject { target: PathBuf },

    /// No `reactium-config.js` anywhere in the workspace.
    #[error("No template root found in workspace {workspace}")]
    TemplateRootNotFound { workspace: PathBuf },

    /// A template file could not be read.
    #[error("Template {path} unavailable: {reason}")]
    TemplateMissing { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Template {template} failed to render: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A prompt could not be shown.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The user dismissed a prompt or gave an empty answer.
    #[error("Cancelled")]
    Cancelled,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkspaceNotFound { target } => vec![
                format!("{} is outside every configured workspace", target.display()),
                "Pass --workspace <DIR> or add the root to `workspaces` in the config".into(),
            ],
            Self::NotReactiumProject { .. } => vec![
                "Run the command from inside a Reactium project".into(),
                "A Reactium project has reactium-config.js at its root".into(),
            ],
            Self::ActiniumProject { .. } => vec![
                "Actinium projects have nothing to scaffold here".into(),
                "Point arcgen at a Reactium project directory instead".into(),
            ],
            Self::TemplateRootNotFound { .. } => vec![
                "No reactium-config.js was found in the workspace".into(),
                "Check the --workspace value or install Reactium first".into(),
            ],
            Self::TemplateMissing { path, .. } => vec![
                format!("Expected a template at {}", path.display()),
                "Restore the file or set `templates.subpath` in the config".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Pass the answers as flags instead (see --help)".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceNotFound { .. }
            | Self::NotReactiumProject { .. }
            | Self::ActiniumProject { .. }
            | Self::TemplateRootNotFound { .. } => ErrorCategory::Configuration,
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }
}
