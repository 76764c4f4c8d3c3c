//! Application layer for arcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_TEMPLATE_SUBPATH, GenerationReport, ProjectInfo, ScaffoldDefaults, ScaffoldService,
    ScaffoldTarget, SkippedEntry, TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Choice, ConfirmLabels, Confirmer, Filesystem, ProgressSink, Prompter, TemplateRenderer,
    TextPrompt,
};

pub use error::ApplicationError;
