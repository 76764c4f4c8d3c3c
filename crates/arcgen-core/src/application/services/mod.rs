//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a component" or "locate templates".

pub mod scaffold_service;
pub mod template_service;

pub use scaffold_service::{
    GenerationReport, ProjectInfo, ScaffoldDefaults, ScaffoldService, ScaffoldTarget,
    SkippedEntry,
};
pub use template_service::{DEFAULT_TEMPLATE_SUBPATH, TemplateService};
