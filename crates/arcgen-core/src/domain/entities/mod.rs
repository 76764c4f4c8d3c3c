pub mod context;
pub mod manifest;
pub mod params;

pub use crate::domain::DomainError;
pub use context::TemplateContext;
pub use manifest::{ManifestEntry, ManifestKey, TemplateManifest};
pub use params::{GenerationParams, GenerationParamsBuilder, OutputPlacement, RouteSetting};
