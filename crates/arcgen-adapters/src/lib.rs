//! Infrastructure adapters for arcgen.
//!
//! This crate implements the ports defined in `arcgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod progress;
pub mod prompt;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use progress::{NullProgress, RecordingProgress};
pub use prompt::{FixedConfirmer, PresetAnswers, PresetPrompter, UnattendedPrompter};
pub use renderer::HandlebarsRenderer;
