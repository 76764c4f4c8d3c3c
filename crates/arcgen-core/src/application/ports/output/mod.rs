//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `arcgen-adapters` crate and the CLI provide implementations.

use std::path::{Path, PathBuf};

use crate::domain::TemplateContext;
use crate::error::ArcgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `arcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `arcgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a regular file. Serves as the marker probe.
    fn is_file(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ArcgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ArcgenResult<()>;

    /// Make sure a file exists, creating it empty if needed.
    /// Existing content is left alone.
    fn touch(&self, path: &Path) -> ArcgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ArcgenResult<String>;

    /// Find a file named `name` under `root`.
    ///
    /// The shallowest match wins; ties are broken by path order.
    fn find_file(&self, root: &Path, name: &str) -> ArcgenResult<Option<PathBuf>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `arcgen_adapters::renderer::HandlebarsRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Render template `source` against `context`.
    ///
    /// `name` identifies the template in error messages.
    fn render(&self, name: &str, source: &str, context: &TemplateContext) -> ArcgenResult<String>;
}

/// Titles of the questions services ask.
///
/// Adapters that answer from presets match on these.
pub mod titles {
    pub const NAME: &str = "Reactium Component: Name";
    pub const FEATURES: &str = "Reactium Component: Features";
    pub const ROUTE: &str = "Reactium Component: Route";
    pub const STYLE: &str = "Reactium Component: Stylesheet";
}

/// A free-text question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    pub title: String,
    pub placeholder: String,
    pub hint: Option<String>,
}

impl TextPrompt {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            placeholder: placeholder.into(),
            hint: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// One option in a select or multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Stable key (a feature or tier name).
    pub key: String,
    pub label: String,
    pub hint: Option<String>,
    /// Pre-selected in multi-selects, initial cursor in selects.
    pub selected: bool,
}

/// Port for collecting user input.
///
/// `Ok(None)` means the user dismissed the prompt; callers treat it as
/// cancellation.
pub trait Prompter: Send + Sync {
    fn input(&self, prompt: &TextPrompt) -> ArcgenResult<Option<String>>;

    /// Returns the index of the chosen item.
    fn select(&self, title: &str, choices: &[Choice]) -> ArcgenResult<Option<usize>>;

    /// Returns the indices of the chosen items, in list order.
    fn multi_select(&self, title: &str, choices: &[Choice]) -> ArcgenResult<Option<Vec<usize>>>;
}

/// Button labels for a yes/no confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmLabels {
    pub yes: &'static str,
    pub no: &'static str,
}

impl Default for ConfirmLabels {
    fn default() -> Self {
        Self { yes: "Yes", no: "No" }
    }
}

/// Port for yes/no questions. A dismissed confirmation answers `false`.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, message: &str, labels: ConfirmLabels) -> ArcgenResult<bool>;
}

/// Port for progress reporting.
///
/// Observational only: percentages never decrease within a run and nothing
/// the sink does feeds back into generation.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8, status: Option<&str>);
}
