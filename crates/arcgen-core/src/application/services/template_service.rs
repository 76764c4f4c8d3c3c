//! Template Service - template root lookup and manifest resolution.
//!
//! Separated from ScaffoldService for single responsibility.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{GenerationParams, TemplateManifest, markers},
    error::ArcgenResult,
};

/// Template directory relative to the folder holding `reactium-config.js`.
pub const DEFAULT_TEMPLATE_SUBPATH: &str = ".cli/commands/reactium/component/template";

/// Service for template operations.
pub struct TemplateService {
    filesystem: Arc<dyn Filesystem>,
    subpath: PathBuf,
}

impl TemplateService {
    /// Create a new template service using the default template subpath.
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            subpath: PathBuf::from(DEFAULT_TEMPLATE_SUBPATH),
        }
    }

    /// Look for templates somewhere other than the default subpath.
    pub fn with_subpath(mut self, subpath: impl Into<PathBuf>) -> Self {
        self.subpath = subpath.into();
        self
    }

    pub fn subpath(&self) -> &Path {
        &self.subpath
    }

    /// Locate the template root for `workspace`.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::TemplateRootNotFound`] if no core config marker
    /// exists anywhere in the workspace.
    #[instrument(skip(self), fields(workspace = %workspace.display()))]
    pub fn locate_root(&self, workspace: &Path) -> ArcgenResult<PathBuf> {
        let marker = self
            .filesystem
            .find_file(workspace, markers::CORE_CONFIG)?
            .ok_or_else(|| ApplicationError::TemplateRootNotFound {
                workspace: workspace.to_path_buf(),
            })?;

        let base = marker.parent().unwrap_or(workspace);
        let root = base.join(&self.subpath);
        debug!(marker = %marker.display(), root = %root.display(), "Template root located");

        if !self.filesystem.exists(&root) {
            warn!(root = %root.display(), "Template root does not exist; entries will be skipped");
        }

        Ok(root)
    }

    /// Locate the template root and build the manifest for `params`.
    pub fn resolve(&self, params: &GenerationParams) -> ArcgenResult<TemplateManifest> {
        let root = self.locate_root(params.workspace())?;
        Ok(TemplateManifest::resolve(params, root))
    }
}
