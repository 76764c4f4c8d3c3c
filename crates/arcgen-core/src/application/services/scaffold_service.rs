//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Detect the project variant enclosing the target
//! 2. Collect answers through the prompter and build `GenerationParams`
//! 3. Resolve the template manifest
//! 4. Render and write each enabled entry
//!
//! Every prompt happens before the first write, so a dismissed prompt leaves
//! the tree untouched. The only question asked after writing starts is the
//! per-file overwrite confirmation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            Choice, ConfirmLabels, Confirmer, Filesystem, ProgressSink, Prompter,
            TemplateRenderer, TextPrompt, titles,
        },
        services::template_service::TemplateService,
    },
    domain::{
        DomainError, DomainValidator as validator, Feature, GenerationParams, ManifestEntry,
        ManifestKey, OutputPlacement, ProjectVariant, StyleTier, TemplateContext,
        TemplateManifest, detection,
        entities::manifest::outputs,
        naming,
    },
    error::ArcgenResult,
};

// ── DTOs ──────────────────────────────────────────────────────────────────────

/// Where to generate: a directory and the workspace root that contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTarget {
    pub dir: PathBuf,
    pub workspace: PathBuf,
}

impl ScaffoldTarget {
    pub fn new(dir: impl Into<PathBuf>, workspace: impl Into<PathBuf>) -> Self {
        Self {
            dir: detection::normalize_path(&dir.into()),
            workspace: detection::normalize_path(&workspace.into()),
        }
    }

    /// Pair `dir` with the first workspace root that contains it.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::WorkspaceNotFound`] when no root matches.
    pub fn locate(dir: impl Into<PathBuf>, roots: &[PathBuf]) -> ArcgenResult<Self> {
        let dir = dir.into();
        let workspace = detection::locate_workspace(&dir, roots)
            .ok_or_else(|| ApplicationError::WorkspaceNotFound {
                target: dir.clone(),
            })?
            .to_path_buf();
        Ok(Self::new(dir, workspace))
    }
}

/// Answers offered first when prompting.
///
/// Every feature starts preselected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldDefaults {
    pub features: Vec<Feature>,
    pub style: Option<StyleTier>,
}

impl Default for ScaffoldDefaults {
    fn default() -> Self {
        Self {
            features: Feature::ALL.to_vec(),
            style: None,
        }
    }
}

/// What `detect` learned about a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub variant: ProjectVariant,
    pub workspace: PathBuf,
    pub template_root: Option<PathBuf>,
}

/// An entry that could not be produced. The run continued without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub key: ManifestKey,
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a write pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub dir: PathBuf,
    /// Rendered from a template.
    pub written: Vec<PathBuf>,
    /// Created (or kept) as an empty file.
    pub touched: Vec<PathBuf>,
    /// Existing files the user chose to keep.
    pub declined: Vec<PathBuf>,
    pub failed: Vec<SkippedEntry>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn produced(&self) -> impl Iterator<Item = &PathBuf> {
        self.written.iter().chain(&self.touched)
    }
}

// ── Service ───────────────────────────────────────────────────────────────────

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Arc<dyn Filesystem>,
    templates: TemplateService,
    renderer: Box<dyn TemplateRenderer>,
    prompter: Box<dyn Prompter>,
    confirmer: Box<dyn Confirmer>,
    progress: Box<dyn ProgressSink>,
    defaults: ScaffoldDefaults,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use arcgen_core::application::{ScaffoldService, ScaffoldTarget};
    ///
    /// let service = ScaffoldService::new(
    ///     Arc::new(filesystem), // impl Filesystem
    ///     Box::new(renderer),   // impl TemplateRenderer
    ///     Box::new(prompter),   // impl Prompter
    ///     Box::new(confirmer),  // impl Confirmer
    ///     Box::new(progress),   // impl ProgressSink
    /// );
    /// let report = service.component(&ScaffoldTarget::new("./src/app", "."))?;
    /// ```
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        prompter: Box<dyn Prompter>,
        confirmer: Box<dyn Confirmer>,
        progress: Box<dyn ProgressSink>,
    ) -> Self {
        Self {
            templates: TemplateService::new(Arc::clone(&filesystem)),
            filesystem,
            renderer,
            prompter,
            confirmer,
            progress,
            defaults: ScaffoldDefaults::default(),
        }
    }

    /// Look for templates under a different subpath of the Reactium root.
    pub fn with_template_subpath(mut self, subpath: impl Into<PathBuf>) -> Self {
        self.templates = self.templates.with_subpath(subpath);
        self
    }

    pub fn with_defaults(mut self, defaults: ScaffoldDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn templates(&self) -> &TemplateService {
        &self.templates
    }

    // -------------------------------------------------------------------------
    // Detection
    // -------------------------------------------------------------------------

    /// Classify the project enclosing the target.
    #[instrument(skip(self), fields(dir = %target.dir.display()))]
    pub fn detect(&self, target: &ScaffoldTarget) -> ArcgenResult<ProjectVariant> {
        let filesystem = &self.filesystem;
        let variant = detection::detect(&target.dir, &target.workspace, |dir, name| {
            filesystem.is_file(&dir.join(name))
        })?;
        debug!(%variant, "Project variant detected");
        Ok(variant)
    }

    /// Variant plus template root, for display.
    pub fn inspect(&self, target: &ScaffoldTarget) -> ArcgenResult<ProjectInfo> {
        let variant = self.detect(target)?;
        let template_root = match self.templates.locate_root(&target.workspace) {
            Ok(root) => Some(root),
            Err(e) => {
                debug!(error = %e, "No template root");
                None
            }
        };

        Ok(ProjectInfo {
            variant,
            workspace: target.workspace.clone(),
            template_root,
        })
    }

    fn require_reactium(&self, target: &ScaffoldTarget) -> ArcgenResult<ProjectVariant> {
        match self.detect(target)? {
            ProjectVariant::Actinium => Err(ApplicationError::ActiniumProject {
                target: target.dir.clone(),
            }
            .into()),
            ProjectVariant::None => Err(ApplicationError::NotReactiumProject {
                target: target.dir.clone(),
            }
            .into()),
            variant => Ok(variant),
        }
    }

    fn reject_native(variant: ProjectVariant, operation: &str) -> ArcgenResult<()> {
        if variant.is_native() {
            return Err(DomainError::UnsupportedForVariant {
                operation: operation.to_string(),
                variant: variant.to_string(),
            }
            .into());
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Generate a new component directory under the target.
    #[instrument(skip(self), fields(dir = %target.dir.display()))]
    pub fn component(&self, target: &ScaffoldTarget) -> ArcgenResult<GenerationReport> {
        let variant = self.require_reactium(target)?;
        let name = self.ask_name()?;
        let features = self.ask_features(variant)?;

        let params = GenerationParams::builder(variant, &target.dir, &target.workspace)
            .name(name)
            .index(true)
            .features(features)?
            .build()?;

        let params = self.complete(params)?;
        self.generate(&params)
    }

    /// Write `route.js` into the target directory.
    #[instrument(skip(self), fields(dir = %target.dir.display()))]
    pub fn route(&self, target: &ScaffoldTarget) -> ArcgenResult<GenerationReport> {
        let variant = self.require_reactium(target)?;
        Self::reject_native(variant, "route")?;

        let params = GenerationParams::builder(variant, &target.dir, &target.workspace)
            .placement(OutputPlacement::InPlace)
            .features([Feature::Route])?
            .build()?;

        let params = self.complete(params)?;
        self.generate(&params)
    }

    /// Write `domain.js` into the target directory.
    #[instrument(skip(self), fields(dir = %target.dir.display()))]
    pub fn domain(&self, target: &ScaffoldTarget) -> ArcgenResult<GenerationReport> {
        let variant = self.require_reactium(target)?;

        let params = GenerationParams::builder(variant, &target.dir, &target.workspace)
            .placement(OutputPlacement::InPlace)
            .features([Feature::Domain])?
            .build()?;

        self.generate(&params)
    }

    /// Write a stylesheet into the target directory.
    ///
    /// The component name comes from an existing `domain.js` when there is
    /// one, otherwise from the directory name.
    #[instrument(skip(self), fields(dir = %target.dir.display()))]
    pub fn style(&self, target: &ScaffoldTarget) -> ArcgenResult<GenerationReport> {
        let variant = self.require_reactium(target)?;
        Self::reject_native(variant, "style")?;

        let mut builder = GenerationParams::builder(variant, &target.dir, &target.workspace)
            .placement(OutputPlacement::InPlace)
            .features([Feature::Style])?;
        if let Some(name) = self.domain_name(&target.dir) {
            builder = builder.name(name);
        }

        let params = self.complete(builder.build()?)?;
        self.generate(&params)
    }

    /// Resolve the manifest for finished params and write it.
    #[instrument(skip_all, fields(dir = %params.dir().display(), name = params.name()))]
    pub fn generate(&self, params: &GenerationParams) -> ArcgenResult<GenerationReport> {
        validator::validate_params(params)?;

        let manifest = self.templates.resolve(params)?;
        self.progress.report(25, Some("Templates resolved"));
        info!(
            root = %manifest.template_root().display(),
            entries = manifest.enabled().count(),
            "Manifest resolved"
        );

        self.write(&manifest, params)
    }

    /// Render and write every enabled manifest entry.
    ///
    /// A missing or unrenderable template skips that entry only. A failed
    /// write aborts the run.
    pub fn write(
        &self,
        manifest: &TemplateManifest,
        params: &GenerationParams,
    ) -> ArcgenResult<GenerationReport> {
        let dir = params.dir();
        self.filesystem.create_dir_all(dir)?;
        self.progress
            .report(50, Some(&format!("Created {}", dir.display())));

        let context = TemplateContext::from(params);
        let mut report = GenerationReport {
            dir: dir.to_path_buf(),
            ..GenerationReport::default()
        };

        for entry in manifest.enabled() {
            let destination = dir.join(&entry.output_file);
            self.progress
                .report(75, Some(&format!("Writing {}", entry.output_file)));

            if self.filesystem.exists(&destination) && !self.confirm_replace(entry)? {
                debug!(path = %destination.display(), "Overwrite declined");
                report.declined.push(destination);
                continue;
            }

            let Some(template) = manifest.template_path(entry) else {
                self.filesystem.touch(&destination)?;
                report.touched.push(destination);
                continue;
            };

            match self.render_entry(&template, &context) {
                Ok(content) => {
                    self.filesystem.write_file(&destination, &content)?;
                    debug!(path = %destination.display(), "File written");
                    report.written.push(destination);
                }
                Err(e) => {
                    warn!(key = %entry.key, error = %e, "Entry skipped");
                    report.failed.push(SkippedEntry {
                        key: entry.key,
                        path: template,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.progress.report(99, Some("Finishing"));
        info!(
            written = report.written.len(),
            touched = report.touched.len(),
            declined = report.declined.len(),
            failed = report.failed.len(),
            "Generation finished"
        );
        self.progress.report(100, Some("Done"));

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn confirm_replace(&self, entry: &ManifestEntry) -> ArcgenResult<bool> {
        self.confirmer.confirm(
            &format!("Replace existing '{}' file?", entry.output_file),
            ConfirmLabels::default(),
        )
    }

    fn render_entry(&self, template: &Path, context: &TemplateContext) -> ArcgenResult<String> {
        let source = self.filesystem.read_to_string(template).map_err(|e| {
            ApplicationError::TemplateMissing {
                path: template.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let name = template
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.renderer.render(&name, &source, context)
    }

    /// Name declared by an existing `domain.js`, if readable.
    fn domain_name(&self, dir: &Path) -> Option<String> {
        let path = dir.join(outputs::DOMAIN);
        if !self.filesystem.is_file(&path) {
            return None;
        }
        match self.filesystem.read_to_string(&path) {
            Ok(source) => naming::extract_domain_name(&source),
            Err(e) => {
                debug!(error = %e, path = %path.display(), "Could not read domain.js");
                None
            }
        }
    }

    /// Ask the follow-up questions the selected features need.
    fn complete(&self, mut params: GenerationParams) -> ArcgenResult<GenerationParams> {
        if params.needs_route() {
            let input = self.ask_route(params.variant())?;
            params = params.with_route_input(&input)?;
        }
        if params.needs_style_tier() {
            let tier = self.ask_style_tier()?;
            params = params.with_style_tier(tier)?;
        }
        Ok(params)
    }

    fn ask_text(&self, prompt: &TextPrompt) -> ArcgenResult<String> {
        match self.prompter.input(prompt)? {
            Some(answer) if !answer.trim().is_empty() => Ok(answer.trim().to_string()),
            _ => Err(ApplicationError::Cancelled.into()),
        }
    }

    fn ask_name(&self) -> ArcgenResult<String> {
        self.ask_text(
            &TextPrompt::new(titles::NAME, "Component name")
                .hint("String used when including via useHookComponent"),
        )
    }

    fn ask_features(&self, variant: ProjectVariant) -> ArcgenResult<Vec<Feature>> {
        let offered = variant.available_features();
        let choices: Vec<Choice> = offered
            .iter()
            .map(|feature| Choice {
                key: feature.as_str().to_string(),
                label: feature.label().to_string(),
                hint: Some(feature.description().to_string()),
                selected: self.defaults.features.contains(feature),
            })
            .collect();

        let picked = self
            .prompter
            .multi_select(titles::FEATURES, &choices)?
            .unwrap_or_default();

        let features: Vec<Feature> = picked
            .into_iter()
            .filter_map(|i| offered.get(i).copied())
            .collect();

        if features.is_empty() {
            return Err(ApplicationError::Cancelled.into());
        }
        Ok(features)
    }

    fn ask_route(&self, variant: ProjectVariant) -> ArcgenResult<String> {
        let prompt = if variant.is_native() {
            TextPrompt::new(titles::ROUTE, "screen-name").hint("Screen name")
        } else {
            TextPrompt::new(titles::ROUTE, "/route-1, /route-2, /route/with/:param")
            .hint("Relative url path")
        };
        self.ask_text(&prompt)
    }

    fn ask_style_tier(&self) -> ArcgenResult<StyleTier> {
        let preferred = self.defaults.style.unwrap_or(StyleTier::Default);
        let choices: Vec<Choice> = StyleTier::ALL
            .iter()
            .map(|tier| Choice {
                key: tier.as_str().to_string(),
                label: tier.file_name().to_string(),
                hint: tier.priority().map(|p| format!("priority {p}")),
                selected: *tier == preferred,
            })
            .collect();

        self.prompter
            .select(titles::STYLE, &choices)?
            .and_then(|i| StyleTier::ALL.get(i).copied())
            .ok_or_else(|| ApplicationError::Cancelled.into())
    }
}
