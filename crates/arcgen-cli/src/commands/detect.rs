//! `arcgen detect`: show which project a directory belongs to.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use arcgen_adapters::{FixedConfirmer, HandlebarsRenderer, LocalFilesystem, NullProgress, UnattendedPrompter};
use arcgen_core::application::{ProjectInfo, ScaffoldService};

use crate::{
    cli::{DetectArgs, OutputFormat},
    commands::generate::resolve_target,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of `arcgen detect`.
#[derive(Debug, Serialize)]
struct DetectView {
    dir: PathBuf,
    variant: String,
    generatable: bool,
    workspace: PathBuf,
    template_root: Option<PathBuf>,
}

#[instrument(skip_all, fields(dir = %args.target.dir.display()))]
pub fn execute(args: DetectArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let target = resolve_target(&args.target, config)?;

    let mut service = ScaffoldService::new(
        Arc::new(LocalFilesystem::new()),
        Box::new(HandlebarsRenderer::new()),
        Box::new(UnattendedPrompter),
        Box::new(FixedConfirmer::never()),
        Box::new(NullProgress),
    );
    if let Some(subpath) = &config.templates.subpath {
        service = service.with_template_subpath(subpath);
    }

    let info = service.inspect(&target)?;
    let view = DetectView {
        dir: target.dir.clone(),
        variant: info.variant.to_string(),
        generatable: info.variant.is_reactium(),
        workspace: info.workspace.clone(),
        template_root: info.template_root.clone(),
    };

    if output.format() == OutputFormat::Json {
        output.json(&view)?;
        return Ok(());
    }
    print_human(&info, &view, output)
}

fn print_human(info: &ProjectInfo, view: &DetectView, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("{}", view.dir.display()))?;
    output.print(&format!("  Variant:   {}", view.variant))?;
    output.print(&format!("  Workspace: {}", info.workspace.display()))?;

    match &info.template_root {
        Some(root) if root.exists() => output.print(&format!("  Templates: {}", root.display()))?,
        Some(root) => output.warning(&format!("Template directory {} does not exist", root.display()))?,
        None => output.warning("No reactium-config.js found in the workspace")?,
    }

    if !view.generatable {
        output.info("arcgen only generates inside Reactium projects")?;
    }
    Ok(())
}
