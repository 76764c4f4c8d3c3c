//! Wiring shared by the generating commands.
//!
//! Builds a [`ScaffoldService`] from flags and config: local filesystem,
//! Handlebars renderer, flag presets in front of the terminal prompter,
//! an overwrite policy, and a progress bar.

use std::io::IsTerminal as _;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use arcgen_adapters::{
    FixedConfirmer, HandlebarsRenderer, LocalFilesystem, PresetAnswers, PresetPrompter,
    UnattendedPrompter,
};
use arcgen_core::application::{
    ApplicationError, Confirmer, GenerationReport, Prompter, ScaffoldService, ScaffoldTarget,
};
use arcgen_core::error::{ArcgenError, ArcgenResult};

use crate::cli::{OutputFormat, OverwriteArgs, TargetArgs};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult, IntoCli};
use crate::output::OutputManager;
use crate::terminal::BarProgress;

/// A configured service plus the directory it will work on.
pub struct Session {
    service: ScaffoldService,
    target: ScaffoldTarget,
}

impl Session {
    /// Resolve the target and build the service.
    pub fn open(
        target: &TargetArgs,
        overwrite: &OverwriteArgs,
        answers: PresetAnswers,
        config: &AppConfig,
        output: &OutputManager,
    ) -> CliResult<Self> {
        let target = resolve_target(target, config)?;
        let interactive = terminal_attached();
        debug!(
            dir = %target.dir.display(),
            workspace = %target.workspace.display(),
            interactive,
            presets = !answers.is_empty(),
            "Opening session"
        );

        let progress = if output.format() == OutputFormat::Human
            && !output.is_quiet()
            && std::io::stderr().is_terminal()
        {
            BarProgress::new()
        } else {
            BarProgress::hidden()
        };
        let bar = progress.handle();

        let prompter = PresetPrompter::new(answers, fallback_prompter(interactive, bar.clone()));
        let confirmer = overwrite_policy(overwrite, interactive, bar);

        let mut service = ScaffoldService::new(
            Arc::new(LocalFilesystem::new()),
            Box::new(HandlebarsRenderer::new()),
            Box::new(prompter),
            confirmer,
            Box::new(progress),
        )
        .with_defaults(config.scaffold_defaults()?);

        if let Some(subpath) = &config.templates.subpath {
            service = service.with_template_subpath(subpath);
        }

        Ok(Self { service, target })
    }

    /// Run one service operation against the target.
    pub fn run<F>(&self, operation: F) -> CliResult<GenerationReport>
    where
        F: FnOnce(&ScaffoldService, &ScaffoldTarget) -> ArcgenResult<GenerationReport>,
    {
        operation(&self.service, &self.target).map_err(explain)
    }
}

/// Pair the requested directory with a workspace root.
pub fn resolve_target(args: &TargetArgs, config: &AppConfig) -> CliResult<ScaffoldTarget> {
    let cwd = std::env::current_dir().with_cli_context(|| "reading the current directory")?;
    let roots = config.workspace_roots(&args.workspace, &cwd);
    let dir = cwd.join(&args.dir);
    Ok(ScaffoldTarget::locate(dir, &roots)?)
}

/// Print the report; a run with skipped entries is an error.
pub fn finish(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    output.report(report)?;

    if report.is_complete() {
        info!(
            written = report.written.len(),
            touched = report.touched.len(),
            declined = report.declined.len(),
            "Generation finished"
        );
        return Ok(());
    }

    Err(CliError::IncompleteGeneration {
        dir: report.dir.clone(),
        failed: report.failed.len(),
    })
}

fn terminal_attached() -> bool {
    cfg!(feature = "interactive") && std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

#[cfg(feature = "interactive")]
fn fallback_prompter(interactive: bool, bar: ProgressBar) -> Box<dyn Prompter> {
    if interactive {
        Box::new(crate::terminal::DialoguerPrompter::new(bar))
    } else {
        Box::new(UnattendedPrompter)
    }
}

#[cfg(not(feature = "interactive"))]
fn fallback_prompter(_interactive: bool, _bar: ProgressBar) -> Box<dyn Prompter> {
    Box::new(UnattendedPrompter)
}

fn overwrite_policy(args: &OverwriteArgs, interactive: bool, bar: ProgressBar) -> Box<dyn Confirmer> {
    if args.yes {
        return Box::new(FixedConfirmer::always());
    }
    if args.no_overwrite {
        return Box::new(FixedConfirmer::never());
    }
    ask_or_keep(interactive, bar)
}

#[cfg(feature = "interactive")]
fn ask_or_keep(interactive: bool, bar: ProgressBar) -> Box<dyn Confirmer> {
    if interactive {
        Box::new(crate::terminal::DialoguerConfirmer::new(bar))
    } else {
        warn!("No terminal attached; existing files will be kept (pass --yes to replace them)");
        Box::new(FixedConfirmer::never())
    }
}

#[cfg(not(feature = "interactive"))]
fn ask_or_keep(_interactive: bool, _bar: ProgressBar) -> Box<dyn Confirmer> {
    warn!("Prompts are not available in this build; existing files will be kept");
    Box::new(FixedConfirmer::never())
}

/// Point users at flags when a prompt was needed but cannot be shown.
fn explain(err: ArcgenError) -> CliError {
    let prompt_needed = matches!(
        err,
        ArcgenError::Application(ApplicationError::PromptFailed { .. })
    );
    if prompt_needed && !cfg!(feature = "interactive") {
        return CliError::FeatureNotAvailable {
            feature: "interactive",
        };
    }
    CliError::Core(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn overwrite(yes: bool, no_overwrite: bool) -> OverwriteArgs {
        OverwriteArgs { yes, no_overwrite }
    }

    #[test]
    fn yes_always_replaces() {
        let confirmer = overwrite_policy(&overwrite(true, false), true, ProgressBar::hidden());
        assert!(confirmer.confirm("Replace?", Default::default()).unwrap());
    }

    #[test]
    fn no_overwrite_always_keeps() {
        let confirmer = overwrite_policy(&overwrite(false, true), true, ProgressBar::hidden());
        assert!(!confirmer.confirm("Replace?", Default::default()).unwrap());
    }

    #[test]
    fn without_terminal_existing_files_are_kept() {
        let confirmer = overwrite_policy(&overwrite(false, false), false, ProgressBar::hidden());
        assert!(!confirmer.confirm("Replace?", Default::default()).unwrap());
    }

    #[test]
    fn explain_keeps_other_errors() {
        let err = explain(ApplicationError::Cancelled.into());
        assert!(err.is_cancelled());
    }

    #[test]
    fn resolve_target_rejects_dirs_outside_roots() {
        let args = TargetArgs {
            dir: PathBuf::from("/definitely/elsewhere"),
            workspace: vec![PathBuf::from("/some/workspace")],
        };
        let result = resolve_target(&args, &AppConfig::default());
        assert!(matches!(
            result,
            Err(CliError::Core(ArcgenError::Application(
                ApplicationError::WorkspaceNotFound { .. }
            )))
        ));
    }
}
