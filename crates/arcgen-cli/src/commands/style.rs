//! `arcgen style`: add a stylesheet to an existing component.

use tracing::instrument;

use arcgen_adapters::PresetAnswers;
use arcgen_core::application::ScaffoldService;
use arcgen_core::domain::StyleTier;

use crate::{
    cli::StyleArgs,
    commands::generate::{Session, finish},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(dir = %args.target.dir.display()))]
pub fn execute(args: StyleArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let answers = PresetAnswers {
        style: args.style.map(StyleTier::from),
        ..PresetAnswers::default()
    };

    let session = Session::open(&args.target, &args.overwrite, answers, config, output)?;
    let report = session.run(ScaffoldService::style)?;
    finish(&report, output)
}
