//! `arcgen domain`: add a `domain.js` to an existing component.

use tracing::instrument;

use arcgen_adapters::PresetAnswers;
use arcgen_core::application::ScaffoldService;

use crate::{
    cli::DomainArgs,
    commands::generate::{Session, finish},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(dir = %args.target.dir.display()))]
pub fn execute(args: DomainArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let session = Session::open(
        &args.target,
        &args.overwrite,
        PresetAnswers::default(),
        config,
        output,
    )?;
    let report = session.run(ScaffoldService::domain)?;
    finish(&report, output)
}
