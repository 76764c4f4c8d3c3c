//! `arcgen route`: add a `route.js` to an existing component.

use tracing::instrument;

use arcgen_adapters::PresetAnswers;
use arcgen_core::application::ScaffoldService;

use crate::{
    cli::RouteArgs,
    commands::generate::{Session, finish},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(dir = %args.target.dir.display()))]
pub fn execute(args: RouteArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let answers = PresetAnswers {
        route: args.route,
        ..PresetAnswers::default()
    };

    let session = Session::open(&args.target, &args.overwrite, answers, config, output)?;
    let report = session.run(ScaffoldService::route)?;
    finish(&report, output)
}
