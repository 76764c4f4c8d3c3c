//! `arcgen component`: create a new component directory.

use tracing::instrument;

use arcgen_adapters::PresetAnswers;
use arcgen_core::application::ScaffoldService;
use arcgen_core::domain::{Feature, StyleTier};

use crate::{
    cli::ComponentArgs,
    commands::generate::{Session, finish},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(dir = %args.target.dir.display()))]
pub fn execute(args: ComponentArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let answers = PresetAnswers {
        name: args.name,
        features: args
            .features
            .map(|features| features.into_iter().map(Feature::from).collect()),
        route: args.route,
        style: args.style.map(StyleTier::from),
    };

    let session = Session::open(&args.target, &args.overwrite, answers, config, output)?;
    output.header("\u{26a1} Reactium component")?;

    let report = session.run(ScaffoldService::component)?;
    finish(&report, output)
}
