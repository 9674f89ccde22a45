//! When steps for pull-request description gate scenarios.

use std::sync::Arc;

use super::world::{GateWorld, run_async};
use eyre::WrapErr;
use prgate::lint::{
    adapters::StaticDescriptionSource,
    config::{CliOverrides, GateConfig},
    services::{Linter, PullRequestCheck},
};
use rstest_bdd_macros::when;

#[when("the description is checked")]
fn check_description(world: &mut GateWorld) -> Result<(), eyre::Report> {
    let mut config = GateConfig::default();
    config.apply_cli_overrides(CliOverrides {
        max_header_length: world.max_header_length,
    });
    let rule_set = config.into_rule_set().wrap_err("resolve rule set")?;
    let linter = Linter::new(rule_set).wrap_err("build linter")?;

    let source = world
        .description
        .clone()
        .map_or_else(StaticDescriptionSource::missing, StaticDescriptionSource::new);
    let check = PullRequestCheck::new(Arc::new(source), linter);
    world.last_run = Some(run_async(check.run()));
    Ok(())
}
