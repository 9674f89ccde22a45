//! Then steps for pull-request description gate scenarios.

use super::world::GateWorld;
use prgate::lint::{
    domain::{GateOutcome, RuleName},
    services::FAILURE_BANNER,
};
use rstest_bdd_macros::then;

fn parse_rule_list(rules: &str) -> Result<Vec<RuleName>, eyre::Report> {
    rules
        .split(',')
        .map(|name| RuleName::try_from(name.trim()).map_err(|err| eyre::eyre!("{err}")))
        .collect()
}

#[then("the gate passes")]
fn gate_passes(world: &GateWorld) -> Result<(), eyre::Report> {
    let run = world.run()?;
    if run.decision.outcome != GateOutcome::Pass {
        return Err(eyre::eyre!(
            "expected pass, got {:?}",
            run.decision.messages
        ));
    }
    Ok(())
}

#[then(r#"the gate fails with summary "{summary}""#)]
fn gate_fails_with_summary(world: &GateWorld, summary: String) -> Result<(), eyre::Report> {
    let run = world.run()?;
    if run.decision.outcome != GateOutcome::Fail {
        return Err(eyre::eyre!("expected the gate to fail"));
    }
    if run.decision.summary.as_deref() != Some(summary.as_str()) {
        return Err(eyre::eyre!(
            "expected summary {summary:?}, got {:?}",
            run.decision.summary
        ));
    }
    Ok(())
}

#[then("no messages are reported")]
fn no_messages(world: &GateWorld) -> Result<(), eyre::Report> {
    let messages = &world.run()?.decision.messages;
    if !messages.is_empty() {
        return Err(eyre::eyre!("expected no messages, got {messages:?}"));
    }
    Ok(())
}

#[then(r#"the only message is "{message}" under the failure banner"#)]
fn only_message_under_banner(world: &GateWorld, message: String) -> Result<(), eyre::Report> {
    let messages = &world.run()?.decision.messages;
    let expected = format!("{FAILURE_BANNER}\n{message}");
    if messages != &vec![expected.clone()] {
        return Err(eyre::eyre!("expected only {expected:?}, got {messages:?}"));
    }
    Ok(())
}

#[then(r#"message {position:usize} is "{message}""#)]
fn message_at(world: &GateWorld, position: usize, message: String) -> Result<(), eyre::Report> {
    let messages = &world.run()?.decision.messages;
    let actual = position
        .checked_sub(1)
        .and_then(|index| messages.get(index))
        .ok_or_else(|| eyre::eyre!("no message at position {position} in {messages:?}"))?;
    if actual != &message {
        return Err(eyre::eyre!("expected {message:?} at {position}, got {actual:?}"));
    }
    Ok(())
}

#[then("no rules were evaluated")]
fn no_rules_evaluated(world: &GateWorld) -> Result<(), eyre::Report> {
    let outcomes = &world.run()?.outcomes;
    if !outcomes.is_empty() {
        return Err(eyre::eyre!("expected no outcomes, got {outcomes:?}"));
    }
    Ok(())
}

#[then(r#"the errors are "{rules}""#)]
fn errors_are(world: &GateWorld, rules: String) -> Result<(), eyre::Report> {
    let expected = parse_rule_list(&rules)?;
    let errors = &world.run()?.report.errors;
    if errors != &expected {
        return Err(eyre::eyre!("expected errors {expected:?}, got {errors:?}"));
    }
    Ok(())
}

#[then(r#"the warnings are "{rules}""#)]
fn warnings_are(world: &GateWorld, rules: String) -> Result<(), eyre::Report> {
    let expected = parse_rule_list(&rules)?;
    let warnings = &world.run()?.report.warnings;
    if warnings != &expected {
        return Err(eyre::eyre!("expected warnings {expected:?}, got {warnings:?}"));
    }
    Ok(())
}
