//! Given steps for pull-request description gate scenarios.

use super::world::GateWorld;
use rstest_bdd_macros::given;

#[given(r#"a pull request description with header "{header}""#)]
fn description_with_header(world: &mut GateWorld, header: String) {
    world.description = Some(header);
}

#[given(r#"the description has body "{body}""#)]
fn description_has_body(world: &mut GateWorld, body: String) -> Result<(), eyre::Report> {
    let description = world
        .description
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing header in scenario world"))?;
    description.push_str("\n\n");
    description.push_str(&body);
    Ok(())
}

#[given(r#"the description has body "{body}" without a blank line"#)]
fn description_has_adjacent_body(world: &mut GateWorld, body: String) -> Result<(), eyre::Report> {
    let description = world
        .description
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing header in scenario world"))?;
    description.push('\n');
    description.push_str(&body);
    Ok(())
}

#[given("an empty pull request description")]
fn description_empty(world: &mut GateWorld) {
    world.description = Some(String::new());
}

#[given("a pull request without a description")]
fn description_missing(world: &mut GateWorld) {
    world.description = None;
}

#[given("the header length limit is {limit:usize}")]
fn header_length_limit(world: &mut GateWorld, limit: usize) {
    world.max_header_length = Some(limit);
}
