//! Behaviour tests for the pull-request description gate.

mod pr_description_steps;

use pr_description_steps::world::{GateWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/pr_description.feature",
    name = "Conforming description passes"
)]
#[tokio::test(flavor = "multi_thread")]
async fn conforming_description_passes(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pr_description.feature",
    name = "Missing description fails before linting"
)]
#[tokio::test(flavor = "multi_thread")]
async fn missing_description_fails(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pr_description.feature",
    name = "Capitalised type violates case and enum rules"
)]
#[tokio::test(flavor = "multi_thread")]
async fn capitalised_type_fails(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pr_description.feature",
    name = "Missing blank line before body only warns"
)]
#[tokio::test(flavor = "multi_thread")]
async fn missing_body_separator_warns(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pr_description.feature",
    name = "Configured header limit is enforced"
)]
#[tokio::test(flavor = "multi_thread")]
async fn configured_header_limit(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pr_description.feature",
    name = "Empty description is linted"
)]
#[tokio::test(flavor = "multi_thread")]
async fn empty_description_is_linted(world: GateWorld) {
    let _ = world;
}
