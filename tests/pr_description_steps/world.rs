//! Shared world state for pull-request description gate scenarios.

use prgate::lint::{domain::LintRun, error::CheckError};
use rstest::fixture;

/// Scenario world for gate behaviour tests.
#[derive(Default)]
pub struct GateWorld {
    pub description: Option<String>,
    pub max_header_length: Option<usize>,
    pub last_run: Option<Result<LintRun, CheckError>>,
}

impl GateWorld {
    /// Returns the completed run or explains why there is none.
    pub fn run(&self) -> Result<&LintRun, eyre::Report> {
        self.last_run
            .as_ref()
            .ok_or_else(|| eyre::eyre!("the description has not been checked yet"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("check failed unexpectedly: {err}"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GateWorld {
    GateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
