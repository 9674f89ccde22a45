//! Application services: description rendering, gate decisions, the lint
//! pipeline and the asynchronous pull-request check.

mod check;
pub mod descriptions;
mod gate;
mod linter;
mod report;

pub use check::{CheckResult, PullRequestCheck};
pub use gate::{
    ERROR_MARKER, ERRORS_FOUND_SUMMARY, FAILURE_BANNER, Gate, MISSING_DESCRIPTION_ERROR,
    MISSING_DESCRIPTION_MESSAGE, MISSING_DESCRIPTION_SUMMARY, WARNING_BANNER, WARNING_MARKER,
};
pub use linter::Linter;
pub use report::GateReport;
