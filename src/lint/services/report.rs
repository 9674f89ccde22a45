//! Machine-readable gate report for CI consumers.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::lint::domain::{GateOutcome, LintRun, RuleName};

/// Serializable summary of one lint run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateReport {
    /// Final gate outcome.
    pub outcome: GateOutcome,
    /// Short CI status line, absent on pass.
    pub summary: Option<String>,
    /// Rendered console messages.
    pub messages: Vec<String>,
    /// Failed warning-severity rules.
    pub warnings: Vec<RuleName>,
    /// Failed error-severity rules.
    pub errors: Vec<RuleName>,
    /// When the check completed.
    pub checked_at: DateTime<Utc>,
}

impl GateReport {
    /// Builds a report from a lint run, stamped with the clock's time.
    #[must_use]
    pub fn from_run(run: &LintRun, clock: &impl Clock) -> Self {
        Self {
            outcome: run.decision.outcome,
            summary: run.decision.summary.clone(),
            messages: run.decision.messages.clone(),
            warnings: run.report.warnings.clone(),
            errors: run.report.errors.clone(),
            checked_at: clock.utc(),
        }
    }
}
