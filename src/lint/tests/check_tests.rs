//! Tests for the asynchronous pull-request check.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::lint::{
    adapters::StaticDescriptionSource,
    domain::GateOutcome,
    error::{CheckError, SourceError},
    ports::{DescriptionSource, SourceResult, description_source::MockDescriptionSource},
    services::{Linter, MISSING_DESCRIPTION_MESSAGE, PullRequestCheck},
};
use rstest::{fixture, rstest};

#[fixture]
fn linter() -> Linter {
    Linter::canonical().expect("canonical linter")
}

struct SlowSource {
    delay: Duration,
}

#[async_trait]
impl DescriptionSource for SlowSource {
    async fn fetch(&self) -> SourceResult<Option<String>> {
        tokio::time::sleep(self.delay).await;
        Ok(Some("fix: late".to_owned()))
    }

    fn origin(&self) -> String {
        "slow".to_owned()
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetched_description_is_linted(linter: Linter) {
    let mut source = MockDescriptionSource::new();
    source
        .expect_fetch()
        .times(1)
        .returning(|| Ok(Some("Feat: add x".to_owned())));
    source.expect_origin().returning(|| "mock".to_owned());

    let run = PullRequestCheck::new(Arc::new(source), linter)
        .run()
        .await
        .expect("check completes");

    assert_eq!(run.decision.outcome, GateOutcome::Fail);
    assert_eq!(run.report.errors.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn absent_description_fails_without_evaluation(linter: Linter) {
    let check = PullRequestCheck::new(Arc::new(StaticDescriptionSource::missing()), linter);

    let run = check.run().await.expect("check completes");

    assert_eq!(
        run.decision.messages,
        vec![MISSING_DESCRIPTION_MESSAGE.to_owned()]
    );
    assert!(run.outcomes.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn source_failure_is_propagated(linter: Linter) {
    let mut source = MockDescriptionSource::new();
    source
        .expect_fetch()
        .returning(|| Err(SourceError::payload("mock", "not a pull request event")));
    source.expect_origin().returning(|| "mock".to_owned());

    let result = PullRequestCheck::new(Arc::new(source), linter).run().await;

    assert!(matches!(
        result,
        Err(CheckError::Source(SourceError::Payload { .. }))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slow_fetch_times_out(linter: Linter) {
    let limit = Duration::from_millis(20);
    let check = PullRequestCheck::new(
        Arc::new(SlowSource {
            delay: Duration::from_secs(5),
        }),
        linter,
    )
    .with_fetch_timeout(limit);

    let result = check.run().await;

    assert!(matches!(result, Err(CheckError::FetchTimeout(elapsed)) if elapsed == limit));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_within_timeout_succeeds(linter: Linter) {
    let check = PullRequestCheck::new(
        Arc::new(SlowSource {
            delay: Duration::from_millis(1),
        }),
        linter,
    )
    .with_fetch_timeout(Duration::from_secs(5));

    let run = check.run().await.expect("fetch completes in time");

    assert!(run.decision.passed());
}
