//! End-to-end tests of the synchronous lint pipeline.

use crate::lint::{
    domain::{GateOutcome, RuleName},
    services::{FAILURE_BANNER, Linter, MISSING_DESCRIPTION_MESSAGE},
};
use rstest::{fixture, rstest};

#[fixture]
fn linter() -> Linter {
    Linter::canonical().expect("canonical linter")
}

fn failed_rules(linter: &Linter, raw: &str) -> Vec<RuleName> {
    linter
        .run(Some(raw))
        .expect("known rules")
        .outcomes
        .into_iter()
        .filter(|outcome| !outcome.passed)
        .map(|outcome| outcome.rule)
        .collect()
}

#[rstest]
#[case("feat(parser): support trailers\n\nParses git trailers.\n\nCloses #7")]
#[case("chore: fix y")]
#[case("docs: explain `Gate` usage")]
fn conforming_descriptions_pass(linter: Linter, #[case] raw: &str) {
    let run = linter.run(Some(raw)).expect("known rules");

    assert_eq!(run.decision.outcome, GateOutcome::Pass);
    assert!(run.report.is_clean());
    assert!(run.decision.messages.is_empty());
}

#[rstest]
fn rerunning_yields_identical_decision(linter: Linter) {
    let raw = "Feat: Add thing\nno blank line";

    let first = linter.run(Some(raw)).expect("known rules");
    let second = linter.run(Some(raw)).expect("known rules");

    assert_eq!(first, second);
}

#[rstest]
fn capitalised_type_fails_case_and_enum(linter: Linter) {
    assert_eq!(
        failed_rules(&linter, "Feat: add x"),
        vec![RuleName::TypeCase, RuleName::TypeEnum]
    );
}

#[rstest]
#[case(100, true)]
#[case(101, false)]
fn header_length_boundary(linter: Linter, #[case] length: usize, #[case] passes: bool) {
    let header = format!("feat: {}", "a".repeat(length - "feat: ".len()));
    assert_eq!(header.chars().count(), length);

    let failed = failed_rules(&linter, &header);
    assert_eq!(!failed.contains(&RuleName::HeaderMaxLength), passes);
}

#[rstest]
#[case("feat: Add Feature", false)]
#[case("feat: add feature", true)]
fn subject_case_detects_title_case(linter: Linter, #[case] raw: &str, #[case] passes: bool) {
    let failed = failed_rules(&linter, raw);
    assert_eq!(!failed.contains(&RuleName::SubjectCase), passes);
}

#[rstest]
fn empty_subject_fails(linter: Linter) {
    assert_eq!(failed_rules(&linter, "fix:"), vec![RuleName::SubjectEmpty]);
}

#[rstest]
fn missing_description_skips_rules(linter: Linter) {
    let run = linter.run(None).expect("missing input never errors");

    assert_eq!(run.decision.outcome, GateOutcome::Fail);
    assert_eq!(
        run.decision.messages,
        vec![MISSING_DESCRIPTION_MESSAGE.to_owned()]
    );
    assert!(run.outcomes.is_empty());
}

#[rstest]
#[case("")]
#[case("  \n\t\n")]
fn blank_description_is_linted(linter: Linter, #[case] raw: &str) {
    let run = linter.run(Some(raw)).expect("known rules");

    assert_eq!(run.outcomes.len(), 7);
    assert_eq!(run.report.errors, vec![RuleName::SubjectEmpty]);
    assert_eq!(run.decision.outcome, GateOutcome::Fail);
    assert_eq!(run.decision.messages.first().map(String::as_str), Some(FAILURE_BANNER));
}

#[rstest]
fn signed_off_trailer_without_separator_warns(linter: Linter) {
    let run = linter
        .run(Some("fix: a\n\nexplain the change\nSigned-off-by: Jo <jo@example.com>"))
        .expect("known rules");

    assert_eq!(run.decision.outcome, GateOutcome::Pass);
    assert_eq!(run.report.warnings, vec![RuleName::FooterLeadingBlank]);
}

#[rstest]
fn violations_follow_rule_set_order(linter: Linter) {
    let run = linter
        .run(Some("Feat: Add x\nbody text\nCloses #1"))
        .expect("known rules");

    assert_eq!(
        run.report.warnings,
        vec![RuleName::BodyLeadingBlank, RuleName::FooterLeadingBlank]
    );
    assert_eq!(
        run.report.errors,
        vec![RuleName::TypeCase, RuleName::SubjectCase, RuleName::TypeEnum]
    );
    assert_eq!(run.decision.messages.len(), 7);
}
