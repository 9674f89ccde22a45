//! Individual rule predicates.
//!
//! Each predicate is a pure function of the message and its own parameters
//! and returns `true` when the message satisfies the rule. A rule whose
//! segment is absent (no body, no footer, no type) is not applicable and
//! passes.

use crate::lint::domain::{Message, Rule, TextCase};

/// Evaluates one rule against a message.
#[must_use]
pub fn satisfies(rule: &Rule, message: &Message) -> bool {
    match rule {
        Rule::BodyLeadingBlank => body_leading_blank(message),
        Rule::HeaderMaxLength { max_length } => header_max_length(message, *max_length),
        Rule::TypeCase { case } => type_case(message, *case),
        Rule::FooterLeadingBlank => footer_leading_blank(message),
        Rule::SubjectEmpty => subject_empty(message),
        Rule::SubjectCase { forbidden } => subject_case(message, forbidden),
        Rule::TypeEnum { allowed } => type_enum(message, allowed),
    }
}

/// A body, when present, follows the header after exactly one blank line.
#[must_use]
pub fn body_leading_blank(message: &Message) -> bool {
    message.body().is_none() || message.body_leading_blanks() == 1
}

/// The header is at most `max_length` characters long.
#[must_use]
pub fn header_max_length(message: &Message, max_length: usize) -> bool {
    message.header().chars().count() <= max_length
}

/// The type token, when present, is written in `case`.
#[must_use]
pub fn type_case(message: &Message, case: TextCase) -> bool {
    message
        .header_parts()
        .commit_type
        .is_none_or(|kind| case.matches(kind))
}

/// A footer, when present, follows the preceding text after exactly one
/// blank line.
#[must_use]
pub fn footer_leading_blank(message: &Message) -> bool {
    message.footer().is_none() || message.footer_leading_blanks() == 1
}

/// The subject is present and not blank.
#[must_use]
pub fn subject_empty(message: &Message) -> bool {
    message
        .header_parts()
        .subject
        .is_some_and(|subject| !subject.trim().is_empty())
}

/// The subject matches none of the `forbidden` case styles.
///
/// Subjects that do not start with an ASCII letter are not checked.
#[must_use]
pub fn subject_case(message: &Message, forbidden: &[TextCase]) -> bool {
    let Some(subject) = message.header_parts().subject else {
        return true;
    };
    if !subject.starts_with(|character: char| character.is_ascii_alphabetic()) {
        return true;
    }
    !forbidden.iter().any(|case| case.matches(subject))
}

/// The type token, when present, is one of `allowed` (case-sensitive).
#[must_use]
pub fn type_enum(message: &Message, allowed: &[String]) -> bool {
    message
        .header_parts()
        .commit_type
        .is_none_or(|kind| allowed.iter().any(|candidate| candidate == kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::domain::DEFAULT_FORBIDDEN_SUBJECT_CASES;
    use rstest::rstest;

    fn message(raw: &str) -> Message {
        Message::parse(raw)
    }

    #[rstest]
    #[case("fix: a", true)]
    #[case("fix: a\n\nbody", true)]
    #[case("fix: a\nbody", false)]
    #[case("fix: a\n\n\nbody", false)]
    fn body_leading_blank_counts_separator_lines(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(body_leading_blank(&message(raw)), expected);
    }

    #[rstest]
    #[case("fix: a\n\nCloses #1", true)]
    #[case("fix: a\n\nbody\n\nCloses #1", true)]
    #[case("fix: a\n\nbody\nCloses #1", false)]
    #[case("fix: a\nCloses #1", false)]
    #[case("fix: a\n\nbody\n\n\nCloses #1", false)]
    fn footer_leading_blank_counts_separator_lines(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(footer_leading_blank(&message(raw)), expected);
    }

    #[rstest]
    #[case("fix:", false)]
    #[case("fix:   ", false)]
    #[case("no prefix at all", false)]
    #[case("fix: something", true)]
    fn subject_empty_requires_text_after_prefix(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(subject_empty(&message(raw)), expected);
    }

    #[rstest]
    #[case("feat: add feature", true)]
    #[case("feat: Add feature", false)]
    #[case("feat: Add Feature", false)]
    #[case("feat: AddFeature", false)]
    #[case("feat: ADD FEATURE", false)]
    #[case("feat: add `Eslint` config", true)]
    #[case("feat: 2fa support", true)]
    #[case("feat:", true)]
    fn subject_case_rejects_forbidden_styles(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(
            subject_case(&message(raw), &DEFAULT_FORBIDDEN_SUBJECT_CASES),
            expected
        );
    }

    #[rstest]
    fn type_rules_skip_headers_without_type() {
        let no_type = message("just a sentence");
        assert!(type_case(&no_type, TextCase::Lower));
        assert!(type_enum(&no_type, &["feat".to_owned()]));
    }
}
