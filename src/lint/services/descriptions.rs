//! Human-readable rule descriptions.
//!
//! Every rule name maps to exactly one template; the `match` below is
//! exhaustive, so a new rule cannot be added without its description.
//! Templates are rendered with the rule's parameters, so configured limits
//! show up in the text. With canonical parameters the output is the classic
//! wording used by the PR bot.

use minijinja::Environment;
use serde_json::{Map, Value, json};

use crate::lint::{
    domain::{Rule, RuleName},
    error::RuleSetError,
};

const SUBJECT_CASE_TEMPLATE: &str = "Commit description must not be written in the following \
     styles: {% for style in styles %}`{{ style.name }}` -> `{{ style.example }}`\
     {% if not loop.last %}, {% endif %}{% endfor %}";

const TYPE_ENUM_TEMPLATE: &str = "Invalid commit type. Valid types are as follows: \
     {% for kind in allowed %}`{{ kind }}`{% if not loop.last %}, {% endif %}{% endfor %}";

/// Returns the description template for a rule.
#[must_use]
pub const fn template(name: RuleName) -> &'static str {
    match name {
        RuleName::BodyLeadingBlank => "Commit message body should be preceded by a blank line",
        RuleName::HeaderMaxLength => {
            "Commit header length should not exceed {{ max_length }} characters"
        }
        RuleName::TypeCase => "Commit type must be {{ case }}",
        RuleName::FooterLeadingBlank => "Commit footer should be preceded by a blank line",
        RuleName::SubjectEmpty => "Commit description must be provided",
        RuleName::SubjectCase => SUBJECT_CASE_TEMPLATE,
        RuleName::TypeEnum => TYPE_ENUM_TEMPLATE,
    }
}

/// Renders the description of a configured rule.
///
/// # Errors
///
/// Returns [`RuleSetError::MissingDescription`] when the template cannot be
/// rendered with the rule's parameters.
pub fn render(rule: &Rule) -> Result<String, RuleSetError> {
    let environment = Environment::new();
    environment
        .render_str(template(rule.name()), build_context(rule))
        .map_err(|error| RuleSetError::missing_description(rule.name(), error.to_string()))
}

fn build_context(rule: &Rule) -> Map<String, Value> {
    let mut context = Map::new();
    match rule {
        Rule::HeaderMaxLength { max_length } => {
            context.insert("max_length".to_owned(), json!(max_length));
        }
        Rule::TypeCase { case } => {
            context.insert("case".to_owned(), json!(case.as_str()));
        }
        Rule::SubjectCase { forbidden } => {
            let styles = forbidden
                .iter()
                .map(|case| json!({ "name": case.as_str(), "example": case.example() }))
                .collect();
            context.insert("styles".to_owned(), Value::Array(styles));
        }
        Rule::TypeEnum { allowed } => {
            context.insert("allowed".to_owned(), json!(allowed));
        }
        Rule::BodyLeadingBlank | Rule::FooterLeadingBlank | Rule::SubjectEmpty => {}
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::domain::TextCase;
    use rstest::rstest;

    #[rstest]
    #[case(
        RuleName::BodyLeadingBlank,
        "Commit message body should be preceded by a blank line"
    )]
    #[case(
        RuleName::HeaderMaxLength,
        "Commit header length should not exceed 100 characters"
    )]
    #[case(RuleName::TypeCase, "Commit type must be lower-case")]
    #[case(
        RuleName::FooterLeadingBlank,
        "Commit footer should be preceded by a blank line"
    )]
    #[case(RuleName::SubjectEmpty, "Commit description must be provided")]
    #[case(
        RuleName::SubjectCase,
        "Commit description must not be written in the following styles: \
         `sentence-case` -> `Some message`, `start-case` -> `Some Message`, \
         `pascal-case` -> `SomeMessage`, `upper-case` -> `SOMEMESSAGE`"
    )]
    #[case(
        RuleName::TypeEnum,
        "Invalid commit type. Valid types are as follows: `build`, `chore`, `ci`, \
         `docs`, `feat`, `fix`, `perf`, `refactor`, `revert`, `style`, `test`"
    )]
    fn canonical_rules_render_classic_wording(#[case] name: RuleName, #[case] expected: &str) {
        let rendered = render(&Rule::canonical(name)).expect("canonical template renders");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn configured_parameters_show_in_description() {
        let header = render(&Rule::HeaderMaxLength { max_length: 72 }).expect("renders");
        assert_eq!(header, "Commit header length should not exceed 72 characters");

        let subject = render(&Rule::SubjectCase {
            forbidden: vec![TextCase::Upper],
        })
        .expect("renders");
        assert!(subject.ends_with("`upper-case` -> `SOMEMESSAGE`"));
    }
}
