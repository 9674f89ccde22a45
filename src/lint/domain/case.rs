//! Case-style detection for commit types and subjects.
//!
//! A value "is" a case style when converting it to that style leaves it
//! unchanged. Quoted fragments (backticks, double or single quotes) are
//! ignored first, since they usually carry proper names.

use crate::lint::error::ParseTextCaseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Case styles understood by `type-case` and `subject-case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextCase {
    /// `some message`
    Lower,
    /// `SOME MESSAGE`
    Upper,
    /// `someMessage`
    Camel,
    /// `some-message`
    Kebab,
    /// `SomeMessage`
    Pascal,
    /// `Some message`
    Sentence,
    /// `some_message`
    Snake,
    /// `Some Message`
    Start,
}

impl TextCase {
    /// Returns the canonical configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower-case",
            Self::Upper => "upper-case",
            Self::Camel => "camel-case",
            Self::Kebab => "kebab-case",
            Self::Pascal => "pascal-case",
            Self::Sentence => "sentence-case",
            Self::Snake => "snake-case",
            Self::Start => "start-case",
        }
    }

    /// Returns a short sample written in this style.
    #[must_use]
    pub const fn example(self) -> &'static str {
        match self {
            Self::Lower => "some message",
            Self::Upper => "SOMEMESSAGE",
            Self::Camel => "someMessage",
            Self::Kebab => "some-message",
            Self::Pascal => "SomeMessage",
            Self::Sentence => "Some message",
            Self::Snake => "some_message",
            Self::Start => "Some Message",
        }
    }

    /// Returns whether `raw` is written in this case style.
    ///
    /// Values whose converted form is empty or starts with a digit count as
    /// matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use prgate::lint::domain::TextCase;
    ///
    /// assert!(TextCase::Start.matches("Add Feature"));
    /// assert!(!TextCase::Start.matches("add feature"));
    /// assert!(TextCase::Lower.matches("fix `Eslint` config"));
    /// ```
    #[must_use]
    pub fn matches(self, raw: &str) -> bool {
        let unquoted = strip_quoted(raw);
        let input = unquoted.trim();
        let transformed = self.apply(input);
        if transformed.is_empty() || transformed.starts_with(|character: char| character.is_ascii_digit()) {
            return true;
        }
        transformed == input
    }

    /// Converts `input` to this case style.
    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Lower => input.to_lowercase(),
            Self::Upper => input.to_uppercase(),
            Self::Sentence => upper_first(input),
            Self::Camel => camel_case(input),
            Self::Pascal => upper_first(&camel_case(input)),
            Self::Kebab => join_lowered(input, "-"),
            Self::Snake => join_lowered(input, "_"),
            Self::Start => words(input)
                .iter()
                .map(|word| upper_first(word))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl fmt::Display for TextCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TextCase {
    type Error = ParseTextCaseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "lower-case" | "lowercase" | "lowerCase" => Ok(Self::Lower),
            "upper-case" | "uppercase" => Ok(Self::Upper),
            "camel-case" | "camelCase" => Ok(Self::Camel),
            "kebab-case" => Ok(Self::Kebab),
            "pascal-case" | "PascalCase" => Ok(Self::Pascal),
            "sentence-case" | "sentencecase" => Ok(Self::Sentence),
            "snake-case" | "snake_case" => Ok(Self::Snake),
            "start-case" => Ok(Self::Start),
            _ => Err(ParseTextCaseError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for TextCase {
    type Error = ParseTextCaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<TextCase> for String {
    fn from(value: TextCase) -> Self {
        value.as_str().to_owned()
    }
}

/// Removes balanced quoted fragments, scanning left to right.
fn strip_quoted(input: &str) -> String {
    let mut kept = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(character) = rest.chars().next() {
        let after = rest.get(character.len_utf8()..).unwrap_or_default();
        if matches!(character, '`' | '"' | '\'')
            && let Some(end) = after.find(character)
        {
            rest = after.get(end + character.len_utf8()..).unwrap_or_default();
            continue;
        }
        kept.push(character);
        rest = after;
    }

    kept
}

fn upper_first(input: &str) -> String {
    let mut characters = input.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}

fn camel_case(input: &str) -> String {
    words(input)
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let lowered = word.to_lowercase();
            if index == 0 {
                lowered
            } else {
                upper_first(&lowered)
            }
        })
        .collect()
}

fn join_lowered(input: &str, separator: &str) -> String {
    words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

fn classify(character: char) -> CharClass {
    if character.is_lowercase() {
        CharClass::Lower
    } else if character.is_uppercase() {
        CharClass::Upper
    } else if character.is_numeric() {
        CharClass::Digit
    } else if character.is_alphabetic() {
        CharClass::Lower
    } else {
        CharClass::Other
    }
}

/// Splits `input` into words.
///
/// Words break on any non-alphanumeric character, on lower-to-upper
/// transitions (`someMessage`), before the last capital of an acronym that
/// is followed by a lower-case letter (`XMLHttp`), and between letters and
/// digits. Apostrophes are dropped rather than treated as separators.
fn words(input: &str) -> Vec<String> {
    let characters: Vec<char> = input
        .chars()
        .filter(|character| !matches!(character, '\'' | '\u{2019}'))
        .collect();
    let mut found = Vec::new();
    let mut current = String::new();

    for (index, character) in characters.iter().copied().enumerate() {
        let class = classify(character);
        if class == CharClass::Other {
            flush(&mut found, &mut current);
            continue;
        }

        let previous = index
            .checked_sub(1)
            .and_then(|prior| characters.get(prior))
            .map(|prior| classify(*prior));
        let next = characters.get(index + 1).map(|following| classify(*following));
        if !current.is_empty() && starts_new_word(previous, class, next) {
            flush(&mut found, &mut current);
        }
        current.push(character);
    }

    flush(&mut found, &mut current);
    found
}

fn starts_new_word(previous: Option<CharClass>, class: CharClass, next: Option<CharClass>) -> bool {
    match (previous, class) {
        (Some(CharClass::Lower), CharClass::Upper) => true,
        (Some(CharClass::Upper), CharClass::Upper) => next == Some(CharClass::Lower),
        (Some(CharClass::Digit), CharClass::Lower | CharClass::Upper)
        | (Some(CharClass::Lower | CharClass::Upper), CharClass::Digit) => true,
        _ => false,
    }
}

fn flush(found: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        found.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("someMessage", &["some", "Message"])]
    #[case("XMLHttpRequest", &["XML", "Http", "Request"])]
    #[case("add  feature-flags", &["add", "feature", "flags"])]
    #[case("version2release", &["version", "2", "release"])]
    #[case("don't stop", &["dont", "stop"])]
    #[case("", &[])]
    fn words_split_like_lodash(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(words(input), expected);
    }

    #[rstest]
    #[case("`Eslint` config", " config")]
    #[case("say \"Hello\" twice", "say  twice")]
    #[case("it's fine", "it's fine")]
    fn strip_quoted_removes_balanced_fragments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_quoted(input), expected);
    }
}
