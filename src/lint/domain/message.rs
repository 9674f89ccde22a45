//! Pull-request description split into header, body and footer.

use serde::{Deserialize, Serialize};

/// Literal note keywords that open a footer regardless of token syntax.
const BREAKING_CHANGE_TOKENS: [&str; 2] = ["BREAKING CHANGE", "BREAKING-CHANGE"];

/// A parsed pull-request description.
///
/// Parsing is total: any string, including the empty string, produces a
/// message. Missing blank-line separators are recorded in the layout counts
/// rather than rejected, so the rule layer can report them.
///
/// # Examples
///
/// ```
/// use prgate::lint::domain::Message;
///
/// let message = Message::parse("feat(api): add pagination\n\nAdds cursors.\n\nCloses #12");
/// assert_eq!(message.header(), "feat(api): add pagination");
/// assert_eq!(message.body(), Some("Adds cursors."));
/// assert_eq!(message.footer(), Some("Closes #12"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<String>,
    body_leading_blanks: usize,
    footer_leading_blanks: usize,
}

impl Message {
    /// Parses raw description text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lines: Vec<&str> = raw
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let (header, rest) = lines.split_first().map_or(("", &[][..]), |(first, tail)| (*first, tail));

        let footer_start = find_footer_start(rest).unwrap_or(rest.len());
        let (body_lines, footer_lines) = rest.split_at_checked(footer_start).unwrap_or((rest, &[]));

        Self {
            header: header.to_owned(),
            body: join_non_blank(body_lines),
            footer: join_non_blank(footer_lines),
            body_leading_blanks: count_blank(body_lines.iter()),
            footer_leading_blanks: count_blank(body_lines.iter().rev()),
        }
    }

    /// Returns the first line of the description.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the body, or `None` when the description has no body.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the trailer block, or `None` when there is none.
    #[must_use]
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Number of blank lines between the header and the body.
    #[must_use]
    pub const fn body_leading_blanks(&self) -> usize {
        self.body_leading_blanks
    }

    /// Number of blank lines directly above the footer.
    ///
    /// When there is no body this counts the lines between header and footer.
    #[must_use]
    pub const fn footer_leading_blanks(&self) -> usize {
        self.footer_leading_blanks
    }

    /// Decomposes the header into type, scope and subject.
    #[must_use]
    pub fn header_parts(&self) -> HeaderParts<'_> {
        HeaderParts::parse(&self.header)
    }
}

/// The `type(scope)!: subject` components of a header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderParts<'a> {
    /// Text before the first `:` or `(`; `None` when absent or empty.
    pub commit_type: Option<&'a str>,
    /// Text inside the parentheses following the type.
    pub scope: Option<&'a str>,
    /// Whether the prefix carries the `!` breaking-change marker.
    pub breaking: bool,
    /// Trimmed text after the first `:`; `None` when the header has no `:`.
    pub subject: Option<&'a str>,
}

impl<'a> HeaderParts<'a> {
    /// Splits a header line.
    ///
    /// # Examples
    ///
    /// ```
    /// use prgate::lint::domain::HeaderParts;
    ///
    /// let parts = HeaderParts::parse("fix(parser)!: handle CRLF");
    /// assert_eq!(parts.commit_type, Some("fix"));
    /// assert_eq!(parts.scope, Some("parser"));
    /// assert!(parts.breaking);
    /// assert_eq!(parts.subject, Some("handle CRLF"));
    /// ```
    #[must_use]
    pub fn parse(header: &'a str) -> Self {
        let Some((prefix, subject)) = header.split_once(':') else {
            return Self::default();
        };

        let (unmarked, breaking) = prefix
            .strip_suffix('!')
            .map_or((prefix, false), |stripped| (stripped, true));
        let (commit_type, scope) = unmarked.split_once('(').map_or((unmarked, None), |(kind, rest)| {
            (kind, Some(rest.strip_suffix(')').unwrap_or(rest)))
        });

        Self {
            commit_type: Some(commit_type).filter(|kind| !kind.is_empty()),
            scope,
            breaking,
            subject: Some(subject.trim()),
        }
    }
}

fn find_footer_start(lines: &[&str]) -> Option<usize> {
    // Every line after the footer start must be blank, a trailer or a continuation.
    let first_candidate = lines
        .iter()
        .rposition(|line| !(is_blank(line) || is_trailer(line) || is_continuation(line)))
        .map_or(0, |open| open + 1);
    let candidates = lines.get(first_candidate..).unwrap_or_default();
    candidates
        .iter()
        .position(|line| is_trailer(line))
        .map(|offset| first_candidate + offset)
}

/// Returns whether a line is a git-trailer style footer entry.
///
/// Accepted forms are `Token: value`, `Token #value` and the
/// `BREAKING CHANGE: value` note, where `Token` is an ASCII letter followed
/// by letters, digits or hyphens.
#[must_use]
pub fn is_trailer(line: &str) -> bool {
    if BREAKING_CHANGE_TOKENS
        .iter()
        .any(|token| line.strip_prefix(token).is_some_and(|rest| rest.starts_with(": ")))
    {
        return true;
    }

    let token_len = line
        .char_indices()
        .find(|(_, character)| !(character.is_ascii_alphanumeric() || *character == '-'))
        .map_or(line.len(), |(index, _)| index);
    let (token, rest) = line.split_at_checked(token_len).unwrap_or((line, ""));

    let valid_token = token.starts_with(|character: char| character.is_ascii_alphabetic());
    let value = rest.strip_prefix(": ").or_else(|| rest.strip_prefix(" #"));
    valid_token && value.is_some_and(|text| !text.trim().is_empty())
}

fn is_continuation(line: &str) -> bool {
    line.starts_with(char::is_whitespace) && !is_blank(line)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn count_blank<'a>(lines: impl Iterator<Item = &'a &'a str>) -> usize {
    lines.take_while(|line| is_blank(line)).count()
}

fn join_non_blank(lines: &[&str]) -> Option<String> {
    let first = lines.iter().position(|line| !is_blank(line))?;
    let last = lines.iter().rposition(|line| !is_blank(line))?;
    lines.get(first..=last).map(|kept| kept.join("\n"))
}
