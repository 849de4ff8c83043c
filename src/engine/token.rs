//! Reference token scanning and classification.
//!
//! Two token kinds share one scan:
//!
//! - `[[name]]` includes the raw body of another boilerplate. `name` is
//!   restricted to `[A-Za-z0-9_]+`.
//! - `{{text}}` asks the user for a value. `text` is one or more characters
//!   other than `}`. With a `|` inside, the part before the first `|` is the
//!   label and the remaining segments are the choices.
//!
//! The earliest match in the text wins. Delimiters do not nest. At the same
//! offset the inclusion alternative is tried first.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Separator between a prompt label and its choices.
pub const CHOICE_SEPARATOR: char = '|';

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(?P<include>[A-Za-z0-9_]+)\]\]|\{\{(?P<prompt>[^}]+)\}\}").unwrap()
});

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// A reference token found in a boilerplate body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte range of the whole token, delimiters included.
    pub span: Range<usize>,
    /// What the token asks for.
    pub reference: Reference<'a>,
}

/// The two substitution kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference<'a> {
    /// `[[name]]`: substitute the raw body of `name`.
    Include { name: &'a str },
    /// `{{...}}`: ask the user.
    Prompt(PromptSpec<'a>),
}

/// A classified prompt token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSpec<'a> {
    /// `{{label}}`: free-form text.
    Text { label: &'a str },
    /// `{{label|a|b|c}}`: pick one of a fixed list. Empty choices are kept.
    Choice { label: &'a str, choices: Vec<&'a str> },
}

impl PromptSpec<'_> {
    /// The label shown to the user.
    pub fn label(&self) -> &str {
        match self {
            Self::Text { label } | Self::Choice { label, .. } => label,
        }
    }
}

/// Find the first reference token in `text`.
pub fn find_first(text: &str) -> Option<Token<'_>> {
    let caps = TOKEN_REGEX.captures(text)?;
    let whole = caps.get(0)?;

    let reference = if let Some(name) = caps.name("include") {
        Reference::Include {
            name: name.as_str(),
        }
    } else {
        Reference::Prompt(classify_prompt(caps.name("prompt")?.as_str()))
    };

    Some(Token {
        span: whole.range(),
        reference,
    })
}

/// Split the inner text of a `{{...}}` token into label and choices.
///
/// Whitespace is preserved as-is.
pub fn classify_prompt(inner: &str) -> PromptSpec<'_> {
    match inner.split_once(CHOICE_SEPARATOR) {
        None => PromptSpec::Text { label: inner },
        Some((label, rest)) => PromptSpec::Choice {
            label,
            choices: rest.split(CHOICE_SEPARATOR).collect(),
        },
    }
}

/// Replace exactly `span` in `text` with `replacement`.
pub fn substitute(text: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() - span.len() + replacement.len());
    out.push_str(&text[..span.start]);
    out.push_str(replacement);
    out.push_str(&text[span.end..]);
    out
}

/// Check whether `name` can appear inside a `[[...]]` reference.
pub fn is_template_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}
