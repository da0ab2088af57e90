//! # Control Keyword Handling
//!
//! This module defines the control keywords recognized by the Lamina
//! highlighting rule set and provides functionality for parsing them.
//!
//! ## Parsing Strategy
//!
//! Keywords are parsed using a boundary-aware approach so that identifiers
//! that start with a keyword are not mistakenly recognized as keywords. For
//! example, `whiley` must be parsed as plain text, not as the keyword
//! `while` followed by `y`. The right boundary is enforced here with a
//! negative lookahead; the left boundary is enforced by the tokenizer loop,
//! which only tries this rule when the scan position is not inside a word
//! (see [`Tokenizer`](super::token::Tokenizer)).
//!
//! Matching is case-sensitive: `If` and `WHILE` are plain text.
//!
//! ## Extensibility
//!
//! The [`ControlKeyword`] enum uses `strum` derive macros to enable:
//!
//! * String conversion via `EnumString`
//! * Display formatting via `Display`
//! * Iteration over all keywords via `EnumIter`
//! * String reference access via `AsRefStr`

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::{map, not, peek, value},
    error::context,
    sequence::terminated,
};
use serde::Serialize;

use super::token::{ParserResult, Token};

/// Returns true for characters that can appear inside a word.
///
/// Used on both sides of a keyword: the parser peeks ahead to reject
/// `ifx`, and the tokenizer checks the previously consumed character to
/// reject the `if` inside `xif`.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The control keywords of the Lamina highlighting rule set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ControlKeyword {
    /// Conditional execution.
    If,
    /// Loop construct.
    While,
}

/// Parses a control keyword token from the input string.
///
/// Attempts to match one of the defined keywords at the current position,
/// rejecting matches that are immediately followed by a word character.
///
/// # Examples
///
/// ```
/// # use lamina_syntax_core::tokenizer::keyword::{parse_keyword, ControlKeyword};
/// # use lamina_syntax_core::tokenizer::token::Token;
/// let input = "while x";
/// let (rest, token) = parse_keyword(input).unwrap();
/// assert_eq!(token, Token::Keyword(ControlKeyword::While));
/// assert_eq!(rest, " x");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_keyword(input: &str) -> ParserResult<Token> {
    context(
        "keyword",
        map(
            alt((
                value(
                    ControlKeyword::If,
                    terminated(tag("if"), not(peek(take_while1(is_word_char)))),
                ),
                value(
                    ControlKeyword::While,
                    terminated(tag("while"), not(peek(take_while1(is_word_char)))),
                ),
            )),
            Token::Keyword,
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_keywords() {
        let test_cases = [
            ("if cond", ControlKeyword::If),
            ("while cond", ControlKeyword::While),
        ];

        for (input, expected_keyword) in test_cases.iter() {
            let (rest, token) = parse_keyword(input).unwrap();
            assert_eq!(token, Token::Keyword(*expected_keyword));
            assert_eq!(rest, " cond");
        }
    }

    // check if all keywords are parsed correctly
    #[test]
    fn test_all_keywords() {
        for keyword_string in ControlKeyword::iter().map(|t| t.to_string()) {
            let (rest, token) = parse_keyword(&keyword_string).unwrap();
            let k = ControlKeyword::from_str(&keyword_string).unwrap();
            assert_eq!(token, Token::Keyword(k));
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_keyword_boundary_failure() {
        let test_cases = ["ifx", "if123", "if_", "whiley", "while_loop", "while9"];
        for input in test_cases.iter() {
            assert!(
                parse_keyword(input).is_err(),
                "Input {} should not be recognized as a keyword",
                input
            );
        }
    }

    #[test]
    fn test_keyword_case_sensitive() {
        for input in ["If", "IF", "While", "WHILE"] {
            assert!(parse_keyword(input).is_err());
        }
    }

    #[test]
    fn test_keyword_at_end_of_input() {
        let (rest, token) = parse_keyword("if").unwrap();
        assert_eq!(token, Token::Keyword(ControlKeyword::If));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_keyword_before_punctuation() {
        let (rest, token) = parse_keyword("if(x)").unwrap();
        assert_eq!(token, Token::Keyword(ControlKeyword::If));
        assert_eq!(rest, "(x)");
    }
}
