//! # Comment Token Handling
//!
//! Parses the single comment form of the Lamina highlighting rule set:
//! line comments starting with `//` and running to the end of the line.
//! The terminating newline is not part of the comment; the following line
//! is tokenized independently.
//!
//! Block comments (`/* ... */`) have no rule and fall through to plain
//! text.

use nom::{
    bytes::complete::{tag, take_till},
    combinator::map,
    error::context,
    sequence::preceded,
};

use super::token::{ParserResult, Token};

/// Consumes the remainder of the current line, up to the next `\n`.
///
/// A carriage return that is part of a CRLF line ending belongs to the
/// line ending and is left unconsumed; a lone `\r` is ordinary comment
/// content.
fn line_rest(input: &str) -> ParserResult<'_, &str> {
    let (rest, content) = take_till(|c| c == '\n')(input)?;
    if rest.starts_with('\n') {
        if let Some(stripped) = content.strip_suffix('\r') {
            return Ok((&input[stripped.len()..], stripped));
        }
    }
    Ok((rest, content))
}

/// Parses a line comment from the input string.
///
/// Line comments start with `//` and continue up to, but not including,
/// the end of the line. The content of the comment is trimmed of leading
/// and trailing whitespace; the exact source text of the span remains
/// available through [`TokenSpan::text`](super::token::TokenSpan::text).
///
/// # Examples
///
/// ```
/// # use lamina_syntax_core::tokenizer::comment::parse_line_comment;
/// # use lamina_syntax_core::tokenizer::token::Token;
/// let input = "// This is a comment\ncode";
/// let (rest, token) = parse_line_comment(input).unwrap();
/// assert_eq!(token, Token::Comment("This is a comment".to_string()));
/// assert_eq!(rest, "\ncode");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_line_comment(input: &str) -> ParserResult<Token> {
    context(
        "line comment",
        map(preceded(tag("//"), line_rest), |content: &str| {
            Token::Comment(content.trim().to_string())
        }),
    )(input)
}
