//! # Token Types and Tokenizer
//!
//! Core token types and the scan loop that applies the Lamina highlighting
//! rules to an input text.
//!
//! The tokenizer tries the rules in fixed declaration order at every scan
//! position — control keyword, line comment, plain-text fallback — and the
//! first match wins. The fallback consumes a single character, so the scan
//! is total: any input is covered by spans with no gaps and no overlaps,
//! and there is no error path. Consecutive fallback characters are merged
//! into one plain-text span as they are emitted.

use nom::{IResult, branch::alt, error::VerboseError};
use serde::Serialize;

use super::{
    comment::parse_line_comment,
    keyword::{ControlKeyword, is_word_char, parse_keyword},
};

/// Result type of the individual rule parsers.
pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// The token categories a highlighting host maps to display styles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
pub enum TokenCategory {
    /// Control-flow keywords: `if`, `while`.
    ControlKeyword,
    /// Line comments: `// ...` up to the end of the line.
    Comment,
    /// Everything the other rules do not claim.
    PlainText,
}

/// A classified piece of source text.
///
/// Serialized with the category name as the tag, so a JSON consumer sees
/// `{"category": "Comment", "content": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", content = "content")]
pub enum Token {
    /// A control keyword.
    #[serde(rename = "ControlKeyword")]
    Keyword(ControlKeyword),
    /// A line comment; content is trimmed, without the leading `//`.
    Comment(String),
    /// A run of plain text.
    #[serde(rename = "PlainText")]
    Text(String),
}

impl Token {
    /// The category a host uses to pick a display style.
    pub fn category(&self) -> TokenCategory {
        match self {
            Token::Keyword(_) => TokenCategory::ControlKeyword,
            Token::Comment(_) => TokenCategory::Comment,
            Token::Text(_) => TokenCategory::PlainText,
        }
    }
}

/// A token together with its location in the source text.
///
/// `start` and `end` are byte offsets into the input; `line` and `column`
/// are 1-based and refer to the first character of the span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSpan {
    #[serde(flatten)]
    pub token: Token,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl TokenSpan {
    /// The exact matched source text of this span.
    ///
    /// Concatenating `text` over all spans of a scan reconstructs the
    /// input exactly.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Shorthand for the category of the contained token.
    pub fn category(&self) -> TokenCategory {
        self.token.category()
    }
}

/// The scan cursor over one input text.
///
/// Tracks the byte position, 1-based line and column, and the previously
/// consumed character (for the left word boundary of the keyword rule).
/// The cursor advances monotonically and never rewinds; create a fresh
/// `Tokenizer` per input.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    current_position: usize,
    current_line: usize,
    current_column: usize,
    previous_char: Option<char>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            current_position: 0,
            current_line: 1,   // 1-based
            current_column: 1, // 1-based
            previous_char: None,
        }
    }

    /// Tokenizes the input into classified spans covering it entirely.
    ///
    /// This cannot fail: positions the keyword and comment rules do not
    /// claim are consumed one character at a time as plain text, and
    /// adjacent plain-text characters are coalesced into a single span.
    #[tracing::instrument(level = "debug", skip(input))]
    pub fn tokenize(&mut self, input: &str) -> Vec<TokenSpan> {
        let mut tokens: Vec<TokenSpan> = Vec::new();
        let mut remaining = input;

        while !remaining.is_empty() {
            let start_position = self.current_position;
            let start_line = self.current_line;
            let start_column = self.current_column;

            // The keyword rule only applies at a left word boundary; the
            // parser itself cannot see the previously consumed character.
            let result = if self.at_word_boundary() {
                alt((parse_keyword, parse_line_comment))(remaining)
            } else {
                parse_line_comment(remaining)
            };

            match result {
                Ok((new_remaining, token)) => {
                    let consumed = &remaining[..(remaining.len() - new_remaining.len())];
                    self.update_position(consumed);

                    tokens.push(TokenSpan {
                        token,
                        start: start_position,
                        end: self.current_position,
                        line: start_line,
                        column: start_column,
                    });

                    remaining = new_remaining;
                }
                Err(_) => {
                    // Fallback rule: the next character is plain text.
                    let Some(ch) = remaining.chars().next() else {
                        break;
                    };
                    let consumed = &remaining[..ch.len_utf8()];
                    self.update_position(consumed);
                    remaining = &remaining[ch.len_utf8()..];

                    if let Some(last) = tokens.last_mut() {
                        if let Token::Text(text) = &mut last.token {
                            text.push(ch);
                            last.end = self.current_position;
                            continue;
                        }
                    }

                    tokens.push(TokenSpan {
                        token: Token::Text(ch.to_string()),
                        start: start_position,
                        end: self.current_position,
                        line: start_line,
                        column: start_column,
                    });
                }
            }
        }

        tokens
    }

    fn at_word_boundary(&self) -> bool {
        self.previous_char.is_none_or(|c| !is_word_char(c))
    }

    fn update_position(&mut self, text: &str) {
        for c in text.chars() {
            self.current_position += c.len_utf8();
            if c == '\n' {
                self.current_line += 1;
                self.current_column = 1;
            } else {
                self.current_column += 1;
            }
            self.previous_char = Some(c);
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
