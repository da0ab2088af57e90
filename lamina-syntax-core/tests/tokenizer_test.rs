//! Observable behavior of the tokenizer: total coverage, keyword
//! boundaries, comment extent, the plain-text fallback, and determinism.

use lamina_syntax_core::tokenizer::keyword::ControlKeyword;
use lamina_syntax_core::tokenizer::token::{Token, TokenCategory, TokenSpan, Tokenizer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tokenize(input: &str) -> Vec<TokenSpan> {
    Tokenizer::new().tokenize(input)
}

fn reconstruct(input: &str, spans: &[TokenSpan]) -> String {
    spans.iter().map(|s| s.text(input)).collect()
}

#[test]
fn coverage_has_no_gaps_or_overlaps() {
    let input = "while x { // spin\n  if y { z() }\n}\n";
    let spans = tokenize(input);

    let mut cursor = 0;
    for span in &spans {
        assert_eq!(span.start, cursor, "gap or overlap before {:?}", span);
        assert!(span.end > span.start, "empty span {:?}", span);
        cursor = span.end;
    }
    assert_eq!(cursor, input.len());
    assert_eq!(reconstruct(input, &spans), input);
}

#[test]
fn keyword_boundary() {
    let spans = tokenize("ifx = 1");
    assert!(
        spans
            .iter()
            .all(|s| s.category() != TokenCategory::ControlKeyword)
    );

    let input = "if (x)";
    let spans = tokenize(input);
    let keywords: Vec<_> = spans
        .iter()
        .filter(|s| s.category() == TokenCategory::ControlKeyword)
        .collect();
    assert_eq!(keywords.len(), 1);
    assert_eq!(keywords[0].text(input), "if");
}

#[test]
fn comment_extent() {
    let input = "while true // loop\nx = 1";
    let spans = tokenize(input);

    assert_eq!(spans[0].token, Token::Keyword(ControlKeyword::While));
    assert_eq!(spans[1].token, Token::Text(" true ".to_string()));
    assert_eq!(spans[2].category(), TokenCategory::Comment);
    assert_eq!(spans[2].text(input), "// loop");

    // the following line is tokenized independently
    let next_line = &spans[3..];
    assert_eq!(reconstruct(input, next_line), "\nx = 1");
    assert!(
        next_line
            .iter()
            .all(|s| s.category() == TokenCategory::PlainText)
    );
}

#[test]
fn whole_line_comment() {
    let input = "// comment";
    let spans = tokenize(input);

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].category(), TokenCategory::Comment);
    assert_eq!(spans[0].start, 0);
    assert_eq!(spans[0].end, input.len());
}

#[test]
fn plain_fallback() {
    let input = "x := 5;";
    let spans = tokenize(input);

    assert!(
        spans
            .iter()
            .all(|s| s.category() == TokenCategory::PlainText)
    );
    assert_eq!(reconstruct(input, &spans), input);
}

#[test]
fn classification_is_idempotent() {
    let input = "if a // b\nwhile c\nplain";
    let first = tokenize(input);
    let rebuilt = reconstruct(input, &first);
    let second = tokenize(&rebuilt);

    assert_eq!(first, second);
}

#[test]
fn keywords_match_case_sensitively() {
    let spans = tokenize("IF While WHILE iF");
    assert!(
        spans
            .iter()
            .all(|s| s.category() != TokenCategory::ControlKeyword)
    );
}

#[test]
fn keyword_at_end_of_input() {
    let input = "x; if";
    let spans = tokenize(input);
    assert_eq!(
        spans.last().map(|s| s.category()),
        Some(TokenCategory::ControlKeyword)
    );
}

#[test]
fn lone_carriage_return_does_not_end_comment() {
    let input = "//a\rb";
    let spans = tokenize(input);

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].category(), TokenCategory::Comment);
    assert_eq!(spans[0].text(input), input);
}

#[test]
fn consecutive_comment_lines_stay_separate() {
    let input = "// one\n// two";
    let spans = tokenize(input);

    let comments: Vec<_> = spans
        .iter()
        .filter(|s| s.category() == TokenCategory::Comment)
        .collect();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text(input), "// one");
    assert_eq!(comments[1].text(input), "// two");
    assert_eq!(comments[1].line, 2);
}

proptest! {
    #[test]
    fn prop_coverage(input in ".*") {
        let spans = tokenize(&input);
        prop_assert_eq!(reconstruct(&input, &spans), input);
    }

    #[test]
    fn prop_deterministic(input in ".*") {
        let first = tokenize(&input);
        let second = tokenize(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_spans_contiguous(input in ".*") {
        let spans = tokenize(&input);
        let mut cursor = 0;
        for span in &spans {
            prop_assert_eq!(span.start, cursor);
            prop_assert!(span.end > span.start);
            cursor = span.end;
        }
        prop_assert_eq!(cursor, input.len());
    }
}
