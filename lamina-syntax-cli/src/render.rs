//! ANSI rendering of classified spans.
//!
//! This is the CLI's own category-to-style mapping; the core crate exports
//! categories only and leaves styling to the host.

use lamina_syntax_core::tokenizer::token::{TokenCategory, TokenSpan};

const RESET: &str = "\x1b[0m";

fn style(category: TokenCategory) -> Option<&'static str> {
    match category {
        TokenCategory::ControlKeyword => Some("\x1b[1;35m"),
        TokenCategory::Comment => Some("\x1b[90m"),
        TokenCategory::PlainText => None,
    }
}

/// Renders the source with ANSI escape codes around styled spans.
///
/// Plain text passes through untouched, so stripping the escape codes from
/// the output yields the original source.
pub fn render_ansi(source: &str, spans: &[TokenSpan]) -> String {
    let mut out = String::with_capacity(source.len());
    for span in spans {
        let text = span.text(source);
        match style(span.category()) {
            Some(code) => {
                out.push_str(code);
                out.push_str(text);
                out.push_str(RESET);
            }
            None => out.push_str(text),
        }
    }
    out
}
