//! # Tokenizer Component
//!
//! Lexical analysis of Lamina source text, transforming raw input into a
//! sequence of classified spans for a highlighting host.
//!
//! ## Design Principles
//!
//! * **Ordered rules, first match wins**: rules are tried in a fixed order
//!   at every scan position — control keyword, then line comment, then the
//!   plain-text fallback. The order is part of the language definition.
//! * **Total coverage**: the fallback rule accepts any character, so every
//!   input is fully partitioned into spans with no gaps, no overlaps, and
//!   no error path.
//! * **Comprehensive span information**: each token carries byte offsets
//!   and 1-based line/column of its first character for precise rendering
//!   and error reporting by consumers.
//!
//! ## Component Structure
//!
//! * [`token`]: Core token types and the tokenizer implementation
//! * [`keyword`]: Control-keyword parsing (`if`, `while`)
//! * [`comment`]: Line-comment parsing (`// ...`)
//!
//! ## Known Gaps
//!
//! The rule table covers exactly the Lamina highlighting rule set: string
//! literals, numbers, operators, and block comments have no rules of their
//! own and fall through to plain text.

pub mod comment;
pub mod keyword;
pub mod token;
