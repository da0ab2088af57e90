//! # Lamina Syntax Core
//!
//! Lexical analysis for the Lamina language (`*.lm` files), as consumed by
//! syntax-highlighting hosts.
//!
//! ## Components
//!
//! * [`tokenizer`]: The ordered-rule tokenizer that partitions Lamina source
//!   into classified spans (control keywords, line comments, plain text).
//! * [`registry`]: The static language descriptor (name, aliases, filename
//!   patterns, mimetypes) and the registration seam towards a host engine.
//!
//! ## Processing Model
//!
//! ```text
//! Source Text → Tokenizer → Classified Spans → Host Rendering
//! ```
//!
//! The tokenizer is a pure, synchronous function of its input: it performs
//! no I/O, holds no shared state, and cannot fail — a fallback rule
//! classifies anything the keyword and comment rules do not claim as plain
//! text. Rendering (mapping categories to colors or weights) is the host's
//! responsibility and is deliberately absent from this crate.
//!
//! ## Usage Example
//!
//! ```rust
//! use lamina_syntax_core::tokenizer::token::{Tokenizer, TokenCategory};
//!
//! let spans = Tokenizer::new().tokenize("if x { y } // done");
//! assert_eq!(spans[0].category(), TokenCategory::ControlKeyword);
//! ```

pub mod registry;
pub mod tokenizer;

pub use registry::{HighlightHost, LanguageDescriptor, RegistryError, register};
pub use tokenizer::token::{Token, TokenCategory, TokenSpan, Tokenizer};
