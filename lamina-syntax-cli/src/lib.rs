//! Command-line front end for the Lamina tokenizer.
//!
//! Acts as a trivial highlighting host: it reads a file, runs the
//! tokenizer, and either dumps the classified spans as JSON or renders
//! them to the terminal with ANSI colors. The category-to-style table
//! lives here, not in the core crate.

pub mod render;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] lamina_syntax_core::RegistryError),
}
