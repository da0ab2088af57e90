//! # Language Registration Metadata
//!
//! The static descriptor a highlighting host uses to associate Lamina with
//! files: human-readable name, aliases, filename patterns, and an advisory
//! content-type label. The descriptor is read-only `'static` data handed to
//! the host through a registration call; it is never mutable global state.
//!
//! The host engine itself (rule dispatch, rendering, theming) is outside
//! this crate; [`HighlightHost`] is only the seam the descriptor crosses.

use glob::Pattern;
use serde::Serialize;
use thiserror::Error;

/// Immutable registration record for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    /// Human-readable language name.
    pub name: &'static str,
    /// Short identifying aliases.
    pub aliases: &'static [&'static str],
    /// Filename glob patterns the language claims.
    pub filenames: &'static [&'static str],
    /// Advisory content-type labels.
    pub mimetypes: &'static [&'static str],
}

/// The Lamina language descriptor.
pub const LAMINA: LanguageDescriptor = LanguageDescriptor {
    name: "Lamina",
    aliases: &["lamina"],
    filenames: &["*.lm"],
    mimetypes: &["text/x-lamina"],
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("invalid filename pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl LanguageDescriptor {
    /// Whether this language claims the given file name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lamina_syntax_core::registry::LAMINA;
    /// assert!(LAMINA.claims_filename("example.lm").unwrap());
    /// assert!(!LAMINA.claims_filename("example.rs").unwrap());
    /// ```
    pub fn claims_filename(&self, name: &str) -> Result<bool, RegistryError> {
        for raw in self.filenames {
            let pattern = Pattern::new(raw).map_err(|e| RegistryError::InvalidPattern {
                pattern: (*raw).to_string(),
                message: e.to_string(),
            })?;
            if pattern.matches(name) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// The registration seam towards a host highlighting engine.
///
/// A host implements this trait and receives the descriptor once, at load
/// time, through [`register`].
#[cfg_attr(test, mockall::automock)]
pub trait HighlightHost {
    fn register_language(&mut self, descriptor: &LanguageDescriptor);
}

/// Registers the Lamina descriptor with a host.
#[tracing::instrument(level = "debug", skip(host))]
pub fn register<H: HighlightHost>(host: &mut H) {
    host.register_language(&LAMINA);
}
