//! Main stripping API.
//!
//! This module provides the primary API for stripping LaTeX markup from
//! `.tex` files. The main entry point is the [`Stripper`] struct, along
//! with the convenience functions [`strip_file`] and [`strip_document`].
//!
//! # Example
//!
//! ```rust
//! use texprose_core::strip_document;
//!
//! let doc = r"\begin{document}\title{My Paper}Hello $x+y$ world.\end{document}";
//! let stripped = strip_document(doc).unwrap();
//! assert_eq!(stripped.text.split_whitespace().collect::<Vec<_>>(), ["Hello", "world."]);
//! assert_eq!(stripped.raw_word_count, 4);
//! assert_eq!(stripped.word_count, 2);
//! ```

use crate::config::StripConfig;
use crate::document::{StrippedDocument, count_words};
use crate::extract::extract_body;
use crate::loader::load_flattened;
use crate::strip::{
    remove_braced_commands, remove_environments, remove_formulas, remove_optioned_commands, remove_stopwords,
    remove_unbraced_commands,
};
use crate::Result;

/// Main entry point for LaTeX stripping.
///
/// A Stripper holds a [`StripConfig`] and runs the linear pipeline over a
/// document: extract body, delete formulas, environments, braced and
/// optioned and unbraced commands, then stopwords.
#[derive(Debug, Clone, Default)]
pub struct Stripper {
    config: StripConfig,
}

impl Stripper {
    /// Creates a Stripper with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Stripper with a custom configuration.
    pub fn with_config(config: StripConfig) -> Self {
        Self { config }
    }

    /// Runs the pipeline over an already-loaded, comment-free document
    /// string.
    ///
    /// A document without body markers yields the empty result, not an
    /// error; callers should treat that as a sign of malformed input. An
    /// invalid stopword pattern in the configuration is an error.
    pub fn strip_document(&self, document: &str) -> Result<StrippedDocument> {
        let Some(body) = extract_body(document) else {
            return Ok(StrippedDocument::empty());
        };
        let raw_word_count = count_words(&body);

        let mut body = remove_formulas(&body);
        body = remove_environments(&body, &self.config.environments);
        body = remove_braced_commands(&body, &self.config.braced_commands);
        body = remove_optioned_commands(&body, &self.config.optioned_commands);
        body = remove_unbraced_commands(&body, &self.config.unbraced_commands);
        body = remove_stopwords(&body, &self.config.stopwords)?;

        Ok(StrippedDocument::new(body.trim().to_string(), raw_word_count))
    }

    /// Loads a `.tex` file, strips it, and prints the one-line word-count
    /// summary to stdout.
    ///
    /// A missing or unreadable file is a fatal, propagated error.
    pub fn strip_file(&self, path: &str) -> Result<StrippedDocument> {
        let document = load_flattened(path)?;
        let stripped = self.strip_document(&document)?;
        println!("{}", stripped.summary());
        Ok(stripped)
    }
}

/// Strips a `.tex` file with the default configuration.
///
/// See [`Stripper::strip_file`].
pub fn strip_file(path: &str) -> Result<StrippedDocument> {
    Stripper::new().strip_file(path)
}

/// Strips an already-loaded document string with the default configuration.
///
/// See [`Stripper::strip_document`].
pub fn strip_document(document: &str) -> Result<StrippedDocument> {
    Stripper::new().strip_document(document)
}
