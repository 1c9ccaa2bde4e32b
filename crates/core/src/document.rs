//! Stripped-document output type with word tally and serialization.

use serde::Serialize;

use crate::{Result, TexproseError};

/// The result of stripping a LaTeX document.
///
/// Combines the cleaned body text with the word tally the reporter needs:
/// the count right after body extraction and the count after every
/// stripping stage ran. Counts are whitespace-delimited token counts, so
/// the final count is never larger than the raw one.
#[derive(Debug, Clone, Serialize)]
pub struct StrippedDocument {
    /// Cleaned body text, whitespace-trimmed.
    pub text: String,

    /// Word count of the body immediately after extraction.
    pub raw_word_count: usize,

    /// Word count after all stripping stages.
    pub word_count: usize,
}

impl StrippedDocument {
    /// Creates a stripped document from the final text and the raw count,
    /// deriving the final word count.
    pub fn new(text: String, raw_word_count: usize) -> Self {
        let word_count = count_words(&text);
        Self { text, raw_word_count, word_count }
    }

    /// The empty result produced for a document with no body markers.
    pub fn empty() -> Self {
        Self { text: String::new(), raw_word_count: 0, word_count: 0 }
    }

    /// Number of words the stripping stages removed.
    pub fn words_removed(&self) -> usize {
        self.raw_word_count.saturating_sub(self.word_count)
    }

    /// One-line human-readable summary of the word tally.
    pub fn summary(&self) -> String {
        format!(
            "Your raw document contains {} words, {} were deleted, {} remain.",
            self.raw_word_count,
            self.words_removed(),
            self.word_count
        )
    }

    /// Gets the document as structured JSON for downstream tooling.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(TexproseError::from)
    }
}

/// Count whitespace-delimited tokens.
pub(crate) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counts_derived_from_text() {
        let doc = StrippedDocument::new("Hello  world.".to_string(), 4);
        assert_eq!(doc.word_count, 2);
        assert_eq!(doc.raw_word_count, 4);
        assert_eq!(doc.words_removed(), 2);
    }

    #[test]
    fn test_empty_document() {
        let doc = StrippedDocument::empty();
        assert!(doc.text.is_empty());
        assert_eq!(doc.raw_word_count, 0);
        assert_eq!(doc.word_count, 0);
        assert_eq!(doc.words_removed(), 0);
    }

    #[test]
    fn test_summary_line() {
        let doc = StrippedDocument::new("three words left".to_string(), 10);
        assert_eq!(doc.summary(), "Your raw document contains 10 words, 7 were deleted, 3 remain.");
    }

    #[test]
    fn test_to_json() {
        let doc = StrippedDocument::new("some text".to_string(), 5);
        let json = doc.to_json().unwrap();
        assert_eq!(json["text"], "some text");
        assert_eq!(json["raw_word_count"], 5);
        assert_eq!(json["word_count"], 2);
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("  spaced   out  "), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("one"), 1);
    }
}
