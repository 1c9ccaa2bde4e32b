//! Document loading: read a `.tex` file into one comment-free string.
//!
//! Comments are stripped per line before the lines are joined, because a
//! `%` silences everything to the end of its own physical line only.

use std::fs;
use std::path::PathBuf;

use regex::Regex;

use crate::{Result, TexproseError};

/// Matches from the first unescaped `%` to the end of the line. The
/// capture restores the non-backslash character preceding the `%`.
fn comment_pattern() -> Regex {
    Regex::new(r"(^|[^\\])%.*").unwrap()
}

/// Deletes a LaTeX comment from the end of a line.
///
/// Everything from the first unescaped `%` to the end of the line goes,
/// trailing whitespace with it. An escaped `\%` is a literal percent sign
/// and does not start a comment.
pub fn strip_comment(line: &str) -> String {
    strip_comment_with(&comment_pattern(), line)
}

fn strip_comment_with(pattern: &Regex, line: &str) -> String {
    pattern.replace(line, "$1").trim_end().to_string()
}

/// Reads a `.tex` file and flattens it into a single comment-free string.
///
/// Each line loses its comment and trailing whitespace; the lines are then
/// joined with single spaces so later stages can match across what were
/// originally line breaks. A missing or unreadable file is a fatal error.
pub fn load_flattened(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        return Err(TexproseError::FileNotFound(path_buf));
    }

    let raw = fs::read_to_string(&path_buf)?;
    let pattern = comment_pattern();
    let lines: Vec<String> = raw.lines().map(|line| strip_comment_with(&pattern, line)).collect();

    Ok(lines.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_strip_comment_drops_to_end_of_line() {
        assert_eq!(strip_comment("text % a comment"), "text");
    }

    #[test]
    fn test_strip_comment_whole_line() {
        assert_eq!(strip_comment("% nothing but comment"), "");
    }

    #[test]
    fn test_strip_comment_keeps_escaped_percent() {
        assert_eq!(strip_comment(r"100\% complete % this is a comment"), r"100\% complete");
    }

    #[test]
    fn test_strip_comment_no_comment() {
        assert_eq!(strip_comment("plain text"), "plain text");
    }

    #[test]
    fn test_strip_comment_trims_trailing_whitespace() {
        assert_eq!(strip_comment("trailing spaces   "), "trailing spaces");
    }

    #[test]
    fn test_strip_comment_idempotent() {
        for line in ["text % comment", r"100\% complete % note", "plain"] {
            let once = strip_comment(line);
            assert_eq!(strip_comment(&once), once);
        }
    }

    #[test]
    fn test_load_flattened_joins_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first line % comment").unwrap();
        writeln!(file, "second line").unwrap();
        let text = load_flattened(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "first line second line");
    }

    #[test]
    fn test_load_flattened_missing_file() {
        let result = load_flattened("/nonexistent/paper.tex");
        assert!(matches!(result, Err(TexproseError::FileNotFound(_))));
    }
}
