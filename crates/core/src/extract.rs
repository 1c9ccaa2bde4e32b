//! Body extraction: everything between `\begin{document}` and `\end{document}`.

use regex::Regex;

/// Extracts the body of a LaTeX document.
///
/// The span runs from the literal `\begin{document}` marker to the last
/// `\end{document}` marker and is returned with leading and trailing
/// whitespace trimmed. A document without both markers has no body; that
/// is reported on stderr and `None` comes back, so callers can treat the
/// empty result as a sign of malformed input rather than a crash.
pub fn extract_body(document: &str) -> Option<String> {
    let re = Regex::new(r"(?s)\\begin\{document\}(.*)\\end\{document\}").unwrap();
    match re.captures(document) {
        Some(caps) => caps.get(1).map(|body| body.as_str().trim().to_string()),
        None => {
            eprintln!("Document contains no body");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_body_returns_trimmed_interior() {
        let doc = r"\documentclass{article} \begin{document}  Some text here.  \end{document}";
        assert_eq!(extract_body(doc).unwrap(), "Some text here.");
    }

    #[test]
    fn test_extract_body_spans_flattened_lines() {
        let doc = r"\begin{document} first line second line \end{document}";
        assert_eq!(extract_body(doc).unwrap(), "first line second line");
    }

    #[test]
    fn test_extract_body_keeps_markup_inside() {
        let doc = r"\begin{document}\title{Sample Title} Some text \end{document}";
        assert_eq!(extract_body(doc).unwrap(), r"\title{Sample Title} Some text");
    }

    #[test]
    fn test_extract_body_greedy_to_last_end_marker() {
        let doc = r"\begin{document}a\end{document}b\end{document}";
        assert_eq!(extract_body(doc).unwrap(), r"a\end{document}b");
    }

    #[test]
    fn test_extract_body_no_markers() {
        assert_eq!(extract_body("no markers at all"), None);
    }

    #[test]
    fn test_extract_body_missing_end_marker() {
        assert_eq!(extract_body(r"\begin{document}unterminated"), None);
    }
}
