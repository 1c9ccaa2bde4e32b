//! The substitution stages: formulas, environments, commands, stopwords.
//!
//! Every stage is a best-effort, non-recursive regex pass. Nested braces
//! and nested same-named environments are not understood; the matcher
//! either leaves such markup in place or over-deletes to the first end
//! marker. That limitation is part of the contract, not something to patch
//! with a full parser.

use regex::{Regex, escape};

use crate::Result;

/// Deletes every inline math span `$...$`, delimiters included.
///
/// Display math `$$...$$` and escaped dollar signs get no special
/// treatment.
pub fn remove_formulas(text: &str) -> String {
    let re = Regex::new(r"\$[^$]+\$").unwrap();
    re.replace_all(text, "").to_string()
}

/// Deletes whole `\begin{name}...\end{name}` blocks for one environment.
///
/// Shortest match: the block ends at the first subsequent `\end{name}`,
/// so a nested environment of the same name mis-matches.
pub fn remove_environment(text: &str, name: &str) -> String {
    let name = escape(name);
    let re = Regex::new(&format!(r"(?s)\\begin\{{{name}\}}.+?\\end\{{{name}\}}")).unwrap();
    re.replace_all(text, "").to_string()
}

/// Deletes whole environment blocks for each name in the list.
pub fn remove_environments(text: &str, names: &[String]) -> String {
    let mut result = text.to_string();
    for name in names {
        result = remove_environment(&result, name);
    }
    result
}

/// Deletes `\name{...}` where the braced argument contains no nested `}`.
pub fn remove_braced_command(text: &str, name: &str) -> String {
    let name = escape(name);
    let re = Regex::new(&format!(r"\\{name}\{{[^}}]+\}}")).unwrap();
    re.replace_all(text, "").to_string()
}

/// Deletes `\name{...}` for each command name in the list.
pub fn remove_braced_commands(text: &str, names: &[String]) -> String {
    let mut result = text.to_string();
    for name in names {
        result = remove_braced_command(&result, name);
    }
    result
}

/// Deletes `\name[option]{...}`, the optional leading `[...]` included.
pub fn remove_optioned_command(text: &str, name: &str) -> String {
    let name = escape(name);
    let re = Regex::new(&format!(r"\\{name}(?:\[[^\]]*\])?\{{[^}}]+\}}")).unwrap();
    re.replace_all(text, "").to_string()
}

/// Deletes option-accepting braced commands for each name in the list.
pub fn remove_optioned_commands(text: &str, names: &[String]) -> String {
    let mut result = text.to_string();
    for name in names {
        result = remove_optioned_command(&result, name);
    }
    result
}

/// Deletes the bare `\name` token.
///
/// The match requires a word boundary after the name, so `\item` never
/// swallows the front of `\itemize` or of adjacent text.
pub fn remove_unbraced_command(text: &str, name: &str) -> String {
    let name = escape(name);
    let re = Regex::new(&format!(r"\\{name}\b")).unwrap();
    re.replace_all(text, "").to_string()
}

/// Deletes bare command tokens for each name in the list.
pub fn remove_unbraced_commands(text: &str, names: &[String]) -> String {
    let mut result = text.to_string();
    for name in names {
        result = remove_unbraced_command(&result, name);
    }
    result
}

/// Deletes every stopword pattern wherever it occurs.
///
/// Entries are literal tokens or small regex fragments, applied with no
/// word-boundary anchoring, so they also strip matching substrings inside
/// longer words. An invalid pattern is a configuration error.
pub fn remove_stopwords(text: &str, patterns: &[String]) -> Result<String> {
    let mut result = text.to_string();
    for pattern in patterns {
        let re = Regex::new(pattern)?;
        result = re.replace_all(&result, "").to_string();
    }
    Ok(result)
}
