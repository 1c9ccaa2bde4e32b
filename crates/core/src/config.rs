//! Strip configuration: which environments, commands, and stopwords to delete.
//!
//! All lists default to the sets that work well on physics-style preprints,
//! and every list can be overridden independently through the builder.
//!
//! # Example
//!
//! ```rust
//! use texprose_core::StripConfig;
//!
//! let config = StripConfig::builder()
//!     .environments(["figure", "table"])
//!     .stopwords(["Chapter"])
//!     .build();
//! assert_eq!(config.environments, vec!["figure", "table"]);
//! ```

/// Default list of environments whose whole blocks are stripped.
pub const DEFAULT_ENVIRONMENTS: &[&str] =
    &["abstract", "equation", "eqnarray", "figure", "tabular", "align", "subequations"];

/// Default list of commands taking a required brace argument.
pub const DEFAULT_BRACED_COMMANDS: &[&str] = &[
    "date",
    "label",
    "eqref",
    "ref",
    "cite",
    "fig",
    "bibliography",
    "title",
    "subsubsection",
    "subsection",
    "section",
    "author",
    "affiliation",
    "textcolor",
];

/// Default list of braced commands that also accept a leading `[...]` option.
pub const DEFAULT_OPTIONED_COMMANDS: &[&str] = &["email"];

/// Default list of commands taking no argument.
pub const DEFAULT_UNBRACED_COMMANDS: &[&str] =
    &["centering", "clearpage", "itemize", "item", "maketitle", "emph", "enumerate"];

/// Default list of stopword patterns: numbering-reference words and
/// abbreviations that carry no weight in a bag-of-words analysis.
pub const DEFAULT_STOPWORDS: &[&str] = &["Eq", "Figure", "Appendix", "Section", "et al", r"Fig\.", r"Sec\."];

/// Configuration for LaTeX stripping.
///
/// Each list drives one substitution stage of the pipeline. Stopword
/// entries are small regex fragments; the other lists hold literal
/// environment and command names.
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Environment names whose `\begin{..}...\end{..}` blocks are deleted.
    pub environments: Vec<String>,
    /// Command names deleted together with their `{...}` argument.
    pub braced_commands: Vec<String>,
    /// Braced command names that may carry a leading `[...]` option,
    /// deleted along with the command.
    pub optioned_commands: Vec<String>,
    /// Command names deleted as bare `\name` tokens.
    pub unbraced_commands: Vec<String>,
    /// Literal tokens and regex fragments deleted wherever they occur.
    pub stopwords: Vec<String>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            environments: to_owned_list(DEFAULT_ENVIRONMENTS),
            braced_commands: to_owned_list(DEFAULT_BRACED_COMMANDS),
            optioned_commands: to_owned_list(DEFAULT_OPTIONED_COMMANDS),
            unbraced_commands: to_owned_list(DEFAULT_UNBRACED_COMMANDS),
            stopwords: to_owned_list(DEFAULT_STOPWORDS),
        }
    }
}

impl StripConfig {
    /// Creates a new builder for StripConfig.
    pub fn builder() -> StripConfigBuilder {
        StripConfigBuilder::new()
    }
}

/// Builder for StripConfig.
///
/// Provides a fluent API so callers can replace any of the five lists
/// without touching the others.
pub struct StripConfigBuilder {
    config: StripConfig,
}

impl StripConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: StripConfig::default() }
    }

    /// Sets the environment list.
    pub fn environments<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.environments = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the braced-command list.
    pub fn braced_commands<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.braced_commands = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the list of braced commands accepting a bracketed option.
    pub fn optioned_commands<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.optioned_commands = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the unbraced-command list.
    pub fn unbraced_commands<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.unbraced_commands = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the stopword list.
    pub fn stopwords<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stopwords = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the config.
    pub fn build(self) -> StripConfig {
        self.config
    }
}

impl Default for StripConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
