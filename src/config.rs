//! Configuration for analysis and indexing.
//!
//! Both structs derive `Serialize`/`Deserialize` with `#[serde(default)]`, so a
//! partial configuration document fills the missing fields from [`Default`].
//!
//! # Examples
//!
//! ```
//! use textmatch::config::{AnalyzerConfig, DefaultOperator, IndexConfig};
//!
//! let config = IndexConfig::default()
//!     .with_analyzer(AnalyzerConfig::default().with_stemming(false))
//!     .with_default_operator(DefaultOperator::And);
//!
//! assert!(config.analyzer.ignore_case);
//! assert!(!config.analyzer.enable_stemming);
//! ```

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Characters that separate tokens in addition to whitespace.
pub const DEFAULT_SEPARATORS: &str =
    ",:;.()?!@#%^&*|/\\+÷°±{}[]<>-`~'\"$£€¢¥©®™•§†‡–—¶";

/// Default maximum number of vocabulary terms a fuzzy term expands to.
pub const DEFAULT_MAX_FUZZY_EXPANSIONS: usize = 50;

/// Text analysis options shared by indexing and query parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Lowercase every token.
    pub ignore_case: bool,

    /// Apply the Porter stemmer to every token.
    pub enable_stemming: bool,

    /// Separator characters. Empty or whitespace-only falls back to
    /// [`DEFAULT_SEPARATORS`].
    pub separators: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            ignore_case: true,
            enable_stemming: true,
            separators: DEFAULT_SEPARATORS.to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_stemming(mut self, enable_stemming: bool) -> Self {
        self.enable_stemming = enable_stemming;
        self
    }

    pub fn with_separators<S: Into<String>>(mut self, separators: S) -> Self {
        self.separators = separators.into();
        self
    }

    /// Resolve the effective separator set, falling back to the default set
    /// when the configured one is unusable.
    pub fn separator_set(&self) -> AHashSet<char> {
        let configured: AHashSet<char> = self
            .separators
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if configured.is_empty() {
            warn!(
                separators = %self.separators.escape_debug(),
                "empty separator set, using defaults"
            );
            return DEFAULT_SEPARATORS.chars().collect();
        }

        configured
    }
}

/// How adjacent query clauses without an explicit operator are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultOperator {
    /// `comet tuttle` means `comet OR tuttle`.
    #[default]
    Or,
    /// `comet tuttle` means `comet AND tuttle`.
    And,
}

/// Configuration of a [`FullTextIndex`](crate::index::full_text::FullTextIndex).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub analyzer: AnalyzerConfig,
    pub default_operator: DefaultOperator,
    pub max_fuzzy_expansions: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            analyzer: AnalyzerConfig::default(),
            default_operator: DefaultOperator::Or,
            max_fuzzy_expansions: DEFAULT_MAX_FUZZY_EXPANSIONS,
        }
    }
}

impl IndexConfig {
    pub fn with_analyzer(mut self, analyzer: AnalyzerConfig) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_default_operator(mut self, operator: DefaultOperator) -> Self {
        self.default_operator = operator;
        self
    }

    pub fn with_max_fuzzy_expansions(mut self, max_expansions: usize) -> Self {
        self.max_fuzzy_expansions = max_expansions;
        self
    }
}
