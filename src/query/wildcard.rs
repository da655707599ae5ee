//! Wildcard query implementation for pattern matching.
//!
//! `*` matches any run of characters (including none) and `?` exactly one
//! character. The pattern is matched against whole indexed terms, and every
//! matching document receives the same constant score.

use std::sync::Arc;

use regex::Regex;
use tracing::trace;

use crate::error::{Result, TextMatchError};
use crate::index::inverted::InvertedIndex;
use crate::query::{DocScores, Query};

/// Score given to every document a wildcard matches.
const CONSTANT_SCORE: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct WildcardQuery {
    pattern: String,
    regex: Arc<Regex>,
}

impl WildcardQuery {
    pub fn new<S: Into<String>>(pattern: S) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Self::compile_pattern(&pattern)?;

        Ok(WildcardQuery {
            pattern,
            regex: Arc::new(regex),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// `true` if the pattern contains a wildcard character.
    pub fn is_pattern(text: &str) -> bool {
        text.contains(['*', '?'])
    }

    fn compile_pattern(pattern: &str) -> Result<Regex> {
        let mut regex_pattern = String::with_capacity(pattern.len() + 2);
        regex_pattern.push('^');

        let mut literal = [0u8; 4];
        for c in pattern.chars() {
            match c {
                '*' => regex_pattern.push_str(".*"),
                '?' => regex_pattern.push('.'),
                c => regex_pattern.push_str(&regex::escape(c.encode_utf8(&mut literal))),
            }
        }

        regex_pattern.push('$');

        Regex::new(&regex_pattern)
            .map_err(|e| TextMatchError::analysis(format!("Invalid wildcard pattern: {e}")))
    }

    pub fn matches(&self, term: &str) -> bool {
        self.regex.is_match(term)
    }
}

impl PartialEq for WildcardQuery {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Query for WildcardQuery {
    fn evaluate(&self, index: &InvertedIndex) -> DocScores {
        let mut scores = DocScores::default();
        let mut expanded = 0usize;

        for (term, postings) in index.terms() {
            if !self.matches(term) {
                continue;
            }
            expanded += 1;
            for posting in postings {
                scores.insert(posting.doc_id, CONSTANT_SCORE);
            }
        }

        trace!(pattern = %self.pattern, expanded, matched = scores.len(), "wildcard expanded");
        scores
    }

    fn description(&self) -> String {
        self.pattern.clone()
    }
}
