//! Term query implementation for exact term matching.

use crate::index::inverted::InvertedIndex;
use crate::query::scorer::TfIdfScorer;
use crate::query::{DocScores, Query};

/// Matches documents containing an analyzed term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    term: String,
}

impl TermQuery {
    pub fn new<T: Into<String>>(term: T) -> Self {
        TermQuery { term: term.into() }
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

impl Query for TermQuery {
    fn evaluate(&self, index: &InvertedIndex) -> DocScores {
        let Some(postings) = index.postings(&self.term) else {
            return DocScores::default();
        };

        let scorer = TfIdfScorer::new(postings.doc_frequency() as u64, index.doc_count() as u64);
        postings
            .iter()
            .map(|posting| (posting.doc_id, scorer.score(posting.frequency() as f32)))
            .collect()
    }

    fn description(&self) -> String {
        self.term.clone()
    }
}
