//! Fuzzy query implementation using Levenshtein distance.
//!
//! The query term expands to the indexed terms within `max_edits` edits,
//! keeping at most `max_expansions` of them (closest first). Every expanded
//! term is scored with one blended idf, taken from the most frequent
//! expansion, so that a rare misspelling does not outrank the common word it
//! resembles. Each term's contribution is then scaled by its similarity
//! `1 - distance / min(len(query), len(term))`.

use tracing::trace;

use crate::config::DEFAULT_MAX_FUZZY_EXPANSIONS;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::PostingList;
use crate::query::scorer::TfIdfScorer;
use crate::query::{DocScores, Query};
use crate::util::levenshtein::levenshtein_distance_threshold;

/// Maximum edit distance when none is given.
pub const DEFAULT_MAX_EDITS: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyQuery {
    term: String,
    max_edits: u32,
    max_expansions: usize,
}

/// An indexed term accepted by a fuzzy query.
#[derive(Debug)]
struct Expansion<'a> {
    term: &'a str,
    distance: usize,
    postings: &'a PostingList,
}

impl FuzzyQuery {
    pub fn new<S: Into<String>>(term: S) -> Self {
        FuzzyQuery {
            term: term.into(),
            max_edits: DEFAULT_MAX_EDITS,
            max_expansions: DEFAULT_MAX_FUZZY_EXPANSIONS,
        }
    }

    pub fn with_max_edits(mut self, max_edits: u32) -> Self {
        self.max_edits = max_edits;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn max_edits(&self) -> u32 {
        self.max_edits
    }

    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    fn expand<'a>(&self, index: &'a InvertedIndex) -> Vec<Expansion<'a>> {
        let mut expansions: Vec<Expansion<'a>> = index
            .terms()
            .filter_map(|(term, postings)| {
                levenshtein_distance_threshold(&self.term, term, self.max_edits as usize).map(
                    |distance| Expansion {
                        term,
                        distance,
                        postings,
                    },
                )
            })
            .collect();

        expansions.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.term.cmp(b.term)));
        expansions.truncate(self.max_expansions);
        expansions
    }

    fn similarity(&self, term: &str, distance: usize) -> f32 {
        let shortest = self.term.chars().count().min(term.chars().count());
        if shortest == 0 {
            return if distance == 0 { 1.0 } else { 0.0 };
        }
        (1.0 - distance as f32 / shortest as f32).max(0.0)
    }
}

impl Query for FuzzyQuery {
    fn evaluate(&self, index: &InvertedIndex) -> DocScores {
        let expansions = self.expand(index);
        trace!(
            term = %self.term,
            max_edits = self.max_edits,
            expanded = expansions.len(),
            "fuzzy expanded"
        );

        let Some(max_doc_freq) = expansions.iter().map(|e| e.postings.doc_frequency()).max() else {
            return DocScores::default();
        };
        let blended = TfIdfScorer::new(max_doc_freq as u64, index.doc_count() as u64);

        let mut scores = DocScores::default();
        for expansion in &expansions {
            let scorer = blended.with_boost(self.similarity(expansion.term, expansion.distance));
            for posting in expansion.postings {
                *scores.entry(posting.doc_id).or_default() +=
                    scorer.score(posting.frequency() as f32);
            }
        }

        scores
    }

    fn description(&self) -> String {
        format!("{}~{}", self.term, self.max_edits)
    }
}
