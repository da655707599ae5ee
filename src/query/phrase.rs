//! Phrase query implementation for exact and proximity phrase matching.
//!
//! With slop 0 the terms must occur at consecutive positions in order. With
//! slop `N` every term's positions are shifted back by its offset in the
//! phrase, and a window of one position per term matches when the spread of
//! the shifted positions is at most `N`. Each matching window contributes
//! `1 / (1 + spread)` to the phrase frequency, so tighter matches score
//! higher.

use crate::index::inverted::InvertedIndex;
use crate::query::scorer::{TfIdfScorer, idf};
use crate::query::{DocScores, Query};

#[derive(Debug, Clone, PartialEq)]
pub struct PhraseQuery {
    terms: Vec<String>,
    slop: u32,
}

impl PhraseQuery {
    pub fn new(terms: Vec<String>) -> Self {
        PhraseQuery { terms, slop: 0 }
    }

    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn slop(&self) -> u32 {
        self.slop
    }

    /// Number of consecutive in-order occurrences.
    fn exact_frequency(positions: &[&[u32]]) -> f32 {
        let Some((first, rest)) = positions.split_first() else {
            return 0.0;
        };

        first
            .iter()
            .filter(|&&start| {
                rest.iter().enumerate().all(|(i, list)| {
                    start
                        .checked_add(i as u32 + 1)
                        .is_some_and(|expected| list.binary_search(&expected).is_ok())
                })
            })
            .count() as f32
    }

    /// Sum of `1 / (1 + spread)` over windows within `slop`.
    fn sloppy_frequency(positions: &[&[u32]], slop: u32) -> f32 {
        let shifted: Vec<Vec<i64>> = positions
            .iter()
            .enumerate()
            .map(|(offset, list)| list.iter().map(|&p| i64::from(p) - offset as i64).collect())
            .collect();
        if shifted.iter().any(Vec::is_empty) {
            return 0.0;
        }

        let mut cursors = vec![0usize; shifted.len()];
        let mut freq = 0.0;

        loop {
            let mut min_slot = 0;
            let mut min = shifted[0][cursors[0]];
            let mut max = min;
            for (slot, list) in shifted.iter().enumerate().skip(1) {
                let value = list[cursors[slot]];
                if value < min {
                    min = value;
                    min_slot = slot;
                }
                max = max.max(value);
            }

            let spread = max - min;
            if spread <= i64::from(slop) && Self::distinct_positions(&shifted, &cursors) {
                freq += 1.0 / (1.0 + spread as f32);
            }

            cursors[min_slot] += 1;
            if cursors[min_slot] >= shifted[min_slot].len() {
                return freq;
            }
        }
    }

    /// A repeated term must not match the same token twice.
    fn distinct_positions(shifted: &[Vec<i64>], cursors: &[usize]) -> bool {
        let raw: Vec<i64> = cursors
            .iter()
            .enumerate()
            .map(|(offset, &cursor)| shifted[offset][cursor] + offset as i64)
            .collect();
        raw.iter()
            .enumerate()
            .all(|(i, position)| !raw[i + 1..].contains(position))
    }
}

impl Query for PhraseQuery {
    fn evaluate(&self, index: &InvertedIndex) -> DocScores {
        let mut lists = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            match index.postings(term) {
                Some(list) => lists.push(list),
                None => return DocScores::default(),
            }
        }
        let Some(rarest) = lists.iter().min_by_key(|list| list.doc_frequency()) else {
            return DocScores::default();
        };

        let total_docs = index.doc_count() as u64;
        let weight: f32 = lists
            .iter()
            .map(|list| idf(list.doc_frequency() as u64, total_docs))
            .sum();
        let scorer = TfIdfScorer::from_idf(weight);

        let mut scores = DocScores::default();
        for candidate in rarest.iter() {
            let positions: Option<Vec<&[u32]>> = lists
                .iter()
                .map(|list| list.get(candidate.doc_id).map(|posting| posting.positions()))
                .collect();
            let Some(positions) = positions else {
                continue;
            };

            let freq = if self.slop == 0 {
                Self::exact_frequency(&positions)
            } else {
                Self::sloppy_frequency(&positions, self.slop)
            };
            if freq > 0.0 {
                scores.insert(candidate.doc_id, scorer.score(freq));
            }
        }

        scores
    }

    fn description(&self) -> String {
        let phrase = format!("\"{}\"", self.terms.join(" "));
        if self.slop > 0 {
            format!("{phrase}~{}", self.slop)
        } else {
            phrase
        }
    }
}
