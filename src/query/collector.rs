//! Top-N collection of scored documents.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::index::DocId;
use crate::query::SearchHit;

/// Keeps the best `max_docs` hits seen so far.
///
/// Hits rank by descending score, then ascending document id, so the
/// collected order is total and independent of collection order.
#[derive(Debug)]
pub struct TopDocsCollector {
    max_docs: Option<usize>,
    hits: BinaryHeap<RankedHit>,
    total_hits: u64,
}

/// Heap entry ordered so that the worst hit is the greatest.
#[derive(Debug, Clone, Copy)]
struct RankedHit(SearchHit);

impl PartialEq for RankedHit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedHit {}

impl PartialOrd for RankedHit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedHit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .score
            .total_cmp(&self.0.score)
            .then_with(|| self.0.doc_id.cmp(&other.0.doc_id))
    }
}

impl TopDocsCollector {
    /// Collect at most `max_docs` hits, or all of them for `None`.
    pub fn new(max_docs: Option<usize>) -> Self {
        TopDocsCollector {
            max_docs,
            hits: BinaryHeap::new(),
            total_hits: 0,
        }
    }

    pub fn collect(&mut self, doc_id: DocId, score: f32) {
        self.total_hits += 1;
        let hit = RankedHit(SearchHit { doc_id, score });

        match self.max_docs {
            Some(0) => {}
            Some(max_docs) if self.hits.len() >= max_docs => {
                if let Some(worst) = self.hits.peek() {
                    if hit < *worst {
                        self.hits.pop();
                        self.hits.push(hit);
                    }
                }
            }
            _ => self.hits.push(hit),
        }
    }

    /// Number of hits offered to the collector, kept or not.
    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// Hits ranked best first.
    pub fn into_results(self) -> Vec<SearchHit> {
        self.hits
            .into_sorted_vec()
            .into_iter()
            .map(|RankedHit(hit)| hit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(hits: &[SearchHit]) -> Vec<DocId> {
        hits.iter().map(|hit| hit.doc_id).collect()
    }

    #[test]
    fn test_collects_in_rank_order() {
        let mut collector = TopDocsCollector::new(None);
        collector.collect(4, 0.5);
        collector.collect(1, 2.0);
        collector.collect(7, 1.0);

        assert_eq!(collector.total_hits(), 3);
        assert_eq!(ids(&collector.into_results()), vec![1, 7, 4]);
    }

    #[test]
    fn test_ties_break_by_ascending_doc_id() {
        let mut collector = TopDocsCollector::new(None);
        for doc_id in [9, 2, 5, 0] {
            collector.collect(doc_id, 1.0);
        }
        assert_eq!(ids(&collector.into_results()), vec![0, 2, 5, 9]);
    }

    #[test]
    fn test_truncates_to_max_docs() {
        let mut collector = TopDocsCollector::new(Some(2));
        collector.collect(3, 1.0);
        collector.collect(0, 0.1);
        collector.collect(8, 3.0);
        collector.collect(1, 1.0);

        assert_eq!(collector.total_hits(), 4);
        assert_eq!(ids(&collector.into_results()), vec![8, 1]);
    }

    #[test]
    fn test_zero_max_docs() {
        let mut collector = TopDocsCollector::new(Some(0));
        collector.collect(0, 1.0);
        assert!(collector.into_results().is_empty());
    }
}
