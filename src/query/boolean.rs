//! Boolean combination of query results.
//!
//! - Conjunction keeps documents matched by every clause and sums their scores.
//!   Negated clauses subtract from the positive clauses instead of being
//!   materialized as complements.
//! - Disjunction keeps documents matched by any clause. The summed score is
//!   multiplied by the fraction of clauses the document matched.
//! - Negation matches every stored document the child does not match, with a
//!   score of zero.

use ahash::AHashMap;

use crate::index::DocId;
use crate::index::inverted::InvertedIndex;
use crate::query::scorer::coord;
use crate::query::{DocScores, Query, QueryNode};

/// Documents matched by all `clauses`.
pub fn conjunction(clauses: &[QueryNode], index: &InvertedIndex) -> DocScores {
    let (negative, positive): (Vec<&QueryNode>, Vec<&QueryNode>) = clauses
        .iter()
        .partition(|clause| matches!(clause, QueryNode::Not(_)));

    let mut scores = match positive.split_first() {
        Some((first, rest)) => {
            let mut scores = first.evaluate(index);
            for clause in rest {
                if scores.is_empty() {
                    break;
                }
                let other = clause.evaluate(index);
                scores.retain(|doc_id, score| match other.get(doc_id) {
                    Some(other_score) => {
                        *score += other_score;
                        true
                    }
                    None => false,
                });
            }
            scores
        }
        None => all_documents(index),
    };

    for clause in negative {
        if scores.is_empty() {
            break;
        }
        if let QueryNode::Not(child) = clause {
            let excluded = child.evaluate(index);
            scores.retain(|doc_id, _| !excluded.contains_key(doc_id));
        }
    }

    scores
}

/// Documents matched by any of `clauses`.
pub fn disjunction(clauses: &[QueryNode], index: &InvertedIndex) -> DocScores {
    let mut matches: AHashMap<DocId, (f32, usize)> = AHashMap::new();

    for clause in clauses {
        for (doc_id, score) in clause.evaluate(index) {
            let entry = matches.entry(doc_id).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }

    matches
        .into_iter()
        .map(|(doc_id, (score, matched))| (doc_id, score * coord(matched, clauses.len())))
        .collect()
}

/// Documents not matched by `clause`.
pub fn negation(clause: &QueryNode, index: &InvertedIndex) -> DocScores {
    let excluded = clause.evaluate(index);
    all_documents(index)
        .into_iter()
        .filter(|(doc_id, _)| !excluded.contains_key(doc_id))
        .collect()
}

fn all_documents(index: &InvertedIndex) -> DocScores {
    (0..index.doc_count() as DocId)
        .map(|doc_id| (doc_id, 0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::query::term::TermQuery;

    fn index(docs: &[&str]) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for doc in docs {
            let tokens = doc
                .split_whitespace()
                .enumerate()
                .map(|(position, word)| Token::new(word, position));
            index.add_document(doc.to_string(), tokens);
        }
        index
    }

    fn term(text: &str) -> QueryNode {
        QueryNode::Term(TermQuery::new(text))
    }

    fn not(node: QueryNode) -> QueryNode {
        QueryNode::Not(Box::new(node))
    }

    fn sorted(scores: &DocScores) -> Vec<DocId> {
        let mut docs: Vec<DocId> = scores.keys().copied().collect();
        docs.sort();
        docs
    }

    #[test]
    fn test_conjunction() {
        let index = index(&["comet tail", "comet", "tail", "comet tail tail"]);
        let scores = conjunction(&[term("comet"), term("tail")], &index);
        assert_eq!(sorted(&scores), vec![0, 3]);
        assert!(scores[&3] > scores[&0]);
    }

    #[test]
    fn test_conjunction_with_exclusion() {
        let index = index(&["comet tail", "comet", "tail"]);
        let scores = conjunction(&[term("comet"), not(term("tail"))], &index);
        assert_eq!(sorted(&scores), vec![1]);

        let scores = conjunction(&[not(term("tail")), not(term("comet"))], &index);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_disjunction_rewards_more_clauses() {
        let index = index(&["comet tail", "comet", "tail", "sky"]);
        let scores = disjunction(&[term("comet"), term("tail")], &index);
        assert_eq!(sorted(&scores), vec![0, 1, 2]);
        assert!(scores[&0] > scores[&1]);
        assert!(scores[&0] > scores[&2]);
    }

    #[test]
    fn test_negation() {
        let index = index(&["comet", "sky", "", "comet sky"]);
        let scores = negation(&term("comet"), &index);
        assert_eq!(sorted(&scores), vec![1, 2]);
        assert!(scores.values().all(|&score| score == 0.0));
    }
}
