//! The query tree.

use std::fmt;

use crate::index::inverted::InvertedIndex;
use crate::query::boolean::{conjunction, disjunction, negation};
use crate::query::fuzzy::FuzzyQuery;
use crate::query::phrase::PhraseQuery;
use crate::query::term::TermQuery;
use crate::query::wildcard::WildcardQuery;
use crate::query::{DocScores, Query};

/// A parsed query.
///
/// `And` and `Or` hold every operand of a chain of the same operator, so
/// `a OR b OR c` is one node with three clauses. `Group` records explicit
/// parentheses and `Boost` a `^` factor applied to its child's score.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    Term(TermQuery),
    Phrase(PhraseQuery),
    Wildcard(WildcardQuery),
    Fuzzy(FuzzyQuery),
    And(Vec<QueryNode>),
    Or(Vec<QueryNode>),
    Not(Box<QueryNode>),
    Group(Box<QueryNode>),
    Boost { query: Box<QueryNode>, boost: f32 },
}

impl QueryNode {
    /// Conjunction of `clauses`, or the clause itself when there is only one.
    pub fn and(mut clauses: Vec<QueryNode>) -> Option<QueryNode> {
        match clauses.len() {
            0 => None,
            1 => clauses.pop(),
            _ => Some(QueryNode::And(clauses)),
        }
    }

    /// Disjunction of `clauses`, or the clause itself when there is only one.
    pub fn or(mut clauses: Vec<QueryNode>) -> Option<QueryNode> {
        match clauses.len() {
            0 => None,
            1 => clauses.pop(),
            _ => Some(QueryNode::Or(clauses)),
        }
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, QueryNode::Not(_))
    }
}

impl Query for QueryNode {
    fn evaluate(&self, index: &InvertedIndex) -> DocScores {
        match self {
            QueryNode::Term(query) => query.evaluate(index),
            QueryNode::Phrase(query) => query.evaluate(index),
            QueryNode::Wildcard(query) => query.evaluate(index),
            QueryNode::Fuzzy(query) => query.evaluate(index),
            QueryNode::And(clauses) => conjunction(clauses, index),
            QueryNode::Or(clauses) => disjunction(clauses, index),
            QueryNode::Not(child) => negation(child, index),
            QueryNode::Group(child) => child.evaluate(index),
            QueryNode::Boost { query, boost } => {
                let mut scores = query.evaluate(index);
                for score in scores.values_mut() {
                    *score *= boost;
                }
                scores
            }
        }
    }

    fn description(&self) -> String {
        match self {
            QueryNode::Term(query) => query.description(),
            QueryNode::Phrase(query) => query.description(),
            QueryNode::Wildcard(query) => query.description(),
            QueryNode::Fuzzy(query) => query.description(),
            QueryNode::And(clauses) => join(clauses, " AND "),
            QueryNode::Or(clauses) => join(clauses, " OR "),
            QueryNode::Not(child) => format!("NOT {}", child.description()),
            QueryNode::Group(child) => match child.as_ref() {
                QueryNode::And(_) | QueryNode::Or(_) => child.description(),
                _ => format!("({})", child.description()),
            },
            QueryNode::Boost { query, boost } => format!("{}^{boost}", query.description()),
        }
    }
}

fn join(clauses: &[QueryNode], separator: &str) -> String {
    let parts: Vec<String> = clauses.iter().map(Query::description).collect();
    format!("({})", parts.join(separator))
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
