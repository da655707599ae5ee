//! Query parsing and evaluation.
//!
//! A query expression is turned into a [`QueryNode`] tree by the
//! [`QueryParser`](parser::QueryParser). Evaluating a tree against an
//! [`InvertedIndex`] yields the matching documents with their scores, which a
//! [`TopDocsCollector`](collector::TopDocsCollector) ranks.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use textmatch::analysis::analyzer::standard::StandardAnalyzer;
//! use textmatch::query::parser::QueryParser;
//!
//! let parser = QueryParser::new(Arc::new(StandardAnalyzer::default()));
//! let query = parser.parse("\"swift tuttle\" AND comets").unwrap();
//! assert_eq!(query.to_string(), "(\"swift tuttl\" AND comet)");
//! ```

use std::fmt::Debug;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::index::DocId;
use crate::index::inverted::InvertedIndex;

pub mod boolean;
pub mod collector;
pub mod fuzzy;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod phrase;
pub mod scorer;
pub mod term;
pub mod wildcard;

pub use node::QueryNode;

/// Matching documents and their scores.
pub type DocScores = AHashMap<DocId, f32>;

/// A ranked search result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f32,
}

/// A query that can be evaluated against an index.
///
/// Implementations are pure with respect to the index, so a parsed query can
/// be cached and evaluated any number of times.
pub trait Query: Send + Sync + Debug {
    /// Find every matching document and score it.
    fn evaluate(&self, index: &InvertedIndex) -> DocScores;

    /// Human readable form of the query, in query syntax.
    fn description(&self) -> String;
}
