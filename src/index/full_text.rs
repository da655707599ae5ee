//! Full-text index over an append-only collection of texts.
//!
//! # Examples
//!
//! ```
//! use textmatch::index::full_text::FullTextIndex;
//!
//! let mut index = FullTextIndex::new();
//! index.add_all(["The Perseid meteor shower", "Comet Swift-Tuttle"]).unwrap();
//!
//! let hits = index.search("comet OR meteors", None, true).unwrap();
//! assert_eq!(hits.len(), 2);
//!
//! let hits = index.search("\"swift tuttle\"", Some(1), true).unwrap();
//! assert_eq!(hits, vec![1]);
//! ```

use std::ops::Range;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::token::Token;
use crate::config::{AnalyzerConfig, IndexConfig};
use crate::error::Result;
use crate::index::DocId;
use crate::index::cache::QueryCache;
use crate::index::inverted::InvertedIndex;
use crate::query::collector::TopDocsCollector;
use crate::query::{Query, SearchHit};

/// An in-memory inverted index bound to one analysis configuration.
///
/// Documents are appended with [`add`](Self::add) and get sequential ids from
/// 0. Every search sees all documents added before it. Parsed queries are
/// kept in a [`QueryCache`], which may be shared with other indexes using the
/// same configuration.
#[derive(Debug)]
pub struct FullTextIndex {
    config: IndexConfig,
    analyzer: StandardAnalyzer,
    index: InvertedIndex,
    cache: Arc<QueryCache>,
}

impl FullTextIndex {
    /// Create an empty index with stemming and case folding enabled and the
    /// default separators.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self::with_query_cache(Arc::new(QueryCache::new(config)))
    }

    /// Create an empty index using `cache` and the configuration it is bound
    /// to.
    pub fn with_query_cache(cache: Arc<QueryCache>) -> Self {
        let config = cache.config().clone();
        FullTextIndex {
            analyzer: StandardAnalyzer::from_config(&config.analyzer),
            config,
            index: InvertedIndex::new(),
            cache,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn query_cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Analyze and index one text, returning its document id.
    pub fn add<S: Into<String>>(&mut self, text: S) -> Result<DocId> {
        let text = text.into();
        let tokens: Vec<Token> = self.analyzer.analyze(&text)?.collect();
        let token_count = tokens.len();

        let doc_id = self.index.add_document(text, tokens);
        trace!(doc_id, token_count, "document indexed");
        Ok(doc_id)
    }

    /// Index texts in order, returning the range of ids they received.
    pub fn add_all<I, S>(&mut self, texts: I) -> Result<Range<DocId>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.index.doc_count() as DocId;
        for text in texts {
            self.add(text)?;
        }
        let end = self.index.doc_count() as DocId;

        debug!(
            added = end - start,
            doc_count = end,
            term_count = self.index.term_count(),
            "documents added"
        );
        Ok(start..end)
    }

    /// Remove every document; the next document gets id 0 again.
    ///
    /// With `preserve_cache` parsed queries survive. Otherwise the query
    /// cache is emptied, including for other indexes sharing it.
    pub fn clear(&mut self, preserve_cache: bool) {
        self.index.clear();
        if !preserve_cache {
            self.cache.clear();
        }
        trace!(preserve_cache, "index cleared");
    }

    /// Ranked ids of the documents matching `expression`.
    ///
    /// Results are ordered by descending score, ties by ascending id, and
    /// truncated to `top_n` when given. With `use_cache` the parsed query is
    /// taken from, or stored in, the query cache.
    ///
    /// # Errors
    ///
    /// [`TextMatchError::InvalidQuery`](crate::error::TextMatchError::InvalidQuery)
    /// when the expression is malformed or has no searchable terms. A valid
    /// query without matches returns an empty list.
    pub fn search(
        &self,
        expression: &str,
        top_n: Option<usize>,
        use_cache: bool,
    ) -> Result<Vec<DocId>> {
        Ok(self
            .search_hits(expression, top_n, use_cache)?
            .into_iter()
            .map(|hit| hit.doc_id)
            .collect())
    }

    /// Like [`search`](Self::search), keeping the scores.
    pub fn search_hits(
        &self,
        expression: &str,
        top_n: Option<usize>,
        use_cache: bool,
    ) -> Result<Vec<SearchHit>> {
        let query = if use_cache {
            self.cache.get_or_parse(expression)?
        } else {
            self.cache.parse(expression)?
        };

        let mut collector = TopDocsCollector::new(top_n);
        for (doc_id, score) in query.evaluate(&self.index) {
            self.index.assert_document(doc_id);
            collector.collect(doc_id, score);
        }

        let total_hits = collector.total_hits();
        let hits = collector.into_results();
        debug!(
            expression,
            total_hits,
            returned = hits.len(),
            "search completed"
        );
        Ok(hits)
    }

    /// `true` if at least one document matches `expression`.
    pub fn is_match(&self, expression: &str, use_cache: bool) -> Result<bool> {
        Ok(!self.search_hits(expression, Some(1), use_cache)?.is_empty())
    }

    /// Split `text` into normalized tokens the way an index configured with
    /// `config` would, without indexing anything.
    pub fn tokenize(text: &str, config: &AnalyzerConfig) -> Result<Vec<String>> {
        StandardAnalyzer::from_config(config).analyze_terms(text)
    }

    /// Raw text of a document.
    pub fn document(&self, doc_id: DocId) -> Option<&str> {
        self.index.document(doc_id)
    }

    pub fn doc_count(&self) -> usize {
        self.index.doc_count()
    }

    pub fn is_empty(&self) -> bool {
        self.index.doc_count() == 0
    }
}

impl Default for FullTextIndex {
    fn default() -> Self {
        Self::new()
    }
}
