//! Cache of parsed query trees.
//!
//! Parsing depends on the analysis configuration, so a cache is bound to the
//! [`IndexConfig`] it was created with and every index sharing it uses that
//! configuration. The cache is keyed by the raw expression string.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::config::IndexConfig;
use crate::error::{Result, TextMatchError};
use crate::query::QueryNode;
use crate::query::parser::QueryParser;

/// Thread-safe cache of parsed queries, shareable between indexes.
#[derive(Debug)]
pub struct QueryCache {
    config: IndexConfig,
    parser: QueryParser,
    queries: RwLock<AHashMap<String, Arc<QueryNode>>>,
}

impl QueryCache {
    pub fn new(config: IndexConfig) -> Self {
        QueryCache {
            parser: QueryParser::from_config(&config),
            config,
            queries: RwLock::new(AHashMap::new()),
        }
    }

    /// The configuration every query in this cache was parsed with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Parse `expression` without touching the cache.
    pub fn parse(&self, expression: &str) -> Result<Arc<QueryNode>> {
        self.parser
            .parse(expression)
            .map(Arc::new)
            .map_err(|e| TextMatchError::invalid_query(expression, e))
    }

    /// Return the cached tree for `expression`, parsing and caching it on a
    /// miss. Invalid expressions are never cached.
    pub fn get_or_parse(&self, expression: &str) -> Result<Arc<QueryNode>> {
        if let Some(query) = self.queries.read().get(expression) {
            trace!(expression, "query cache hit");
            return Ok(Arc::clone(query));
        }

        let query = self.parse(expression)?;
        let mut queries = self.queries.write();
        let cached = queries
            .entry(expression.to_string())
            .or_insert_with(|| Arc::clone(&query));
        Ok(Arc::clone(cached))
    }

    pub fn contains(&self, expression: &str) -> bool {
        self.queries.read().contains_key(expression)
    }

    pub fn len(&self) -> usize {
        self.queries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.read().is_empty()
    }

    pub fn clear(&self) {
        self.queries.write().clear();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        QueryCache::new(IndexConfig::default())
    }
}
