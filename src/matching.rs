//! High-level matching over small text collections.
//!
//! Each call builds a throwaway [`FullTextIndex`], runs the query
//! expressions against it and reports which texts or expressions matched.
//!
//! # Examples
//!
//! ```
//! use textmatch::matching::{match_queries, match_texts};
//!
//! let texts = ["a bright comet", "the perseid meteor shower", "dark sky"];
//! let result = match_texts(&texts, "comet OR meteor", None).unwrap();
//! assert!(result.success());
//! assert_eq!(result.items(), &[0, 1]);
//!
//! let queries = ["meteor", "comet AND tail", "bright"];
//! let result = match_queries("a bright comet", &queries, None).unwrap();
//! assert_eq!(result.items(), &[2]);
//! ```

use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::IndexConfig;
use crate::error::Result;
use crate::index::full_text::FullTextIndex;

/// Ordered indices of the texts or expressions that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    items: Vec<usize>,
    success: bool,
}

impl MatchResult {
    pub fn new(items: Vec<usize>) -> Self {
        MatchResult {
            success: !items.is_empty(),
            items,
        }
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// `true` iff at least one item matched.
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<usize> {
        self.items
    }
}

impl Index<usize> for MatchResult {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.items[i]
    }
}

impl IntoIterator for MatchResult {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Per-text lists of matching expression indices, in text order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiMatchResult {
    items: Vec<Vec<usize>>,
    success: bool,
}

impl MultiMatchResult {
    pub fn new(items: Vec<Vec<usize>>) -> Self {
        MultiMatchResult {
            success: items.iter().any(|matched| !matched.is_empty()),
            items,
        }
    }

    /// Expression indices that matched text `i`.
    pub fn get(&self, i: usize) -> Option<&[usize]> {
        self.items.get(i).map(Vec::as_slice)
    }

    pub fn items(&self) -> &[Vec<usize>] {
        &self.items
    }

    /// `true` iff any text matched any expression.
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<usize>> {
        self.items.iter()
    }
}

impl IntoIterator for MultiMatchResult {
    type Item = Vec<usize>;
    type IntoIter = std::vec::IntoIter<Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Runs matching rounds with a fixed index configuration.
#[derive(Debug, Clone, Default)]
pub struct TextMatcher {
    config: IndexConfig,
}

impl TextMatcher {
    pub fn new(config: IndexConfig) -> Self {
        TextMatcher { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Indices of the `texts` matching `expression`, best first, at most
    /// `top_n` of them.
    pub fn match_texts<S: AsRef<str>>(
        &self,
        texts: &[S],
        expression: &str,
        top_n: Option<usize>,
    ) -> Result<MatchResult> {
        let mut index = FullTextIndex::with_config(self.config.clone());
        index.add_all(texts.iter().map(|text| text.as_ref()))?;

        let items = index
            .search(expression, Some(top_n.unwrap_or(texts.len())), false)?
            .into_iter()
            .map(|doc_id| doc_id as usize)
            .collect();
        Ok(MatchResult::new(items))
    }

    /// Indices of the `expressions` matching `text`, in expression order.
    ///
    /// Stops after `top_n` matches, which defaults to the number of
    /// expressions. Expressions after the stopping point are not parsed.
    pub fn match_queries<S: AsRef<str>>(
        &self,
        text: &str,
        expressions: &[S],
        top_n: Option<usize>,
    ) -> Result<MatchResult> {
        let limit = top_n.unwrap_or(expressions.len());
        let mut index = FullTextIndex::with_config(self.config.clone());
        index.add(text)?;

        let mut items = Vec::new();
        for (i, expression) in expressions.iter().enumerate() {
            if items.len() >= limit {
                break;
            }
            if index.is_match(expression.as_ref(), false)? {
                items.push(i);
            }
        }
        Ok(MatchResult::new(items))
    }

    /// For every text, the indices of the `expressions` matching it.
    ///
    /// With `cache_query` each expression is parsed once and the parsed tree
    /// reused for every text. Otherwise every text is matched against a
    /// fresh index and freshly parsed expressions. Either way every text gets
    /// its complete list. The first invalid expression fails the whole call.
    pub fn match_many<T, Q>(
        &self,
        texts: &[T],
        expressions: &[Q],
        cache_query: bool,
    ) -> Result<MultiMatchResult>
    where
        T: AsRef<str>,
        Q: AsRef<str>,
    {
        let mut items = Vec::with_capacity(texts.len());

        if cache_query {
            let mut index = FullTextIndex::with_config(self.config.clone());
            for text in texts {
                index.add(text.as_ref())?;
                items.push(Self::matching_expressions(&index, expressions, true)?);
                index.clear(true);
            }
        } else {
            for text in texts {
                let mut index = FullTextIndex::with_config(self.config.clone());
                index.add(text.as_ref())?;
                items.push(Self::matching_expressions(&index, expressions, false)?);
            }
        }

        let result = MultiMatchResult::new(items);
        debug!(
            texts = texts.len(),
            expressions = expressions.len(),
            cache_query,
            success = result.success(),
            "batch matching completed"
        );
        Ok(result)
    }

    fn matching_expressions<Q: AsRef<str>>(
        index: &FullTextIndex,
        expressions: &[Q],
        use_cache: bool,
    ) -> Result<Vec<usize>> {
        let mut matched = Vec::new();
        for (i, expression) in expressions.iter().enumerate() {
            if index.is_match(expression.as_ref(), use_cache)? {
                matched.push(i);
            }
        }
        Ok(matched)
    }
}

/// [`TextMatcher::match_texts`] with the default configuration.
pub fn match_texts<S: AsRef<str>>(
    texts: &[S],
    expression: &str,
    top_n: Option<usize>,
) -> Result<MatchResult> {
    TextMatcher::default().match_texts(texts, expression, top_n)
}

/// [`TextMatcher::match_queries`] with the default configuration.
pub fn match_queries<S: AsRef<str>>(
    text: &str,
    expressions: &[S],
    top_n: Option<usize>,
) -> Result<MatchResult> {
    TextMatcher::default().match_queries(text, expressions, top_n)
}

/// [`TextMatcher::match_many`] with the default configuration.
pub fn match_many<T, Q>(texts: &[T], expressions: &[Q], cache_query: bool) -> Result<MultiMatchResult>
where
    T: AsRef<str>,
    Q: AsRef<str>,
{
    TextMatcher::default().match_many(texts, expressions, cache_query)
}
