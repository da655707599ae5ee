//! Analyzers combine a tokenizer with token filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - Generic tokenizer + filter chain
//! - [`standard::StandardAnalyzer`] - The chain described by an
//!   [`AnalyzerConfig`](crate::config::AnalyzerConfig)

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that turn raw text into normalized tokens.
pub trait Analyzer: Send + Sync + std::fmt::Debug {
    /// Analyze the given text into a lazy stream of tokens.
    fn analyze<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze `text` and collect the token texts.
    fn analyze_terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

pub mod pipeline;
pub mod standard;
