//! Token filters transform token streams produced by tokenizers.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stemmer → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform a token stream.
///
/// Filters wrap the incoming stream and must stay lazy: no token is
/// produced before the consumer asks for it.
pub trait Filter: Send + Sync {
    /// Wrap `tokens` with this filter's transformation.
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stem;
