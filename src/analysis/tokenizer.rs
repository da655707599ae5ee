//! Tokenizers split raw text into tokens.
//!
//! # Available Tokenizers
//!
//! - [`separator::SeparatorTokenizer`] - Splits on whitespace and a configurable
//!   set of separator characters
//!
//! # Examples
//!
//! ```
//! use textmatch::analysis::tokenizer::Tokenizer;
//! use textmatch::analysis::tokenizer::separator::SeparatorTokenizer;
//!
//! let tokenizer = SeparatorTokenizer::default();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The returned stream borrows both the tokenizer and the text, and is
/// produced lazily. Tokenizing the same text twice yields identical streams.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod separator;
