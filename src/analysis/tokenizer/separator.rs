//! Separator-based tokenizer implementation.

use ahash::AHashSet;

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::config::DEFAULT_SEPARATORS;
use crate::error::Result;

/// A tokenizer that emits maximal runs of characters that are neither
/// whitespace nor one of its separator characters.
#[derive(Clone, Debug)]
pub struct SeparatorTokenizer {
    separators: AHashSet<char>,
}

impl SeparatorTokenizer {
    /// Create a tokenizer splitting on the given separator set.
    pub fn new(separators: AHashSet<char>) -> Self {
        SeparatorTokenizer { separators }
    }

    /// Create a tokenizer from a string of separator characters.
    pub fn from_chars(separators: &str) -> Self {
        Self::new(separators.chars().collect())
    }

    /// The separator characters in use.
    pub fn separators(&self) -> &AHashSet<char> {
        &self.separators
    }

    fn is_boundary(&self, c: char) -> bool {
        c.is_whitespace() || self.separators.contains(&c)
    }
}

impl Default for SeparatorTokenizer {
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

impl Tokenizer for SeparatorTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        Ok(Box::new(SeparatorTokens {
            tokenizer: self,
            text,
            offset: 0,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "separator"
    }
}

/// Lazy iterator behind [`SeparatorTokenizer::tokenize`].
struct SeparatorTokens<'a> {
    tokenizer: &'a SeparatorTokenizer,
    text: &'a str,
    offset: usize,
    position: usize,
}

impl Iterator for SeparatorTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.text[self.offset..];
        let start = rest.find(|c| !self.tokenizer.is_boundary(c))?;
        let word = &rest[start..];
        let len = word
            .find(|c| self.tokenizer.is_boundary(c))
            .unwrap_or(word.len());

        self.offset += start + len;
        let token = Token::new(&word[..len], self.position);
        self.position += 1;
        Some(token)
    }
}
