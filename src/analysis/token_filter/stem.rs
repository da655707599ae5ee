//! Stemming filter and the [`Stemmer`] trait.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Reduces a single word to its stem.
pub trait Stemmer: Send + Sync {
    /// Stem a word.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod porter;

pub use porter::PorterStemmer;

/// A filter that replaces every token with its stem.
pub struct StemFilter {
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter using the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Box::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter using a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(move |token| {
            let stemmed = self.stemmer.stem(&token.text);
            token.with_text(stemmed)
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    struct TruncatingStemmer;

    impl Stemmer for TruncatingStemmer {
        fn stem(&self, word: &str) -> String {
            word.chars().take(3).collect()
        }

        fn name(&self) -> &'static str {
            "truncating"
        }
    }

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("running", 0),
            Token::new("flies", 1),
            Token::new("sky", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "fli");
        assert_eq!(result[2].text, "sky");
        assert_eq!(result[1].position, 1);
    }

    #[test]
    fn test_custom_stemmer() {
        let filter = StemFilter::with_stemmer(Box::new(TruncatingStemmer));
        let tokens = vec![Token::new("nebula", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result[0].text, "neb");
        assert_eq!(format!("{filter:?}"), "StemFilter { stemmer: \"truncating\" }");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
