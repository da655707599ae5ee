//! Token type flowing through the analysis pipeline.

use serde::{Deserialize, Serialize};

/// A single normalized unit of text and its ordinal position.
///
/// Positions count emitted tokens only, starting at 0, so separators and
/// whitespace never consume a position.
///
/// # Examples
///
/// ```
/// use textmatch::analysis::token::Token;
///
/// let token = Token::new("Comet", 3).with_text("comet");
/// assert_eq!(token.text, "comet");
/// assert_eq!(token.position, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Replace the text, keeping the position.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

/// A lazy stream of tokens borrowing from the analyzed text.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;
