//! Error types for the TextMatch library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TextMatchError`] enum. Query syntax problems are reported by the parser
//! as a [`ParseError`] and surface to callers wrapped in
//! [`TextMatchError::InvalidQuery`] together with the offending expression.
//!
//! # Examples
//!
//! ```
//! use textmatch::error::{Result, TextMatchError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextMatchError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for TextMatch operations.
#[derive(Error, Debug)]
pub enum TextMatchError {
    /// A query expression could not be parsed, or parsed to an empty query.
    #[error("Invalid query '{expression}': {message}")]
    InvalidQuery {
        message: String,
        expression: String,
        #[source]
        source: Option<ParseError>,
    },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with TextMatchError.
pub type Result<T> = std::result::Result<T, TextMatchError>;

impl TextMatchError {
    /// Create an invalid query error wrapping a parse failure.
    pub fn invalid_query<S: Into<String>>(expression: S, source: ParseError) -> Self {
        TextMatchError::InvalidQuery {
            message: source.to_string(),
            expression: expression.into(),
            source: Some(source),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextMatchError::Analysis(msg.into())
    }

    /// The query expression attached to this error, if any.
    pub fn expression(&self) -> Option<&str> {
        match self {
            TextMatchError::InvalidQuery { expression, .. } => Some(expression),
            _ => None,
        }
    }
}

/// A structured query syntax error.
///
/// `position` is the character offset in the expression where the problem
/// was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason} at position {position}")]
pub struct ParseError {
    pub position: usize,
    pub reason: String,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new<S: Into<String>>(position: usize, reason: S) -> Self {
        ParseError {
            position,
            reason: reason.into(),
        }
    }
}
