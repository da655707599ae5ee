//! Text analysis: tokenization, case folding and stemming.
//!
//! Raw text flows through a [`Tokenizer`](tokenizer::Tokenizer), then through
//! a chain of [`Filter`](token_filter::Filter)s, assembled by an
//! [`Analyzer`](analyzer::Analyzer). Every stage is a lazy iterator adapter,
//! so analyzing a text allocates one `Token` per emitted term and nothing else.
//!
//! # Examples
//!
//! ```
//! use textmatch::analysis::analyzer::Analyzer;
//! use textmatch::analysis::analyzer::standard::StandardAnalyzer;
//! use textmatch::config::AnalyzerConfig;
//!
//! let analyzer = StandardAnalyzer::from_config(&AnalyzerConfig::default());
//! let terms: Vec<String> = analyzer
//!     .analyze("jogging last night")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["jog", "last", "night"]);
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
