//! # TextMatch
//!
//! An embeddable full-text matching engine for small, in-memory text
//! collections.
//!
//! ## Features
//!
//! - Separator tokenizer, case folding and Porter stemming
//! - Positional inverted index
//! - Query language with boolean operators, phrases, proximity, wildcards,
//!   fuzzy terms, grouping and boosts
//! - TF-IDF ranking with a stable tie-break
//! - Shareable parsed-query cache
//!
//! ```
//! use textmatch::prelude::*;
//!
//! let mut index = FullTextIndex::new();
//! index.add("While jogging last night, I saw rocketships streaking across the sky").unwrap();
//!
//! assert_eq!(index.search("\"rocketship sky\"~4", None, true).unwrap(), vec![0]);
//! assert!(index.search("comet", None, true).unwrap().is_empty());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod index;
pub mod matching;
pub mod query;
pub mod util;

pub mod prelude {
    pub use crate::config::{AnalyzerConfig, DefaultOperator, IndexConfig};
    pub use crate::error::{Result, TextMatchError};
    pub use crate::index::DocId;
    pub use crate::index::cache::QueryCache;
    pub use crate::index::full_text::FullTextIndex;
    pub use crate::matching::{
        MatchResult, MultiMatchResult, TextMatcher, match_many, match_queries, match_texts,
    };
    pub use crate::query::SearchHit;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
