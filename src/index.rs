//! In-memory indexing.
//!
//! - [`posting`] - Postings and posting lists
//! - [`inverted`] - The term dictionary and document store
//! - [`cache`] - Parsed query cache, shareable between indexes
//! - [`full_text`] - [`FullTextIndex`](full_text::FullTextIndex), which ties
//!   analysis, indexing and query evaluation together

pub mod cache;
pub mod full_text;
pub mod inverted;
pub mod posting;

/// Document identifier, assigned sequentially from 0 in insertion order.
pub type DocId = u64;
