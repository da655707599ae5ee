//! Term dictionary and document store.

use ahash::AHashMap;

use crate::analysis::token::Token;
use crate::index::DocId;
use crate::index::posting::{Posting, PostingList};

/// In-memory inverted index: term → postings, plus the raw text of every
/// document.
///
/// Document ids are assigned sequentially from 0 in insertion order and
/// every id referenced by a posting has an entry in the document store.
/// Terms never map to an empty posting list.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: AHashMap<String, PostingList>,
    documents: Vec<String>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Store `text` under the next document id and index its analyzed tokens.
    pub fn add_document<I>(&mut self, text: String, tokens: I) -> DocId
    where
        I: IntoIterator<Item = Token>,
    {
        let doc_id = self.documents.len() as DocId;

        let mut positions: AHashMap<String, Vec<u32>> = AHashMap::new();
        for token in tokens {
            positions
                .entry(token.text)
                .or_default()
                .push(token.position as u32);
        }

        for (term, term_positions) in positions {
            self.terms
                .entry(term)
                .or_default()
                .add_posting(Posting::with_positions(doc_id, term_positions));
        }

        self.documents.push(text);
        doc_id
    }

    /// Postings of `term`, if any document contains it.
    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// Number of documents containing `term`.
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map_or(0, PostingList::doc_frequency)
    }

    /// All indexed terms with their postings, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.terms.iter().map(|(term, list)| (term.as_str(), list))
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Raw text of a document.
    pub fn document(&self, doc_id: DocId) -> Option<&str> {
        self.documents.get(doc_id as usize).map(String::as_str)
    }

    /// Fail fast when a posting refers to a document that was never stored.
    ///
    /// # Panics
    ///
    /// Panics if `doc_id` is not in the document store.
    pub fn assert_document(&self, doc_id: DocId) {
        assert!(
            (doc_id as usize) < self.documents.len(),
            "posting references unknown document {doc_id} (document count {})",
            self.documents.len()
        );
    }

    /// Remove every document and term; the next document gets id 0.
    pub fn clear(&mut self) {
        self.terms.clear();
        self.documents.clear();
    }
}
