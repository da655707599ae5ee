//! Postings and posting lists.
//!
//! A [`PostingList`] holds one [`Posting`] per document containing the term,
//! sorted by document id. Each posting keeps the term's positions in that
//! document in strictly increasing order, which phrase evaluation relies on.

use crate::index::DocId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    pub positions: Vec<u32>,
}

impl Posting {
    pub fn with_positions(doc_id: DocId, positions: Vec<u32>) -> Self {
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "positions must be strictly increasing"
        );
        Posting { doc_id, positions }
    }

    /// Record the next occurrence of the term.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not greater than the last recorded position.
    pub fn add_position(&mut self, position: u32) {
        if let Some(&last) = self.positions.last() {
            assert!(
                position > last,
                "position {position} added after {last} for document {}",
                self.doc_id
            );
        }
        self.positions.push(position);
    }

    /// Term frequency within the document.
    pub fn frequency(&self) -> u32 {
        self.positions.len() as u32
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostingList {
    postings: Vec<Posting>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList::default()
    }

    /// Insert a posting, keeping the list sorted by document id. A posting
    /// for a document already present is merged into the existing one.
    pub fn add_posting(&mut self, posting: Posting) {
        match self
            .postings
            .binary_search_by_key(&posting.doc_id, |p| p.doc_id)
        {
            Ok(pos) => {
                let existing = &mut self.postings[pos];
                for position in posting.positions {
                    existing.add_position(position);
                }
            }
            Err(pos) => self.postings.insert(pos, posting),
        }
    }

    /// Look up the posting for a document.
    pub fn get(&self, doc_id: DocId) -> Option<&Posting> {
        self.postings
            .binary_search_by_key(&doc_id, |p| p.doc_id)
            .ok()
            .map(|pos| &self.postings[pos])
    }

    /// Number of documents containing the term.
    pub fn doc_frequency(&self) -> usize {
        self.postings.len()
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Posting> {
        self.postings.iter()
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a Posting;
    type IntoIter = std::slice::Iter<'a, Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.iter()
    }
}
