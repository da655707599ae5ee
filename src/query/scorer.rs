//! TF-IDF scoring for ranking matches.
//!
//! The formulas follow the classic vector-space practical scoring function
//! without length normalization, so a document's score never decreases when
//! a matched term occurs once more:
//!
//! ```text
//! idf(t)      = 1 + ln(N / (df + 1))
//! score(t, d) = sqrt(tf) * idf(t)^2 * boost
//! ```

/// Inverse document frequency of a term found in `doc_freq` of `total_docs`
/// documents.
pub fn idf(doc_freq: u64, total_docs: u64) -> f32 {
    if total_docs == 0 {
        return 0.0;
    }
    1.0 + (total_docs as f32 / (doc_freq as f32 + 1.0)).ln()
}

/// Term-frequency factor.
pub fn tf(freq: f32) -> f32 {
    freq.sqrt()
}

/// Coordination factor rewarding documents that match more clauses of a
/// disjunction.
pub fn coord(matched: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    matched as f32 / total as f32
}

/// Scores occurrences of one term, or of a group of terms sharing a weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfIdfScorer {
    idf: f32,
    boost: f32,
}

impl TfIdfScorer {
    /// Scorer for a term with the given document frequency.
    pub fn new(doc_freq: u64, total_docs: u64) -> Self {
        Self::from_idf(idf(doc_freq, total_docs))
    }

    /// Scorer with a precomputed idf, e.g. the summed idf of phrase terms.
    pub fn from_idf(idf: f32) -> Self {
        TfIdfScorer { idf, boost: 1.0 }
    }

    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Score a document in which the term (or phrase) occurs `freq` times.
    pub fn score(&self, freq: f32) -> f32 {
        tf(freq) * self.idf * self.idf * self.boost
    }
}
