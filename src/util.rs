//! Utility functions and data structures.

pub mod levenshtein;
