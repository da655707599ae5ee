//! Bounded Levenshtein distance.
//!
//! Fuzzy expansion compares one query term against every indexed term, so
//! only the thresholded variant is provided: it abandons a comparison as soon
//! as no alignment can stay within the bound.

use std::cmp::min;

/// Calculate the Levenshtein distance between `s1` and `s2` over characters,
/// returning `None` when it exceeds `threshold`.
///
/// # Examples
///
/// ```
/// use textmatch::util::levenshtein::levenshtein_distance_threshold;
///
/// assert_eq!(levenshtein_distance_threshold("streak", "stream", 2), Some(1));
/// assert_eq!(levenshtein_distance_threshold("streak", "sky", 2), None);
/// ```
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    // The distance is at least the length difference
    if len1.abs_diff(len2) > threshold {
        return None;
    }
    if len1 == 0 || len2 == 0 {
        return Some(len1.max(len2));
    }

    // Two rows are enough
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}
