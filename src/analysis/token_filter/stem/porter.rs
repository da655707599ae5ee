//! Porter stemming algorithm implementation.
//!
//! This module implements the original Porter (1980) suffix-stripping
//! algorithm for English words.
//!
//! # Algorithm
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes, then terminal y → i
//! 2. Double suffixes to single ones: -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", -ness → "", etc.
//! 4. Remove -al, -ance, -ence, etc. when the stem is long enough
//! 5. Remove a final -e and reduce a final -ll
//!
//! Each rule is guarded by the *measure* `m` of the remaining stem, the number
//! of vowel/consonant sequences in `[C](VC){m}[V]`.
//!
//! # Examples
//!
//! ```
//! use textmatch::analysis::token_filter::stem::Stemmer;
//! use textmatch::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("rocketships"), "rocketship");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() <= 2 {
            return word.to_string();
        }

        let mut word = Word::new(chars);
        word.step1ab();
        if word.end > 1 {
            word.step1c();
            word.step2();
            word.step3();
            word.step4();
            word.step5();
        }
        word.into_string()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Working buffer for one word.
///
/// `end` is the length of the current word, `stem` the length of the stem
/// left by the last successful suffix match. Characters past `end` may be
/// stale and are never part of the result.
struct Word {
    b: Vec<char>,
    end: usize,
    stem: usize,
}

impl Word {
    fn new(b: Vec<char>) -> Self {
        let end = b.len();
        Word { b, end, stem: 0 }
    }

    fn into_string(self) -> String {
        self.b[..self.end].iter().collect()
    }

    fn last(&self) -> char {
        self.b[self.end - 1]
    }

    /// `true` if `b[i]` is a consonant.
    fn cons(&self, i: usize) -> bool {
        match self.b[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of consonant sequences between `0` and `stem`.
    fn measure(&self) -> usize {
        let limit = self.stem;
        let mut n = 0;
        let mut i = 0;

        loop {
            if i >= limit {
                return n;
            }
            if !self.cons(i) {
                break;
            }
            i += 1;
        }
        i += 1;

        loop {
            loop {
                if i >= limit {
                    return n;
                }
                if self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;

            loop {
                if i >= limit {
                    return n;
                }
                if !self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..self.stem).any(|i| !self.cons(i))
    }

    /// `true` if `b[i-1..=i]` is a double consonant.
    fn double_c(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.cons(i)
    }

    /// `true` if `b[i-2..=i]` is consonant-vowel-consonant and the last
    /// consonant is not w, x or y.
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.b[i], 'w' | 'x' | 'y')
    }

    /// Check for `suffix` at the end of the word, recording the stem length
    /// on a match.
    fn ends(&mut self, suffix: &str) -> bool {
        let len = suffix.chars().count();
        if len > self.end {
            return false;
        }
        let start = self.end - len;
        if !self.b[start..self.end].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.stem = start;
        true
    }

    fn set_to(&mut self, replacement: &str) {
        self.b.truncate(self.stem);
        self.b.extend(replacement.chars());
        self.end = self.b.len();
    }

    fn replace(&mut self, replacement: &str) {
        if self.measure() > 0 {
            self.set_to(replacement);
        }
    }

    /// Replace the first matching suffix from `rules` when `m > 0`.
    fn replace_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace(replacement);
                return;
            }
        }
    }

    fn step1ab(&mut self) {
        if self.last() == 's' {
            if self.ends("sses") {
                self.end -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b[self.end - 2] != 's' {
                self.end -= 1;
            }
        }

        if self.ends("eed") {
            if self.measure() > 0 {
                self.end -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.end = self.stem;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_c(self.end - 1) {
                if !matches!(self.last(), 'l' | 's' | 'z') {
                    self.end -= 1;
                }
            } else if self.measure() == 1 && self.cvc(self.end - 1) {
                self.set_to("e");
            }
        }
    }

    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let last = self.end - 1;
            self.b[last] = 'i';
        }
    }

    fn step2(&mut self) {
        if self.end < 2 {
            return;
        }
        let rules: &[(&str, &str)] = match self.b[self.end - 2] {
            'a' => &[("ational", "ate"), ("tional", "tion")],
            'c' => &[("enci", "ence"), ("anci", "ance")],
            'e' => &[("izer", "ize")],
            'l' => &[
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
            ],
            'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            's' => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            'g' => &[("logi", "log")],
            _ => return,
        };
        self.replace_first(rules);
    }

    fn step3(&mut self) {
        let rules: &[(&str, &str)] = match self.last() {
            'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            'i' => &[("iciti", "ic")],
            'l' => &[("ical", "ic"), ("ful", "")],
            's' => &[("ness", "")],
            _ => return,
        };
        self.replace_first(rules);
    }

    fn step4(&mut self) {
        if self.end < 2 {
            return;
        }
        let suffixes: &[&str] = match self.b[self.end - 2] {
            'a' => &["al"],
            'c' => &["ance", "ence"],
            'e' => &["er"],
            'i' => &["ic"],
            'l' => &["able", "ible"],
            'n' => &["ant", "ement", "ment", "ent"],
            'o' => &["ion", "ou"],
            's' => &["ism"],
            't' => &["ate", "iti"],
            'u' => &["ous"],
            'v' => &["ive"],
            'z' => &["ize"],
            _ => return,
        };

        let mut matched = false;
        for suffix in suffixes {
            if self.ends(suffix) {
                // -ion is only stripped after s or t
                if *suffix == "ion"
                    && !(self.stem >= 1 && matches!(self.b[self.stem - 1], 's' | 't'))
                {
                    continue;
                }
                matched = true;
                break;
            }
        }

        if matched && self.measure() > 1 {
            self.end = self.stem;
        }
    }

    fn step5(&mut self) {
        self.stem = self.end;
        if self.last() == 'e' {
            let m = self.measure();
            if m > 1 || (m == 1 && !(self.end >= 2 && self.cvc(self.end - 2))) {
                self.end -= 1;
            }
        }
        if self.last() == 'l' && self.double_c(self.end - 1) && self.measure() > 1 {
            self.end -= 1;
        }
    }
}
