// src/tokenize.rs
//! Description → token multiset.
//!
//! Each whitespace-separated word loses at most one character at each end:
//! - the first character goes if it is not ASCII alphanumeric,
//! - the last character goes if it is not ASCII alphanumeric, `+`, `-` or `#`
//!   (so "c++", "c#" and "self-motivated" survive).
//!
//! Both checks look at the word's original ends. A one-character word is only checked
//! against the last-character rule, so "+" stays a token and "," disappears.
//! Whatever remains is lower-cased.

use indexmap::IndexMap;
use indexmap::map::Iter;

/// Per-description token counts, in first-occurrence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenCounts {
    counts: IndexMap<String, u64>,
}

impl TokenCounts {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.counts.len() }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// Number of tokens including repeats.
    pub fn total(&self) -> u64 { self.counts.values().sum() }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, u64> { self.counts.iter() }
}

impl<'a> IntoIterator for &'a TokenCounts {
    type Item = (&'a String, &'a u64);
    type IntoIter = Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter { self.counts.iter() }
}

impl<S: Into<String>> FromIterator<S> for TokenCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = TokenCounts::new();
        for tok in iter {
            counts.add(tok.into());
        }
        counts
    }
}

/// Tokenize one description. `None` yields an empty multiset.
pub fn tokenize(description: Option<&str>) -> TokenCounts {
    let Some(text) = description else {
        return TokenCounts::new();
    };
    text.split_whitespace().filter_map(normalize_word).collect()
}

#[inline]
fn keeps_first(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[inline]
fn keeps_last(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '#')
}

/// Normalize a single raw word, or `None` if nothing is left.
pub fn normalize_word(word: &str) -> Option<String> {
    let mut chars = word.char_indices();
    let (_, first) = chars.next()?;
    let (last_ix, last) = chars.next_back().unwrap_or((0, first));

    let core = if last_ix == 0 {
        // single character
        if keeps_last(first) { word } else { "" }
    } else {
        let start = if keeps_first(first) { 0 } else { first.len_utf8() };
        let end = if keeps_last(last) { word.len() } else { last_ix };
        &word[start..end]
    };

    if core.is_empty() { None } else { Some(core.to_lowercase()) }
}
