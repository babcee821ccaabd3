//! Word-list languages and lookup
//!
//! Each language maps to a fixed table of 2048 words whose order encodes
//! the 11-bit word indices. Tables are static data compiled into the
//! library; lookup is exact string match with no trimming or normalization.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Number of words in every language table
pub const WORD_LIST_LEN: usize = 2048;

static ENGLISH: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let words: Vec<&'static str> = include_str!("wordlist/english.txt").lines().collect();
    assert_eq!(words.len(), WORD_LIST_LEN, "english word table is malformed");
    words
});

/// Supported word-list languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// The reference English table
    English,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// Get the ordered 2048-word table for this language
    pub fn word_list(self) -> &'static [&'static str] {
        match self {
            Language::English => &ENGLISH,
        }
    }

    /// Get the word at the given index, if it is in range
    pub fn word_of(self, index: u16) -> Option<&'static str> {
        self.word_list().get(usize::from(index)).copied()
    }

    /// Find the index of an exact word, case-sensitive.
    ///
    /// Tables are stored in sorted order, so lookup is a binary search.
    pub fn index_of(self, word: &str) -> Option<u16> {
        self.word_list().binary_search(&word).ok().map(|i| i as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let list = Language::English.word_list();
        assert_eq!(list.len(), WORD_LIST_LEN);
        assert!(list.windows(2).all(|w| w[0] < w[1]), "sorted and distinct");
    }

    #[test]
    fn test_known_indices() {
        let english = Language::English;
        assert_eq!(english.word_of(0), Some("abandon"));
        assert_eq!(english.word_of(2047), Some("zoo"));
        assert_eq!(english.index_of("abandon"), Some(0));
        assert_eq!(english.index_of("zoo"), Some(2047));
        assert_eq!(english.index_of("legal"), Some(1019));
    }

    #[test]
    fn test_lookup_is_exact() {
        let english = Language::English;
        assert_eq!(english.index_of("Abandon"), None);
        assert_eq!(english.index_of(" abandon"), None);
        assert_eq!(english.index_of("notaword"), None);
        assert_eq!(english.index_of(""), None);
    }
}
