// Ordered overflow store for words that live outside the automaton.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::ops::Bound;

use lexicon_core::IterSource;

/// Ordered set of folded words added at runtime or loaded from text.
///
/// Ordering is plain byte order, which matches the automaton's ascending
/// letter order for `a`-`z` words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowStore {
    words: BTreeSet<String>,
}

/// Iterator over the stored words as string slices.
#[derive(Debug, Clone)]
pub struct OverflowIter<'a>(btree_set::Iter<'a, String>);

impl<'a> Iterator for OverflowIter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// The overflow store as a merge input.
pub type OverflowWords<'a> = IterSource<'a, OverflowIter<'a>>;

impl OverflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Insert an already folded word. Returns `true` if it was not present.
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether some stored word starts with `prefix`.
    ///
    /// Only the first word not less than `prefix` needs checking: if any word
    /// has the prefix, the smallest such word sorts first in that range.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|w| w.starts_with(prefix))
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Keep only the words for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.words.retain(|w| keep(w));
    }

    pub fn iter(&self) -> OverflowIter<'_> {
        OverflowIter(self.words.iter())
    }

    /// The stored words as a merge input.
    pub fn words(&self) -> OverflowWords<'_> {
        IterSource::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_core::WordSource;

    fn store(words: &[&str]) -> OverflowStore {
        let mut s = OverflowStore::new();
        for w in words {
            s.insert(w.to_string());
        }
        s
    }

    #[test]
    fn insert_deduplicates() {
        let mut s = OverflowStore::new();
        assert!(s.insert("cat".to_string()));
        assert!(!s.insert("cat".to_string()));
        assert_eq!(s.len(), 1);
        assert!(s.contains("cat"));
        assert!(!s.contains("ca"));
    }

    #[test]
    fn prefix_range_lookup() {
        let s = store(&["apple", "banana", "band"]);
        assert!(s.contains_prefix("ban"));
        assert!(s.contains_prefix("band"));
        assert!(s.contains_prefix("a"));
        assert!(s.contains_prefix(""));
        assert!(!s.contains_prefix("bandana"));
        assert!(!s.contains_prefix("c"));
        assert!(!s.contains_prefix("aa"));
    }

    #[test]
    fn empty_prefix_on_empty_store() {
        assert!(!OverflowStore::new().contains_prefix(""));
    }

    #[test]
    fn words_source_is_ordered() {
        let s = store(&["pear", "apple", "fig"]);
        let mut src = s.words();
        let mut seen = Vec::new();
        while let Some(w) = src.peek() {
            seen.push(w.to_string());
            src.advance();
        }
        assert_eq!(seen, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn retain_and_clear() {
        let mut s = store(&["ant", "bee", "cow"]);
        s.retain(|w| w != "bee");
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["ant", "cow"]);
        s.clear();
        assert!(s.is_empty());
    }
}
