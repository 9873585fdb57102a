// The word set: a compiled automaton plus an ordered overflow store.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use lexicon_core::{AsciiFold, CaseFold, WordSource, fold_word};
use lexicon_dawg::Dawg;

use crate::error::LexiconError;
use crate::hash::{self, HASH_MASK, HASH_SEED};
use crate::iter::{MergedWords, Words};
use crate::loader::{self, Contents};
use crate::merge::Merge;
use crate::overflow::OverflowStore;

/// A case-insensitive set of words.
///
/// Words loaded from a binary lexicon live in an immutable [`Dawg`]; every
/// other word (added at runtime or read from a text word list) lives in an
/// ordered overflow store. A word is never held by both, so the size is the
/// sum of the two.
///
/// All input is folded with `F` before it is stored or looked up. Iteration
/// yields the folded words of both stores in ascending byte order.
///
/// `Clone` is a deep copy of both stores.
#[derive(Clone, Default)]
pub struct WordSet<F = AsciiFold> {
    dawg: Dawg,
    overflow: OverflowStore,
    fold: F,
}

impl WordSet {
    /// An empty word set with ASCII case folding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a word set from a binary lexicon or a text word list.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let mut set = Self::new();
        set.add_words_from_file(path)?;
        Ok(set)
    }

    /// Load a word set from the contents of a binary lexicon or a text word
    /// list.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        let mut set = Self::new();
        set.add_words_from_bytes(data)?;
        Ok(set)
    }
}

impl<F> WordSet<F> {
    /// Number of words in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.dawg.len() + self.overflow.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every word, including the loaded automaton.
    pub fn clear(&mut self) {
        self.dawg = Dawg::new();
        self.overflow.clear();
    }

    /// Iterate the words in ascending order.
    pub fn iter(&self) -> Words<'_, F> {
        Words::begin(self)
    }

    /// Cursor positioned on the first word.
    pub fn begin(&self) -> Words<'_, F> {
        Words::begin(self)
    }

    /// Cursor positioned past the last word.
    pub fn end(&self) -> Words<'_, F> {
        Words::end(self)
    }

    /// Order-dependent hash over the words in iteration order.
    ///
    /// Equal sets have equal hash codes. The result is non-negative when
    /// read as an `i32`.
    pub fn hash_code(&self) -> u32 {
        let mut words = self.merged();
        let mut code = HASH_SEED;
        while let Some(word) = words.peek() {
            code = hash::combine(code, word);
            words.advance();
        }
        code & HASH_MASK
    }

    pub(crate) fn merged(&self) -> MergedWords<'_> {
        Merge::new(self.dawg.words(), self.overflow.words())
    }
}

impl<F: CaseFold> WordSet<F> {
    /// An empty word set that folds case with `fold`.
    pub fn with_case_fold(fold: F) -> Self {
        Self {
            dawg: Dawg::new(),
            overflow: OverflowStore::new(),
            fold,
        }
    }

    /// Add a word. Returns `true` if it was not already in the set.
    ///
    /// The empty word is never stored.
    pub fn add(&mut self, word: &str) -> bool {
        let word = fold_word(&self.fold, word);
        if word.is_empty() || self.dawg.contains(&word) {
            return false;
        }
        self.overflow.insert(word)
    }

    /// Add the words of a binary lexicon or a text word list.
    ///
    /// Text lines are trimmed, folded and added one by one. A binary lexicon
    /// can only be loaded while the set has no automaton; words already in
    /// the overflow store that the lexicon also holds are dropped from the
    /// overflow store so they are not counted twice. On error the set is
    /// unchanged.
    pub fn add_words_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), LexiconError> {
        let path = path.as_ref();
        let data = loader::read_file(path)?;
        self.load(&data, Some(path))
    }

    /// Like [`add_words_from_file`](Self::add_words_from_file), for contents
    /// already in memory.
    pub fn add_words_from_bytes(&mut self, data: &[u8]) -> Result<(), LexiconError> {
        self.load(data, None)
    }

    fn load(&mut self, data: &[u8], path: Option<&Path>) -> Result<(), LexiconError> {
        if loader::is_binary(data) && self.dawg.edge_count() > 0 {
            return Err(LexiconError::State);
        }
        match loader::parse(data, path)? {
            Contents::Binary(dawg) => {
                self.overflow.retain(|w| !dawg.contains(w));
                self.dawg = dawg;
            }
            Contents::Text(lines) => {
                for line in lines {
                    self.add(line);
                }
            }
        }
        Ok(())
    }

    /// Whether `word` is in the set, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        let word = fold_word(&self.fold, word);
        self.dawg.contains(&word) || self.overflow.contains(&word)
    }

    /// Whether some word in the set starts with `prefix`, ignoring case.
    ///
    /// The empty prefix matches exactly when the set is not empty.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        let prefix = fold_word(&self.fold, prefix);
        self.dawg.contains_prefix(&prefix) || self.overflow.contains_prefix(&prefix)
    }
}

impl<F, G> PartialEq<WordSet<G>> for WordSet<F> {
    fn eq(&self, other: &WordSet<G>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut left = self.merged();
        let mut right = other.merged();
        loop {
            match (left.peek(), right.peek()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
            left.advance();
            right.advance();
        }
    }
}

impl<F> Eq for WordSet<F> {}

impl<F> Hash for WordSet<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl<F> fmt::Display for WordSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut words = self.merged();
        let mut first = true;
        while let Some(word) = words.peek() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{word:?}")?;
            first = false;
            words.advance();
        }
        f.write_str("}")
    }
}

impl<F> fmt::Debug for WordSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F: CaseFold, S: AsRef<str>> Extend<S> for WordSet<F> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<F: CaseFold + Default, S: AsRef<str>> FromIterator<S> for WordSet<F> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::with_case_fold(F::default());
        set.extend(iter);
        set
    }
}

impl<'a, F> IntoIterator for &'a WordSet<F> {
    type Item = String;
    type IntoIter = Words<'a, F>;

    fn into_iter(self) -> Words<'a, F> {
        self.iter()
    }
}
