// Position-tracking cursor over the merged words of a word set.

use std::fmt;
use std::iter::FusedIterator;

use lexicon_core::WordSource;
use lexicon_dawg::DawgWords;

use crate::error::LexiconError;
use crate::merge::Merge;
use crate::overflow::OverflowWords;
use crate::word_set::WordSet;

/// Both stores of a word set merged into one ascending source.
pub(crate) type MergedWords<'a> = Merge<DawgWords<'a>, OverflowWords<'a>>;

/// Ascending cursor over the words of a [`WordSet`].
///
/// The cursor counts the words it has passed; the end position is the set's
/// length. Reading or advancing at the end through [`get`](Self::get) or
/// [`advance`](Self::advance) is a [`LexiconError::Bounds`] error, while the
/// [`Iterator`] interface simply returns `None`.
///
/// Two cursors are equal when they walk the same set and sit at the same
/// position.
pub struct Words<'a, F> {
    set: &'a WordSet<F>,
    position: usize,
    /// `None` for a cursor created at the end.
    source: Option<MergedWords<'a>>,
}

impl<'a, F> Words<'a, F> {
    pub(crate) fn begin(set: &'a WordSet<F>) -> Self {
        Self {
            set,
            position: 0,
            source: Some(set.merged()),
        }
    }

    pub(crate) fn end(set: &'a WordSet<F>) -> Self {
        Self {
            set,
            position: set.len(),
            source: None,
        }
    }

    /// Number of words passed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor has passed every word.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position >= self.set.len()
    }

    /// The word under the cursor.
    pub fn get(&self) -> Result<&str, LexiconError> {
        if self.is_end() {
            return Err(self.out_of_bounds());
        }
        self.source
            .as_ref()
            .and_then(|s| s.peek())
            .ok_or_else(|| self.out_of_bounds())
    }

    /// Step to the next word.
    pub fn advance(&mut self) -> Result<(), LexiconError> {
        if self.is_end() {
            return Err(self.out_of_bounds());
        }
        if let Some(source) = self.source.as_mut() {
            source.advance();
        }
        self.position += 1;
        Ok(())
    }

    fn out_of_bounds(&self) -> LexiconError {
        LexiconError::Bounds {
            position: self.position,
            len: self.set.len(),
        }
    }
}

impl<F> Iterator for Words<'_, F> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.get().ok()?.to_owned();
        self.position += 1;
        if let Some(source) = self.source.as_mut() {
            source.advance();
        }
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<F> ExactSizeIterator for Words<'_, F> {}

impl<F> FusedIterator for Words<'_, F> {}

impl<F> Clone for Words<'_, F> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            position: self.position,
            source: self.source.clone(),
        }
    }
}

impl<F> PartialEq for Words<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.set, other.set) && self.position == other.position
    }
}

impl<F> Eq for Words<'_, F> {}

impl<F> fmt::Debug for Words<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Words")
            .field("position", &self.position)
            .field("len", &self.set.len())
            .finish()
    }
}
