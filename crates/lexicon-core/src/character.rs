// Case folding and letter ordinals.
//
// Words are stored lowercase. The folding rule is a value owned by the word
// set rather than a free function so callers can swap it out in tests or
// when a lexicon needs full Unicode folding.

// ---------------------------------------------------------------------------
// Case folding
// ---------------------------------------------------------------------------

/// A per-character case folding rule.
pub trait CaseFold {
    /// Map one character to its folded (lowercase) form.
    fn fold(&self, c: char) -> char;
}

/// ASCII-only folding: `A`-`Z` become `a`-`z`, everything else is unchanged.
///
/// This is the default for word sets because the binary automaton only
/// stores `a`-`z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AsciiFold;

impl CaseFold for AsciiFold {
    #[inline]
    fn fold(&self, c: char) -> char {
        c.to_ascii_lowercase()
    }
}

/// Simple Unicode folding.
///
/// Uses Rust's built-in case mapping. Characters whose lowercase form expands
/// to more than one character are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnicodeFold;

impl CaseFold for UnicodeFold {
    fn fold(&self, c: char) -> char {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => c,
        }
    }
}

impl<F: CaseFold + ?Sized> CaseFold for &F {
    #[inline]
    fn fold(&self, c: char) -> char {
        (**self).fold(c)
    }
}

/// Fold every character of `word` into a new string.
pub fn fold_word<F: CaseFold + ?Sized>(folder: &F, word: &str) -> String {
    word.chars().map(|c| folder.fold(c)).collect()
}

// ---------------------------------------------------------------------------
// Letter ordinals
// ---------------------------------------------------------------------------

/// Number of letters representable in an edge record.
pub const LETTER_COUNT: u8 = 26;

/// Map `a`-`z` to the edge letter codes 1-26.
///
/// Returns `None` for anything else, including uppercase letters: callers
/// fold first.
#[inline]
pub fn letter_ordinal(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a' + 1)
    } else {
        None
    }
}

/// Map an edge letter code 1-26 back to `a`-`z`.
#[inline]
pub fn ordinal_letter(ordinal: u8) -> Option<char> {
    if (1..=LETTER_COUNT).contains(&ordinal) {
        Some((b'a' + ordinal - 1) as char)
    } else {
        None
    }
}
