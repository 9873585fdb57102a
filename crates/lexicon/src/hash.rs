// Rolling hash over words and word sequences.
//
// The hash is order dependent, which is sound for word sets because their
// iteration order is fixed (ascending), so equal sets hash equally.

/// Initial value of every hash.
pub const HASH_SEED: u32 = 5381;

/// Multiplier applied before adding each element.
pub const HASH_MULTIPLIER: u32 = 33;

/// Mask keeping results non-negative when read as `i32`.
pub const HASH_MASK: u32 = u32::MAX >> 1;

/// Hash the bytes of a single word.
pub fn hash_str(word: &str) -> u32 {
    let hash = word.bytes().fold(HASH_SEED, |h, b| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(b as u32)
    });
    hash & HASH_MASK
}

/// Fold the next word of a sequence into a running hash that started at
/// [`HASH_SEED`]. Mask the final value with [`HASH_MASK`].
#[inline]
pub fn combine(code: u32, word: &str) -> u32 {
    code.wrapping_mul(HASH_MULTIPLIER)
        .wrapping_add(hash_str(word))
}

/// Hash a sequence of words, combining each word's [`hash_str`].
pub fn hash_words<I, S>(words: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let code = words
        .into_iter()
        .fold(HASH_SEED, |code, w| combine(code, w.as_ref()));
    code & HASH_MASK
}
