//! Shared building blocks for the lexicon crates.
//!
//! - [`character`] -- case folding and the `a`..`z` letter ordinals used by
//!   the binary edge records
//! - [`source`] -- the peek/advance interface implemented by every ordered
//!   word stream that takes part in a merged iteration

pub mod character;
pub mod source;

pub use character::{AsciiFold, CaseFold, UnicodeFold, fold_word};
pub use source::{IterSource, WordSource};
