//! A compact, case-insensitive set of words.
//!
//! [`WordSet`] combines two stores:
//!
//! - an immutable DAWG decoded from a binary lexicon file
//!   ([`lexicon_dawg::Dawg`]), queried in time proportional to word length;
//! - an ordered overflow store for words added at runtime or loaded from a
//!   plain-text word list.
//!
//! Queries consult both; iteration merges both into a single ascending,
//! duplicate-free sequence of lowercase words.
//!
//! ```
//! use lexicon::WordSet;
//!
//! let mut words = WordSet::new();
//! words.add("Zebra");
//! words.add("apple");
//! assert!(words.contains("ZEBRA"));
//! assert!(words.contains_prefix("ze"));
//! assert_eq!(words.iter().collect::<Vec<_>>(), ["apple", "zebra"]);
//! ```
//!
//! # Architecture
//!
//! - [`word_set`] -- The `WordSet` type and its operations
//! - [`iter`] -- Position-tracking cursor over the merged words
//! - [`merge`] -- Two-way merge of ordered word sources
//! - [`overflow`] -- Ordered store for runtime and text-loaded words
//! - [`loader`] -- File reading and binary/text format detection
//! - [`hash`] -- Order-dependent rolling hash over the word sequence
//! - [`error`] -- Error types

pub mod error;
pub mod hash;
pub mod iter;
pub mod loader;
pub mod merge;
pub mod overflow;
pub mod word_set;

pub use error::{LexiconError, LoadError};
pub use iter::Words;
pub use lexicon_core::{AsciiFold, CaseFold, UnicodeFold};
pub use word_set::WordSet;
