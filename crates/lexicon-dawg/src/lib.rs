//! DAWG (directed acyclic word graph) engine for binary lexicon files.
//!
//! This crate provides loading, validation, lookup and ordered traversal of
//! the packed edge tables used by binary lexicon resources, plus a compiler
//! that produces such tables from a word list.
//!
//! # Architecture
//!
//! - [`edge`] -- 32-bit edge record codec (shift/mask, host-order independent)
//! - [`format`] -- Binary framing: compact and legacy headers
//! - [`dawg`] -- Decoded, validated automaton with membership/prefix queries
//! - [`cursor`] -- Lazy depth-first word cursor (explicit stack)
//! - [`builder`] -- Minimal DAWG compiler and encoder

pub mod builder;
pub mod cursor;
pub mod dawg;
pub mod edge;
pub mod format;

pub use builder::{DawgBuilder, build_dawg};
pub use cursor::DawgWords;
pub use dawg::Dawg;
pub use edge::Edge;
pub use format::Framing;

/// Error type for binary lexicon parsing, validation and compilation.
#[derive(Debug, thiserror::Error)]
pub enum DawgError {
    #[error("file too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("edge table size mismatch: header declares {declared} bytes, file holds {actual}")]
    SizeMismatch { declared: usize, actual: usize },
    #[error("edge table length {0} is not a multiple of the record size")]
    MisalignedTable(usize),
    #[error("malformed lexicon header: {0}")]
    MalformedHeader(String),
    #[error("edge {edge} has invalid letter code {code}")]
    InvalidLetter { edge: u32, code: u8 },
    #[error("offset {offset} referenced by {referrer} is outside the edge table ({len} edges)")]
    OffsetOutOfRange {
        referrer: String,
        offset: u32,
        len: usize,
    },
    #[error("edge run starting at {start} is not terminated by a last-edge flag")]
    UnterminatedRun { start: u32 },
    #[error("edge run starting at {start} has more than one edge for letter code {code}")]
    DuplicateLetter { start: u32, code: u8 },
    #[error("edge table contains a cycle through the run starting at {start}")]
    Cycle { start: u32 },
    #[error("number of words in the automaton overflows")]
    WordCountOverflow,
    #[error("word {word:?} inserted after {previous:?}; input must be sorted")]
    OutOfOrder { previous: String, word: String },
    #[error("word {word:?} contains unsupported character {ch:?}")]
    UnsupportedCharacter { word: String, ch: char },
    #[error("automaton needs {0} edges, more than a 24-bit offset can address")]
    TooManyEdges(usize),
}
