// Error types for word set loading and cursor access.

use std::path::{Path, PathBuf};

use lexicon_dawg::DawgError;

/// Error type for [`WordSet`](crate::WordSet) operations.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A word list could not be read or decoded. The word set is unchanged.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A binary lexicon was loaded into a word set whose automaton is
    /// already populated.
    #[error("cannot load a binary lexicon into a word set that already holds one")]
    State,

    /// A cursor was read or advanced at or past the end of the words.
    #[error("cursor position {position} is out of bounds for {len} words")]
    Bounds { position: usize, len: usize },
}

/// Why a word list failed to load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The binary lexicon is malformed (including a size field that does not
    /// match the file length).
    #[error("malformed binary lexicon{}: {source}", origin(.path))]
    Format {
        path: Option<PathBuf>,
        #[source]
        source: DawgError,
    },

    /// A line of a text word list is not valid UTF-8.
    #[error("word list{} line {line} is not valid UTF-8", origin(.path))]
    Encoding { path: Option<PathBuf>, line: usize },
}

impl LoadError {
    pub(crate) fn format(path: Option<&Path>, source: DawgError) -> Self {
        Self::Format {
            path: path.map(Path::to_path_buf),
            source,
        }
    }
}

fn origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" {}", p.display()),
        None => String::new(),
    }
}
