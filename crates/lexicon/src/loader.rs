// Word list file reading and format detection.

use std::path::Path;

use lexicon_dawg::Dawg;
use lexicon_dawg::format::detect_framing;

use crate::error::LoadError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decoded contents of a word list file.
#[derive(Debug)]
pub enum Contents<'a> {
    /// A compiled binary lexicon.
    Binary(Dawg),
    /// Trimmed, non-blank lines of a text word list, not yet case-folded.
    Text(Vec<&'a str>),
}

/// Read a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Whether `data` is a binary lexicon rather than a text word list.
pub fn is_binary(data: &[u8]) -> bool {
    detect_framing(data).is_some()
}

/// Decode `data` as a binary lexicon or a text word list.
///
/// `path` is only used to label errors.
pub fn parse<'a>(data: &'a [u8], path: Option<&Path>) -> Result<Contents<'a>, LoadError> {
    if is_binary(data) {
        let dawg = Dawg::from_bytes(data).map_err(|e| LoadError::format(path, e))?;
        return Ok(Contents::Binary(dawg));
    }
    parse_text(data, path).map(Contents::Text)
}

/// Split a text word list into trimmed, non-blank lines.
///
/// A leading byte order mark is skipped. Lines may end in `\n` or `\r\n`.
pub fn parse_text<'a>(data: &'a [u8], path: Option<&Path>) -> Result<Vec<&'a str>, LoadError> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut words = Vec::new();
    for (i, line) in data.split(|&b| b == b'\n').enumerate() {
        let line = std::str::from_utf8(line).map_err(|_| LoadError::Encoding {
            path: path.map(Path::to_path_buf),
            line: i + 1,
        })?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}
