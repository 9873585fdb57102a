// Binary lexicon framing: header detection, parsing and writing.

use crate::DawgError;
use crate::edge::EDGE_SIZE;

/// Size of the compact header (a single big-endian `u32`).
pub const COMPACT_HEADER_SIZE: usize = 4;

/// Edge index of the root run in compact files.
///
/// Children offset 0 means "no children", so no edge ever points back at the
/// root run and index 0 is free to hold it.
pub const COMPACT_ROOT: u32 = 0;

/// Magic prefix of legacy files (`DAWG:<start>:<bytes>:`).
pub const LEGACY_MAGIC: &[u8; 4] = b"DAWG";

/// Largest first byte of a compact header.
///
/// The table holds at most 2^24 records of 4 bytes, so its byte length fits
/// in 26 bits and the most significant header byte is at most 0x03.
const COMPACT_LEAD_MAX: u8 = 0x03;

/// Longest decimal field accepted in a legacy header.
const LEGACY_FIELD_MAX_DIGITS: usize = 10;

/// How the edge table is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// 4-byte big-endian table length, root run at [`COMPACT_ROOT`].
    #[default]
    Compact,
    /// ASCII `DAWG:<start>:<bytes>:` header with an explicit root index.
    Legacy,
}

/// Parsed header of a binary lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DawgHeader {
    pub framing: Framing,
    /// Edge index where the root run begins.
    pub start: u32,
    /// Byte offset of the edge table within the file.
    pub table_offset: usize,
    /// Byte length of the edge table.
    pub table_len: usize,
}

impl DawgHeader {
    /// Number of edge records in the table.
    pub fn edge_count(&self) -> usize {
        self.table_len / EDGE_SIZE
    }
}

/// Decide whether `data` is a binary lexicon and which framing it uses.
///
/// Returns `None` for anything else (plain-text word lists, empty files).
pub fn detect_framing(data: &[u8]) -> Option<Framing> {
    if data.starts_with(LEGACY_MAGIC) {
        Some(Framing::Legacy)
    } else if data.first().is_some_and(|&b| b <= COMPACT_LEAD_MAX) {
        Some(Framing::Compact)
    } else {
        None
    }
}

/// Parse and validate the header of a binary lexicon.
///
/// The declared table length must match the bytes that follow the header
/// exactly and must be a whole number of records.
pub fn parse_header(data: &[u8]) -> Result<DawgHeader, DawgError> {
    match detect_framing(data) {
        Some(Framing::Compact) => parse_compact(data),
        Some(Framing::Legacy) => parse_legacy(data),
        None => Err(DawgError::MalformedHeader(
            "not a binary lexicon".to_string(),
        )),
    }
}

fn parse_compact(data: &[u8]) -> Result<DawgHeader, DawgError> {
    if data.len() < COMPACT_HEADER_SIZE {
        return Err(DawgError::TooShort {
            expected: COMPACT_HEADER_SIZE,
            actual: data.len(),
        });
    }
    let declared = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    let table_len = check_table_len(declared, data.len() - COMPACT_HEADER_SIZE)?;
    Ok(DawgHeader {
        framing: Framing::Compact,
        start: COMPACT_ROOT,
        table_offset: COMPACT_HEADER_SIZE,
        table_len,
    })
}

fn parse_legacy(data: &[u8]) -> Result<DawgHeader, DawgError> {
    let mut pos = LEGACY_MAGIC.len();
    expect_colon(data, pos)?;
    pos += 1;
    let (start, next) = read_decimal(data, pos, "root index")?;
    pos = next;
    expect_colon(data, pos)?;
    pos += 1;
    let (declared, next) = read_decimal(data, pos, "table length")?;
    pos = next;
    expect_colon(data, pos)?;
    pos += 1;

    let table_len = check_table_len(declared as usize, data.len() - pos)?;
    Ok(DawgHeader {
        framing: Framing::Legacy,
        start,
        table_offset: pos,
        table_len,
    })
}

fn check_table_len(declared: usize, actual: usize) -> Result<usize, DawgError> {
    if declared % EDGE_SIZE != 0 {
        return Err(DawgError::MisalignedTable(declared));
    }
    if declared != actual {
        return Err(DawgError::SizeMismatch { declared, actual });
    }
    Ok(declared)
}

fn expect_colon(data: &[u8], pos: usize) -> Result<(), DawgError> {
    match data.get(pos) {
        Some(b':') => Ok(()),
        Some(&b) => Err(DawgError::MalformedHeader(format!(
            "expected ':' at byte {pos}, found 0x{b:02x}"
        ))),
        None => Err(DawgError::TooShort {
            expected: pos + 1,
            actual: data.len(),
        }),
    }
}

fn read_decimal(data: &[u8], pos: usize, what: &str) -> Result<(u32, usize), DawgError> {
    let digits = data[pos.min(data.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 || digits > LEGACY_FIELD_MAX_DIGITS {
        return Err(DawgError::MalformedHeader(format!(
            "invalid {what} at byte {pos}"
        )));
    }
    // digits are ASCII, so the slice is valid UTF-8
    let text = std::str::from_utf8(&data[pos..pos + digits])
        .map_err(|_| DawgError::MalformedHeader(format!("invalid {what} at byte {pos}")))?;
    let value = text
        .parse::<u32>()
        .map_err(|_| DawgError::MalformedHeader(format!("{what} out of range: {text}")))?;
    Ok((value, pos + digits))
}

/// Write the header for a table of `table_len` bytes whose root run starts at
/// `start`.
///
/// The compact framing has no root field; callers lay the root run out at
/// [`COMPACT_ROOT`].
pub fn write_header(framing: Framing, start: u32, table_len: usize, out: &mut Vec<u8>) {
    match framing {
        Framing::Compact => {
            debug_assert_eq!(start, COMPACT_ROOT);
            out.extend_from_slice(&(table_len as u32).to_be_bytes());
        }
        Framing::Legacy => {
            out.extend_from_slice(LEGACY_MAGIC);
            out.extend_from_slice(format!(":{start}:{table_len}:").as_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(table: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_header(Framing::Compact, COMPACT_ROOT, table.len(), &mut buf);
        buf.extend_from_slice(table);
        buf
    }

    #[test]
    fn detect_compact_and_legacy() {
        assert_eq!(detect_framing(&[0, 0, 0, 0]), Some(Framing::Compact));
        assert_eq!(detect_framing(b"DAWG:0:0:"), Some(Framing::Legacy));
        assert_eq!(detect_framing(b"apple\nbanana\n"), None);
        assert_eq!(detect_framing(b""), None);
    }

    #[test]
    fn detect_rejects_text_starting_with_d() {
        assert_eq!(detect_framing(b"dawg\n"), None);
        assert_eq!(detect_framing(b"DAW\n"), None);
    }

    #[test]
    fn parse_compact_header() {
        let data = compact(&[0u8; 8]);
        let header = parse_header(&data).unwrap();
        assert_eq!(header.framing, Framing::Compact);
        assert_eq!(header.start, COMPACT_ROOT);
        assert_eq!(header.table_offset, 4);
        assert_eq!(header.table_len, 8);
        assert_eq!(header.edge_count(), 2);
    }

    #[test]
    fn parse_empty_compact_table() {
        let header = parse_header(&[0, 0, 0, 0]).unwrap();
        assert_eq!(header.table_len, 0);
        assert_eq!(header.edge_count(), 0);
    }

    #[test]
    fn reject_compact_size_mismatch() {
        let mut data = compact(&[0u8; 8]);
        data.extend_from_slice(&[0u8; 4]); // trailing record not declared
        let err = parse_header(&data).unwrap_err();
        assert!(matches!(
            err,
            DawgError::SizeMismatch {
                declared: 8,
                actual: 12
            }
        ));
    }

    #[test]
    fn reject_compact_truncated() {
        let mut data = compact(&[0u8; 8]);
        data.truncate(9);
        let err = parse_header(&data).unwrap_err();
        assert!(matches!(err, DawgError::SizeMismatch { declared: 8, actual: 5 }));
    }

    #[test]
    fn reject_compact_too_short() {
        let err = parse_header(&[0, 0]).unwrap_err();
        assert!(matches!(
            err,
            DawgError::TooShort {
                expected: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn reject_misaligned_table() {
        let data = [0, 0, 0, 3, 1, 2, 3];
        let err = parse_header(&data).unwrap_err();
        assert!(matches!(err, DawgError::MisalignedTable(3)));
    }

    #[test]
    fn parse_legacy_header() {
        let mut data = b"DAWG:1:8:".to_vec();
        data.extend_from_slice(&[0u8; 8]);
        let header = parse_header(&data).unwrap();
        assert_eq!(header.framing, Framing::Legacy);
        assert_eq!(header.start, 1);
        assert_eq!(header.table_offset, 9);
        assert_eq!(header.table_len, 8);
    }

    #[test]
    fn legacy_header_round_trip() {
        let mut data = Vec::new();
        write_header(Framing::Legacy, 12, 40, &mut data);
        assert_eq!(data, b"DAWG:12:40:");
        data.extend_from_slice(&[0u8; 40]);
        let header = parse_header(&data).unwrap();
        assert_eq!(header.start, 12);
        assert_eq!(header.table_len, 40);
    }

    #[test]
    fn reject_legacy_missing_separator() {
        let err = parse_header(b"DAWG 0:0:").unwrap_err();
        assert!(matches!(err, DawgError::MalformedHeader(_)));
    }

    #[test]
    fn reject_legacy_non_numeric() {
        let err = parse_header(b"DAWG:x:0:").unwrap_err();
        assert!(matches!(err, DawgError::MalformedHeader(_)));
    }

    #[test]
    fn reject_legacy_overlong_field() {
        let err = parse_header(b"DAWG:99999999999:0:").unwrap_err();
        assert!(matches!(err, DawgError::MalformedHeader(_)));
    }

    #[test]
    fn reject_legacy_truncated_header() {
        let err = parse_header(b"DAWG:0:0").unwrap_err();
        assert!(matches!(err, DawgError::TooShort { .. }));
    }

    #[test]
    fn reject_legacy_size_mismatch() {
        let mut data = b"DAWG:0:8:".to_vec();
        data.extend_from_slice(&[0u8; 4]);
        let err = parse_header(&data).unwrap_err();
        assert!(matches!(err, DawgError::SizeMismatch { declared: 8, actual: 4 }));
    }

    #[test]
    fn reject_text_as_binary() {
        let err = parse_header(b"cat\ndog\n").unwrap_err();
        assert!(matches!(err, DawgError::MalformedHeader(_)));
    }
}
