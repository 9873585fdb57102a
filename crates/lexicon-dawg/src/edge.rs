// Packed edge record for the DAWG edge table.

use bytemuck::{Pod, Zeroable};

/// Size of one serialized edge record in bytes.
pub const EDGE_SIZE: usize = 4;

/// Largest children offset a record can hold (24 bits).
pub const MAX_CHILDREN_OFFSET: u32 = 0x00FF_FFFF;

const LETTER_MASK: u32 = 0x1F;
const LAST_EDGE_BIT: u32 = 1 << 5;
const ACCEPT_BIT: u32 = 1 << 6;
const CHILDREN_SHIFT: u32 = 8;

/// One transition out of a DAWG node (4 bytes).
///
/// The record is kept as the host-order `u32` obtained by reading the
/// big-endian value from the file. Fields are extracted with explicit masks
/// so the layout does not depend on the host's bit-field conventions:
///
/// - bits 0-4: letter code (1-26 for `a`-`z`, 0 unused)
/// - bit 5: last edge of its run
/// - bit 6: accepting (the path through this edge spells a word)
/// - bit 7: unused
/// - bits 8-31: offset of the first edge of the children run (0 = none)
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Edge(u32);

impl Edge {
    /// Pack an edge. `children` is truncated to 24 bits and `letter` to 5.
    #[inline]
    pub fn new(letter: u8, is_last: bool, is_accepting: bool, children: u32) -> Self {
        let mut raw = (letter as u32) & LETTER_MASK;
        if is_last {
            raw |= LAST_EDGE_BIT;
        }
        if is_accepting {
            raw |= ACCEPT_BIT;
        }
        raw |= (children & MAX_CHILDREN_OFFSET) << CHILDREN_SHIFT;
        Self(raw)
    }

    /// Decode from the raw host-order value.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw host-order value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Decode from the 4 big-endian bytes of a serialized record.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; EDGE_SIZE]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Encode to the 4 big-endian bytes of a serialized record.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; EDGE_SIZE] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub fn letter(self) -> u8 {
        (self.0 & LETTER_MASK) as u8
    }

    #[inline]
    pub fn is_last(self) -> bool {
        self.0 & LAST_EDGE_BIT != 0
    }

    #[inline]
    pub fn is_accepting(self) -> bool {
        self.0 & ACCEPT_BIT != 0
    }

    #[inline]
    pub fn children(self) -> u32 {
        self.0 >> CHILDREN_SHIFT
    }

    #[inline]
    pub fn has_children(self) -> bool {
        self.children() != 0
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Edge")
            .field("letter", &self.letter())
            .field("last", &self.is_last())
            .field("accept", &self.is_accepting())
            .field("children", &self.children())
            .finish()
    }
}

/// Decode a big-endian edge table into owned, host-order edges.
///
/// The bytes are copied into an aligned `Vec<Edge>` first (the source slice
/// may sit at any offset in the file) and then byte-swapped in place.
/// `table.len()` must be a multiple of [`EDGE_SIZE`].
pub fn decode_table(table: &[u8]) -> Vec<Edge> {
    let count = table.len() / EDGE_SIZE;
    let mut edges = vec![Edge::default(); count];
    bytemuck::cast_slice_mut::<Edge, u8>(&mut edges).copy_from_slice(&table[..count * EDGE_SIZE]);
    for edge in &mut edges {
        edge.0 = u32::from_be(edge.0);
    }
    edges
}

/// Encode edges as a big-endian table.
pub fn encode_table(edges: &[Edge], out: &mut Vec<u8>) {
    out.reserve(edges.len() * EDGE_SIZE);
    for edge in edges {
        out.extend_from_slice(&edge.to_be_bytes());
    }
}

const _: () = assert!(size_of::<Edge>() == EDGE_SIZE);
