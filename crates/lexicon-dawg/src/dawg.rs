// Decoded automaton: validation, word counting and lookups.

use hashbrown::{HashMap, HashSet};
use lexicon_core::character::{letter_ordinal, ordinal_letter};

use crate::DawgError;
use crate::builder::DawgBuilder;
use crate::cursor::DawgWords;
use crate::edge::{self, EDGE_SIZE, Edge, MAX_CHILDREN_OFFSET};
use crate::format::{self, COMPACT_ROOT, Framing};

/// An immutable DAWG decoded from a binary lexicon.
///
/// Holds the edge table, the index of the root run and the number of words
/// spelled by accepting paths. The table is validated once at construction
/// (letters, offsets, run termination, acyclicity), so lookups and traversal
/// never index out of bounds afterwards.
///
/// `Clone` is a deep copy of the edge table.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Dawg {
    edges: Vec<Edge>,
    start: u32,
    word_count: usize,
}

impl std::fmt::Debug for Dawg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dawg")
            .field("edge_count", &self.edges.len())
            .field("start", &self.start)
            .field("word_count", &self.word_count)
            .finish()
    }
}

/// DFS frame used while validating and counting.
struct CountFrame {
    start: u32,
    end: u32,
    next: u32,
    count: usize,
}

impl Dawg {
    /// An automaton with no edges and no words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a binary lexicon (compact or legacy framing).
    pub fn from_bytes(data: &[u8]) -> Result<Self, DawgError> {
        let header = format::parse_header(data)?;
        let table = &data[header.table_offset..header.table_offset + header.table_len];
        Self::from_edges(edge::decode_table(table), header.start)
    }

    /// Build from host-order edges whose root run begins at `start`.
    ///
    /// Every run reachable from the root is validated and the words along
    /// accepting paths are counted. Shared subgraphs are counted once and
    /// their totals reused.
    pub fn from_edges(edges: Vec<Edge>, start: u32) -> Result<Self, DawgError> {
        if edges.is_empty() {
            if start != COMPACT_ROOT {
                return Err(DawgError::OffsetOutOfRange {
                    referrer: "root".to_string(),
                    offset: start,
                    len: 0,
                });
            }
            return Ok(Self::new());
        }
        if start as usize >= edges.len() {
            return Err(DawgError::OffsetOutOfRange {
                referrer: "root".to_string(),
                offset: start,
                len: edges.len(),
            });
        }
        let word_count = count_words(&edges, start)?;
        Ok(Self {
            edges,
            start,
            word_count,
        })
    }

    /// Number of words (accepting paths) in the automaton.
    #[inline]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of edge records in the table.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge index where the root run begins.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Look up a single edge by index.
    pub fn edge(&self, index: u32) -> Option<Edge> {
        self.edges.get(index as usize).copied()
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether `word` is spelled by an accepting path.
    ///
    /// `word` must already be folded to lowercase; any character outside
    /// `a`-`z` makes the lookup fail.
    pub fn contains(&self, word: &str) -> bool {
        self.trace(word).is_some_and(Edge::is_accepting)
    }

    /// Whether a path spelling `prefix` exists, accepting or not.
    ///
    /// The empty prefix is contained exactly when the automaton holds at
    /// least one word.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.trace(prefix).is_some()
    }

    /// Iterate the words in ascending order.
    pub fn words(&self) -> DawgWords<'_> {
        DawgWords::new(self)
    }

    /// Encode this automaton in the given framing.
    ///
    /// The compact framing requires the root run at index 0; an automaton
    /// loaded from a legacy file with another root is laid out again.
    pub fn to_bytes(&self, framing: Framing) -> Result<Vec<u8>, DawgError> {
        if framing == Framing::Compact && self.start != COMPACT_ROOT {
            let mut builder = DawgBuilder::new();
            for word in self.words() {
                builder.insert(&word)?;
            }
            return builder.build()?.to_bytes(framing);
        }
        if framing == Framing::Compact && self.edges.len() > MAX_CHILDREN_OFFSET as usize + 1 {
            return Err(DawgError::TooManyEdges(self.edges.len()));
        }
        let table_len = self.edges.len() * EDGE_SIZE;
        let mut out = Vec::with_capacity(table_len + 16);
        format::write_header(framing, self.start, table_len, &mut out);
        edge::encode_table(&self.edges, &mut out);
        Ok(out)
    }

    /// Follow `word` from the root, returning the edge for its last letter.
    fn trace(&self, word: &str) -> Option<Edge> {
        if self.edges.is_empty() {
            return None;
        }
        let mut run = Some(self.start);
        let mut last = None;
        for c in word.chars() {
            let code = letter_ordinal(c)?;
            let edge = self.find_edge(run?, code)?;
            run = edge.has_children().then(|| edge.children());
            last = Some(edge);
        }
        last
    }

    /// Linear scan of the run starting at `run` for `code` (at most 26 edges).
    fn find_edge(&self, run: u32, code: u8) -> Option<Edge> {
        for &edge in &self.edges[run as usize..] {
            if edge.letter() == code {
                return Some(edge);
            }
            if edge.is_last() {
                return None;
            }
        }
        None
    }
}

/// Validate the run starting at `start` and return the index of its last
/// edge.
fn check_run(edges: &[Edge], start: u32) -> Result<u32, DawgError> {
    let len = edges.len();
    let mut seen: u32 = 0;
    let mut index = start as usize;
    loop {
        let Some(&edge) = edges.get(index) else {
            return Err(DawgError::UnterminatedRun { start });
        };
        let code = edge.letter();
        if ordinal_letter(code).is_none() {
            return Err(DawgError::InvalidLetter {
                edge: index as u32,
                code,
            });
        }
        if seen & (1 << code) != 0 {
            return Err(DawgError::DuplicateLetter { start, code });
        }
        seen |= 1 << code;
        if edge.children() as usize >= len {
            return Err(DawgError::OffsetOutOfRange {
                referrer: format!("edge {index}"),
                offset: edge.children(),
                len,
            });
        }
        if edge.is_last() {
            return Ok(index as u32);
        }
        index += 1;
    }
}

/// Count accepting paths below the root run with an iterative post-order DFS.
///
/// Finished runs are memoized by start index; a run that is reached again
/// while still open means the table has a cycle.
fn count_words(edges: &[Edge], root: u32) -> Result<usize, DawgError> {
    let mut finished: HashMap<u32, usize> = HashMap::new();
    let mut open: HashSet<u32> = HashSet::new();

    let end = check_run(edges, root)?;
    open.insert(root);
    let mut stack = vec![CountFrame {
        start: root,
        end,
        next: root,
        count: 0,
    }];

    loop {
        let Some(frame) = stack.last_mut() else {
            return Ok(0);
        };

        if frame.next > frame.end {
            let (run, count) = (frame.start, frame.count);
            stack.pop();
            open.remove(&run);
            finished.insert(run, count);
            match stack.last_mut() {
                Some(parent) => {
                    parent.count = parent
                        .count
                        .checked_add(count)
                        .ok_or(DawgError::WordCountOverflow)?;
                }
                None => return Ok(count),
            }
            continue;
        }

        let edge = edges[frame.next as usize];
        frame.next += 1;
        if edge.is_accepting() {
            frame.count = frame
                .count
                .checked_add(1)
                .ok_or(DawgError::WordCountOverflow)?;
        }
        if !edge.has_children() {
            continue;
        }

        let child = edge.children();
        if let Some(&below) = finished.get(&child) {
            frame.count = frame
                .count
                .checked_add(below)
                .ok_or(DawgError::WordCountOverflow)?;
        } else if open.contains(&child) {
            return Err(DawgError::Cycle { start: child });
        } else {
            let end = check_run(edges, child)?;
            open.insert(child);
            stack.push(CountFrame {
                start: child,
                end,
                next: child,
                count: 0,
            });
        }
    }
}
