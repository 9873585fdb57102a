// Minimal DAWG compiler.
//
// Words are added in ascending order. Nodes along the previous word stay
// open until the next word diverges from them; closed nodes are replaced by
// an equivalent canonical node from the register, so equal suffixes end up
// shared.

use std::cmp::Ordering;

use hashbrown::HashMap;
use lexicon_core::character::{letter_ordinal, ordinal_letter};

use crate::DawgError;
use crate::dawg::Dawg;
use crate::edge::{Edge, MAX_CHILDREN_OFFSET};
use crate::format::COMPACT_ROOT;

/// An edge of a node under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PendingEdge {
    letter: u8,
    accept: bool,
    /// Registered node id + 1, or 0 when the edge has no children.
    child: u32,
}

/// A node is identified by its outgoing edges.
type NodeEdges = Vec<PendingEdge>;

/// Incremental builder for a minimal DAWG.
///
/// ```
/// use lexicon_dawg::DawgBuilder;
///
/// let mut builder = DawgBuilder::new();
/// for word in ["bat", "cat", "cats"] {
///     builder.insert(word).unwrap();
/// }
/// let dawg = builder.build().unwrap();
/// assert!(dawg.contains("cats"));
/// assert_eq!(dawg.len(), 3);
/// ```
#[derive(Debug)]
pub struct DawgBuilder {
    /// Canonical nodes, keyed by their edges.
    register: HashMap<NodeEdges, u32>,
    /// Open nodes along the previous word; `[0]` is the root.
    unchecked: Vec<NodeEdges>,
    previous: Vec<u8>,
    word_count: usize,
}

impl Default for DawgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DawgBuilder {
    pub fn new() -> Self {
        Self {
            register: HashMap::new(),
            unchecked: vec![Vec::new()],
            previous: Vec::new(),
            word_count: 0,
        }
    }

    /// Number of distinct words inserted so far.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add the next word.
    ///
    /// `word` must consist of `a`-`z` only and sort after the previous word;
    /// repeating the previous word is accepted and ignored, as is the empty
    /// word (it has no edge to carry the accepting flag).
    pub fn insert(&mut self, word: &str) -> Result<(), DawgError> {
        let codes = word
            .chars()
            .map(|ch| {
                letter_ordinal(ch).ok_or_else(|| DawgError::UnsupportedCharacter {
                    word: word.to_string(),
                    ch,
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        if codes.is_empty() {
            return Ok(());
        }

        match codes.cmp(&self.previous) {
            Ordering::Equal => return Ok(()),
            Ordering::Less => {
                return Err(DawgError::OutOfOrder {
                    previous: spell(&self.previous),
                    word: word.to_string(),
                });
            }
            Ordering::Greater => {}
        }

        let common = codes
            .iter()
            .zip(&self.previous)
            .take_while(|(a, b)| a == b)
            .count();
        self.close_down_to(common);

        // `codes` sorts after `previous`, so it is longer than the common prefix
        for (depth, &letter) in codes.iter().enumerate().skip(common) {
            let accept = depth + 1 == codes.len();
            self.unchecked[depth].push(PendingEdge {
                letter,
                accept,
                child: 0,
            });
            self.unchecked.push(Vec::new());
        }

        self.previous = codes;
        self.word_count += 1;
        Ok(())
    }

    /// Close the open nodes deeper than `depth`, linking each to its
    /// canonical equivalent.
    fn close_down_to(&mut self, depth: usize) {
        while self.unchecked.len() > depth + 1 {
            let Some(node) = self.unchecked.pop() else {
                break;
            };
            let child = if node.is_empty() {
                0
            } else {
                self.canonical_id(node) + 1
            };
            if let Some(edge) = self.unchecked.last_mut().and_then(|n| n.last_mut()) {
                edge.child = child;
            }
        }
    }

    fn canonical_id(&mut self, node: NodeEdges) -> u32 {
        let next_id = self.register.len() as u32;
        *self.register.entry(node).or_insert(next_id)
    }

    /// Finish the automaton.
    ///
    /// The root run is laid out at index 0 and every other run follows in
    /// registration order, which places children before their parents.
    pub fn build(mut self) -> Result<Dawg, DawgError> {
        self.close_down_to(0);
        let root = self.unchecked.pop().unwrap_or_default();

        let mut nodes: Vec<NodeEdges> = vec![Vec::new(); self.register.len()];
        for (edges, id) in self.register.drain() {
            nodes[id as usize] = edges;
        }

        let mut offsets = Vec::with_capacity(nodes.len());
        let mut total = root.len();
        for node in &nodes {
            offsets.push(total as u32);
            total += node.len();
        }
        if total > MAX_CHILDREN_OFFSET as usize + 1 {
            return Err(DawgError::TooManyEdges(total));
        }

        let mut edges = Vec::with_capacity(total);
        for run in std::iter::once(&root).chain(nodes.iter()) {
            for (i, pending) in run.iter().enumerate() {
                let children = match pending.child {
                    0 => 0,
                    id => offsets[(id - 1) as usize],
                };
                edges.push(Edge::new(
                    pending.letter,
                    i + 1 == run.len(),
                    pending.accept,
                    children,
                ));
            }
        }

        let dawg = Dawg::from_edges(edges, COMPACT_ROOT)?;
        debug_assert_eq!(dawg.len(), self.word_count);
        Ok(dawg)
    }
}

fn spell(codes: &[u8]) -> String {
    codes.iter().filter_map(|&c| ordinal_letter(c)).collect()
}

/// Build a minimal DAWG from words in any order.
///
/// Words are sorted and de-duplicated first. They must already be folded to
/// lowercase `a`-`z`.
pub fn build_dawg<I, S>(words: I) -> Result<Dawg, DawgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut builder = DawgBuilder::new();
    for word in &sorted {
        builder.insert(word)?;
    }
    builder.build()
}
