// Lazy depth-first word cursor over a decoded automaton.
//
// Traversal state lives in an explicit stack of frames so the cursor can stop
// after each word and resume later without holding the call stack.

use lexicon_core::WordSource;
use lexicon_core::character::{LETTER_COUNT, ordinal_letter};

use crate::dawg::Dawg;
use crate::edge::Edge;

/// One level of the DFS: a run of sibling edges visited in letter order.
///
/// Runs in the table are not required to be sorted, so the frame keeps the
/// run's offsets sorted by letter and walks that order instead.
#[derive(Debug, Clone)]
struct Frame {
    /// Index of the first edge of the run.
    start: u32,
    /// Offsets from `start`, sorted by letter.
    order: [u8; LETTER_COUNT as usize],
    len: u8,
    /// Position in `order` of the edge currently on the path.
    pos: u8,
}

impl Frame {
    fn new(edges: &[Edge], start: u32) -> Self {
        let mut order = [0u8; LETTER_COUNT as usize];
        let mut len = 0usize;
        for (offset, edge) in edges[start as usize..].iter().enumerate() {
            order[len] = offset as u8;
            len += 1;
            if edge.is_last() || len == order.len() {
                break;
            }
        }
        order[..len].sort_unstable_by_key(|&off| edges[start as usize + off as usize].letter());
        Self {
            start,
            order,
            len: len as u8,
            pos: 0,
        }
    }

    #[inline]
    fn edge_index(&self) -> usize {
        self.start as usize + self.order[self.pos as usize] as usize
    }
}

/// Ascending iteration over the words of a [`Dawg`].
///
/// The cursor is positioned on a word (an accepting edge) or exhausted.
/// `peek` returns the word spelled by the current path; `advance` resumes the
/// pre-order walk until the next accepting edge. Pre-order over letter-sorted
/// runs yields every prefix before its extensions and siblings in letter
/// order, so the output is strictly ascending.
#[derive(Debug, Clone)]
pub struct DawgWords<'a> {
    edges: &'a [Edge],
    stack: Vec<Frame>,
    /// Letters along the current path, one per frame.
    word: String,
    done: bool,
}

impl<'a> DawgWords<'a> {
    pub fn new(dawg: &'a Dawg) -> Self {
        let edges = dawg.edges();
        let mut cursor = Self {
            edges,
            stack: Vec::new(),
            word: String::new(),
            done: edges.is_empty(),
        };
        if !cursor.done {
            cursor.push(dawg.start());
            if !cursor.current_edge().is_some_and(Edge::is_accepting) {
                cursor.seek();
            }
        }
        cursor
    }

    /// Current depth of the path (length of the current word).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn current_edge(&self) -> Option<Edge> {
        self.stack.last().map(|f| self.edges[f.edge_index()])
    }

    fn push(&mut self, run: u32) {
        let frame = Frame::new(self.edges, run);
        self.word.push(letter_of(self.edges[frame.edge_index()]));
        self.stack.push(frame);
    }

    /// Move to the next edge in pre-order. Returns `false` when the walk is
    /// over.
    fn step(&mut self) -> bool {
        let Some(edge) = self.current_edge() else {
            return false;
        };
        if edge.has_children() {
            self.push(edge.children());
            return true;
        }
        // Leaf: move to the next sibling, unwinding exhausted runs.
        while let Some(frame) = self.stack.last_mut() {
            self.word.pop();
            if frame.pos + 1 < frame.len {
                frame.pos += 1;
                self.word.push(letter_of(self.edges[frame.edge_index()]));
                return true;
            }
            self.stack.pop();
        }
        false
    }

    /// Advance to the next accepting edge, or mark the cursor exhausted.
    fn seek(&mut self) {
        loop {
            if !self.step() {
                self.done = true;
                self.word.clear();
                return;
            }
            if self.current_edge().is_some_and(Edge::is_accepting) {
                return;
            }
        }
    }
}

#[inline]
fn letter_of(edge: Edge) -> char {
    ordinal_letter(edge.letter()).unwrap_or('?')
}

impl WordSource for DawgWords<'_> {
    #[inline]
    fn peek(&self) -> Option<&str> {
        if self.done { None } else { Some(&self.word) }
    }

    fn advance(&mut self) {
        if !self.done {
            self.seek();
        }
    }
}

impl Iterator for DawgWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.peek()?.to_owned();
        self.advance();
        Some(word)
    }
}

impl std::iter::FusedIterator for DawgWords<'_> {}
