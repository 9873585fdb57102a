// Two-way merge of ordered word sources.

use std::cmp::Ordering;

use lexicon_core::WordSource;

/// Merges two ascending [`WordSource`]s into one ascending, duplicate-free
/// source.
///
/// An exhausted input sorts after everything. When both inputs hold the same
/// word it is yielded once and both inputs advance.
#[derive(Debug, Clone)]
pub struct Merge<A, B> {
    left: A,
    right: B,
}

enum Step {
    Left,
    Right,
    Both,
    Done,
}

impl<A: WordSource, B: WordSource> Merge<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    fn next_step(&self) -> Step {
        match (self.left.peek(), self.right.peek()) {
            (Some(l), Some(r)) => match l.cmp(r) {
                Ordering::Less => Step::Left,
                Ordering::Greater => Step::Right,
                Ordering::Equal => Step::Both,
            },
            (Some(_), None) => Step::Left,
            (None, Some(_)) => Step::Right,
            (None, None) => Step::Done,
        }
    }
}

impl<A: WordSource, B: WordSource> WordSource for Merge<A, B> {
    fn peek(&self) -> Option<&str> {
        match self.next_step() {
            Step::Left | Step::Both => self.left.peek(),
            Step::Right => self.right.peek(),
            Step::Done => None,
        }
    }

    fn advance(&mut self) {
        match self.next_step() {
            Step::Left => self.left.advance(),
            Step::Right => self.right.advance(),
            Step::Both => {
                self.left.advance();
                self.right.advance();
            }
            Step::Done => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_core::IterSource;

    fn drain(mut src: impl WordSource) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(w) = src.peek() {
            out.push(w.to_string());
            src.advance();
        }
        out
    }

    fn source<'a>(words: &'a [&'a str]) -> IterSource<'a, std::iter::Copied<std::slice::Iter<'a, &'a str>>> {
        IterSource::new(words.iter().copied())
    }

    #[test]
    fn interleaves_in_order() {
        let left = ["ant", "cat", "eel"];
        let right = ["bee", "dog"];
        let merged = Merge::new(source(&left), source(&right));
        assert_eq!(drain(merged), vec!["ant", "bee", "cat", "dog", "eel"]);
    }

    #[test]
    fn equal_words_yield_once() {
        let left = ["ant", "bee"];
        let right = ["bee", "cow"];
        let merged = Merge::new(source(&left), source(&right));
        assert_eq!(drain(merged), vec!["ant", "bee", "cow"]);
    }

    #[test]
    fn one_side_empty() {
        let left: [&str; 0] = [];
        let right = ["zebra"];
        assert_eq!(drain(Merge::new(source(&left), source(&right))), vec!["zebra"]);
        assert_eq!(drain(Merge::new(source(&right), source(&left))), vec!["zebra"]);
    }

    #[test]
    fn both_empty() {
        let empty: [&str; 0] = [];
        let merged = Merge::new(source(&empty), source(&empty));
        assert_eq!(merged.peek(), None);
    }

    #[test]
    fn prefix_sorts_before_extension() {
        let left = ["band"];
        let right = ["ban", "bandana"];
        let merged = Merge::new(source(&left), source(&right));
        assert_eq!(drain(merged), vec!["ban", "band", "bandana"]);
    }
}
