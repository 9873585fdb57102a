//! File-level tests: load word sets from binary lexicons and text word lists
//! written to the system temp directory.
//!
//! Run: cargo test -p lexicon --test word_set

use std::path::PathBuf;

use lexicon::{LexiconError, LoadError, WordSet};
use lexicon_dawg::{Framing, build_dawg};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A file in the temp directory, removed on drop.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str, contents: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!(
            "lexicon-test-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
        Self(path)
    }

    fn path(&self) -> &std::path::Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn compiled(words: &[&str], framing: Framing) -> Vec<u8> {
    build_dawg(words)
        .expect("build_dawg")
        .to_bytes(framing)
        .expect("to_bytes")
}

fn words(set: &WordSet) -> Vec<String> {
    set.iter().collect()
}

// ---------------------------------------------------------------------------
// Binary lexicons
// ---------------------------------------------------------------------------

#[test]
fn binary_lexicon_scenario() {
    let file = TempFile::new(
        "car-cat-dog.dat",
        &compiled(&["cat", "car", "dog"], Framing::Compact),
    );
    let set = WordSet::from_file(file.path()).unwrap();

    assert_eq!(set.len(), 3);
    assert!(set.contains("CAT"));
    assert!(set.contains_prefix("ca"));
    assert!(!set.contains("ca"));
    assert!(!set.contains_prefix("x"));
    assert_eq!(words(&set), vec!["car", "cat", "dog"]);
}

#[test]
fn legacy_lexicon_loads_like_compact() {
    let list = ["ant", "apple", "banana", "band"];
    let compact = TempFile::new("compact.dat", &compiled(&list, Framing::Compact));
    let legacy = TempFile::new("legacy.dat", &compiled(&list, Framing::Legacy));

    let a = WordSet::from_file(compact.path()).unwrap();
    let b = WordSet::from_file(legacy.path()).unwrap();
    assert_eq!(a, b);
    assert_eq!(words(&b), list);
}

#[test]
fn binary_plus_added_word() {
    let file = TempFile::new("ant-apple.dat", &compiled(&["ant", "apple"], Framing::Compact));
    let mut set = WordSet::from_file(file.path()).unwrap();
    assert!(set.add("banana"));
    assert_eq!(set.len(), 3);
    assert_eq!(words(&set), vec!["ant", "apple", "banana"]);
}

#[test]
fn size_mismatch_is_load_error() {
    let mut data = compiled(&["cat"], Framing::Compact);
    data.extend_from_slice(&[0, 0, 0, 0]);
    let file = TempFile::new("oversized.dat", &data);

    let err = WordSet::from_file(file.path()).unwrap_err();
    assert!(matches!(err, LexiconError::Load(LoadError::Format { .. })));
    assert!(err.to_string().contains("oversized.dat"));
}

#[test]
fn missing_file_is_load_error() {
    let path = std::env::temp_dir().join("lexicon-test-does-not-exist.dat");
    let err = WordSet::from_file(&path).unwrap_err();
    assert!(matches!(err, LexiconError::Load(LoadError::Io { .. })));
}

#[test]
fn second_binary_lexicon_is_state_error() {
    let first = TempFile::new("first.dat", &compiled(&["cat"], Framing::Compact));
    let second = TempFile::new("second.dat", &compiled(&["dog"], Framing::Compact));

    let mut set = WordSet::from_file(first.path()).unwrap();
    let err = set.add_words_from_file(second.path()).unwrap_err();
    assert!(matches!(err, LexiconError::State));
    assert_eq!(words(&set), vec!["cat"]);
}

// ---------------------------------------------------------------------------
// Text word lists
// ---------------------------------------------------------------------------

#[test]
fn text_round_trip() {
    let file = TempFile::new("words.txt", b"Zebra\r\napple\n\nAPPLE\n  mango  \n");
    let set = WordSet::from_file(file.path()).unwrap();
    assert_eq!(words(&set), vec!["apple", "mango", "zebra"]);
    assert!(set.contains("Mango"));
}

#[test]
fn text_added_on_top_of_binary() {
    let binary = TempFile::new("base.dat", &compiled(&["cat", "dog"], Framing::Compact));
    let text = TempFile::new("extra.txt", b"Cat\nemu\n");

    let mut set = WordSet::from_file(binary.path()).unwrap();
    set.add_words_from_file(text.path()).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(words(&set), vec!["cat", "dog", "emu"]);
}

#[test]
fn invalid_text_is_load_error() {
    let file = TempFile::new("bad.txt", b"fine\nbroken\xC3\n");
    let err = WordSet::from_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LexiconError::Load(LoadError::Encoding { line: 2, .. })
    ));
}

// ---------------------------------------------------------------------------
// Set semantics
// ---------------------------------------------------------------------------

#[test]
fn empty_set_scenario() {
    let mut set = WordSet::new();
    assert!(set.is_empty());
    assert!(!set.contains_prefix(""));
    set.add("Zebra");
    assert_eq!(set.len(), 1);
    assert_eq!(words(&set), vec!["zebra"]);
    assert!(set.contains_prefix(""));
}

#[test]
fn equality_and_hash() {
    let file = TempFile::new("eq.dat", &compiled(&["car", "cat", "dog"], Framing::Compact));
    let loaded = WordSet::from_file(file.path()).unwrap();
    let built: WordSet = ["DOG", "Car", "cat"].into_iter().collect();

    assert_eq!(loaded, built);
    assert_eq!(loaded.hash_code(), built.hash_code());

    let mut bigger = built.clone();
    bigger.add("cow");
    assert_ne!(loaded, bigger);
}

#[test]
fn cursor_bounds() {
    let set: WordSet = ["one"].into_iter().collect();
    let mut cursor = set.begin();
    assert_eq!(cursor.get().unwrap(), "one");
    cursor.advance().unwrap();
    assert_eq!(cursor, set.end());
    assert!(matches!(
        cursor.get(),
        Err(LexiconError::Bounds { position: 1, len: 1 })
    ));
    assert!(matches!(cursor.advance(), Err(LexiconError::Bounds { .. })));
}

#[test]
fn iteration_is_strictly_ascending() {
    let mut list = Vec::new();
    for a in ["b", "d", "f", "h"] {
        for b in ["a", "e", "i", "o", "u"] {
            list.push(format!("{a}{b}"));
            list.push(format!("{a}{b}ll"));
        }
    }
    let half = list.len() / 2;
    let binary: Vec<&str> = list[..half].iter().map(String::as_str).collect();
    let file = TempFile::new("ascending.dat", &compiled(&binary, Framing::Compact));

    let mut set = WordSet::from_file(file.path()).unwrap();
    set.extend(&list[half..]);
    let listed = words(&set);
    assert_eq!(listed.len(), list.len());
    assert!(listed.windows(2).all(|w| w[0] < w[1]));
}
