// Criterion benchmarks for lexicon.
//
// The lexicon is generated in memory (every consonant-vowel-consonant
// syllable pair plus common suffixes), compiled to a binary DAWG and loaded
// back, so no resource file is needed.
//
// Run:
//   cargo bench -p lexicon

use criterion::{Criterion, criterion_group, criterion_main};
use lexicon::WordSet;
use lexicon_dawg::{Framing, build_dawg};

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

const CONSONANTS: &[char] = &['b', 'd', 'f', 'g', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't'];
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];
const SUFFIXES: &[&str] = &["", "s", "ed", "ing"];

fn generated_words() -> Vec<String> {
    let mut words = Vec::new();
    for &a in CONSONANTS {
        for &b in VOWELS {
            for &c in CONSONANTS {
                for suffix in SUFFIXES {
                    words.push(format!("{a}{b}{c}{suffix}"));
                }
            }
        }
    }
    words
}

fn load_set(words: &[String]) -> WordSet {
    let data = build_dawg(words)
        .expect("build_dawg")
        .to_bytes(Framing::Compact)
        .expect("to_bytes");
    WordSet::from_bytes(&data).expect("WordSet::from_bytes")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Look up every generated word plus a misspelled variant of each.
fn bench_contains(c: &mut Criterion) {
    let words = generated_words();
    let set = load_set(&words);
    let misses: Vec<String> = words.iter().map(|w| format!("{w}x")).collect();

    c.bench_function("contains_hits", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(set.contains(word));
            }
        });
    });
    c.bench_function("contains_misses", |b| {
        b.iter(|| {
            for word in &misses {
                std::hint::black_box(set.contains(word));
            }
        });
    });
}

/// Prefix queries of every length over the first letters.
fn bench_contains_prefix(c: &mut Criterion) {
    let words = generated_words();
    let set = load_set(&words);
    let prefixes: Vec<&str> = words.iter().map(|w| &w[..2]).collect();

    c.bench_function("contains_prefix", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                std::hint::black_box(set.contains_prefix(prefix));
            }
        });
    });
}

/// Full merged iteration with words in both stores.
fn bench_iterate(c: &mut Criterion) {
    let words = generated_words();
    let (binary, runtime) = words.split_at(words.len() / 2);
    let mut set = load_set(binary);
    set.extend(runtime);

    c.bench_function("iterate_merged", |b| {
        b.iter(|| std::hint::black_box(set.iter().count()));
    });
    c.bench_function("hash_code", |b| {
        b.iter(|| std::hint::black_box(set.hash_code()));
    });
}

/// Compile the generated list into a minimal DAWG.
fn bench_build(c: &mut Criterion) {
    let words = generated_words();

    c.bench_function("build_dawg", |b| {
        b.iter(|| std::hint::black_box(build_dawg(&words).expect("build_dawg")));
    });
}

criterion_group!(
    benches,
    bench_contains,
    bench_contains_prefix,
    bench_iterate,
    bench_build
);
criterion_main!(benches);
