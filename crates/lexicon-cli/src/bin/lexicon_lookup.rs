// lexicon-lookup: Check words from stdin against a lexicon.
//
// Reads words from stdin (one per line) and reports whether each one is in
// the lexicon:
//   C: word    (contained)
//   W: word    (not a word)
//
// With --prefix, reports whether each line starts some word instead:
//   P: prefix  (some word starts with it)
//   N: prefix  (no word starts with it)
//
// Usage:
//   lexicon-lookup [-l LEXICON] [-p]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) =
        lexicon_cli::parse_lexicon_path(&args).unwrap_or_else(|e| lexicon_cli::fatal(&e));

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-lookup: Check words from stdin against a lexicon.");
        println!();
        println!("Usage: lexicon-lookup [-l LEXICON] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (in the lexicon)");
        println!("  W: word    (not in the lexicon)");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon file, or a directory containing EnglishWords.dat");
        println!("  -p, --prefix         Check prefixes instead (prints P: / N:)");
        println!("  -h, --help           Print this help");
        return;
    }

    let prefix_mode = args.iter().any(|a| a == "-p" || a == "--prefix");

    let lexicon = lexicon_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| lexicon_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let (hit, miss, found) = if prefix_mode {
            ("P", "N", lexicon.contains_prefix(word))
        } else {
            ("C", "W", lexicon.contains(word))
        };
        let tag = if found { hit } else { miss };
        let _ = writeln!(out, "{tag}: {word}");
    }
}
