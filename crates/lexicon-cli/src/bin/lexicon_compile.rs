// lexicon-compile: Compile word lists into a binary DAWG lexicon.
//
// Every input may be a text word list (one word per line) or an existing
// binary lexicon. The union of all inputs is written as a minimal DAWG.
//
// Usage:
//   lexicon-compile INPUT... -o OUTPUT [--legacy]

use std::path::PathBuf;

use lexicon::WordSet;
use lexicon_dawg::{DawgBuilder, Framing};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexicon_cli::wants_help(&args) || args.is_empty() {
        println!("lexicon-compile: Compile word lists into a binary DAWG lexicon.");
        println!();
        println!("Usage: lexicon-compile INPUT... -o OUTPUT [OPTIONS]");
        println!();
        println!("Inputs may be text word lists or binary lexicons. Words are");
        println!("folded to lowercase and must consist of the letters a-z.");
        println!();
        println!("Options:");
        println!("  -o, --output PATH   Output lexicon file");
        println!("  --legacy            Write the DAWG:<start>:<bytes>: header");
        println!("  -h, --help          Print this help");
        return;
    }

    let mut inputs: Vec<PathBuf> = Vec::new();
    let mut output: Option<PathBuf> = None;
    let mut framing = Framing::Compact;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--legacy" => framing = Framing::Legacy,
            "-o" | "--output" => match iter.next() {
                Some(p) => output = Some(PathBuf::from(p)),
                None => lexicon_cli::fatal(&format!("{arg} requires a value")),
            },
            other => match other.strip_prefix("--output=") {
                Some(p) => output = Some(PathBuf::from(p)),
                None => inputs.push(PathBuf::from(other)),
            },
        }
    }

    let Some(output) = output else {
        lexicon_cli::fatal("no output file given (use -o PATH)");
    };
    if inputs.is_empty() {
        lexicon_cli::fatal("no input files given");
    }

    // Each input gets its own set: a set holds at most one binary lexicon.
    let mut words = WordSet::new();
    for input in &inputs {
        let loaded =
            WordSet::from_file(input).unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));
        eprintln!("{}: {} words", input.display(), loaded.len());
        words.extend(&loaded);
    }

    let mut builder = DawgBuilder::new();
    for word in &words {
        if let Err(e) = builder.insert(&word) {
            lexicon_cli::fatal(&e.to_string());
        }
    }
    let dawg = builder
        .build()
        .unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));
    let data = dawg
        .to_bytes(framing)
        .unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));

    if let Err(e) = std::fs::write(&output, &data) {
        lexicon_cli::fatal(&format!("failed to write {}: {e}", output.display()));
    }
    eprintln!(
        "{}: {} words, {} edges, {} bytes",
        output.display(),
        dawg.len(),
        dawg.edge_count(),
        data.len()
    );
}
