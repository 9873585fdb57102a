// lexicon-list: Print the words of a lexicon in ascending order.
//
// Usage:
//   lexicon-list [-l LEXICON] [--prefix P] [--count] [--hash]

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) =
        lexicon_cli::parse_lexicon_path(&args).unwrap_or_else(|e| lexicon_cli::fatal(&e));

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-list: Print the words of a lexicon in ascending order.");
        println!();
        println!("Usage: lexicon-list [-l LEXICON] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon file, or a directory containing EnglishWords.dat");
        println!("  --prefix P           Only print words starting with P");
        println!("  --count              Print the number of words instead of the words");
        println!("  --hash               Print the lexicon hash code instead of the words");
        println!("  -h, --help           Print this help");
        return;
    }

    let mut prefix: Option<String> = None;
    let mut count = false;
    let mut hash = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" => count = true,
            "--hash" => hash = true,
            "--prefix" => match iter.next() {
                Some(p) => prefix = Some(p.to_ascii_lowercase()),
                None => lexicon_cli::fatal("--prefix requires a value"),
            },
            other => match other.strip_prefix("--prefix=") {
                Some(p) => prefix = Some(p.to_ascii_lowercase()),
                None => lexicon_cli::fatal(&format!("unknown argument: {other}")),
            },
        }
    }

    let lexicon = lexicon_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| lexicon_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if hash {
        let _ = writeln!(out, "{}", lexicon.hash_code());
        return;
    }

    let matching = lexicon
        .iter()
        .filter(|w| prefix.as_deref().is_none_or(|p| w.starts_with(p)));
    if count {
        let _ = writeln!(out, "{}", matching.count());
        return;
    }
    for word in matching {
        if writeln!(out, "{word}").is_err() {
            // stdout closed (e.g. piped into head)
            break;
        }
    }
}
