// lexicon-cli: shared utilities for the command-line tools.

use std::path::{Path, PathBuf};
use std::process;

use lexicon::WordSet;

/// Lexicon file name looked up inside directories.
pub const LEXICON_FILE: &str = "EnglishWords.dat";

/// Environment variable naming a lexicon file or a directory containing one.
pub const LEXICON_ENV: &str = "LEXICON_PATH";

/// Per-user directory searched for the lexicon.
const USER_DIR: &str = ".lexicon";

/// Find and load the lexicon.
///
/// Search order:
/// 1. `lexicon_path` argument (if provided; a file or a directory)
/// 2. `LEXICON_PATH` environment variable (a file or a directory)
/// 3. `~/.lexicon/EnglishWords.dat`
/// 4. `EnglishWords.dat` in the current directory
///
/// An explicitly given path that does not exist is an error rather than a
/// reason to keep searching.
pub fn load_lexicon(lexicon_path: Option<&str>) -> Result<WordSet, String> {
    if let Some(p) = lexicon_path {
        let path = resolve(Path::new(p));
        return WordSet::from_file(&path).map_err(|e| format!("failed to load lexicon: {e}"));
    }

    let candidates = search_paths(std::env::var(LEXICON_ENV).ok().as_deref(), home_dir());
    for path in &candidates {
        if path.is_file() {
            return WordSet::from_file(path).map_err(|e| format!("failed to load lexicon: {e}"));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        LEXICON_FILE,
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Candidate lexicon files, in search order.
fn search_paths(env_path: Option<&str>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = env_path {
        paths.push(resolve(Path::new(p)));
    }
    if let Some(home) = home {
        paths.push(home.join(USER_DIR).join(LEXICON_FILE));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LEXICON_FILE));
    }

    paths
}

/// A directory stands for the lexicon file inside it.
fn resolve(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(LEXICON_FILE)
    } else {
        path.to_path_buf()
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--lexicon=PATH`, `--lexicon PATH` or `-l PATH` argument.
///
/// Returns `(lexicon_path, remaining_args)`.
pub fn parse_lexicon_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut lexicon_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            lexicon_path = Some(val.to_string());
        } else if arg == "--lexicon" || arg == "-l" {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?;
            lexicon_path = Some(val.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((lexicon_path, remaining))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
