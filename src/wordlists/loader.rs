//! Word list loading utilities
//!
//! Reads candidate target words from a file, one per line. Entries are kept
//! as raw strings; the session validates them at start so a malformed list
//! fails loudly instead of producing a broken target.

use std::fs;
use std::io;
use std::path::Path;

/// Load word list entries from a file
///
/// Blank lines are skipped; everything else is returned verbatim (trimmed)
/// for the session to validate.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\n\n  slate  \n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_file_missing_path_errors() {
        assert!(load_from_file("no/such/wordlist.txt").is_err());
    }
}
