//! Word source for the game
//!
//! Provides the embedded built-in target pool plus a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN.len(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_words_are_valid() {
        // Every built-in word must be 5 lowercase letters so session start
        // never fails on the default pool
        for &word in BUILTIN {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_has_expected_size() {
        assert_eq!(BUILTIN_COUNT, 80, "Expected the 80-word built-in pool");
    }

    #[test]
    fn builtin_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = BUILTIN.iter().collect();
        assert_eq!(unique.len(), BUILTIN.len());
    }
}
