//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use super::WORDS;
use crate::core::{GameError, Word, WordList};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank lines and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("Skipping '{trimmed}' in {}: {e}", path.display());
                    None
                }
            }
        })
        .collect();

    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// The built-in word list
///
/// # Errors
///
/// Returns `GameError::EmptyWordList` if the embedded list has no valid words.
pub fn embedded_word_list() -> Result<WordList, GameError> {
    WordList::new(words_from_slice(WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["beijo", "cacto", "feito"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "beijo");
        assert_eq!(words[1].text(), "cacto");
        assert_eq!(words[2].text(), "feito");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["beijo", "", "ca cto", "paixão", "moeda"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "beijo");
        assert_eq!(words[1].text(), "moeda");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn embedded_list_has_every_word() {
        let list = embedded_word_list().unwrap();
        assert_eq!(list.len(), WORDS.len());
        assert!(list.contains("amor"));
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let path = std::env::temp_dir().join(format!("hangman-loader-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "amor\n\n  Doce  \nbad word\n42\nbroto").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["amor", "doce", "broto"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
