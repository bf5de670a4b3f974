// File: src/wordlist.rs
use crate::core::types::WordBank;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const ADJECTIVES_FILE: &str = "adjectives.txt";
pub const VERBS_FILE: &str = "verbs.txt";
pub const NOUNS_FILE: &str = "nouns.txt";
pub const PLURALS_FILE: &str = "plural_nouns.txt";

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Loads one word list: UTF-8 text, one word per line. Lines are
/// trimmed, then kept when their char count falls inside
/// `[min_length, max_length]` inclusive. An empty result is valid.
pub fn load_word_list(
    path: &Path,
    min_length: usize,
    max_length: usize,
) -> Result<Vec<String>, WordListError> {
    let contents = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|word| {
            let length = word.chars().count();
            length >= min_length && length <= max_length
        })
        .map(str::to_string)
        .collect())
}

impl WordBank {
    /// Loads the four category lists from their fixed file names under
    /// `dir`, applying the same length filter to each.
    pub fn load_from_dir(
        dir: &Path,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, WordListError> {
        Ok(WordBank::new(
            load_word_list(&dir.join(ADJECTIVES_FILE), min_length, max_length)?,
            load_word_list(&dir.join(VERBS_FILE), min_length, max_length)?,
            load_word_list(&dir.join(NOUNS_FILE), min_length, max_length)?,
            load_word_list(&dir.join(PLURALS_FILE), min_length, max_length)?,
        ))
    }
}
