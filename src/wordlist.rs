use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::sample::{Error, Sample};

/// Where the words come from. The caller states the kind of source it has
/// instead of the reader guessing from the value at runtime.
pub enum WordSource {
    Path(PathBuf),
    Reader(Box<dyn BufRead>),
    Words(Vec<String>),
}

/// Reads the source line by line and cleans every entry. Entries that
/// clean to nothing are dropped.
pub fn read_words(source: WordSource) -> Result<Vec<String>> {
    let lines = match source {
        WordSource::Path(path) => {
            let file = File::open(&path)
                .with_context(|| format!("unable to open wordlist {}", path.display()))?;
            BufReader::new(file)
                .lines()
                .collect::<io::Result<Vec<_>>>()?
        }
        WordSource::Reader(reader) => reader.lines().collect::<io::Result<Vec<_>>>()?,
        WordSource::Words(words) => words,
    };
    Ok(lines.iter().filter_map(|line| clean_word(line)).collect())
}

/// Strips everything that is not a letter. Returns None if nothing is left.
pub fn clean_word(raw: &str) -> Option<String> {
    let word: String = raw.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Selects `count` words by drawing random indices into `words`, preserving
/// draw order. Draws are independent, so a word can repeat.
pub fn choose(words: &[String], count: usize) -> Result<Vec<String>, Error> {
    if words.is_empty() {
        return Err(Error::InvalidArgument("wordlist is empty".to_string()));
    }
    let indices = Sample::draw(count, 0, words.len() as i64 - 1)?;
    Ok(indices
        .values()
        .iter()
        .map(|&index| words[index as usize].clone())
        .collect())
}
