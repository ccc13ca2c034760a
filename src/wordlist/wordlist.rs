use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, trace};
use typed_builder::TypedBuilder;

use crate::alphabet::Alphabet;
use crate::error::{LexicalError, Result};
use crate::wordlist::trie::Trie;

/// How words are laid out in the input.
///
/// Without a delimiter every whitespace separated token is a word. With one,
/// each non-blank line contributes the field at `word_column` (0 by default).
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct InputFormat {
    #[builder(default, setter(into))]
    delimiter: Option<char>,
    #[builder(default, setter(into))]
    word_column: Option<usize>,
}

impl InputFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<Vec<&'a str>> {
        match self.delimiter {
            None => Ok(line.split_whitespace().collect()),
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(column)
                    .map(|word| vec![word.trim()])
                    .ok_or(LexicalError::MissingColumn {
                        line: line_no,
                        column,
                    })
            }
        }
    }

    /// Splits the alphabet off the first non-blank line. Returns the alphabet
    /// and whatever part of the line is left for words.
    fn take_alphabet<'a>(&self, line: &'a str) -> (&'a str, &'a str) {
        let line = line.trim();
        match self.delimiter {
            Some(_) => (line, ""),
            None => line.split_once(char::is_whitespace).unwrap_or((line, "")),
        }
    }
}

#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct SortConfig {
    /// Ordering to sort by; when unset the first token of the input is used.
    #[builder(default, setter(into))]
    alphabet: Option<String>,
    /// Keep words in first-insertion order instead of reading an alphabet.
    #[builder(default)]
    unordered: bool,
    #[builder(default)]
    format: InputFormat,
}

#[derive(new, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub alphabet: Option<String>,
    pub insertions: usize,
    pub words: Vec<String>,
}

pub struct Wordlist {
    trie: Trie,
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, config: &SortConfig) -> Result<Wordlist> {
        let path = path.as_ref();
        info!("Reading words from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }

    pub fn from_reader<R: Read>(mut reader: R, config: &SortConfig) -> Result<Wordlist> {
        let start = Instant::now();
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let format = &config.format;
        let mut alphabet = if config.unordered {
            None
        } else {
            config.alphabet.as_deref()
        };
        let needs_alphabet = !config.unordered && alphabet.is_none();

        let mut words: Vec<&str> = Vec::new();
        for (idx, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut line = line;
            if needs_alphabet && alphabet.is_none() {
                let (token, rest) = format.take_alphabet(line);
                alphabet = Some(token);
                if rest.trim().is_empty() {
                    continue;
                }
                line = rest;
            }
            for word in format.parse_line(line, idx + 1)? {
                if word.is_empty() {
                    trace!("skipping empty field on line {}", idx + 1);
                    continue;
                }
                words.push(word);
            }
        }

        if needs_alphabet && alphabet.is_none() {
            return Err(LexicalError::NoInput);
        }
        let ordering = alphabet.map(Alphabet::new).transpose()?;
        match &ordering {
            Some(ordering) => debug!(
                "sorting by alphabet {:?} ({} letters)",
                ordering.to_string(),
                ordering.len()
            ),
            None => debug!("keeping first-insertion order"),
        }

        let mut trie = Trie::new(ordering);
        for word in words {
            trace!("inserting {:?}", word);
            trie.insert(word)?;
        }
        info!(
            "Read {} words into {} nodes in {}s",
            trie.insertions(),
            trie.node_count(),
            start.elapsed().as_secs_f64()
        );
        Ok(Wordlist { trie })
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn is_prefix(&self, word: &str) -> bool;
            pub fn insertions(&self) -> usize;
            pub fn ordering(&self) -> Option<&Alphabet>;
        }
    }

    pub fn sorted(&self) -> Vec<String> {
        self.trie.get_strings()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn report(&self) -> SortReport {
        SortReport::new(
            self.ordering().map(|x| x.to_string()),
            self.insertions(),
            self.sorted(),
        )
    }
}
