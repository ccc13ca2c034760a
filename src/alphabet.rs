use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{LexicalError, Result};

pub const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

/// A permutation of letters defining the order words are sorted in.
///
/// Construction rejects repeated letters, so every letter has exactly one
/// position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(ordering: &str) -> Result<Alphabet> {
        let letters: Vec<char> = ordering.chars().collect();
        if letters.is_empty() {
            return Err(LexicalError::EmptyAlphabet);
        }
        let mut positions = HashMap::with_capacity(letters.len());
        for (idx, &letter) in letters.iter().enumerate() {
            if let Some(&first) = positions.get(&letter) {
                return Err(LexicalError::DuplicateAlphabetCharacter {
                    letter,
                    first,
                    second: idx,
                });
            }
            positions.insert(letter, idx);
        }
        Ok(Alphabet { letters, positions })
    }

    pub fn latin() -> Alphabet {
        Alphabet {
            letters: LATIN.chars().collect(),
            positions: LATIN.chars().enumerate().map(|(i, c)| (c, i)).collect(),
        }
    }

    /// Index of `c` in the ordering, `None` if it is not a letter of the alphabet.
    pub fn position(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// First letter of `word` the alphabet cannot represent.
    pub(crate) fn first_foreign(&self, word: &str) -> Option<char> {
        word.chars().find(|&c| !self.contains(c))
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl FromStr for Alphabet {
    type Err = LexicalError;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s)
    }
}

impl Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
