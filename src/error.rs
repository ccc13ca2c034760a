use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexicalError>;

#[derive(Error, Debug)]
pub enum LexicalError {
    #[error("cannot add an empty string to the trie")]
    InvalidInput,
    #[error("the alphabet has no letters")]
    EmptyAlphabet,
    #[error("letter `{letter}` appears multiple times in the alphabet (positions {first} and {second})")]
    DuplicateAlphabetCharacter {
        letter: char,
        first: usize,
        second: usize,
    },
    #[error("letter `{letter}` in `{word}` is not part of the alphabet")]
    CharacterNotInAlphabet { letter: char, word: String },
    #[error("no words or alphabet in input")]
    NoInput,
    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
    #[error("`{0}`")]
    Json(#[from] serde_json::Error),
    #[error("`{0}`")]
    Io(#[from] std::io::Error),
}
