pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use crate::alphabet::Alphabet;
pub use crate::error::{LexicalError, Result};
pub use crate::wordlist::trie::Trie;
pub use crate::wordlist::wordlist::{InputFormat, SortConfig, SortReport, Wordlist};
