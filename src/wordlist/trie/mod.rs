pub mod trie;
mod search;

mod node;
mod iterators;

pub use trie::Trie;
