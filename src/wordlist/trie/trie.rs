use std::fmt::{Debug, Formatter};

use crate::alphabet::Alphabet;
use crate::error::{LexicalError, Result};
use crate::wordlist::trie::node::{NodeId, NodeView, TrieNode};

/// A prefix tree returning its words in a caller-chosen letter order.
///
/// With an ordering, every node carries one child slot per letter of the
/// alphabet and words come back sorted by that alphabet. Without one, children
/// are kept in the order they were first inserted.
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
    pub(crate) root: Option<NodeId>,
    insertions: usize,
    pub(crate) ordering: Option<Alphabet>,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new(None)
    }
}

impl Trie {
    pub fn new(ordering: Option<Alphabet>) -> Self {
        Trie {
            nodes: Vec::new(),
            root: None,
            insertions: 0,
            ordering,
        }
    }

    /// Inserts `word` as a full word.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        self.add(word, false)
    }

    /// Records the path for `word` without making it a retrievable word.
    pub fn insert_prefix(&mut self, word: &str) -> Result<()> {
        self.add(word, true)
    }

    pub fn add_all<'f, I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = &'f str>,
    {
        items.into_iter().try_for_each(|x| self.insert(x))
    }

    fn add(&mut self, word: &str, as_prefix: bool) -> Result<()> {
        if word.is_empty() {
            return Err(LexicalError::InvalidInput);
        }
        if let Some(alphabet) = &self.ordering {
            if let Some(letter) = alphabet.first_foreign(word) {
                return Err(LexicalError::CharacterNotInAlphabet {
                    letter,
                    word: word.to_string(),
                });
            }
        }

        let mut current = match self.root {
            Some(root) => root,
            None => {
                let root = self.alloc('\0', 0);
                self.root = Some(root);
                root
            }
        };
        for c in word.chars() {
            current = self.get_or_create_child(current, c);
        }

        self.nodes[current].is_terminal = !as_prefix;
        self.insertions += 1;
        Ok(())
    }

    fn alloc(&mut self, letter: char, depth: usize) -> NodeId {
        let width = self.ordering.as_ref().map(Alphabet::len);
        self.nodes.push(TrieNode::new(letter, depth, width));
        self.nodes.len() - 1
    }

    fn get_or_create_child(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(child) = self.nodes[parent].get_child(c, self.ordering.as_ref()) {
            return child;
        }
        let depth = self.nodes[parent].depth + 1;
        let child = self.alloc(c, depth);
        self.nodes[parent].set_child(c, child, self.ordering.as_ref());
        child
    }

    /// Number of successful insert calls, prefix-only and repeated ones included.
    pub fn insertions(&self) -> usize {
        self.insertions
    }

    pub fn is_empty(&self) -> bool {
        self.insertions == 0
    }

    pub fn ordering(&self) -> Option<&Alphabet> {
        self.ordering.as_ref()
    }

    /// Allocated nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.traverse_prefix(&mut |node| {
            l.entry(&NodeView {
                node,
                nodes: &self.nodes,
            });
        });
        l.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::Alphabet;
    use crate::error::LexicalError;
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let mut trie = Trie::default();
        trie.add_all(words.iter().copied()).unwrap();
        words.iter().for_each(|word| assert!(trie.contains(word)));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let bad_words = vec!["HE", "H", "LOL", "BANANA"];
        let mut trie = Trie::default();
        trie.add_all(words.iter().copied()).unwrap();
        bad_words.iter().for_each(|word| assert!(!trie.contains(word)));
        assert!(trie.is_prefix("HE"));
        assert!(trie.is_prefix("H"));
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut trie = Trie::default();
        assert!(matches!(trie.insert(""), Err(LexicalError::InvalidInput)));
        assert!(matches!(trie.insert_prefix(""), Err(LexicalError::InvalidInput)));
        assert_eq!(trie.insertions(), 0);
        assert_eq!(trie.node_count(), 0);
        assert!(trie.root.is_none());
    }

    #[test]
    fn foreign_letter_is_rejected_without_mutation() {
        let mut trie = Trie::new(Some(Alphabet::new("abc").unwrap()));
        trie.insert("ab").unwrap();
        let nodes = trie.node_count();

        match trie.insert("abd") {
            Err(LexicalError::CharacterNotInAlphabet { letter, word }) => {
                assert_eq!(letter, 'd');
                assert_eq!(word, "abd");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.insertions(), 1);
        assert!(!trie.is_prefix("abd"));
        assert_eq!(trie.get_strings(), vec!["ab"]);
    }

    #[test]
    fn repeated_word_is_stored_once() {
        let mut trie = Trie::default();
        trie.insert("abc").unwrap();
        let nodes = trie.node_count();
        trie.insert("abc").unwrap();
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.get_strings(), vec!["abc"]);
        assert_eq!(trie.insertions(), 2);
    }

    #[test]
    fn counter_includes_prefix_insertions() {
        let mut trie = Trie::default();
        assert!(trie.is_empty());
        trie.insert_prefix("ab").unwrap();
        assert!(!trie.is_empty());
        assert_eq!(trie.insertions(), 1);
        assert!(trie.get_strings().is_empty());
    }

    #[test]
    fn prefix_insertion_demotes_existing_word() {
        let mut trie = Trie::default();
        trie.insert("ab").unwrap();
        trie.insert_prefix("ab").unwrap();
        assert!(!trie.contains("ab"));
        assert!(trie.is_prefix("ab"));
        assert!(trie.get_strings().is_empty());

        trie.insert("ab").unwrap();
        assert_eq!(trie.get_strings(), vec!["ab"]);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let mut trie = Trie::new(Some(Alphabet::latin()));
        trie.add_all(["good", "goodbye", "gone"]).unwrap();
        // root + g o o d + b y e + n e
        assert_eq!(trie.node_count(), 1 + 4 + 3 + 2);
        assert_eq!(trie.ordering(), Some(&Alphabet::latin()));
    }

    #[test]
    fn debug_lists_nodes_in_preorder() {
        let mut trie = Trie::default();
        trie.insert("ab").unwrap();
        let printed = format!("{:?}", trie);
        let a = printed.find("letter: 'a'").unwrap();
        let b = printed.find("letter: 'b'").unwrap();
        assert!(a < b);
        assert!(printed.contains("is_terminal: true"));
        assert!(printed.contains("letter: 'a', depth: 1, is_terminal: false, children: ['b']"));
    }
}
