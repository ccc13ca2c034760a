use crate::wordlist::trie::node::NodeId;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Looks `word` up. With `full_word_only` the word must have been inserted
    /// as a full word; otherwise any stored path counts, prefixes included.
    pub fn find(&self, word: &str, full_word_only: bool) -> bool {
        if word.is_empty() {
            return false;
        }
        self.get_node(word)
            .map(|node| !full_word_only || self.nodes[node].is_terminal)
            .unwrap_or(false)
    }

    pub fn is_prefix(&self, word: &str) -> bool {
        self.find(word, false)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word, true)
    }

    fn get_node(&self, word: &str) -> Option<NodeId> {
        word.chars().try_fold(self.root?, |node, c| {
            self.nodes[node].get_child(c, self.ordering.as_ref())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::Alphabet;
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn every_prefix_of_a_word_is_a_prefix() {
        let mut trie = Trie::new(Some(Alphabet::latin()));
        trie.insert("lexical").unwrap();
        assert!(trie.find("lexical", true));
        for end in 1..="lexical".len() {
            assert!(trie.find(&"lexical"[..end], false), "{}", &"lexical"[..end]);
        }
        assert!(!trie.find("lex", true));
        assert!(!trie.is_prefix("lexicals"));
    }

    #[test]
    fn prefix_insertion_is_not_a_word() {
        let mut trie = Trie::default();
        trie.insert_prefix("pre").unwrap();
        assert!(trie.is_prefix("pre"));
        assert!(trie.is_prefix("pr"));
        assert!(!trie.contains("pre"));

        trie.insert("pre").unwrap();
        assert!(trie.contains("pre"));
    }

    #[test]
    fn empty_query_is_never_found() {
        let mut trie = Trie::default();
        assert!(!trie.find("", false));
        assert!(!trie.find("", true));
        trie.insert("a").unwrap();
        assert!(!trie.find("", false));
        assert!(!trie.is_prefix(""));
    }

    #[test]
    fn empty_trie_finds_nothing() {
        let trie = Trie::new(Some(Alphabet::latin()));
        assert!(!trie.is_prefix("a"));
        assert!(!trie.contains("a"));
    }

    #[test]
    fn foreign_letters_are_not_found() {
        let mut trie = Trie::new(Some(Alphabet::new("ab").unwrap()));
        trie.insert("ab").unwrap();
        assert!(!trie.is_prefix("ax"));
        assert!(!trie.contains("x"));
    }
}
