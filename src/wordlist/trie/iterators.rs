use crate::wordlist::trie::node::{Children, NodeId, TrieNode};
use crate::wordlist::trie::trie::Trie;

/// Walks a node's children in child-table order, skipping empty slots.
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match &self.node.children {
            Children::Ordered(slots) => {
                while let Some(slot) = slots.get(self.idx) {
                    self.idx += 1;
                    if slot.is_some() {
                        return *slot;
                    }
                }
                None
            }
            Children::Unordered(pairs) => {
                let rv = pairs.get(self.idx).map(|&(_, child)| child);
                self.idx += 1;
                rv
            }
        }
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = NodeId;
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self }
    }
}

impl Trie {
    /// Every stored full word, in the trie's ordering.
    ///
    /// A word is emitted as soon as its terminal node is reached, before the
    /// longer words below it, so `"ab"` always precedes `"abc"`.
    pub fn get_strings(&self) -> Vec<String> {
        let mut results: Vec<String> = Vec::new();
        if self.insertions() == 0 {
            return results;
        }
        // letters of the path to the node being visited
        let mut buffer: Vec<char> = Vec::new();
        self.traverse_prefix(&mut |node| {
            if node.depth == 0 {
                return;
            }
            buffer.truncate(node.depth - 1);
            buffer.push(node.letter);
            if node.is_terminal {
                results.push(buffer.iter().collect());
            }
        });
        results
    }

    /// Calls `f` on every node, parents before children, children in
    /// child-table order.
    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
    where
        F: FnMut(&TrieNode),
    {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            f(node);
            let mark = stack.len();
            stack.extend(node);
            stack[mark..].reverse();
        }
    }
}
