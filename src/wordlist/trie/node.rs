use std::fmt::{Debug, Formatter};

use crate::alphabet::Alphabet;

/// Index of a node in its trie's arena.
pub(crate) type NodeId = usize;

pub(crate) enum Children {
    /// One slot per alphabet letter, indexed by the letter's position.
    Ordered(Box<[Option<NodeId>]>),
    /// Children in the order they were first created.
    Unordered(Vec<(char, NodeId)>),
}

pub(crate) struct TrieNode {
    pub(crate) children: Children,
    pub(crate) letter: char,
    pub(crate) is_terminal: bool,
    pub(crate) depth: usize,
}

impl TrieNode {
    /// `width` is the size of the ordering, or `None` for an unordered trie.
    pub(crate) fn new(letter: char, depth: usize, width: Option<usize>) -> TrieNode {
        let children = match width {
            Some(width) => Children::Ordered(vec![None; width].into_boxed_slice()),
            None => Children::Unordered(Vec::new()),
        };
        TrieNode {
            children,
            letter,
            is_terminal: false,
            depth,
        }
    }

    pub(crate) fn get_child(&self, c: char, ordering: Option<&Alphabet>) -> Option<NodeId> {
        match &self.children {
            Children::Ordered(slots) => ordering
                .and_then(|alphabet| alphabet.position(c))
                .and_then(|pos| slots.get(pos).copied().flatten()),
            Children::Unordered(pairs) => pairs
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|&(_, child)| child),
        }
    }

    /// Links `child` under `c`. In ordered mode the caller has already checked
    /// that `c` belongs to the ordering.
    pub(crate) fn set_child(&mut self, c: char, child: NodeId, ordering: Option<&Alphabet>) {
        match &mut self.children {
            Children::Ordered(slots) => {
                if let Some(slot) = ordering
                    .and_then(|alphabet| alphabet.position(c))
                    .and_then(|pos| slots.get_mut(pos))
                {
                    *slot = Some(child);
                }
            }
            Children::Unordered(pairs) => pairs.push((c, child)),
        }
    }
}

/// Debug view of a node, resolving child ids to their letters.
pub(crate) struct NodeView<'a> {
    pub(crate) node: &'a TrieNode,
    pub(crate) nodes: &'a [TrieNode],
}

impl Debug for NodeView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.node.letter)
            .field("depth", &self.node.depth)
            .field("is_terminal", &self.node.is_terminal)
            .field(
                "children",
                &self.node
                    .into_iter()
                    .map(|child| self.nodes[child].letter)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
