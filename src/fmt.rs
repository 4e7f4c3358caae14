//! Formatting implementation for the route table.

use std::fmt::{Debug, Formatter, Result};

use crate::trie::{CritBitTrie, Node};
use crate::RouteTable;

impl<T: Debug> Debug for RouteTable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.trie.root {
            None => f.write_str("{}"),
            Some(root) => DebugNode(&self.trie, root).fmt(f),
        }
    }
}

/// Renders the subtree below one node, showing the tested bit of every branch.
struct DebugNode<'a, T>(&'a CritBitTrie<T>, usize);

impl<T: Debug> Debug for DebugNode<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let trie = self.0;
        let idx = self.1;
        match &trie.table[idx] {
            Node::Branch { bit, children } => f
                .debug_map()
                .entry(
                    &format_args!("bit {}/{:#04x}", bit.offset, bit.mask),
                    &(DebugNode(trie, children[0]), DebugNode(trie, children[1])),
                )
                .finish(),
            Node::Leaf { key, value } => f.debug_map().entry(&key.to_net(), value).finish(),
        }
    }
}
