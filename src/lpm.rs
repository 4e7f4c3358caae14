//! Longest-prefix-match traversal.
//!
//! The prefix length stored next to the address bytes turns longest-prefix match into a guided
//! tree search. A branch that tests a bit of the query's prefix-length byte separates entries
//! that share the same address bits but differ in specificity; its side-1 subtree holds the more
//! specific entries and is always searched first. At every other branch, whenever side 1 was
//! chosen and came up empty, the side-0 subtree still holds every less specific candidate, so the
//! search backtracks into it. While backtracking, bit tests are skipped and the search keeps to
//! side 0, descending towards the least specific entry of the subtree. The first leaf that is
//! accepted is therefore the longest stored prefix covering the query.

use crate::key::Key;
use crate::trie::{CritBitTrie, Node};

impl<T> CritBitTrie<T> {
    /// Find the most specific stored network that covers `query`. The query key carries the full
    /// address-family prefix length for a plain address, or the prefix length of a queried
    /// network; stored entries more specific than that never match.
    pub(crate) fn match_longest(&self, query: &Key) -> Option<(&Key, &T)> {
        self.match_in(self.root?, query, false)
    }

    fn match_in(&self, idx: usize, query: &Key, backtracking: bool) -> Option<(&Key, &T)> {
        match &self.table[idx] {
            Node::Branch { bit, children } => {
                let dir = if bit.offset as usize == query.mask_offset() {
                    // prefix-length branch: the more specific side first
                    1
                } else if backtracking {
                    0
                } else {
                    bit.direction(query)
                };
                if let Some(found) = self.match_in(children[dir], query, backtracking) {
                    return Some(found);
                }
                if dir == 1 {
                    return self.match_in(children[0], query, true);
                }
                None
            }
            Node::Leaf { key, value } => {
                (key.len() == query.len() && covers(key, query)).then_some((key, value))
            }
        }
    }
}

/// Check that the network stored in `key` contains the queried one: its prefix length must not
/// exceed the query's, and the two keys must agree on the first `key` prefix-length address bits.
/// Both keys have the same length.
fn covers(key: &Key, query: &Key) -> bool {
    let prefix_len = key.byte(key.mask_offset());
    if prefix_len > query.byte(query.mask_offset()) {
        return false;
    }

    let div = (prefix_len / 8) as usize;
    if key.as_bytes()[..div] != query.as_bytes()[..div] {
        return false;
    }
    let rem = prefix_len % 8;
    if rem > 0 {
        // compare only the top `rem` bits of the partial byte
        let mask = 0xffu8 << (8 - rem);
        if key.byte(div) != query.byte(div) & mask {
            return false;
        }
    }
    true
}
