//! This crate provides a crit-bit tree (a binary radix tree branching on single bits) that is
//! keyed by IP networks in CIDR notation and answers longest-prefix-match queries. IPv4 and IPv6
//! networks (from [ipnet](https://docs.rs/ipnet)) live in the same table; a lookup only ever
//! matches entries of the query's address family.
//!
//! # Description of the Tree
//!
//! Every network is encoded into a fixed-width key: the network address bytes, followed by the
//! prefix length and a terminating `0xff` byte. Interior nodes (branches) test a single bit, the
//! first bit at which the keys of their two subtrees diverge; leaves own a key and its value. Along
//! every root-to-leaf path the tested bit positions strictly increase, so a lookup inspects at most
//! one node per key bit.
//!
//! Embedding the prefix length in the key is what makes longest-prefix match a guided tree search:
//! among entries that share the same address bits, a branch on the prefix-length byte separates the
//! more specific entries (side 1) from the less specific ones (side 0). The matcher descends into
//! side 1 first and falls back to side 0, so the first accepted leaf is already the best one.
//!
//! # Operations on the tree
//!
//! The following are the computational complexities of the functions, where `b` is the bit-width of
//! the address family (32 or 128) and `n` is the number of entries.
//!
//! | Operation                              | Complexity |
//! |----------------------------------------|------------|
//! | `insert`, `remove`                     | `O(b)`     |
//! | `get`, `get_mut`, `contains_key`       | `O(b)`     |
//! | `match_longest`, `match_longest_net`   | `O(b)` for tables of one specificity, `O(n)` worst case |
//! | `clear` (calling `drop` on `T`)        | `O(n)`     |
//! | `len` and `is_empty`                   | `O(1)`     |
//!
//! # Example
//!
//! ```
//! # use critbit_net::RouteTable;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table: RouteTable<&str> = RouteTable::new();
//! table.insert("10.0.0.0/8".parse()?, "wide");
//! table.insert("10.1.0.0/16".parse()?, "narrow");
//!
//! // longest prefix wins
//! let (net, value) = table.match_longest("10.1.2.3".parse()?).unwrap();
//! assert_eq!(net, "10.1.0.0/16".parse()?);
//! assert_eq!(*value, "narrow");
//!
//! assert_eq!(table.match_longest("192.168.1.1".parse()?), None);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

mod fmt;
mod key;
mod lpm;
#[cfg(feature = "serde")]
mod serde;
mod trie;


pub mod table;

pub use table::RouteTable;
