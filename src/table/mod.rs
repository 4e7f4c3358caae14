//! Implementation of the route table, the public face of the crate.

use std::net::IpAddr;

use ipnet::{AddrParseError, IpNet};

use crate::key::Key;
use crate::trie::CritBitTrie;

mod iter;

pub use iter::*;

/// An IP routing table: a map from networks (CIDR) to values that answers exact lookups as well
/// as longest-prefix-match queries.
///
/// IPv4 and IPv6 networks live in the same table. A query only ever matches entries of its own
/// address family; everything else simply yields no match.
///
/// ```
/// # use critbit_net::RouteTable;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut table: RouteTable<u32> = RouteTable::new();
/// table.insert("10.0.0.0/8".parse()?, 1);
/// table.insert("10.1.0.0/16".parse()?, 2);
/// assert_eq!(table.match_longest("10.1.2.3".parse()?), Some(("10.1.0.0/16".parse()?, &2)));
/// assert_eq!(table.match_longest("10.2.0.1".parse()?), Some(("10.0.0.0/8".parse()?, &1)));
/// assert_eq!(table.match_longest("192.168.1.1".parse()?), None);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RouteTable<T> {
    pub(crate) trie: CritBitTrie<T>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self {
            trie: CritBitTrie::default(),
        }
    }
}

impl<T> RouteTable<T> {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty route table with space reserved for `n` entries. The capacity is a pure
    /// performance hint and does not affect behavior.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            trie: CritBitTrie::with_capacity(n),
        }
    }

    /// Returns the number of networks stored in the table.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if the table contains no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Remove all entries, keeping the allocated memory.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// table.insert("10.0.0.0/8".parse()?, 1);
    /// table.clear();
    /// assert_eq!(table.len(), 0);
    /// assert_eq!(table.match_longest("10.0.0.1".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Insert a value under a network, returning the previous value if the network was already
    /// present. The network is normalized: host bits beyond the prefix length are ignored.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// assert_eq!(table.insert("10.0.0.0/8".parse()?, 1), None);
    /// assert_eq!(table.insert("10.0.0.0/8".parse()?, 2), Some(1));
    /// assert_eq!(table.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, net: IpNet, value: T) -> Option<T> {
        self.trie.insert(Key::from_net(&net), value)
    }

    /// Remove a network and return its value, or `None` if it was not present. Removal requires
    /// the exact network; removing a covering or covered network leaves the entry in place.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// table.insert("10.0.0.0/8".parse()?, 1);
    /// assert_eq!(table.remove(&"10.0.0.0/16".parse()?), None);
    /// assert_eq!(table.remove(&"10.0.0.0/8".parse()?), Some(1));
    /// assert_eq!(table.remove(&"10.0.0.0/8".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove(&mut self, net: &IpNet) -> Option<T> {
        self.trie.remove(&Key::from_net(net))
    }

    /// Get the value stored under a network by matching on it exactly.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// table.insert("10.0.0.0/8".parse()?, 1);
    /// assert_eq!(table.get(&"10.0.0.0/8".parse()?), Some(&1));
    /// assert_eq!(table.get(&"10.0.0.0/16".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, net: &IpNet) -> Option<&T> {
        self.trie.get(&Key::from_net(net))
    }

    /// Get a mutable reference to the value stored under a network.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// table.insert("10.0.0.0/8".parse()?, 1);
    /// *table.get_mut(&"10.0.0.0/8".parse()?).unwrap() += 1;
    /// assert_eq!(table.get(&"10.0.0.0/8".parse()?), Some(&2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_mut(&mut self, net: &IpNet) -> Option<&mut T> {
        self.trie.get_mut(&Key::from_net(net))
    }

    /// Get the stored network and value by matching exactly. The returned network is the
    /// normalized form of the inserted one.
    pub fn get_key_value(&self, net: &IpNet) -> Option<(IpNet, &T)> {
        self.trie
            .get_key_value(&Key::from_net(net))
            .map(|(key, value)| (key.to_net(), value))
    }

    /// Check whether a network is present in the table, without longest-prefix matching.
    pub fn contains_key(&self, net: &IpNet) -> bool {
        self.trie.get(&Key::from_net(net)).is_some()
    }

    /// Find the most specific network containing the given address, together with its value.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// table.insert("10.0.0.0/8".parse()?, 1);
    /// table.insert("10.1.0.0/16".parse()?, 2);
    /// assert_eq!(table.match_longest("10.1.2.3".parse()?), Some(("10.1.0.0/16".parse()?, &2)));
    /// assert_eq!(table.match_longest("10.2.2.3".parse()?), Some(("10.0.0.0/8".parse()?, &1)));
    /// assert_eq!(table.match_longest("11.0.0.1".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn match_longest(&self, addr: IpAddr) -> Option<(IpNet, &T)> {
        self.match_longest_net(&IpNet::from(addr))
    }

    /// Find the most specific network containing the given network, together with its value. An
    /// entry matches if it contains every address of the queried network, so its prefix length is
    /// at most the query's.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// table.insert("10.0.0.0/8".parse()?, 1);
    /// table.insert("10.1.0.0/16".parse()?, 2);
    /// assert_eq!(table.match_longest_net(&"10.1.0.0/24".parse()?), Some(("10.1.0.0/16".parse()?, &2)));
    /// assert_eq!(table.match_longest_net(&"10.0.0.0/12".parse()?), Some(("10.0.0.0/8".parse()?, &1)));
    /// # Ok(())
    /// # }
    /// ```
    pub fn match_longest_net(&self, net: &IpNet) -> Option<(IpNet, &T)> {
        self.trie
            .match_longest(&Key::from_net(net))
            .map(|(key, value)| (key.to_net(), value))
    }

    /// Insert a value under a network given in CIDR notation. Fails if the string is not a valid
    /// network; the table is left unchanged in that case.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// assert_eq!(table.add("10.0.0.0/8", 1)?, None);
    /// assert!(table.add("10.0.0.0", 1).is_err());
    /// assert!(table.add("not a network", 1).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn add(&mut self, cidr: &str, value: T) -> Result<Option<T>, AddrParseError> {
        Ok(self.insert(cidr.parse()?, value))
    }

    /// Remove a network given in CIDR notation. Returns `false`, rather than an error, if the
    /// string is malformed or the network is not present.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// table.insert("10.0.0.0/8".parse()?, 1);
    /// assert!(table.delete("10.0.0.0/8"));
    /// assert!(!table.delete("10.0.0.0/8"));
    /// assert!(!table.delete("not a network"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn delete(&mut self, cidr: &str) -> bool {
        match cidr.parse() {
            Ok(net) => self.remove(&net).is_some(),
            Err(_) => false,
        }
    }

    /// Get the value stored under a network given in CIDR notation, matching exactly. Fails if
    /// the string is not a valid network.
    pub fn get_cidr(&self, cidr: &str) -> Result<Option<&T>, AddrParseError> {
        Ok(self.get(&cidr.parse()?))
    }

    /// Find the most specific stored network covering the given address or network string, and
    /// return it together with its value. A bare address is treated as a full-length network.
    /// Fails if the string is neither a valid address nor a valid network.
    ///
    /// ```
    /// # use critbit_net::RouteTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table: RouteTable<u32> = RouteTable::new();
    /// table.insert("10.0.0.0/8".parse()?, 1);
    /// let (net, value) = table.match_cidr("10.1.2.3")?.unwrap();
    /// assert_eq!(net, "10.0.0.0/8".parse()?);
    /// assert_eq!(*value, 1);
    /// assert_eq!(table.match_cidr("10.0.0.0/4")?, None);
    /// assert!(table.match_cidr("not an address").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn match_cidr(&self, s: &str) -> Result<Option<(IpNet, &T)>, AddrParseError> {
        let query = match s.parse::<IpNet>() {
            Ok(net) => net,
            Err(err) => match s.parse::<IpAddr>() {
                Ok(addr) => IpNet::from(addr),
                Err(_) => return Err(err),
            },
        };
        Ok(self.match_longest_net(&query))
    }
}

impl<T> PartialEq for RouteTable<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RouteTable<T> where T: Eq {}
