//! Encoding of IP networks into the fixed-width byte keys stored in the tree.

use std::net::IpAddr;

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

/// Widest possible key: 16 address bytes, the prefix length, and the terminator.
pub(crate) const MAX_KEY_LEN: usize = 18;

/// Byte appended to every key after the prefix length.
pub(crate) const TERMINATOR: u8 = 0xff;

/// A fixed-width search key: the network address bytes, followed by the prefix length and a
/// `0xff` terminator byte.
///
/// IPv4 keys are 6 bytes long and IPv6 keys 18, so keys of different address families never
/// compare equal. Host bits beyond the prefix length are zeroed when the key is built. The
/// terminator guarantees that two distinct well-formed keys always differ in some byte, even when
/// one key is a byte-wise prefix of the other.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Key {
    bytes: [u8; MAX_KEY_LEN],
    len: u8,
}

impl Key {
    /// Build the key for a network, masking out any host bits.
    pub(crate) fn from_net(net: &IpNet) -> Self {
        let mut bytes = [0; MAX_KEY_LEN];
        let addr_len = match net.network() {
            IpAddr::V4(addr) => {
                bytes[..4].copy_from_slice(&addr.octets());
                4
            }
            IpAddr::V6(addr) => {
                bytes[..16].copy_from_slice(&addr.octets());
                16
            }
        };
        bytes[addr_len] = net.prefix_len();
        bytes[addr_len + 1] = TERMINATOR;
        Self {
            bytes,
            len: (addr_len + 2) as u8,
        }
    }

    /// Decode the key back into the network it was built from.
    pub(crate) fn to_net(&self) -> IpNet {
        let prefix_len = self.bytes[self.mask_offset()];
        if self.len() == 6 {
            let octets: [u8; 4] = self.bytes[..4].try_into().unwrap();
            IpNet::V4(Ipv4Net::new(octets.into(), prefix_len).unwrap())
        } else {
            let octets: [u8; 16] = self.bytes[..16].try_into().unwrap();
            IpNet::V6(Ipv6Net::new(octets.into(), prefix_len).unwrap())
        }
    }

    /// Full key length in bytes, including the prefix-length and terminator bytes.
    pub(crate) fn len(&self) -> usize {
        self.len as usize
    }

    /// All key bytes.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Offset of the prefix-length byte (one past the address bytes).
    pub(crate) fn mask_offset(&self) -> usize {
        self.len as usize - 2
    }

    /// The byte at `offset`, reading a zero for any offset past the end of the key. Shorter keys
    /// thus behave as if they were zero-padded to the width of the longest key.
    pub(crate) fn byte(&self, offset: usize) -> u8 {
        if offset < self.len as usize {
            self.bytes[offset]
        } else {
            0
        }
    }
}
