//! IPv4 CIDR block.
//!
//! Provides [`CidrBlock`] for representing an IPv4 network with a prefix
//! length, along with the derived first/last address helpers used by the
//! complement and merge code.

use super::address::{from_ipv4, get_cidr_mask, host_mask, to_ipv4, MAX_LENGTH};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 network in CIDR notation.
///
/// A block is canonical when `addr` has no bits set beyond `prefix`. Blocks
/// built by this crate are always canonical; parsed blocks keep the address
/// as written so that callers can report or reject host bits.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// The address as given.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl CidrBlock {
    /// Create a block, checking the prefix length.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<CidrBlock, CidrError> {
        if prefix > MAX_LENGTH {
            return Err(CidrError::InvalidPrefixLength(prefix.to_string()));
        }
        Ok(CidrBlock { addr, prefix })
    }

    /// Build a block from an integer base. The caller guarantees `prefix <= 32`.
    pub(crate) fn from_u32(base: u32, prefix: u8) -> CidrBlock {
        debug_assert!(prefix <= MAX_LENGTH, "prefix[{prefix}] > 32");
        CidrBlock {
            addr: to_ipv4(base),
            prefix,
        }
    }

    /// The whole IPv4 address space, `0.0.0.0/0`.
    pub fn everything() -> CidrBlock {
        CidrBlock::from_u32(0, 0)
    }

    /// Mask of the host bits of this block.
    pub fn host_mask(&self) -> u32 {
        host_mask(self.prefix).unwrap_or(0)
    }

    /// Network mask of this block.
    pub fn netmask(&self) -> u32 {
        get_cidr_mask(self.prefix).unwrap_or(u32::MAX)
    }

    /// First (network) address as an integer.
    pub fn first(&self) -> u32 {
        from_ipv4(self.addr) & self.netmask()
    }

    /// Last (broadcast) address as an integer.
    pub fn last(&self) -> u32 {
        self.first() | self.host_mask()
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        to_ipv4(self.first())
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        to_ipv4(self.last())
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// True when no host bits are set.
    pub fn is_canonical(&self) -> bool {
        from_ipv4(self.addr) & self.host_mask() == 0
    }

    /// The same block with host bits cleared.
    pub fn network(&self) -> CidrBlock {
        CidrBlock::from_u32(self.first(), self.prefix)
    }

    /// Return the block unchanged if canonical, otherwise an error.
    pub fn canonical(self) -> Result<CidrBlock, CidrError> {
        if self.is_canonical() {
            Ok(self)
        } else {
            Err(CidrError::NonCanonical(self))
        }
    }

    /// Check if `other` lies completely inside this block.
    pub fn contains_block(&self, other: &CidrBlock) -> bool {
        self.first() <= other.first() && other.last() <= self.last()
    }

    /// Check if the two blocks share at least one address.
    pub fn overlaps(&self, other: &CidrBlock) -> bool {
        self.first() <= other.last() && other.first() <= self.last()
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    /// Parse `a.b.c.d/len`, surrounding whitespace allowed.
    fn from_str(addr_cidr: &str) -> Result<CidrBlock, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CidrError::InvalidFormat(addr_cidr.to_string()))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr.to_string()))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| CidrError::InvalidPrefixLength(prefix.to_string()))?;
        CidrBlock::new(addr, prefix)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(s: &str) -> CidrBlock {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse() {
        let b = block(" 10.0.0.0/8 ");
        assert_eq!(b.addr, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(b.prefix, 8);
        assert_eq!(b.to_string(), "10.0.0.0/8");
        assert_eq!(block("0.0.0.0/0"), CidrBlock::everything());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "10.0.0.0".parse::<CidrBlock>(),
            Err(CidrError::InvalidFormat("10.0.0.0".to_string()))
        );
        assert_eq!(
            "10.0.0/8".parse::<CidrBlock>(),
            Err(CidrError::InvalidAddress("10.0.0".to_string()))
        );
        assert_eq!(
            "10.0.0.0/33".parse::<CidrBlock>(),
            Err(CidrError::InvalidPrefixLength("33".to_string()))
        );
        assert_eq!(
            "10.0.0.0/x".parse::<CidrBlock>(),
            Err(CidrError::InvalidPrefixLength("x".to_string()))
        );
        assert!("::1/128".parse::<CidrBlock>().is_err());
    }

    #[test]
    fn test_first_last() {
        let b = block("192.168.0.0/16");
        assert_eq!(b.lo(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(b.hi(), Ipv4Addr::new(192, 168, 255, 255));
        assert_eq!(b.size(), 65536);

        let all = CidrBlock::everything();
        assert_eq!(all.first(), 0);
        assert_eq!(all.last(), u32::MAX);
        assert_eq!(all.size(), 1 << 32);

        let host = block("1.2.3.4/32");
        assert_eq!(host.first(), host.last());
        assert_eq!(host.size(), 1);
    }

    #[test]
    fn test_canonical() {
        let b = block("10.1.2.3/8");
        assert!(!b.is_canonical());
        assert_eq!(b.network(), block("10.0.0.0/8"));
        assert_eq!(b.lo(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(b.canonical(), Err(CidrError::NonCanonical(b)));
        assert_eq!(block("10.0.0.0/8").canonical(), Ok(block("10.0.0.0/8")));
    }

    #[test]
    fn test_contains_and_overlaps() {
        let big = block("10.0.0.0/8");
        let small = block("10.0.10.64/26");
        let other = block("11.0.0.0/8");
        assert!(big.contains_block(&small));
        assert!(!small.contains_block(&big));
        assert!(big.overlaps(&small) && small.overlaps(&big));
        assert!(!big.overlaps(&other));
    }

    #[test]
    fn test_cmp() {
        let b1 = block("10.0.10.0/24");
        let b2 = block("10.0.0.0/8");
        let b3 = block("10.0.10.64/26");
        assert!(b2 < b1);
        assert!(b1 < b3);
        assert!(b2.hi() > b3.hi());
    }

    #[test]
    fn test_serde() {
        let blocks = vec![block("10.0.0.0/8"), block("192.168.0.0/16")];
        let json = serde_json::to_string(&blocks).unwrap();
        assert_eq!(json, r#"["10.0.0.0/8","192.168.0.0/16"]"#);
        let back: Vec<CidrBlock> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, blocks);
        assert!(serde_json::from_str::<CidrBlock>(r#""10.0.0.0""#).is_err());
    }
}
