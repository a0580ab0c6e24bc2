//! IPv4 address codec and mask helpers.
//!
//! Addresses are handled as `u32` values so that ordering and bit operations
//! follow plain integer arithmetic.

use crate::error::CidrError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Lowest IPv4 address as an integer.
pub const ADDR_MIN: u32 = 0;

/// Highest IPv4 address as an integer.
pub const ADDR_MAX: u32 = !ADDR_MIN;

/// Decode 4 big-endian bytes into an address value.
///
/// # Examples
/// ```
/// use cidr_inverse::models::to_address;
/// assert_eq!(to_address(&[10, 0, 0, 1]).unwrap(), 0x0A000001);
/// assert!(to_address(&[0; 16]).is_err());
/// ```
pub fn to_address(bytes: &[u8]) -> Result<u32, CidrError> {
    let octets: [u8; 4] = bytes
        .try_into()
        .map_err(|_| CidrError::InvalidAddressLength(bytes.len()))?;
    Ok(u32::from_be_bytes(octets))
}

/// Encode an address value as 4 big-endian bytes.
pub fn to_bytes(addr: u32) -> [u8; 4] {
    addr.to_be_bytes()
}

/// Convert an address value to [`Ipv4Addr`].
pub fn to_ipv4(addr: u32) -> Ipv4Addr {
    Ipv4Addr::from(to_bytes(addr))
}

/// Convert an [`Ipv4Addr`] to an address value.
pub fn from_ipv4(addr: Ipv4Addr) -> u32 {
    u32::from_be_bytes(addr.octets())
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_inverse::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    Ok(!host_mask(len)?)
}

/// Mask of the low `32 - len` bits, the variable part of a block.
pub fn host_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::InvalidPrefixLength(len.to_string()))
    } else {
        // u64 so that len == 0 does not overflow the shift
        Ok(((1u64 << (MAX_LENGTH - len)) - 1) as u32)
    }
}

/// Prefix length that belongs to a host mask produced by [`host_mask`].
pub(crate) fn prefix_for_host_mask(hostmask: u32) -> u8 {
    hostmask.leading_zeros() as u8
}

/// Calculate the minimum prefix for an address based on trailing zeros.
///
/// This is the largest block the address can be the network address of.
pub fn lo_mask(addr: u32) -> u8 {
    MAX_LENGTH - addr.trailing_zeros().min(MAX_LENGTH as u32) as u8
}
