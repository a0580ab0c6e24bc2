//! Error types for address and CIDR handling.

use crate::models::CidrBlock;
use thiserror::Error;

/// Errors raised while decoding addresses or parsing CIDR blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Address bytes were not exactly 4 long (IPv4 only).
    #[error("invalid address length: expected 4 bytes, got {0}")]
    InvalidAddressLength(usize),
    /// Text was not in `a.b.c.d/len` form.
    #[error("invalid CIDR format: {0}")]
    InvalidFormat(String),
    /// The address part could not be parsed as dotted quad.
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),
    /// The prefix part was not a number in `0..=32`.
    #[error("invalid prefix length: {0}")]
    InvalidPrefixLength(String),
    /// Host bits are set beyond the prefix length.
    #[error("{0} has host bits set, network address is {}", .0.network())]
    NonCanonical(CidrBlock),
}
