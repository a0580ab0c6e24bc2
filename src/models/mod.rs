//! Domain models for IPv4 block inversion.
//!
//! - [`address`] - conversion between bytes, `u32` values and masks
//! - [`CidrBlock`] - IPv4 network in CIDR notation

mod address;
mod cidr;

// Re-export public types
pub use address::{
    from_ipv4, get_cidr_mask, host_mask, lo_mask, to_address, to_bytes, to_ipv4, ADDR_MAX,
    ADDR_MIN, MAX_LENGTH,
};
pub(crate) use address::prefix_for_host_mask;
pub use cidr::CidrBlock;
