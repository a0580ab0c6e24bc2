//! Ordering of block lists.

use crate::models::CidrBlock;

/// Stable sort by network address, ascending.
///
/// Blocks sharing a network address keep their original relative order.
pub fn sort_blocks(blocks: &mut [CidrBlock]) {
    blocks.sort_by_key(|b| b.first());
}
