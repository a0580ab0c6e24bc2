//! Complement of a single block.
//!
//! Fills the address space before and after a block with the largest aligned
//! blocks that fit. Both walks start from the widest host mask and narrow it
//! by one bit per step, so each direction takes at most 32 steps between two
//! emitted blocks.

use crate::models::{prefix_for_host_mask, CidrBlock, ADDR_MAX, ADDR_MIN};

/// Blocks covering `[0, first(block) - 1]`, in ascending order.
///
/// Empty when the block starts at `0.0.0.0`.
pub fn preceding_blocks(block: &CidrBlock) -> Vec<CidrBlock> {
    let mut blocks = Vec::new();
    let first = block.first();
    let mut cursor = ADDR_MIN;
    let mut hostmask = ADDR_MAX;

    while cursor != first {
        let block_end = cursor | hostmask;
        if block_end < first {
            let found = CidrBlock::from_u32(cursor, prefix_for_host_mask(hostmask));
            log::trace!("preceding {block}: {found}");
            blocks.push(found);
            // block_end < first <= ADDR_MAX, cannot overflow
            cursor = block_end + 1;
        }
        hostmask >>= 1;
    }
    blocks
}

/// Blocks covering `[last(block) + 1, 255.255.255.255]`, in descending order.
///
/// Empty when the block ends at `255.255.255.255`.
pub fn following_blocks(block: &CidrBlock) -> Vec<CidrBlock> {
    let mut blocks = Vec::new();
    let last = block.last();
    let mut cursor = ADDR_MAX;
    let mut hostmask = ADDR_MAX;

    while cursor != last {
        // cursor always has its low bits set, xor clears them
        let block_start = cursor ^ hostmask;
        if block_start > last {
            let found = CidrBlock::from_u32(block_start, prefix_for_host_mask(hostmask));
            log::trace!("following {block}: {found}");
            blocks.push(found);
            // block_start > last >= ADDR_MIN, cannot underflow
            cursor = block_start - 1;
        }
        hostmask >>= 1;
    }
    blocks
}

/// Every block not overlapping `block`: preceding then following, unsorted.
///
/// Host bits set on `block` are ignored, it is treated as its network.
pub fn complement(block: &CidrBlock) -> Vec<CidrBlock> {
    let mut blocks = preceding_blocks(block);
    blocks.extend(following_blocks(block));
    log::debug!("complement of {block}: {} blocks", blocks.len());
    blocks
}
