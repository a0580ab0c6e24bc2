//! Canonical merge of block lists.
//!
//! A [`Merger`] turns any list of blocks into the minimal sorted list of
//! disjoint aligned blocks covering the same addresses. Two strategies are
//! provided; both give the same output for the same input.

use crate::models::{lo_mask, CidrBlock, MAX_LENGTH};
use itertools::Itertools;
use std::ops::RangeInclusive;

/// Reduce a block list to its minimal disjoint equivalent.
pub trait Merger {
    /// Remove duplicates and contained blocks, coalesce neighbours, sort.
    fn merge(&self, blocks: &[CidrBlock]) -> Vec<CidrBlock>;
}

/// Coalesces blocks as address ranges, then splits each range back into the
/// largest aligned blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeMerger;

impl Merger for RangeMerger {
    fn merge(&self, blocks: &[CidrBlock]) -> Vec<CidrBlock> {
        let merged: Vec<CidrBlock> = blocks
            .iter()
            .map(|b| (b.first() as u64, b.last() as u64))
            .sorted()
            .coalesce(|a, b| {
                if b.0 <= a.1 + 1 {
                    Ok((a.0, a.1.max(b.1)))
                } else {
                    Err((a, b))
                }
            })
            .flat_map(|(first, last)| range_blocks(first as u32..=last as u32))
            .collect();
        log::debug!(
            "RangeMerger: {} blocks merged into {}",
            blocks.len(),
            merged.len()
        );
        merged
    }
}

/// Drops contained blocks, then joins sibling pairs until nothing changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SiblingMerger;

impl Merger for SiblingMerger {
    fn merge(&self, blocks: &[CidrBlock]) -> Vec<CidrBlock> {
        // Containers sort before the blocks they contain.
        let mut current: Vec<CidrBlock> = Vec::with_capacity(blocks.len());
        for b in blocks
            .iter()
            .map(|b| b.network())
            .sorted_by_key(|b| (b.first(), b.prefix))
        {
            if let Some(kept) = current.last().filter(|kept| kept.contains_block(&b)) {
                log::trace!("SiblingMerger: drop {b}, inside {kept}");
                continue;
            }
            current.push(b);
        }

        let mut rounds = 0;
        loop {
            let mut joined = Vec::with_capacity(current.len());
            let mut changed = false;
            let mut iter = current.into_iter().peekable();
            while let Some(b) = iter.next() {
                if let Some(next) = iter.peek() {
                    if is_left_sibling(&b, next) {
                        joined.push(CidrBlock::from_u32(b.first(), b.prefix - 1));
                        iter.next();
                        changed = true;
                        continue;
                    }
                }
                joined.push(b);
            }
            current = joined;
            rounds += 1;
            if !changed {
                break;
            }
        }
        log::debug!(
            "SiblingMerger: {} blocks merged into {} after {rounds} rounds",
            blocks.len(),
            current.len()
        );
        current
    }
}

/// True when `left` and `right` are the two halves of the same parent block.
fn is_left_sibling(left: &CidrBlock, right: &CidrBlock) -> bool {
    left.prefix > 0
        && left.prefix == right.prefix
        && left.first() & (1u32 << (MAX_LENGTH - left.prefix)) == 0
        && right.first() == left.last() + 1
}

/// Split an inclusive address range into the fewest aligned blocks.
///
/// Each block is the biggest one that starts at the cursor, is aligned there,
/// and does not run past the end of the range.
pub fn range_blocks(range: RangeInclusive<u32>) -> Vec<CidrBlock> {
    // u64 so that the cursor can step past 255.255.255.255
    let last = *range.end() as u64;
    let mut blocks = Vec::new();
    let mut start = *range.start() as u64;
    while start <= last {
        let mut prefix = lo_mask(start as u32);
        while start + (1u64 << (MAX_LENGTH - prefix)) - 1 > last {
            prefix += 1;
        }
        blocks.push(CidrBlock::from_u32(start as u32, prefix));
        start += 1u64 << (MAX_LENGTH - prefix);
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(s: &str) -> CidrBlock {
        s.parse().unwrap()
    }

    fn blocks(list: &[&str]) -> Vec<CidrBlock> {
        list.iter().map(|s| block(s)).collect()
    }

    fn both(input: &[CidrBlock]) -> Vec<CidrBlock> {
        let by_range = RangeMerger.merge(input);
        let by_sibling = SiblingMerger.merge(input);
        assert_eq!(by_range, by_sibling, "merge strategies disagree");
        by_range
    }

    #[test]
    fn test_range_blocks() {
        assert_eq!(range_blocks(0..=u32::MAX), blocks(&["0.0.0.0/0"]));
        // 10.6.2.80 .. 10.6.7.255
        let first = block("10.6.2.80/32").first();
        let last = block("10.6.7.255/32").first();
        assert_eq!(
            range_blocks(first..=last),
            blocks(&[
                "10.6.2.80/28",
                "10.6.2.96/27",
                "10.6.2.128/25",
                "10.6.3.0/24",
                "10.6.4.0/22"
            ])
        );
        assert_eq!(range_blocks(5..=5), blocks(&["0.0.0.5/32"]));
        assert_eq!(
            range_blocks(u32::MAX..=u32::MAX),
            blocks(&["255.255.255.255/32"])
        );
        #[allow(clippy::reversed_empty_ranges)]
        let empty = 6..=5;
        assert!(range_blocks(empty).is_empty());
    }

    #[test]
    fn test_merge_duplicates() {
        let input = blocks(&["10.0.0.0/8", "10.0.0.0/8", "10.0.0.0/8"]);
        assert_eq!(both(&input), blocks(&["10.0.0.0/8"]));
    }

    #[test]
    fn test_merge_contained() {
        let input = blocks(&["10.0.10.0/24", "10.0.0.0/8", "10.0.10.64/26"]);
        assert_eq!(both(&input), blocks(&["10.0.0.0/8"]));
    }

    #[test]
    fn test_merge_siblings() {
        let input = blocks(&["10.0.1.0/24", "10.0.0.0/24", "10.0.2.0/23"]);
        assert_eq!(both(&input), blocks(&["10.0.0.0/22"]));
        let halves = blocks(&["128.0.0.0/1", "0.0.0.0/1"]);
        assert_eq!(both(&halves), blocks(&["0.0.0.0/0"]));
    }

    #[test]
    fn test_merge_adjacent_not_siblings() {
        // adjacent but 10.0.1.0/24 and 10.0.2.0/24 have different parents
        let input = blocks(&["10.0.2.0/24", "10.0.1.0/24"]);
        assert_eq!(both(&input), blocks(&["10.0.1.0/24", "10.0.2.0/24"]));
    }

    #[test]
    fn test_merge_disjoint_sorted() {
        let input = blocks(&["192.168.0.0/16", "10.0.0.0/8", "172.16.0.0/12"]);
        assert_eq!(
            both(&input),
            blocks(&["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"])
        );
    }

    #[test]
    fn test_merge_empty() {
        assert!(both(&[]).is_empty());
    }

    #[test]
    fn test_merge_idempotent() {
        let input = blocks(&[
            "10.0.0.0/9",
            "10.128.0.0/10",
            "10.192.0.0/10",
            "11.0.0.0/8",
            "1.2.3.4/32",
            "1.2.3.5/32",
        ]);
        let once = both(&input);
        assert_eq!(once, blocks(&["1.2.3.4/31", "10.0.0.0/7"]));
        assert_eq!(both(&once), once);
    }
}
