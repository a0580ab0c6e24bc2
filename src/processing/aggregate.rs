//! Inversion of one or many blocks.
//!
//! Builds on [`complement`](super::complement) for the per-block walk and on a
//! [`Merger`] to canonicalize the multi-block result.

use super::complement::{complement, following_blocks, preceding_blocks};
use super::merge::{Merger, RangeMerger};
use super::sorter::sort_blocks;
use crate::models::CidrBlock;
use itertools::Itertools;

/// Every address not in `block`, as sorted aligned blocks.
pub fn invert_one(block: &CidrBlock) -> Vec<CidrBlock> {
    let mut blocks = complement(block);
    sort_blocks(&mut blocks);
    blocks
}

/// Every address not in any of `blocks`, merged with [`RangeMerger`].
pub fn invert_many(blocks: &[CidrBlock]) -> Vec<CidrBlock> {
    invert_many_with(blocks, &RangeMerger)
}

/// Every address not in any of `blocks`, merged with `merger`.
///
/// Inputs may overlap or repeat. The result is sorted, disjoint and minimal.
/// An empty input yields the whole address space.
pub fn invert_many_with<M: Merger + ?Sized>(blocks: &[CidrBlock], merger: &M) -> Vec<CidrBlock> {
    let inputs = merger.merge(blocks);
    let (Some(first), Some(last)) = (inputs.first(), inputs.last()) else {
        log::debug!("invert_many: no input blocks, returning everything");
        return vec![CidrBlock::everything()];
    };

    // The union of single-block complements would cover the other inputs too,
    // so each gap is cut down to what lies between two neighbouring inputs.
    let mut raw = preceding_blocks(first);
    for (left, right) in inputs.iter().tuple_windows() {
        raw.extend(gap_blocks(left, right));
    }
    raw.extend(following_blocks(last));
    log::debug!(
        "invert_many: {} inputs ({} after merge), {} raw blocks",
        blocks.len(),
        inputs.len(),
        raw.len()
    );

    let mut merged = merger.merge(&raw);
    sort_blocks(&mut merged);
    merged
}

/// Blocks strictly between two disjoint blocks, `left` lying before `right`.
fn gap_blocks(left: &CidrBlock, right: &CidrBlock) -> Vec<CidrBlock> {
    let mut after_left = following_blocks(left);
    after_left.reverse();
    let before_right = preceding_blocks(right);
    intersect(&after_left, &before_right)
}

/// Intersection of two ascending lists of disjoint aligned blocks.
///
/// Two aligned blocks that overlap are nested, so their intersection is the
/// smaller of the two.
fn intersect(a: &[CidrBlock], b: &[CidrBlock]) -> Vec<CidrBlock> {
    let mut blocks = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (x, y) = (&a[i], &b[j]);
        if x.overlaps(y) {
            blocks.push(if x.prefix >= y.prefix { *x } else { *y });
        }
        if x.last() <= y.last() {
            i += 1;
        } else {
            j += 1;
        }
    }
    blocks
}
