//! Block inversion logic.
//!
//! - [`complement`] - blocks before and after a single block
//! - [`sorter`] - stable ordering by network address
//! - [`merge`] - canonical merge strategies behind the [`Merger`] trait
//! - [`aggregate`] - inversion of one or many blocks

mod aggregate;
mod complement;
mod merge;
mod sorter;

// Re-export public functions
pub use aggregate::{invert_many, invert_many_with, invert_one};
pub use complement::{complement, following_blocks, preceding_blocks};
pub use merge::{range_blocks, Merger, RangeMerger, SiblingMerger};
pub use sorter::sort_blocks;
