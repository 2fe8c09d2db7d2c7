//! # Quick Sort
//!
//! Recursive partition-and-conquer over an inclusive `[lo, hi]` index
//! range, the one family with a range signature instead of a whole-slice
//! signature. Not stable; O(n log n) average, O(n²) worst case.
//!
//! ## Optimization strategy
//!
//! The naive variant pivots on the last element of the range, which
//! degenerates to O(n²) on sorted or reverse-sorted input. The optimized
//! variant applies median-of-three on ranges of length ≥ 4: order the
//! first/middle/last elements, park the median just before the range end
//! and partition up to there so the median really is the pivot.

pub mod code;
#[cfg(test)]
mod test;

pub use code::{partition, quick_sort_naive, quick_sort_optimized};

use crate::sorts::{SortContext, Variant};

/// Unified entry point over the inclusive range `[lo, hi]`; the caller
/// picks the variant explicitly.
pub fn quick_sort<T: Clone>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    variant: Variant,
    ctx: &SortContext<T>,
) {
    match variant {
        Variant::Naive => quick_sort_naive(data, lo, hi, ctx),
        Variant::Optimized => quick_sort_optimized(data, lo, hi, ctx),
    }
}
