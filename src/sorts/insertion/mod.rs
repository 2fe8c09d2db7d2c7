//! # Insertion Sort
//!
//! Builds the sorted prefix one element at a time: extract element `i`
//! into a key slot, shift every larger prefix element one place right,
//! drop the key into the gap. Stable; O(n) on already-sorted input,
//! O(n²) average and worst case.
//!
//! The two variants are count-identical; they differ only in how the
//! inner loop expresses its early exit.

pub mod code;
#[cfg(test)]
mod test;

pub use code::{insertion_sort_naive, insertion_sort_optimized};

use crate::sorts::{SortContext, Variant};

/// Unified entry point; the caller picks the variant explicitly.
pub fn insertion_sort<T: Clone>(data: &mut [T], variant: Variant, ctx: &SortContext<T>) {
    match variant {
        Variant::Naive => insertion_sort_naive(data, ctx),
        Variant::Optimized => insertion_sort_optimized(data, ctx),
    }
}
