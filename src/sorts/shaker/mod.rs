//! # Shaker Sort (cocktail sort)
//!
//! Bidirectional bubble sort: a left-to-right pass sinks the maximum to
//! the shrinking right boundary, a right-to-left pass floats the minimum
//! to the shrinking left boundary. Stable; O(n) best case, O(n²) average
//! and worst case.
//!
//! The naive variant checks its swapped flag once per full cycle; the
//! optimized variant tracks both boundaries explicitly and also stops
//! between the two directional passes.

pub mod code;
#[cfg(test)]
mod test;

pub use code::{shaker_sort_naive, shaker_sort_optimized};

use crate::sorts::{SortContext, Variant};

/// Unified entry point; the caller picks the variant explicitly.
pub fn shaker_sort<T: Clone>(data: &mut [T], variant: Variant, ctx: &SortContext<T>) {
    match variant {
        Variant::Naive => shaker_sort_naive(data, ctx),
        Variant::Optimized => shaker_sort_optimized(data, ctx),
    }
}
