//! # Bubble Sort
//!
//! Repeated adjacent-pair passes that sink the largest unsorted element to
//! the right boundary. Stable; O(n²) average and worst case.
//!
//! ## Variant policy
//!
//! The naive variant always performs the full `n - 1` passes; the
//! optimized variant tracks whether a pass swapped anything and stops at
//! the first clean pass, giving it the O(n) best case on sorted input.

pub mod code;

pub use code::{bubble_sort_naive, bubble_sort_optimized};

use crate::sorts::{SortContext, Variant};

/// Unified entry point; the caller picks the variant explicitly.
pub fn bubble_sort<T: Clone>(data: &mut [T], variant: Variant, ctx: &SortContext<T>) {
    match variant {
        Variant::Naive => bubble_sort_naive(data, ctx),
        Variant::Optimized => bubble_sort_optimized(data, ctx),
    }
}
