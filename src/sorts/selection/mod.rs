//! # Selection Sort
//!
//! Grows a sorted prefix by repeatedly selecting the minimum of the
//! remaining suffix. Not stable; O(n²) comparisons in every case for the
//! classic form.
//!
//! ## Optimization strategy
//!
//! The optimized variant is **Bingo Sort**: each pass relocates *every*
//! element equal to the current minimum value into the prefix while also
//! spotting the next larger distinct value, so duplicate-heavy inputs
//! finish in O(n·d) where d is the number of distinct values. On
//! all-distinct data it degrades gracefully to classic selection sort.

pub mod code;
#[cfg(test)]
mod test;

pub use code::{selection_sort_naive, selection_sort_optimized};

use crate::sorts::{SortContext, Variant};

/// Unified entry point; the caller picks the variant explicitly.
pub fn selection_sort<T: Clone>(data: &mut [T], variant: Variant, ctx: &SortContext<T>) {
    match variant {
        Variant::Naive => selection_sort_naive(data, ctx),
        Variant::Optimized => selection_sort_optimized(data, ctx),
    }
}
