//! # Shell Sort
//!
//! Insertion sort generalized over a shrinking gap sequence: far-apart
//! elements are compared first, so late passes run over nearly-sorted
//! data. Not stable.
//!
//! ## Optimization strategy
//!
//! The naive variant halves the gap (`n/2, n/4, …, 1`); the optimized
//! variant uses the Knuth sequence (`1, 4, 13, 40, …`, built by
//! `gap = 3*gap + 1` and consumed downward), which empirically performs
//! fewer comparisons than plain halving.

pub mod code;
#[cfg(test)]
mod test;

pub use code::{shell_sort_naive, shell_sort_optimized};

use crate::sorts::{SortContext, Variant};

/// Unified entry point; the caller picks the variant explicitly.
pub fn shell_sort<T: Clone>(data: &mut [T], variant: Variant, ctx: &SortContext<T>) {
    match variant {
        Variant::Naive => shell_sort_naive(data, ctx),
        Variant::Optimized => shell_sort_optimized(data, ctx),
    }
}
