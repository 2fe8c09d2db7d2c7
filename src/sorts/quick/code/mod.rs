//! Quick sort implementations and the shared Lomuto partition.

mod naive;
mod optimized;

pub use naive::quick_sort_naive;
pub use optimized::quick_sort_optimized;

use crate::sorts::{SortContext, SortFn};
use crate::utils::VariantInfo;
use std::cmp::Ordering;

/// Lomuto partition of the inclusive range `[lo, hi]`, pivoting on
/// `data[hi]`. Returns the pivot's final index. Both variants use this
/// unchanged; the optimized one narrows the range after median-of-three.
///
/// The pivot is held in a cloned scratch value for the duration of the
/// scan; if that clone cannot be allocated the process aborts (skipping a
/// partition step silently would corrupt the ordering).
pub fn partition<T: Clone>(data: &mut [T], lo: usize, hi: usize, ctx: &SortContext<T>) -> usize {
    let pivot = data[hi].clone();
    let mut i = lo;

    for j in lo..hi {
        if ctx.compare(&data[j], &pivot) == Ordering::Less {
            ctx.swap(data, i, j);
            i += 1;
        }
    }
    ctx.swap(data, i, hi);
    i
}

/// Whole-slice wrappers so the range-signatured variants fit the common
/// `SortFn` shape used by variant listings and tests.
pub fn quick_sort_naive_full<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    if data.len() > 1 {
        quick_sort_naive(data, 0, data.len() - 1, ctx);
    }
}

pub fn quick_sort_optimized_full<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    if data.len() > 1 {
        quick_sort_optimized(data, 0, data.len() - 1, ctx);
    }
}

/// All variants of this family, naive first.
pub fn available_variants<T: Clone>() -> Vec<VariantInfo<SortFn<T>>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Last-element pivot, plain Lomuto",
            function: quick_sort_naive_full::<T>,
        },
        VariantInfo {
            name: "optimized",
            description: "Median-of-three pivot selection before Lomuto",
            function: quick_sort_optimized_full::<T>,
        },
    ]
}
