//! Quick sort with median-of-three pivot selection.

use super::partition;
use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Quick sort that defeats the sorted/reverse-sorted worst case: ranges of
/// length ≥ 4 get a median-of-three pivot, shorter ranges fall back to the
/// plain last-element pivot.
pub fn quick_sort_optimized<T: Clone>(data: &mut [T], lo: usize, hi: usize, ctx: &SortContext<T>) {
    if lo >= hi {
        return;
    }

    let p = if hi - lo >= 3 {
        median_of_three(data, lo, hi, ctx);
        // The median now sits at hi - 1; partition up to it so it is the
        // pivot. data[hi], the largest of the sample, is already on the
        // right side.
        partition(data, lo, hi - 1, ctx)
    } else {
        partition(data, lo, hi, ctx)
    };

    if p > lo {
        quick_sort_optimized(data, lo, p - 1, ctx);
    }
    if p < hi {
        quick_sort_optimized(data, p + 1, hi, ctx);
    }
}

/// Order the elements at `lo`, `mid`, `hi` (three comparisons, up to three
/// swaps), then park the median at `hi - 1`.
fn median_of_three<T: Clone>(data: &mut [T], lo: usize, hi: usize, ctx: &SortContext<T>) {
    let mid = lo + (hi - lo) / 2;

    if ctx.compare(&data[mid], &data[lo]) == Ordering::Less {
        ctx.swap(data, lo, mid);
    }
    if ctx.compare(&data[hi], &data[lo]) == Ordering::Less {
        ctx.swap(data, lo, hi);
    }
    if ctx.compare(&data[hi], &data[mid]) == Ordering::Less {
        ctx.swap(data, mid, hi);
    }

    ctx.swap(data, mid, hi - 1);
}
