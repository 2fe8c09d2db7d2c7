//! Textbook quick sort.

use super::partition;
use crate::sorts::SortContext;

/// Quick sort with the last element of every range as pivot. Sorted and
/// reverse-sorted inputs hit the O(n²) worst case.
pub fn quick_sort_naive<T: Clone>(data: &mut [T], lo: usize, hi: usize, ctx: &SortContext<T>) {
    if lo >= hi {
        return;
    }

    let p = partition(data, lo, hi, ctx);
    if p > lo {
        quick_sort_naive(data, lo, p - 1, ctx);
    }
    if p < hi {
        quick_sort_naive(data, p + 1, hi, ctx);
    }
}
