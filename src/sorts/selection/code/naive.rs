//! Classic selection sort.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Selection sort: scan the unsorted suffix for its minimum and swap it
/// into place. The swap is unconditional, so the pass count and swap
/// count are exactly `n - 1` (self-swaps included).
pub fn selection_sort_naive<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if ctx.compare(&data[j], &data[min_idx]) == Ordering::Less {
                min_idx = j;
            }
        }
        ctx.swap(data, i, min_idx);
    }
}
