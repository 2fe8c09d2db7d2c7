//! Textbook bubble sort.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Bubble sort without early exit: all `n - 1` passes run even when the
/// suffix is already sorted.
pub fn bubble_sort_naive<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();
    for i in 1..n {
        for j in 0..n - i {
            if ctx.compare(&data[j], &data[j + 1]) == Ordering::Greater {
                ctx.swap(data, j, j + 1);
            }
        }
    }
}
