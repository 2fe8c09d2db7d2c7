//! Bubble sort with early exit.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Bubble sort that stops after the first pass performing zero swaps.
/// On sorted input that is a single pass of `n - 1` comparisons.
pub fn bubble_sort_optimized<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();
    for i in 1..n {
        let mut swapped = false;
        for j in 0..n - i {
            if ctx.compare(&data[j], &data[j + 1]) == Ordering::Greater {
                ctx.swap(data, j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
