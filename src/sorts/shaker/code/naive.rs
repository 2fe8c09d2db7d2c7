//! Textbook shaker sort.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Shaker sort, didactic form: symmetric shrinking bounds per pass index,
/// with the swap flag consulted only after a full bidirectional cycle.
/// Each cycle fixes both extremes, so `n / 2` cycles always suffice.
pub fn shaker_sort_naive<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();
    for pass in 0..n / 2 {
        let mut swapped = false;

        // Left to right: sink the maximum of the window.
        for i in pass..n - pass - 1 {
            if ctx.compare(&data[i], &data[i + 1]) == Ordering::Greater {
                ctx.swap(data, i, i + 1);
                swapped = true;
            }
        }

        // Right to left: float the minimum of the window.
        for i in (pass + 1..n - pass - 1).rev() {
            if ctx.compare(&data[i], &data[i - 1]) == Ordering::Less {
                ctx.swap(data, i, i - 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
