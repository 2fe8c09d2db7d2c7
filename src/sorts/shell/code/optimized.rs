//! Shell sort with the Knuth gap sequence.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Shell sort over the Knuth sequence `h = 3h + 1` (1, 4, 13, 40, ...),
/// built upward while `gap < n/3` and consumed downward by `gap /= 3`.
pub fn shell_sort_optimized<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();

    let mut gap = 1;
    while gap < n / 3 {
        gap = gap * 3 + 1;
    }

    while gap >= 1 {
        for i in gap..n {
            let temp = data[i].clone();
            ctx.record_move();
            let mut j = i;

            while j >= gap && ctx.compare(&data[j - gap], &temp) == Ordering::Greater {
                data[j] = data[j - gap].clone();
                ctx.record_move();
                j -= gap;
            }

            data[j] = temp;
            ctx.record_move();
        }
        gap /= 3;
    }
}
