//! Shell sort with the simple halving gap sequence.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Shell sort over gaps `n/2, n/4, ..., 1`. Each gap runs a gapped
/// insertion sort; movements follow the insertion model (save, shifts,
/// insert, one movement each).
pub fn shell_sort_naive<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let temp = data[i].clone();
            ctx.record_move();
            let mut j = i;

            while j >= gap {
                if ctx.compare(&data[j - gap], &temp) == Ordering::Greater {
                    data[j] = data[j - gap].clone();
                    ctx.record_move();
                    j -= gap;
                } else {
                    break;
                }
            }

            data[j] = temp;
            ctx.record_move();
        }
        gap /= 2;
    }
}
