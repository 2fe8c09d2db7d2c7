//! Textbook insertion sort.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Insertion sort, didactic form: the inner loop tests the shift
/// condition with an explicit `if`/`break`.
///
/// Movements: one for saving the key, one per shifted element, one for
/// inserting the key. No swaps.
pub fn insertion_sort_naive<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    for i in 1..data.len() {
        let key = data[i].clone();
        ctx.record_move();
        let mut j = i;

        while j > 0 {
            if ctx.compare(&data[j - 1], &key) == Ordering::Greater {
                data[j] = data[j - 1].clone();
                ctx.record_move();
                j -= 1;
            } else {
                break;
            }
        }

        data[j] = key;
        ctx.record_move();
    }
}
