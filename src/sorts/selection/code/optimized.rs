//! Bingo sort, the duplicate-aware selection variant.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Bingo sort.
///
/// Tracks the current minimum value (the "bingo") and the next larger
/// distinct value. Each pass swaps every element equal to the bingo into
/// the sorted prefix, then advances to the next distinct value. A pass
/// that relocates nothing means the remaining suffix holds no bingo-valued
/// element and the scan is done.
pub fn selection_sort_optimized<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let mut start = 0;

    // Find the minimum, then seed the next distinct value above it.
    let mut bingo = data[0].clone();
    for i in 1..n {
        if ctx.compare(&data[i], &bingo) == Ordering::Less {
            bingo = data[i].clone();
        }
    }
    let mut next_bingo = bingo.clone();
    find_next_bingo(data, 0, &bingo, &mut next_bingo, ctx);

    while start < n - 1 {
        let pass_start = start;

        // Move every bingo-valued element to the front of the suffix.
        for i in start..n {
            if ctx.compare(&data[i], &bingo) == Ordering::Equal {
                ctx.swap(data, start, i);
                start += 1;
            } else if ctx.compare(&data[i], &next_bingo) == Ordering::Less {
                next_bingo = data[i].clone();
            }
        }

        if start == pass_start {
            break;
        }

        bingo = next_bingo.clone();
        find_next_bingo(data, start, &bingo, &mut next_bingo, ctx);
    }
}

/// Set `next_bingo` to the smallest suffix value strictly above `bingo`.
/// Returns false when the suffix is constant-valued.
fn find_next_bingo<T: Clone>(
    data: &[T],
    start: usize,
    bingo: &T,
    next_bingo: &mut T,
    ctx: &SortContext<T>,
) -> bool {
    let mut found = false;
    for i in start..data.len() {
        if ctx.compare(&data[i], bingo) == Ordering::Greater
            && (!found || ctx.compare(&data[i], next_bingo) == Ordering::Less)
        {
            *next_bingo = data[i].clone();
            found = true;
        }
    }
    found
}
