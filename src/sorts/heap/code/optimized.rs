//! Heap sort with iterative sift-down.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Heap sort: same bottom-up construction and extraction as the naive
/// variant, with the sift-down expressed as a loop instead of recursion.
/// Comparison and swap counts are identical.
pub fn heap_sort_optimized<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();

    for i in (0..n / 2).rev() {
        heapify_optimized(data, n, i, ctx);
    }

    for i in (0..n).rev() {
        ctx.swap(data, 0, i);
        heapify_optimized(data, i, 0, ctx);
    }
}

/// Restore the max-heap property below `root` by sifting down
/// iteratively until the heap property holds or a leaf is reached.
pub fn heapify_optimized<T: Clone>(
    data: &mut [T],
    heap_size: usize,
    root: usize,
    ctx: &SortContext<T>,
) {
    let mut root = root;

    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap_size && ctx.compare(&data[left], &data[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < heap_size && ctx.compare(&data[right], &data[largest]) == Ordering::Greater {
            largest = right;
        }

        if largest == root {
            break;
        }
        ctx.swap(data, root, largest);
        root = largest;
    }
}
