//! Heap sort with recursive sift-down.

use crate::sorts::SortContext;
use std::cmp::Ordering;

/// Heap sort: bottom-up max-heap construction, then n extraction cycles
/// that swap the root to the shrinking boundary and restore the heap.
pub fn heap_sort_naive<T: Clone>(data: &mut [T], ctx: &SortContext<T>) {
    let n = data.len();

    for i in (0..n / 2).rev() {
        heapify_naive(data, n, i, ctx);
    }

    for i in (0..n).rev() {
        ctx.swap(data, 0, i);
        heapify_naive(data, i, 0, ctx);
    }
}

/// Restore the max-heap property below `root`, recursing into the child
/// subtree that received the old root value.
pub fn heapify_naive<T: Clone>(data: &mut [T], heap_size: usize, root: usize, ctx: &SortContext<T>) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap_size && ctx.compare(&data[left], &data[largest]) == Ordering::Greater {
        largest = left;
    }
    if right < heap_size && ctx.compare(&data[right], &data[largest]) == Ordering::Greater {
        largest = right;
    }

    if largest != root {
        ctx.swap(data, root, largest);
        heapify_naive(data, heap_size, largest, ctx);
    }
}
