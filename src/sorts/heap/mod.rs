//! # Heap Sort
//!
//! Two phases: build a max-heap bottom-up (sift down from `n/2 - 1` to
//! `0`, which is O(n), strictly better than top-down insertion), then
//! repeatedly swap the root with the last unsorted element and re-heapify
//! the shrunk heap. Not stable; O(n log n) in every case.
//!
//! Both variants use the bottom-up build and count identically; the naive
//! `heapify` recurses down the violating subtree while the optimized one
//! sifts down iteratively.

pub mod code;
#[cfg(test)]
mod test;

pub use code::{heap_sort_naive, heap_sort_optimized, heapify_naive, heapify_optimized};

use crate::sorts::{SortContext, Variant};

/// Unified entry point; the caller picks the variant explicitly.
pub fn heap_sort<T: Clone>(data: &mut [T], variant: Variant, ctx: &SortContext<T>) {
    match variant {
        Variant::Naive => heap_sort_naive(data, ctx),
        Variant::Optimized => heap_sort_optimized(data, ctx),
    }
}

/// Unified sift-down helper over the first `heap_size` elements.
pub fn heapify<T: Clone>(
    data: &mut [T],
    heap_size: usize,
    root: usize,
    variant: Variant,
    ctx: &SortContext<T>,
) {
    match variant {
        Variant::Naive => heapify_naive(data, heap_size, root, ctx),
        Variant::Optimized => heapify_optimized(data, heap_size, root, ctx),
    }
}
