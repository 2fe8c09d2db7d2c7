//! Heap sort implementations.

mod naive;
mod optimized;

pub use naive::{heap_sort_naive, heapify_naive};
pub use optimized::{heap_sort_optimized, heapify_optimized};

use crate::sorts::SortFn;
use crate::utils::VariantInfo;

/// All variants of this family, naive first.
pub fn available_variants<T: Clone>() -> Vec<VariantInfo<SortFn<T>>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Bottom-up build, recursive sift-down",
            function: heap_sort_naive::<T>,
        },
        VariantInfo {
            name: "optimized",
            description: "Bottom-up build, iterative sift-down",
            function: heap_sort_optimized::<T>,
        },
    ]
}
