//! Bubble sort implementations.

mod naive;
mod optimized;

pub use naive::bubble_sort_naive;
pub use optimized::bubble_sort_optimized;

use crate::sorts::SortFn;
use crate::utils::VariantInfo;

/// All variants of this family, naive first.
pub fn available_variants<T: Clone>() -> Vec<VariantInfo<SortFn<T>>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Unconditional n-1 passes",
            function: bubble_sort_naive::<T>,
        },
        VariantInfo {
            name: "optimized",
            description: "Stops at the first pass without swaps",
            function: bubble_sort_optimized::<T>,
        },
    ]
}
