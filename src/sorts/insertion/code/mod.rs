//! Insertion sort implementations.

mod naive;
mod optimized;

pub use naive::insertion_sort_naive;
pub use optimized::insertion_sort_optimized;

use crate::sorts::SortFn;
use crate::utils::VariantInfo;

/// All variants of this family, naive first.
pub fn available_variants<T: Clone>() -> Vec<VariantInfo<SortFn<T>>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Shift-based insertion with an explicit break in the inner loop",
            function: insertion_sort_naive::<T>,
        },
        VariantInfo {
            name: "optimized",
            description: "Shift-based insertion with a combined loop condition",
            function: insertion_sort_optimized::<T>,
        },
    ]
}
