//! Selection sort implementations.

mod naive;
mod optimized;

pub use naive::selection_sort_naive;
pub use optimized::selection_sort_optimized;

use crate::sorts::SortFn;
use crate::utils::VariantInfo;

/// All variants of this family, naive first.
pub fn available_variants<T: Clone>() -> Vec<VariantInfo<SortFn<T>>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Classic minimum-scan selection",
            function: selection_sort_naive::<T>,
        },
        VariantInfo {
            name: "optimized",
            description: "Bingo sort: relocates all duplicates of the minimum per pass",
            function: selection_sort_optimized::<T>,
        },
    ]
}
