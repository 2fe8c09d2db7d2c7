//! Shaker sort implementations.

mod naive;
mod optimized;

pub use naive::shaker_sort_naive;
pub use optimized::shaker_sort_optimized;

use crate::sorts::SortFn;
use crate::utils::VariantInfo;

/// All variants of this family, naive first.
pub fn available_variants<T: Clone>() -> Vec<VariantInfo<SortFn<T>>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Pass-counted cycles, swap flag checked once per cycle",
            function: shaker_sort_naive::<T>,
        },
        VariantInfo {
            name: "optimized",
            description: "Boundary-tracked cycles with a mid-cycle early exit",
            function: shaker_sort_optimized::<T>,
        },
    ]
}
