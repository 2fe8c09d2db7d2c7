//! Shell sort implementations.

mod naive;
mod optimized;

pub use naive::shell_sort_naive;
pub use optimized::shell_sort_optimized;

use crate::sorts::SortFn;
use crate::utils::VariantInfo;

/// All variants of this family, naive first.
pub fn available_variants<T: Clone>() -> Vec<VariantInfo<SortFn<T>>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Halving gap sequence n/2, n/4, ..., 1",
            function: shell_sort_naive::<T>,
        },
        VariantInfo {
            name: "optimized",
            description: "Knuth gap sequence 1, 4, 13, 40, ...",
            function: shell_sort_optimized::<T>,
        },
    ]
}
