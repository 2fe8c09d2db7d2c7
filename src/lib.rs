//! # Sortlab
//!
//! Instrumented benchmarks for the classic comparison sorts: seven
//! families, each in a naive and an optimized variant, measured with an
//! adaptive wall-clock harness and full operation counting (comparisons,
//! swaps, element movements).

pub mod data;
pub mod registry;
pub mod sorts;
pub mod utils;

/// Re-export tui from utils for convenience
pub use utils::tui;

/// Re-export the benchmark orchestrator
pub use utils::bench::run_all;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::data::{compare_numbers, compare_records, DatasetKind, Shape};
    pub use crate::registry::{algorithms, descriptors, Algorithm, Descriptor, Entry};
    pub use crate::sorts::{OpCounters, OpSnapshot, SortContext, Variant};
    pub use crate::utils::bench::{run_all, BenchmarkResult};
    pub use crate::utils::measure::{measure_quick, measure_sort, repetitions_for};
}
