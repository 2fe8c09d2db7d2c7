//! Descriptor table and dispatch for the seven sort families.
//!
//! The static [`DESCRIPTORS`] table is the single source of truth the
//! report layer reads (names, theoretical complexities, stability);
//! [`algorithms`] pairs each descriptor with its generic entry point for
//! execution. Quick Sort is the one family with a range signature, which
//! the [`Entry`] enum encodes instead of a pair of nullable pointers.

use crate::sorts::{self, SortContext, Variant};

/// Theoretical complexity bounds, as display strings.
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Immutable identity card of one algorithm family.
pub struct Descriptor {
    pub name: &'static str,
    pub complexity: Complexity,
    /// Whether equal elements keep their relative order.
    pub stable: bool,
    /// Quick Sort takes `(lo, hi)` instead of operating on the whole
    /// slice length.
    pub uses_range_signature: bool,
}

/// Whole-slice entry point with explicit variant selection.
pub type LengthEntry<T> = fn(&mut [T], Variant, &SortContext<T>);

/// Range entry point (Quick Sort) with explicit variant selection.
pub type RangeEntry<T> = fn(&mut [T], usize, usize, Variant, &SortContext<T>);

/// An algorithm's executable shape.
pub enum Entry<T> {
    Length(LengthEntry<T>),
    Range(RangeEntry<T>),
}

/// A descriptor joined with its entry point for a concrete element type.
pub struct Algorithm<T> {
    pub descriptor: &'static Descriptor,
    pub entry: Entry<T>,
}

pub static DESCRIPTORS: [Descriptor; 7] = [
    Descriptor {
        name: "Insertion Sort",
        complexity: Complexity {
            best: "O(n)",
            average: "O(n²)",
            worst: "O(n²)",
        },
        stable: true,
        uses_range_signature: false,
    },
    Descriptor {
        name: "Bubble Sort",
        complexity: Complexity {
            best: "O(n)",
            average: "O(n²)",
            worst: "O(n²)",
        },
        stable: true,
        uses_range_signature: false,
    },
    Descriptor {
        name: "Selection Sort",
        complexity: Complexity {
            best: "O(n²)",
            average: "O(n²)",
            worst: "O(n²)",
        },
        stable: false,
        uses_range_signature: false,
    },
    Descriptor {
        name: "Shaker Sort",
        complexity: Complexity {
            best: "O(n)",
            average: "O(n²)",
            worst: "O(n²)",
        },
        stable: true,
        uses_range_signature: false,
    },
    Descriptor {
        name: "Shell Sort",
        complexity: Complexity {
            best: "O(n log n)",
            average: "O(n^1.25)",
            worst: "O(n²)",
        },
        stable: false,
        uses_range_signature: false,
    },
    Descriptor {
        name: "Quick Sort",
        complexity: Complexity {
            best: "O(n log n)",
            average: "O(n log n)",
            worst: "O(n²)",
        },
        stable: false,
        uses_range_signature: true,
    },
    Descriptor {
        name: "Heap Sort",
        complexity: Complexity {
            best: "O(n log n)",
            average: "O(n log n)",
            worst: "O(n log n)",
        },
        stable: false,
        uses_range_signature: false,
    },
];

/// The descriptor table, in canonical order.
pub fn descriptors() -> &'static [Descriptor] {
    &DESCRIPTORS
}

/// Build the dispatch table for element type `T`.
pub fn algorithms<T: Clone>() -> Vec<Algorithm<T>> {
    vec![
        Algorithm {
            descriptor: &DESCRIPTORS[0],
            entry: Entry::Length(sorts::insertion::insertion_sort::<T>),
        },
        Algorithm {
            descriptor: &DESCRIPTORS[1],
            entry: Entry::Length(sorts::bubble::bubble_sort::<T>),
        },
        Algorithm {
            descriptor: &DESCRIPTORS[2],
            entry: Entry::Length(sorts::selection::selection_sort::<T>),
        },
        Algorithm {
            descriptor: &DESCRIPTORS[3],
            entry: Entry::Length(sorts::shaker::shaker_sort::<T>),
        },
        Algorithm {
            descriptor: &DESCRIPTORS[4],
            entry: Entry::Length(sorts::shell::shell_sort::<T>),
        },
        Algorithm {
            descriptor: &DESCRIPTORS[5],
            entry: Entry::Range(sorts::quick::quick_sort::<T>),
        },
        Algorithm {
            descriptor: &DESCRIPTORS[6],
            entry: Entry::Length(sorts::heap::heap_sort::<T>),
        },
    ]
}

/// List algorithm names in canonical order.
pub fn names() -> Vec<&'static str> {
    DESCRIPTORS.iter().map(|d| d.name).collect()
}

/// Find an algorithm by name, case-insensitively; a leading fragment like
/// "quick" or "shell" is enough.
pub fn find<T: Clone>(name: &str) -> Option<Algorithm<T>> {
    let query = name.to_lowercase();
    algorithms::<T>()
        .into_iter()
        .find(|a| a.descriptor.name.to_lowercase().starts_with(&query))
}
