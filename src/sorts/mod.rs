//! The seven sort families and their instrumentation plumbing.
//!
//! Each family lives in its own module with one file per variant under
//! `code/`, a unified entry point dispatching on [`Variant`], and its own
//! tests. All of them sort in place over `&mut [T]` and report their work
//! through a shared [`SortContext`].

pub mod context;

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod quick;
pub mod selection;
pub mod shaker;
pub mod shell;

pub use context::{OpCounters, OpSnapshot, SortContext};

/// Which implementation of an algorithm family to run.
///
/// Passed explicitly to every unified entry point; there is no process-wide
/// mode switch. Must not change while a sort is in flight, which the
/// by-value parameter makes impossible anyway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Textbook implementation, kept for analysis and comparison.
    Naive,
    /// Performance-tuned implementation.
    #[default]
    Optimized,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Naive => "naive",
            Variant::Optimized => "optimized",
        }
    }
}

/// Signature shared by six of the seven families: sort the whole slice.
pub type SortFn<T> = fn(&mut [T], &SortContext<T>);

/// Quick Sort's signature: sort the inclusive index range `[lo, hi]`.
pub type RangeSortFn<T> = fn(&mut [T], usize, usize, &SortContext<T>);
