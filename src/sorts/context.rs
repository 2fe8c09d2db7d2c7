//! Operation counting for instrumented sort runs.
//!
//! Every algorithm in this crate goes through [`SortContext`] for its
//! comparisons and swaps, so the counters see every operation without the
//! algorithms carrying any bookkeeping of their own. The counters are an
//! explicit value owned by the caller (typically the benchmark
//! orchestrator), not process globals: reset them before a timed run, read
//! them right after.
//!
//! Counting model, applied uniformly:
//! - a swap costs 1 swap and 3 movements (load to temp, temp to one slot,
//!   slot to the other);
//! - a single-copy shift (Insertion and Shell sort) costs 1 movement and
//!   no swap;
//! - scratch copies of key/pivot values are bookkeeping, not element
//!   movement, and are not counted.

use std::cell::Cell;
use std::cmp::Ordering;

/// Operation totals for one instrumented run.
///
/// Uses `Cell` interior mutability so a shared `&OpCounters` can be
/// threaded through recursive algorithms; deliberately not `Sync`: one
/// logical sort is in flight at a time.
#[derive(Debug, Default)]
pub struct OpCounters {
    comparisons: Cell<u64>,
    swaps: Cell<u64>,
    movements: Cell<u64>,
}

impl OpCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters. Call immediately before a timed run.
    pub fn reset(&self) {
        self.comparisons.set(0);
        self.swaps.set(0);
        self.movements.set(0);
    }

    /// Read the current totals. Call immediately after a timed run.
    pub fn snapshot(&self) -> OpSnapshot {
        OpSnapshot {
            comparisons: self.comparisons.get(),
            swaps: self.swaps.get(),
            movements: self.movements.get(),
        }
    }

    #[inline]
    fn tally_comparison(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    #[inline]
    fn tally_swap(&self) {
        self.swaps.set(self.swaps.get() + 1);
        self.movements.set(self.movements.get() + 3);
    }

    #[inline]
    fn tally_movement(&self) {
        self.movements.set(self.movements.get() + 1);
    }
}

/// A plain copy of the counter values at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpSnapshot {
    pub comparisons: u64,
    pub swaps: u64,
    pub movements: u64,
}

impl OpSnapshot {
    /// Per-run averages when the harness repeated the sort `runs` times
    /// over restored copies of the same input.
    pub fn averaged(self, runs: u32) -> OpSnapshot {
        let runs = u64::from(runs.max(1));
        OpSnapshot {
            comparisons: self.comparisons / runs,
            swaps: self.swaps / runs,
            movements: self.movements / runs,
        }
    }
}

/// Counting wrapper around the caller-supplied comparator.
///
/// Algorithms receive a `&SortContext` and must route every comparison
/// through [`SortContext::compare`] and every exchange through
/// [`SortContext::swap`]; the raw comparator is never invoked directly
/// inside a timed region.
pub struct SortContext<'a, T> {
    cmp: &'a dyn Fn(&T, &T) -> Ordering,
    counters: &'a OpCounters,
}

impl<'a, T> SortContext<'a, T> {
    pub fn new(cmp: &'a dyn Fn(&T, &T) -> Ordering, counters: &'a OpCounters) -> Self {
        Self { cmp, counters }
    }

    /// Compare two elements, counting one comparison.
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.counters.tally_comparison();
        (self.cmp)(a, b)
    }

    /// Exchange `data[i]` and `data[j]`, counting one swap and three
    /// movements. A self-swap (`i == j`) is counted like any other.
    #[inline]
    pub fn swap(&self, data: &mut [T], i: usize, j: usize) {
        data.swap(i, j);
        self.counters.tally_swap();
    }

    /// Record one single-copy element movement (a shift or a key
    /// save/insert in Insertion/Shell sort).
    #[inline]
    pub fn record_move(&self) {
        self.counters.tally_movement();
    }

    pub fn counters(&self) -> &OpCounters {
        self.counters
    }
}
