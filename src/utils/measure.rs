//! Adaptive wall-clock measurement of a sort invocation.
//!
//! Small inputs finish inside (or below) the clock resolution, so a
//! single timing would often read as zero. The harness therefore scales
//! the number of repetitions with the input size, restoring the buffer
//! from a snapshot between repetitions and averaging the elapsed times:
//!
//! | elements   | timed runs |
//! |------------|------------|
//! | < 100      | 10         |
//! | < 1 000    | 5          |
//! | < 10 000   | 3          |
//! | >= 10 000  | 1          |
//!
//! The result is guaranteed strictly positive: a non-positive elapsed
//! time or mean is replaced by [`MIN_MEASURED_SECS`], so downstream
//! ranking can never mistake a fast run for a failed one.

use crate::registry::Entry;
use crate::sorts::{RangeSortFn, SortContext, SortFn, Variant};
use crate::utils::affinity::CpuPinGuard;
use crate::utils::clock;

/// Smallest value `measure` will ever return, in seconds.
pub const MIN_MEASURED_SECS: f64 = 1e-6;

/// How many timed runs an input of `n` elements gets.
pub fn repetitions_for(n: usize) -> u32 {
    if n == 0 {
        1
    } else if n < 100 {
        10
    } else if n < 1_000 {
        5
    } else if n < 10_000 {
        3
    } else {
        1
    }
}

/// Outcome of a measurement: mean elapsed seconds plus the number of runs
/// that actually executed (the snapshot-allocation fallback can reduce it
/// to one), which callers need to average operation counters exactly.
#[derive(Clone, Copy, Debug)]
pub struct Measured {
    pub seconds: f64,
    pub runs: u32,
}

/// Time `run` over `data` with adaptive repetition.
///
/// For multi-run inputs the original buffer is snapshotted once and
/// restored before every run; if the snapshot cannot be allocated the
/// harness degrades to a single timed run over the live buffer. After the
/// call `data` holds the output of the last run.
pub fn measure_with<T, F>(data: &mut [T], mut run: F) -> Measured
where
    T: Clone,
    F: FnMut(&mut [T]),
{
    if data.is_empty() {
        return Measured {
            seconds: MIN_MEASURED_SECS,
            runs: 1,
        };
    }

    let reps = repetitions_for(data.len());
    let _pin = CpuPinGuard::new();

    if reps > 1 {
        let mut snapshot: Vec<T> = Vec::new();
        if snapshot.try_reserve_exact(data.len()).is_ok() {
            snapshot.extend_from_slice(data);

            let mut total = 0.0;
            for _ in 0..reps {
                data.clone_from_slice(&snapshot);

                let start = clock::timestamp();
                run(data);
                total += clock::timestamp() - start;
            }

            let mean = total / f64::from(reps);
            return Measured {
                seconds: if mean > 0.0 { mean } else { MIN_MEASURED_SECS },
                runs: reps,
            };
        }
        // Snapshot allocation failed: fall through to one timed run.
    }

    let start = clock::timestamp();
    run(data);
    let elapsed = clock::timestamp() - start;
    Measured {
        seconds: if elapsed > 0.0 {
            elapsed
        } else {
            MIN_MEASURED_SECS
        },
        runs: 1,
    }
}

/// Measure a whole-slice sort function. Returns mean elapsed seconds,
/// always `> 0`.
pub fn measure_sort<T: Clone>(sort: SortFn<T>, data: &mut [T], ctx: &SortContext<T>) -> f64 {
    measure_with(data, |d| sort(d, ctx)).seconds
}

/// Measure a range-signatured sort (Quick Sort), invoked over the full
/// range `(0, n - 1)`. Returns mean elapsed seconds, always `> 0`.
pub fn measure_quick<T: Clone>(sort: RangeSortFn<T>, data: &mut [T], ctx: &SortContext<T>) -> f64 {
    measure_with(data, |d| {
        if d.len() > 1 {
            sort(d, 0, d.len() - 1, ctx);
        }
    })
    .seconds
}

/// Measure a registry entry, dispatching on its signature.
pub fn measure_entry<T: Clone>(
    entry: &Entry<T>,
    data: &mut [T],
    variant: Variant,
    ctx: &SortContext<T>,
) -> Measured {
    match *entry {
        Entry::Length(sort) => measure_with(data, |d| sort(d, variant, ctx)),
        Entry::Range(sort) => measure_with(data, |d| {
            if d.len() > 1 {
                sort(d, 0, d.len() - 1, variant, ctx);
            }
        }),
    }
}
