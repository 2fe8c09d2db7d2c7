//! Benchmark orchestration: run every algorithm over a dataset, collect
//! timings and operation counts, rank the results, export CSV.

use crate::data::DatasetKind;
use crate::registry::{self, Algorithm};
use crate::sorts::{OpCounters, SortContext, Variant};
use crate::utils::measure::measure_entry;
use std::cmp::Ordering;

/// One (algorithm, dataset, variant) measurement. Immutable once built.
#[derive(Clone, Debug)]
pub struct BenchmarkResult {
    pub algorithm: &'static str,
    pub variant: Variant,
    pub elapsed_seconds: f64,
    pub element_count: usize,
    pub dataset_kind: DatasetKind,
    pub comparisons: u64,
    pub swaps: u64,
    pub movements: u64,
    pub stable: bool,
}

/// Run every registered algorithm over `data` and collect results.
///
/// Protocol per algorithm: restore a working copy of the input, reset the
/// counters, measure (the harness repeats and restores internally), then
/// read the counters averaged over the runs that actually executed.
pub fn run_all<T, C>(
    data: &[T],
    kind: DatasetKind,
    variant: Variant,
    cmp: C,
) -> Vec<BenchmarkResult>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    run_matching(data, kind, variant, cmp, None)
}

/// Like [`run_all`], restricted to algorithms whose name matches `filter`
/// (case-insensitive prefix) when one is given.
pub fn run_matching<T, C>(
    data: &[T],
    kind: DatasetKind,
    variant: Variant,
    cmp: C,
    filter: Option<&str>,
) -> Vec<BenchmarkResult>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    let counters = OpCounters::new();
    let ctx = SortContext::new(&cmp, &counters);
    let query = filter.map(str::to_lowercase);

    let mut work = data.to_vec();
    let mut results = Vec::new();

    for algo in selected(&query) {
        work.clone_from_slice(data);
        counters.reset();

        let measured = measure_entry(&algo.entry, &mut work, variant, &ctx);
        let ops = counters.snapshot().averaged(measured.runs);

        results.push(BenchmarkResult {
            algorithm: algo.descriptor.name,
            variant,
            elapsed_seconds: measured.seconds,
            element_count: data.len(),
            dataset_kind: kind,
            comparisons: ops.comparisons,
            swaps: ops.swaps,
            movements: ops.movements,
            stable: algo.descriptor.stable,
        });
    }

    results
}

fn selected<T: Clone>(query: &Option<String>) -> Vec<Algorithm<T>> {
    registry::algorithms::<T>()
        .into_iter()
        .filter(|a| match query {
            Some(q) => a.descriptor.name.to_lowercase().starts_with(q),
            None => true,
        })
        .collect()
}

/// Order fastest first.
pub fn rank_by_time(results: &mut [BenchmarkResult]) {
    results.sort_by(|a, b| a.elapsed_seconds.total_cmp(&b.elapsed_seconds));
}

/// Order fewest comparisons first.
pub fn rank_by_comparisons(results: &mut [BenchmarkResult]) {
    results.sort_by_key(|r| r.comparisons);
}

/// Order fewest swaps first.
pub fn rank_by_swaps(results: &mut [BenchmarkResult]) {
    results.sort_by_key(|r| r.swaps);
}

/// Export results to a CSV file.
pub fn export_csv(path: &str, results: &[BenchmarkResult]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;

    writeln!(
        file,
        "algorithm,variant,dataset,size,elapsed_s,comparisons,swaps,movements"
    )?;

    for r in results {
        writeln!(
            file,
            "{},{},{},{},{:.9},{},{},{}",
            r.algorithm,
            r.variant.label(),
            r.dataset_kind.label(),
            r.element_count,
            r.elapsed_seconds,
            r.comparisons,
            r.swaps,
            r.movements
        )?;
    }

    Ok(())
}
