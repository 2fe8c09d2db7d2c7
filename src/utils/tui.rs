//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry;
use crate::utils::bench::{self, BenchmarkResult};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Sortlab Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the descriptor table: complexities and stability per algorithm.
pub fn print_algorithm_table() {
    println!("┌────────────────┬────────────┬────────────┬────────────┬────────────┐");
    println!("│ Algorithm      │ Best       │ Average    │ Worst      │ Stability  │");
    println!("├────────────────┼────────────┼────────────┼────────────┼────────────┤");

    for d in registry::descriptors() {
        println!(
            "│ {:<14} │ {:<10} │ {:<10} │ {:<10} │ {:<10} │",
            d.name,
            d.complexity.best,
            d.complexity.average,
            d.complexity.worst,
            if d.stable { "stable" } else { "not stable" }
        );
    }

    println!("└────────────────┴────────────┴────────────┴────────────┴────────────┘");
    println!();
}

/// Print one benchmark run as a table.
pub fn print_results_table(results: &[BenchmarkResult], runs_note: u32) {
    if results.is_empty() {
        return;
    }

    let first = &results[0];
    println!(
        "  Dataset: {} · {} elements · {} variants",
        first.dataset_kind.label(),
        first.element_count,
        first.variant.label()
    );
    if runs_note > 1 {
        println!(
            "  (times and counts are means of {} runs per algorithm)",
            runs_note
        );
    }

    let width = get_term_width().min(86);
    println!("  {}", "─".repeat(width));
    println!(
        "  {:<16} {:>12} {:>12} {:>10} {:>12} {:>10}",
        "Algorithm", "Time (s)", "Comparisons", "Swaps", "Movements", "Stability"
    );
    println!("  {}", "─".repeat(width));

    for r in results {
        println!(
            "  {:<16} {:>12.6} {:>12} {:>10} {:>12} {:>10}",
            r.algorithm,
            r.elapsed_seconds,
            r.comparisons,
            r.swaps,
            r.movements,
            if r.stable { "stable" } else { "unstable" }
        );
    }
    println!();
}

/// Print the three rankings (time, comparisons, swaps) for one run.
pub fn print_rankings(results: &[BenchmarkResult]) {
    let mut ranked = results.to_vec();

    bench::rank_by_time(&mut ranked);
    println!("  Ranking by execution time:");
    for (i, r) in ranked.iter().enumerate() {
        println!("    {}. {}: {:.6} s", i + 1, r.algorithm, r.elapsed_seconds);
    }
    println!();

    bench::rank_by_comparisons(&mut ranked);
    println!("  Ranking by comparisons:");
    for (i, r) in ranked.iter().enumerate() {
        println!("    {}. {}: {} comparisons", i + 1, r.algorithm, r.comparisons);
    }
    println!();

    bench::rank_by_swaps(&mut ranked);
    println!("  Ranking by swaps:");
    for (i, r) in ranked.iter().enumerate() {
        println!("    {}. {}: {} swaps", i + 1, r.algorithm, r.swaps);
    }
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: sortlab [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all available algorithms");
    println!("  --help, -h     Show this help message");
    println!("  --sizes SIZES  Comma-separated dataset sizes (default: 100,1000,10000)");
    println!("  --shape SHAPE  Input shape: random, sorted, reversed, few-distinct");
    println!("  --seed N       Random seed for reproducible datasets (default: 42)");
    println!("  --naive        Run the naive variants instead of the optimized ones");
    println!("  --csv PATH     Export results to a CSV file");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM      Name (or prefix) of one algorithm to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  sortlab                      # Run all algorithms");
    println!("  sortlab quick                # Run only Quick Sort");
    println!("  sortlab --naive --shape sorted");
    println!("  sortlab --sizes 500,5000 --csv results.csv");
}

/// Print the list of available algorithms with their properties.
pub fn print_available_algorithms() {
    println!("Available algorithms:");
    println!();
    for d in registry::descriptors() {
        println!(
            "  {:<16} {:<12} best {:<10} avg {:<10} worst {}",
            d.name,
            if d.stable { "[stable]" } else { "[unstable]" },
            d.complexity.best,
            d.complexity.average,
            d.complexity.worst
        );
    }
}
