//! Generic CLI for running the sort benchmarks.
//!
//! Usage:
//!   sortlab                 # Benchmark all algorithms
//!   sortlab --list          # List available algorithms
//!   sortlab quick           # Benchmark only Quick Sort
//!   sortlab --help          # Show help

use sortlab::data::{
    compare_numbers, compare_records, generate_numbers, generate_records, DatasetKind, Shape,
};
use sortlab::sorts::Variant;
use sortlab::utils::bench::{export_csv, run_matching, BenchmarkResult};
use sortlab::utils::measure::repetitions_for;
use sortlab::{registry, tui};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut sizes: Vec<usize> = vec![100, 1_000, 10_000];
    let mut seed: u64 = 42;
    let mut shape = Shape::Random;
    let mut variant = Variant::Optimized;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--naive" => variant = Variant::Naive,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(42);
                }
            }
            "--shape" => {
                i += 1;
                if i < args.len() {
                    match Shape::parse(&args[i]) {
                        Some(s) => shape = s,
                        None => {
                            eprintln!("Unknown shape: {}", args[i]);
                            std::process::exit(1);
                        }
                    }
                }
            }
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_algorithms();
        return;
    }

    if let Some(name) = &algorithm_filter {
        if registry::find::<i32>(name).is_none() {
            eprintln!("Algorithm '{}' not found.", name);
            eprintln!("Available: {:?}", registry::names());
            std::process::exit(1);
        }
    }

    tui::print_header();
    tui::print_algorithm_table();

    let filter = algorithm_filter.as_deref();
    let mut all_results: Vec<BenchmarkResult> = Vec::new();

    for &size in &sizes {
        let runs = repetitions_for(size);

        let numbers = generate_numbers(size, shape, seed);
        let results = run_matching(
            &numbers,
            DatasetKind::Numbers,
            variant,
            compare_numbers,
            filter,
        );
        tui::print_results_table(&results, runs);
        if filter.is_none() {
            tui::print_rankings(&results);
        }
        all_results.extend(results);

        let records = generate_records(size, seed);
        let results = run_matching(
            &records,
            DatasetKind::Records,
            variant,
            compare_records,
            filter,
        );
        tui::print_results_table(&results, runs);
        if filter.is_none() {
            tui::print_rankings(&results);
        }
        all_results.extend(results);
    }

    if let Some(path) = csv_path {
        match export_csv(&path, &all_results) {
            Ok(()) => println!("Results exported to {}", path),
            Err(e) => eprintln!("Failed to write {}: {}", path, e),
        }
    }
}
