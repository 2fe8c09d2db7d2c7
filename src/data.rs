//! Benchmark datasets and comparators.
//!
//! Two element kinds are benchmarked: plain integers and multi-field
//! student records whose comparator orders by district and breaks ties by
//! name, so duplicate districts make stability differences visible in the
//! output. Generators are seeded so runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// What kind of elements a benchmark ran over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetKind {
    Numbers,
    Records,
}

impl DatasetKind {
    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Numbers => "numbers",
            DatasetKind::Records => "records",
        }
    }
}

/// Distribution of the generated input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
    #[default]
    Random,
    Sorted,
    Reversed,
    /// Many duplicates (16 distinct values); exercises Bingo sort and
    /// stability.
    FewDistinct,
}

impl Shape {
    pub fn label(self) -> &'static str {
        match self {
            Shape::Random => "random",
            Shape::Sorted => "sorted",
            Shape::Reversed => "reversed",
            Shape::FewDistinct => "few-distinct",
        }
    }

    pub fn parse(s: &str) -> Option<Shape> {
        match s {
            "random" => Some(Shape::Random),
            "sorted" => Some(Shape::Sorted),
            "reversed" => Some(Shape::Reversed),
            "few-distinct" => Some(Shape::FewDistinct),
            _ => None,
        }
    }
}

/// Ascending integer comparator.
pub fn compare_numbers(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// Descending integer comparator, for largest-first orderings.
pub fn compare_numbers_desc(a: &i32, b: &i32) -> Ordering {
    b.cmp(a)
}

/// A student record: the multi-field element kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRecord {
    pub name: String,
    pub birth_date: String,
    pub district: String,
    pub city: String,
}

/// Primary key district, secondary key name.
pub fn compare_records(a: &StudentRecord, b: &StudentRecord) -> Ordering {
    a.district
        .cmp(&b.district)
        .then_with(|| a.name.cmp(&b.name))
}

/// Generate `n` integers with the requested shape.
pub fn generate_numbers(n: usize, shape: Shape, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);

    match shape {
        Shape::Random => (0..n).map(|_| rng.random_range(0..1_000_000)).collect(),
        Shape::Sorted => {
            let mut v = generate_numbers(n, Shape::Random, seed);
            v.sort();
            v
        }
        Shape::Reversed => {
            let mut v = generate_numbers(n, Shape::Random, seed);
            v.sort();
            v.reverse();
            v
        }
        Shape::FewDistinct => (0..n).map(|_| rng.random_range(0..16)).collect(),
    }
}

const FIRST_NAMES: [&str; 12] = [
    "Alice", "Bruno", "Carla", "Daniel", "Elena", "Felipe", "Gloria", "Hugo", "Irene", "Jonas",
    "Karen", "Lucas",
];

const SURNAMES: [&str; 10] = [
    "Almeida", "Barbosa", "Costa", "Dias", "Esteves", "Fernandes", "Gomes", "Henriques", "Inacio",
    "Justo",
];

const DISTRICTS: [&str; 6] = [
    "Riverside",
    "Hillcrest",
    "Old Town",
    "Harborview",
    "Meadowbrook",
    "Lakeside",
];

const CITIES: [&str; 3] = ["Porto Verde", "Santa Clara", "Vila Nova"];

/// Generate `n` student records from small name/district pools, so
/// duplicate sort keys occur naturally.
pub fn generate_records(n: usize, seed: u64) -> Vec<StudentRecord> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = SURNAMES[rng.random_range(0..SURNAMES.len())];
            let day: u32 = rng.random_range(1..=28);
            let month: u32 = rng.random_range(1..=12);
            let year: u32 = rng.random_range(1980..=2005);

            StudentRecord {
                name: format!("{} {}", first, last),
                birth_date: format!("{:02}/{:02}/{}", day, month, year),
                district: DISTRICTS[rng.random_range(0..DISTRICTS.len())].to_string(),
                city: CITIES[rng.random_range(0..CITIES.len())].to_string(),
            }
        })
        .collect()
}
