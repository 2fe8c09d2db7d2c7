use crate::sorts::{OpCounters, OpSnapshot, SortContext, SortFn};

fn run(data: &mut [i32], sort: SortFn<i32>) -> OpSnapshot {
    let counters = OpCounters::new();
    let cmp = |a: &i32, b: &i32| a.cmp(b);
    let ctx = SortContext::new(&cmp, &counters);
    sort(data, &ctx);
    counters.snapshot()
}

#[test]
fn test_sorts_edge_cases_and_random_input() {
    for variant in super::code::available_variants::<i32>() {
        for input in [
            vec![],
            vec![1],
            vec![2, 1],
            vec![3, 3, 3, 3, 3],
            vec![1, 2, 3, 4, 5, 6, 7, 8],
            vec![8, 7, 6, 5, 4, 3, 2, 1],
            vec![10, 80, 30, 90, 40, 50, 70, 20, 60, 0],
        ] {
            let mut data = input.clone();
            run(&mut data, variant.function);

            let mut expected = input.clone();
            expected.sort();
            assert_eq!(data, expected, "variant {} on {:?}", variant.name, input);
        }
    }
}

#[test]
fn test_partition_places_pivot_correctly() {
    let counters = OpCounters::new();
    let cmp = |a: &i32, b: &i32| a.cmp(b);
    let ctx = SortContext::new(&cmp, &counters);

    let mut data = vec![9, 1, 8, 2, 5];
    let p = super::partition(&mut data, 0, 4, &ctx);

    assert_eq!(data[p], 5);
    assert!(data[..p].iter().all(|&x| x < 5));
    assert!(data[p + 1..].iter().all(|&x| x >= 5));
}

#[test]
fn test_median_of_three_defeats_sorted_worst_case() {
    // Naive on sorted input degenerates to n(n-1)/2 comparisons; the
    // median pivot must do strictly better.
    let n: u64 = 16;
    let input: Vec<i32> = (0..n as i32).collect();

    let mut a = input.clone();
    let naive = run(&mut a, super::code::quick_sort_naive_full);
    let mut b = input;
    let optimized = run(&mut b, super::code::quick_sort_optimized_full);

    assert_eq!(a, b);
    assert_eq!(naive.comparisons, n * (n - 1) / 2);
    assert!(
        optimized.comparisons < naive.comparisons,
        "optimized {} vs naive {}",
        optimized.comparisons,
        naive.comparisons
    );
}

#[test]
fn test_is_not_stable() {
    // The final pivot swap jumps the pivot's twin.
    let mut data = vec![(1, 0), (2, 1), (1, 2)];
    let counters = OpCounters::new();
    let cmp = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);
    let ctx = SortContext::new(&cmp, &counters);

    super::quick_sort_naive(&mut data, 0, 2, &ctx);

    assert_eq!(data[0].0, 1);
    assert_eq!(data[1].0, 1);
    assert_eq!((data[0].1, data[1].1), (2, 0));
}

#[test]
fn test_range_entry_sorts_a_subrange_only() {
    let counters = OpCounters::new();
    let cmp = |a: &i32, b: &i32| a.cmp(b);
    let ctx = SortContext::new(&cmp, &counters);

    let mut data = vec![9, 5, 3, 4, 1, 0];
    super::quick_sort_optimized(&mut data, 1, 4, &ctx);

    assert_eq!(data, vec![9, 1, 3, 4, 5, 0]);
}
