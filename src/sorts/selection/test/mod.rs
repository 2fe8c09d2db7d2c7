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
            vec![7, 7, 7, 7, 7],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
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
fn test_naive_performs_exactly_n_minus_one_swaps() {
    let mut data = vec![4, 2, 7, 1, 9, 3];
    let snap = run(&mut data, super::selection_sort_naive);
    assert_eq!(snap.swaps, 5);
    assert_eq!(snap.movements, 15);
}

#[test]
fn test_naive_is_not_stable() {
    // The long-range swap drags the first 2 past its twin.
    let mut data = vec![(2, 0), (2, 1), (1, 2)];
    let counters = OpCounters::new();
    let cmp = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);
    let ctx = SortContext::new(&cmp, &counters);

    super::selection_sort_naive(&mut data, &ctx);
    assert_eq!(data, vec![(1, 2), (2, 1), (2, 0)]);
}

#[test]
fn test_bingo_beats_classic_on_constant_input() {
    let input = vec![9; 50];

    let mut a = input.clone();
    let naive = run(&mut a, super::selection_sort_naive);
    let mut b = input;
    let bingo = run(&mut b, super::selection_sort_optimized);

    assert_eq!(a, b);
    assert!(
        bingo.comparisons < naive.comparisons,
        "bingo {} vs naive {}",
        bingo.comparisons,
        naive.comparisons
    );
}

#[test]
fn test_bingo_handles_few_distinct_values() {
    let mut data = vec![2, 0, 1, 2, 0, 1, 2, 0, 1, 1, 0, 2];
    run(&mut data, super::selection_sort_optimized);
    assert_eq!(data, vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);
}
