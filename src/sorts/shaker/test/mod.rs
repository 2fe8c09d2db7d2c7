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
            vec![3, 4, 1, 2],
            vec![5, 5, 5],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![2, 8, 5, 3, 9, 4, 1, 7, 0, 6],
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
fn test_is_stable() {
    let mut data = vec![(5, 0), (3, 1), (3, 2), (1, 3), (4, 4)];
    let counters = OpCounters::new();
    let cmp = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);
    let ctx = SortContext::new(&cmp, &counters);

    super::shaker_sort_optimized(&mut data, &ctx);
    assert_eq!(data, vec![(1, 3), (3, 1), (3, 2), (4, 4), (5, 0)]);
}

#[test]
fn test_sorted_input_costs_one_cycle() {
    let n: u64 = 20;
    let mut data: Vec<i32> = (0..n as i32).collect();
    let snap = run(&mut data, super::shaker_sort_optimized);

    // One forward pass detects order and the cycle stops.
    assert_eq!(snap.comparisons, n - 1);
    assert_eq!(snap.swaps, 0);
}

#[test]
fn test_movements_are_three_per_swap() {
    let mut data = vec![9, 2, 7, 4, 5, 6, 3, 8, 1, 0];
    let snap = run(&mut data, super::shaker_sort_naive);
    assert!(snap.swaps > 0);
    assert_eq!(snap.movements, snap.swaps * 3);
}
