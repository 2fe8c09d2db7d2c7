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
            vec![7],
            vec![3, 3, 3, 3],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 5],
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
    // Two 3s tagged by original position must keep their order.
    let mut data = vec![(5, 0), (3, 1), (3, 2), (1, 3), (4, 4)];
    let counters = OpCounters::new();
    let cmp = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);
    let ctx = SortContext::new(&cmp, &counters);

    super::insertion_sort_optimized(&mut data, &ctx);
    assert_eq!(data, vec![(1, 3), (3, 1), (3, 2), (4, 4), (5, 0)]);
}

#[test]
fn test_movement_model_on_sorted_input() {
    // Already sorted: per element, one key save and one insert; one
    // comparison against the left neighbor; no swaps.
    let n = 32;
    let mut data: Vec<i32> = (0..n).collect();
    let snap = run(&mut data, super::insertion_sort_optimized);

    assert_eq!(snap.movements, 2 * (n as u64 - 1));
    assert_eq!(snap.comparisons, n as u64 - 1);
    assert_eq!(snap.swaps, 0);
}

#[test]
fn test_variants_count_identically() {
    let input = vec![4, 1, 3, 9, 7, 2, 8, 5, 6, 0, 4, 2];

    let mut a = input.clone();
    let snap_naive = run(&mut a, super::insertion_sort_naive);
    let mut b = input;
    let snap_opt = run(&mut b, super::insertion_sort_optimized);

    assert_eq!(a, b);
    assert_eq!(snap_naive, snap_opt);
}

#[test]
fn test_idempotent_on_sorted_output() {
    let mut data = vec![6, 2, 9, 2, 5];
    run(&mut data, super::insertion_sort_optimized);
    let once = data.clone();
    run(&mut data, super::insertion_sort_optimized);
    assert_eq!(data, once);
}
