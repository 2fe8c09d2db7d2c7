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
            vec![4, 4, 4, 4],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![12, 11, 13, 5, 6, 7, 2, 9, 1, 10],
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
fn test_sorted_input_still_does_real_work() {
    // A sorted array is the opposite of a max-heap, so building and
    // extracting must compare and swap; the extraction phase alone
    // performs one root swap per cycle.
    let mut data = vec![1, 2, 3, 4, 5];
    let snap = run(&mut data, super::heap_sort_optimized);

    assert_eq!(data, vec![1, 2, 3, 4, 5]);
    assert!(snap.comparisons > 0);
    assert!(snap.swaps >= 5);
}

#[test]
fn test_variants_count_identically() {
    let input = vec![31, 4, 15, 9, 26, 5, 3, 5, 8, 9, 7, 9];

    let mut a = input.clone();
    let snap_naive = run(&mut a, super::heap_sort_naive);
    let mut b = input;
    let snap_opt = run(&mut b, super::heap_sort_optimized);

    assert_eq!(a, b);
    assert_eq!(snap_naive, snap_opt);
}

#[test]
fn test_is_not_stable() {
    let mut data = vec![(1, 0), (1, 1)];
    let counters = OpCounters::new();
    let cmp = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);
    let ctx = SortContext::new(&cmp, &counters);

    super::heap_sort_optimized(&mut data, &ctx);
    assert_eq!(data, vec![(1, 1), (1, 0)]);
}

#[test]
fn test_heapify_restores_a_single_violation() {
    let counters = OpCounters::new();
    let cmp = |a: &i32, b: &i32| a.cmp(b);
    let ctx = SortContext::new(&cmp, &counters);

    // Root is smaller than both children; sifting down must leave a
    // valid max-heap.
    let mut data = vec![1, 9, 8, 4, 5, 6, 7];
    super::heapify_optimized(&mut data, 7, 0, &ctx);

    for i in 0..7 {
        for child in [2 * i + 1, 2 * i + 2] {
            if child < 7 {
                assert!(data[i] >= data[child], "heap property at {}", i);
            }
        }
    }
}
