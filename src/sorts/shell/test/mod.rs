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
            vec![6, 6, 6, 6],
            vec![1, 2, 3, 4, 5, 6, 7],
            vec![7, 6, 5, 4, 3, 2, 1],
            vec![12, 34, 54, 2, 3, 9, 17, 1, 41, 8, 25, 19],
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
fn test_naive_is_not_stable() {
    // With gap 2 the trailing 0 drags an equal element past its twin.
    let mut data = vec![(1, 0), (1, 1), (1, 2), (0, 3)];
    let counters = OpCounters::new();
    let cmp = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);
    let ctx = SortContext::new(&cmp, &counters);

    super::shell_sort_naive(&mut data, &ctx);

    assert_eq!(data[0], (0, 3));
    let tags: Vec<usize> = data[1..].iter().map(|p| p.1).collect();
    assert_eq!(tags, vec![0, 2, 1]);
}

#[test]
fn test_movement_model_on_sorted_input() {
    // No shifts on sorted input: one save and one insert per inner
    // element, for every gap in the sequence. Movements stay even and
    // swaps stay zero.
    let n = 27;
    let mut data: Vec<i32> = (0..n).collect();
    let snap = run(&mut data, super::shell_sort_optimized);

    assert_eq!(snap.swaps, 0);
    assert!(snap.movements > 0);
    assert_eq!(snap.movements % 2, 0);
    assert_eq!(snap.comparisons, snap.movements / 2);
}

#[test]
fn test_variants_use_different_gap_sequences() {
    // On sorted input each gap costs exactly n - gap comparisons, so the
    // totals pin down the sequences: halving gives 20,10,5,2,1 and Knuth
    // gives 13,4,1 for n = 40.
    let input: Vec<i32> = (0..40).collect();

    let mut a = input.clone();
    let naive = run(&mut a, super::shell_sort_naive);
    let mut b = input;
    let optimized = run(&mut b, super::shell_sort_optimized);

    assert_eq!(a, b);
    assert_eq!(naive.comparisons, 20 + 30 + 35 + 38 + 39);
    assert_eq!(optimized.comparisons, 27 + 36 + 39);
}
