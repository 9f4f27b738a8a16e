//! Property-based tests for the bitonic sorter

use bytemuck::{Pod, Zeroable};
use oblix_primitives::cmp::ObliviousOrd;
use oblix_primitives::{omerge, osort, osort_by};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ascending_sort_matches_the_host_sort(mut v in prop::collection::vec(any::<i64>(), 0..130)) {
        let mut expect = v.clone();
        expect.sort_unstable();
        osort(&mut v, true);
        prop_assert_eq!(v, expect);
    }

    #[test]
    fn descending_sort_is_the_reverse(mut v in prop::collection::vec(any::<i64>(), 0..130)) {
        let mut expect = v.clone();
        expect.sort_unstable();
        expect.reverse();
        osort(&mut v, false);
        prop_assert_eq!(v, expect);
    }

    #[test]
    fn sorts_narrow_value_ranges(mut v in prop::collection::vec(-3i16..3, 0..100)) {
        // heavy duplication stresses the comparator's tie handling
        let mut expect = v.clone();
        expect.sort_unstable();
        osort(&mut v, true);
        prop_assert_eq!(v, expect);
    }

    #[test]
    fn sorts_unsigned(mut v in prop::collection::vec(any::<u32>(), 0..100)) {
        let mut expect = v.clone();
        expect.sort_unstable();
        osort(&mut v, true);
        prop_assert_eq!(v, expect);
    }

    #[test]
    fn sorts_finite_doubles(
        mut v in prop::collection::vec(
            any::<f64>().prop_filter("finite", |x| x.is_finite()),
            0..100,
        )
    ) {
        let mut expect = v.clone();
        expect.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        osort(&mut v, true);
        prop_assert_eq!(v, expect);
    }

    #[test]
    fn ascending_merge_completes_a_falling_rising_sequence(
        down in prop::collection::vec(any::<i32>(), 1..40),
        up in prop::collection::vec(any::<i32>(), 1..40),
    ) {
        // falling-then-rising leans against an ascending merge
        let mut down = down;
        let mut up = up;
        down.sort_unstable();
        down.reverse();
        up.sort_unstable();
        let mut v: Vec<i32> = down.iter().chain(up.iter()).copied().collect();

        let mut expect = v.clone();
        expect.sort_unstable();
        omerge(&mut v, true);
        prop_assert_eq!(v, expect);
    }

    #[test]
    fn descending_merge_completes_a_rising_falling_sequence(
        up in prop::collection::vec(any::<i32>(), 1..40),
        down in prop::collection::vec(any::<i32>(), 1..40),
    ) {
        let mut up = up;
        let mut down = down;
        up.sort_unstable();
        down.sort_unstable();
        down.reverse();
        let mut v: Vec<i32> = up.iter().chain(down.iter()).copied().collect();

        let mut expect = v.clone();
        expect.sort_unstable();
        expect.reverse();
        omerge(&mut v, false);
        prop_assert_eq!(v, expect);
    }

    #[test]
    fn power_of_two_merge_handles_any_bitonic_rotation(
        v in prop::collection::vec(any::<i32>(), 1..=32),
        rot in any::<usize>(),
    ) {
        // pad the sorted input up to a power of two, fold it into a
        // rising-then-falling sequence, then rotate arbitrarily
        let mut sorted = v.clone();
        sorted.sort_unstable();
        let n = sorted.len().next_power_of_two();
        while sorted.len() < n {
            sorted.push(i32::MAX);
        }
        let split = rot % (n + 1);
        sorted[split..].reverse();
        let mut bitonic = sorted.clone();
        bitonic.rotate_left(rot % n);

        let mut expect = bitonic.clone();
        expect.sort_unstable();
        omerge(&mut bitonic, true);
        prop_assert_eq!(bitonic, expect);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct Keyed {
    key: i64,
    tag: u64,
}

proptest! {
    #[test]
    fn custom_comparator_sorts_by_key(
        v in prop::collection::vec((any::<i64>(), any::<u64>()), 0..80)
    ) {
        let mut arr: Vec<Keyed> = v.iter().map(|&(key, tag)| Keyed { key, tag }).collect();
        osort_by(&mut arr, true, |a, b| a.key.ogt(&b.key));

        // keys are sorted
        for w in arr.windows(2) {
            prop_assert!(w[0].key <= w[1].key);
        }
        // every (key, tag) pair survives intact
        let mut got: Vec<(i64, u64)> = arr.iter().map(|k| (k.key, k.tag)).collect();
        let mut want = v.clone();
        got.sort_unstable();
        want.sort_unstable();
        prop_assert_eq!(got, want);
    }
}
