//! Property-based tests for oblivious array access and assignment

use oblix_primitives::{oread, owrite};
use proptest::prelude::*;

fn vec_and_index<T: Arbitrary + 'static>(max_len: usize) -> impl Strategy<Value = (Vec<T>, usize)> {
    (1..max_len).prop_flat_map(|n| (prop::collection::vec(any::<T>(), n), 0..n))
}

proptest! {
    #[test]
    fn reads_the_indexed_element((v, i) in vec_and_index::<u64>(200)) {
        prop_assert_eq!(oread(&v, i), v[i]);
    }

    #[test]
    fn reads_doubles((v, i) in vec_and_index::<f64>(150)) {
        prop_assert_eq!(oread(&v, i).to_bits(), v[i].to_bits());
    }

    #[test]
    fn reads_wide_elements((v, i) in vec_and_index::<[u64; 4]>(80)) {
        prop_assert_eq!(oread(&v, i), v[i]);
    }

    #[test]
    fn writes_only_the_indexed_element(
        (v, i) in vec_and_index::<u64>(200),
        x in any::<u64>(),
    ) {
        let mut w = v.clone();
        owrite(&mut w, i, &x);
        for j in 0..v.len() {
            if j == i {
                prop_assert_eq!(w[j], x);
            } else {
                prop_assert_eq!(w[j], v[j]);
            }
        }
    }

    #[test]
    fn write_then_read_round_trips(
        (v, i) in vec_and_index::<i64>(120),
        x in any::<i64>(),
    ) {
        let mut w = v;
        owrite(&mut w, i, &x);
        prop_assert_eq!(oread(&w, i), x);
    }
}

#[test]
fn reads_every_position_of_a_hundred() {
    let v: Vec<f64> = (0..100).map(|i| i as f64 + 0.5).collect();
    for i in 0..100 {
        assert_eq!(oread(&v, i), i as f64 + 0.5);
    }
}

#[test]
fn single_element_slice() {
    let v = [42u64];
    assert_eq!(oread(&v, 0), 42);
    let mut v = [0u16];
    owrite(&mut v, 0, &9);
    assert_eq!(v, [9]);
}
