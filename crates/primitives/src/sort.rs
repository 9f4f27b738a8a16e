//! Oblivious bitonic sorting network
//!
//! The comparator network topology is a function of the length alone, and
//! every comparator is a branch-free compare-and-swap, so the sequence of
//! instructions and memory accesses reveals nothing about the element
//! values. The network is iterative for power-of-two lengths; a recursive
//! top level decomposes other lengths.
//!
//! O(N log² N) comparators, each moving O(`size_of::<T>()`) bytes. Not
//! stable.

use bytemuck::Pod;
use subtle::Choice;

use crate::cmp::ObliviousOrd;
use crate::select::{ochoose, predicate};

/// Sort `arr` in the given direction.
///
/// `ascending = true` produces a non-decreasing order, `false` a
/// non-increasing one. The element type's [`ObliviousOrd`] supplies the
/// comparator. NaN elements make `f64` ordering unreliable (NaN compares
/// unordered; pre-filter if that matters).
pub fn osort<T: Pod + ObliviousOrd>(arr: &mut [T], ascending: bool) {
    osort_by(arr, ascending, |a: &T, b: &T| a.ogt(b));
}

/// Sort `arr` with a caller-supplied "greater than" predicate.
///
/// `ogreater(a, b)` must return 1 exactly when `a` orders after `b`, and —
/// this the library cannot enforce — must itself be oblivious: constant
/// time, no value-dependent branches or accesses. A comparator that peeks
/// at a key field through [`ObliviousOrd`] satisfies this.
pub fn osort_by<T, F>(arr: &mut [T], ascending: bool, ogreater: F)
where
    T: Pod,
    F: Fn(&T, &T) -> Choice,
{
    sort_range(arr, 0, arr.len(), ascending, &ogreater);
}

/// Merge a bitonic `arr` into sorted order in the given direction.
///
/// For power-of-two lengths any bitonic input (rising then falling, or a
/// rotation of one) merges correctly. For other lengths the input must lean
/// against the merge direction — falling then rising when `ascending`,
/// rising then falling otherwise — which is the shape the sorter's own
/// decomposition produces. Exposed for callers that build larger oblivious
/// algorithms out of merge steps.
pub fn omerge<T: Pod + ObliviousOrd>(arr: &mut [T], ascending: bool) {
    omerge_by(arr, ascending, |a: &T, b: &T| a.ogt(b));
}

/// [`omerge`] with a caller-supplied oblivious "greater than" predicate.
///
/// The same comparator contract as [`osort_by`] applies.
pub fn omerge_by<T, F>(arr: &mut [T], ascending: bool, ogreater: F)
where
    T: Pod,
    F: Fn(&T, &T) -> Choice,
{
    merge_range(arr, 0, arr.len(), ascending, &ogreater);
}

// Greatest power of two strictly below n. Requires n > 1.
#[inline]
fn greatest_pow2_below(n: usize) -> usize {
    debug_assert!(n > 1);
    1 << (n - 1).ilog2()
}

#[inline]
fn log2_ceil(n: usize) -> u32 {
    n.next_power_of_two().trailing_zeros()
}

// One comparator: order positions i1 < i2 in the requested direction. Both
// slots are rewritten through the selection kernel whatever the outcome;
// only loop-derived indices reach the addressing path.
#[inline]
fn compare_exchange<T, F>(arr: &mut [T], i1: usize, i2: usize, ascending: bool, ogreater: &F)
where
    T: Pod,
    F: Fn(&T, &T) -> Choice,
{
    let pred = ogreater(&arr[i1], &arr[i2]);
    // swap when the predicate agrees with the direction bit
    let do_swap = !(pred ^ predicate(ascending));
    let a = arr[i1];
    let b = arr[i2];
    arr[i1] = ochoose(do_swap, &b, &a);
    arr[i2] = ochoose(do_swap, &a, &b);
}

// Iterative bitonic sorting network over arr[low..low + n]; n must be a
// power of two. Standard k/j/i loop nest: the XOR partner pairs positions,
// the k-bit of i picks the direction of each half-cleaner block.
fn pow2_sort<T, F>(arr: &mut [T], low: usize, n: usize, ascending: bool, ogreater: &F)
where
    T: Pod,
    F: Fn(&T, &T) -> Choice,
{
    debug_assert!(n.is_power_of_two());
    let mut k = 2;
    while k <= n {
        let mut j = k >> 1;
        while j > 0 {
            for i in 0..n {
                let partner = i ^ j;
                if partner > i {
                    let dir = if (i & k) == 0 { ascending } else { !ascending };
                    compare_exchange(arr, low + i, low + partner, dir, ogreater);
                }
            }
            j >>= 1;
        }
        k <<= 1;
    }
}

// Bitonic merge of arr[low..low + len] for arbitrary len. Comparators whose
// high index falls outside the range are skipped; the skip depends on
// indices only, never on element values.
fn merge_range<T, F>(arr: &mut [T], low: usize, len: usize, ascending: bool, ogreater: &F)
where
    T: Pod,
    F: Fn(&T, &T) -> Choice,
{
    if len <= 1 {
        return;
    }
    let rounds = log2_ceil(len);
    let n = 1usize << rounds;
    for round in 0..rounds {
        let span = n >> round;
        let half = span / 2;
        let mut block = 0;
        while block < n {
            for k in 0..half {
                let i1 = low + block + k;
                let i2 = i1 + half;
                if i2 >= low + len {
                    break;
                }
                compare_exchange(arr, i1, i2, ascending, ogreater);
            }
            block += span;
        }
    }
}

// Top-level decomposition: a power-of-two length runs the iterative network
// directly; anything else sorts the leading power-of-two block in the
// opposite direction, recurses on the tail, and bitonically merges the
// whole range. Recursion depth is at most log2(len).
fn sort_range<T, F>(arr: &mut [T], low: usize, len: usize, ascending: bool, ogreater: &F)
where
    T: Pod,
    F: Fn(&T, &T) -> Choice,
{
    if len <= 1 {
        return;
    }
    let m = greatest_pow2_below(len);
    if m * 2 == len {
        pow2_sort(arr, low, len, ascending, ogreater);
    } else {
        pow2_sort(arr, low, m, !ascending, ogreater);
        sort_range(arr, low + m, len - m, ascending, ogreater);
        merge_range(arr, low, len, ascending, ogreater);
    }
}
