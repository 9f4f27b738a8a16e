//! Oblivious array access and assignment
//!
//! Reading or writing a secret index directly would reveal it through the
//! cache line that gets touched. These operations instead sweep the whole
//! slice at cache-line stride: every call touches the same sequence of
//! lines, determined only by the slice length, the element size, and the
//! base address. Within the matching line group, the exact element is picked
//! through the selection kernel, so the refinement costs O(1) per group and
//! never branches.
//!
//! Cost is Θ(N / step) selection-kernel invocations per access, where
//! `step = max(1, CACHE_LINE_BYTES / size_of::<T>())` — linear in N, with
//! the constant factor reduced by line-level aggregation.

use bytemuck::Pod;
use core::mem::size_of;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::params::CACHE_LINE_BYTES;
use crate::select::ochoose;

/// Sweep stride: one element per cache line, or every element when a single
/// element spans a line or more.
#[inline]
pub(crate) fn sweep_step<T>() -> usize {
    let elem = size_of::<T>().max(1);
    if elem < CACHE_LINE_BYTES {
        CACHE_LINE_BYTES / elem
    } else {
        1
    }
}

// Group-match predicate and in-group position for one sweep iteration. The
// returned position stays inside the sweep cursor's line group whether or
// not the group matches.
#[inline]
fn refine(i: usize, j: usize, step: usize) -> (Choice, usize) {
    let cond = ((j / step) as u64).ct_eq(&((i / step) as u64));
    let pos = u64::conditional_select(&(j as u64), &(i as u64), cond) as usize;
    (cond, pos)
}

/// Return `arr[i]` without revealing `i`.
///
/// `i` is secret and therefore never validated; an out-of-range `i` is a
/// caller bug (it can panic through the refined-position bounds check).
/// Panics if `arr` is empty — the length is public.
pub fn oread<T: Pod>(arr: &[T], i: usize) -> T {
    let step = sweep_step::<T>();
    let mut result = arr[0];
    let mut j = 0;
    while j < arr.len() {
        let (cond, pos) = refine(i, j, step);
        result = ochoose(cond, &arr[pos], &result);
        j += step;
    }
    result
}

/// Set `arr[i] = *val` without revealing `i`.
///
/// Every line group is rewritten: the matching group takes `val` at the
/// refined position, all others are rewritten with their current contents.
/// The same caveats as [`oread`] apply to `i`.
pub fn owrite<T: Pod>(arr: &mut [T], i: usize, val: &T) {
    let step = sweep_step::<T>();
    let mut j = 0;
    while j < arr.len() {
        let (cond, pos) = refine(i, j, step);
        arr[pos] = ochoose(cond, val, &arr[pos]);
        j += step;
    }
}
