//! Branch-free conditional selection
//!
//! The selection kernel is the one place where the source must dictate
//! machine-level behavior: a high-level conditional expression is always free
//! to be lowered to a branch on the predicate. Every selection here goes
//! through [`subtle`]'s masked arithmetic, whose optimizer barrier prevents
//! the compiler from reintroducing that branch.

use bytemuck::{pod_read_unaligned, Pod};
use subtle::{Choice, ConditionallySelectable};

/// Convert a boolean into a selection predicate without branching.
#[inline]
pub fn predicate(b: bool) -> Choice {
    Choice::from(b as u8)
}

/// Return `t_val` if `pred` is set, `f_val` otherwise.
///
/// Works for any plain-old-data `T`. The value is selected in fixed-size
/// lanes of 8, 4, 2, and 1 bytes (largest first, low-to-high offsets); the
/// lane schedule is a function of `size_of::<T>()` alone, so the memory
/// footprint and instruction sequence are identical for both predicate
/// values.
#[inline]
pub fn ochoose<T: Pod>(pred: Choice, t_val: &T, f_val: &T) -> T {
    let mut out = *f_val;
    oassign(pred, t_val, f_val, &mut out);
    out
}

/// Fill `out` with `t_val` if `pred` is set, `f_val` otherwise.
///
/// For every byte offset `i` in `0..size_of::<T>()`, the destination byte at
/// `i` equals `t_val`'s byte at `i` when `pred` is set and `f_val`'s byte at
/// `i` otherwise. The borrow rules keep `out` disjoint from both sources;
/// `t_val` and `f_val` may alias each other.
#[inline]
pub fn oassign<T: Pod>(pred: Choice, t_val: &T, f_val: &T, out: &mut T) {
    select_lanes(
        pred,
        bytemuck::bytes_of(t_val),
        bytemuck::bytes_of(f_val),
        bytemuck::bytes_of_mut(out),
    );
}

// Greedy 8/4/2/1 lane walk. The trailing byte gets its own 8-bit lane; a
// 16-bit lane there would read past the buffer.
fn select_lanes(pred: Choice, t: &[u8], f: &[u8], out: &mut [u8]) {
    let len = out.len();
    debug_assert!(t.len() == len && f.len() == len);

    let mut off = 0;
    while len - off >= 8 {
        let lane = u64::conditional_select(
            &pod_read_unaligned::<u64>(&f[off..off + 8]),
            &pod_read_unaligned::<u64>(&t[off..off + 8]),
            pred,
        );
        out[off..off + 8].copy_from_slice(&lane.to_ne_bytes());
        off += 8;
    }
    if len - off >= 4 {
        let lane = u32::conditional_select(
            &pod_read_unaligned::<u32>(&f[off..off + 4]),
            &pod_read_unaligned::<u32>(&t[off..off + 4]),
            pred,
        );
        out[off..off + 4].copy_from_slice(&lane.to_ne_bytes());
        off += 4;
    }
    if len - off >= 2 {
        let lane = u16::conditional_select(
            &pod_read_unaligned::<u16>(&f[off..off + 2]),
            &pod_read_unaligned::<u16>(&t[off..off + 2]),
            pred,
        );
        out[off..off + 2].copy_from_slice(&lane.to_ne_bytes());
        off += 2;
    }
    if len - off == 1 {
        out[off] = u8::conditional_select(&f[off], &t[off], pred);
    }
}
