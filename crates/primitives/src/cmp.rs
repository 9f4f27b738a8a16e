//! Branch-free comparisons
//!
//! Every comparison returns a [`Choice`] — a 0/1 predicate safe to feed into
//! the selection kernel — and executes the same instruction sequence for all
//! operand values. Comparisons are total functions; there is no error path.
//!
//! # Floating-point semantics
//!
//! `f64` comparisons follow the IEEE-754 comparison predicate for ordered
//! operands, including `-0.0 == +0.0`. If either operand is NaN, **all five
//! comparisons return 0** (the unordered result a `comisd`-style comparator
//! reports); callers that cannot accept this must pre-filter NaN. The NaN
//! mask is computed branch-free, so the timing of the NaN path is identical
//! to the ordered path.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater,
    ConstantTimeLess};

/// Branch-free ordering predicates over a scalar type.
///
/// Implemented for `u16`/`u32`/`u64`, `i16`/`i32`/`i64`, and `f64`. The
/// comparison runs at the operand width; there is no implicit promotion —
/// the caller picks the width by picking the type.
pub trait ObliviousOrd {
    /// `self > other`, branch-free.
    fn ogt(&self, other: &Self) -> Choice;
    /// `self >= other`, branch-free.
    fn oge(&self, other: &Self) -> Choice;
    /// `self == other`, branch-free.
    fn oeq(&self, other: &Self) -> Choice;
    /// `self < other`, branch-free.
    fn olt(&self, other: &Self) -> Choice;
    /// `self <= other`, branch-free.
    fn ole(&self, other: &Self) -> Choice;
}

/// Return `a > b` as a branch-free predicate.
#[inline]
pub fn ogt<T: ObliviousOrd>(a: &T, b: &T) -> Choice {
    a.ogt(b)
}

/// Return `a >= b` as a branch-free predicate.
#[inline]
pub fn oge<T: ObliviousOrd>(a: &T, b: &T) -> Choice {
    a.oge(b)
}

/// Return `a == b` as a branch-free predicate.
#[inline]
pub fn oeq<T: ObliviousOrd>(a: &T, b: &T) -> Choice {
    a.oeq(b)
}

/// Return `a < b` as a branch-free predicate.
#[inline]
pub fn olt<T: ObliviousOrd>(a: &T, b: &T) -> Choice {
    a.olt(b)
}

/// Return `a <= b` as a branch-free predicate.
#[inline]
pub fn ole<T: ObliviousOrd>(a: &T, b: &T) -> Choice {
    a.ole(b)
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl ObliviousOrd for $t {
            #[inline]
            fn ogt(&self, other: &Self) -> Choice {
                self.ct_gt(other)
            }
            #[inline]
            fn oge(&self, other: &Self) -> Choice {
                !self.ct_lt(other)
            }
            #[inline]
            fn oeq(&self, other: &Self) -> Choice {
                self.ct_eq(other)
            }
            #[inline]
            fn olt(&self, other: &Self) -> Choice {
                self.ct_lt(other)
            }
            #[inline]
            fn ole(&self, other: &Self) -> Choice {
                !self.ct_gt(other)
            }
        }
    )*};
}

impl_unsigned!(u16, u32, u64);

// Signed comparison reuses the unsigned kernel after biasing the sign bit:
// x ^ MIN maps i16/i32/i64 monotonically onto u16/u32/u64.
macro_rules! impl_signed {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl ObliviousOrd for $t {
            #[inline]
            fn ogt(&self, other: &Self) -> Choice {
                bias(*self as $u).ct_gt(&bias(*other as $u))
            }
            #[inline]
            fn oge(&self, other: &Self) -> Choice {
                !bias(*self as $u).ct_lt(&bias(*other as $u))
            }
            #[inline]
            fn oeq(&self, other: &Self) -> Choice {
                bias(*self as $u).ct_eq(&bias(*other as $u))
            }
            #[inline]
            fn olt(&self, other: &Self) -> Choice {
                bias(*self as $u).ct_lt(&bias(*other as $u))
            }
            #[inline]
            fn ole(&self, other: &Self) -> Choice {
                !bias(*self as $u).ct_gt(&bias(*other as $u))
            }
        }
    )*};
}

trait Bias {
    fn bias(self) -> Self;
}

macro_rules! impl_bias {
    ($($u:ty),* $(,)?) => {$(
        impl Bias for $u {
            #[inline]
            fn bias(self) -> Self {
                self ^ (1 << (<$u>::BITS - 1))
            }
        }
    )*};
}

impl_bias!(u16, u32, u64);

#[inline]
fn bias<U: Bias>(x: U) -> U {
    x.bias()
}

impl_signed!(i16 => u16, i32 => u32, i64 => u64);

const F64_SIGN: u64 = 0x8000_0000_0000_0000;
const F64_ABS: u64 = 0x7fff_ffff_ffff_ffff;
const F64_EXP: u64 = 0x7ff0_0000_0000_0000;

// Monotone bits mapping: negative doubles are bit-inverted, non-negative ones
// get the sign bit set, so unsigned integer order equals IEEE order for all
// ordered operands. -0.0 is collapsed to +0.0 first so the two zeros map to
// the same key.
#[inline]
fn ordered_key(x: f64) -> u64 {
    let bits = x.to_bits();
    let bits = u64::conditional_select(&bits, &0, (bits & F64_ABS).ct_eq(&0));
    let flip = 0u64.wrapping_sub(bits >> 63) | F64_SIGN;
    bits ^ flip
}

// Set exactly when neither operand is NaN. NaN has all exponent bits set and
// a non-zero mantissa, i.e. abs bits strictly above the infinity encoding.
#[inline]
fn both_ordered(a: f64, b: f64) -> Choice {
    let a_nan = (a.to_bits() & F64_ABS).ct_gt(&F64_EXP);
    let b_nan = (b.to_bits() & F64_ABS).ct_gt(&F64_EXP);
    !(a_nan | b_nan)
}

impl ObliviousOrd for f64 {
    #[inline]
    fn ogt(&self, other: &Self) -> Choice {
        both_ordered(*self, *other) & ordered_key(*self).ct_gt(&ordered_key(*other))
    }
    #[inline]
    fn oge(&self, other: &Self) -> Choice {
        both_ordered(*self, *other) & !ordered_key(*self).ct_lt(&ordered_key(*other))
    }
    #[inline]
    fn oeq(&self, other: &Self) -> Choice {
        both_ordered(*self, *other) & ordered_key(*self).ct_eq(&ordered_key(*other))
    }
    #[inline]
    fn olt(&self, other: &Self) -> Choice {
        both_ordered(*self, *other) & ordered_key(*self).ct_lt(&ordered_key(*other))
    }
    #[inline]
    fn ole(&self, other: &Self) -> Choice {
        both_ordered(*self, *other) & !ordered_key(*self).ct_gt(&ordered_key(*other))
    }
}
