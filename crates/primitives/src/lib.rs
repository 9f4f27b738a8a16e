//! Data-oblivious primitives with constant-time implementation
//!
//! Every operation in this crate has an instruction trace and a memory-access
//! trace that depend only on public quantities — buffer lengths and element
//! sizes — never on the values being compared, selected, indexed, or sorted.
//! The threat model is an observer of branch outcomes and cache-line
//! accesses (branch-predictor and cache side channels); DRAM-row and
//! power-analysis adversaries are out of scope.
//!
//! The crate is a pure set of stateless functions over caller-owned buffers:
//! no allocation, no I/O, no locks, no global state. It is usable in `no_std`
//! environments (disable the default `std` feature).
//!
//! # Layering
//!
//! - [`select`]: branch-free conditional move for words and for arbitrary
//!   [`Pod`] values ([`ochoose`], [`oassign`])
//! - [`cmp`]: branch-free comparisons producing [`Choice`] predicates
//!   ([`ogt`], [`oge`], [`oeq`], [`olt`], [`ole`])
//! - [`array`]: array read/write with a cache-line sweep ([`oread`],
//!   [`owrite`])
//! - [`sort`]: the bitonic sorting network ([`osort`], [`omerge`])
//!
//! # Caveats
//!
//! Secret values are never validated — checking them would itself branch on
//! a secret. Passing an out-of-range secret index to [`oread`]/[`owrite`] is
//! a caller bug, as is supplying [`sort::osort_by`] with a comparator that
//! is not itself constant-time.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod array;
pub mod cmp;
pub mod params;
pub mod select;
pub mod sort;

pub use array::{oread, owrite};
pub use cmp::{oeq, oge, ogt, ole, olt, ObliviousOrd};
pub use select::{oassign, ochoose, predicate};
pub use sort::{omerge, omerge_by, osort, osort_by};

// The predicate type and the POD marker bound used across the API surface
pub use bytemuck::Pod;
pub use subtle::Choice;
