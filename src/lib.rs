//! # oblix
//!
//! Data-oblivious primitives: operations whose instruction trace and
//! memory-access trace are functions only of public parameters (lengths,
//! element sizes), never of the secret values they manipulate.
//!
//! The library targets code that executes under an adversary able to observe
//! branch outcomes or cache-line accesses (a trusted-execution environment
//! being the typical host) and needs to sort, select, and index private data
//! without leaking anything beyond operation size.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! oblix = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the member
//! crates:
//!
//! - [`oblix-primitives`]: comparison, selection, array access, and the
//!   bitonic sorting network
//!
//! [`oblix-primitives`]: primitives

#![cfg_attr(not(feature = "std"), no_std)]

pub use oblix_primitives as primitives;

/// Common imports for oblix users
pub mod prelude {
    pub use crate::primitives::{
        oassign, ochoose, oeq, oge, ogt, ole, olt, omerge, omerge_by, oread, osort, osort_by,
        owrite, predicate,
    };

    pub use crate::primitives::cmp::ObliviousOrd;

    // The predicate and POD vocabulary used throughout the API
    pub use crate::primitives::{Choice, Pod};

    pub use crate::primitives::params::CACHE_LINE_BYTES;
}
