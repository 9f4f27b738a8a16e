//! Compile-time parameters for the oblivious primitives

/// Cache-line granularity assumed by the array sweep, in bytes.
///
/// [`oread`](crate::oread)/[`owrite`](crate::owrite) touch one element per
/// line of this size, so the line-level access pattern is the same for every
/// index. 64 bytes matches current x86-64 and most AArch64 parts; targets
/// with a different line size need this adjusted at build time.
pub const CACHE_LINE_BYTES: usize = 64;
