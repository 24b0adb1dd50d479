//! Core token trait definitions.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Minimal token trait for the hash ring.
///
/// Tokens are immutable, totally ordered positions in a fixed-width
/// circular space. Implementations must be thread-safe and cheap to copy
/// and compare, since the successor search compares them on every probe.
pub trait Token: Copy + Ord + Hash + Send + Sync + Debug + Display + 'static {
    /// Width of the position space in bits.
    const BITS: u32;

    /// Clockwise distance from `self` to `other` on the ring.
    fn distance_to(&self, other: &Self) -> Self;
    /// Widens the token for arithmetic across position spaces.
    fn to_u128(&self) -> u128;

    /// Number of distinct positions in the space (`2^BITS`).
    fn space() -> u128 {
        1u128 << Self::BITS
    }
}
