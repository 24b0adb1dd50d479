//! 64-bit token for large rings.

use crate::token::traits::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ring position in a `u64` space.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct Token64(pub u64);

impl Token for Token64 {
    const BITS: u32 = u64::BITS;

    fn distance_to(&self, other: &Self) -> Self {
        Token64(other.0.wrapping_sub(self.0))
    }

    fn to_u128(&self) -> u128 {
        u128::from(self.0)
    }
}

impl From<u64> for Token64 {
    fn from(value: u64) -> Self {
        Token64(value)
    }
}

impl fmt::Display for Token64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
