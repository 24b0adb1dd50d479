//! 32-bit token, the default ring position space.

use crate::token::traits::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ring position in a `u32` space.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct Token32(pub u32);

impl Token for Token32 {
    const BITS: u32 = u32::BITS;

    fn distance_to(&self, other: &Self) -> Self {
        Token32(other.0.wrapping_sub(self.0))
    }

    fn to_u128(&self) -> u128 {
        u128::from(self.0)
    }
}

impl From<u32> for Token32 {
    fn from(value: u32) -> Self {
        Token32(value)
    }
}

impl fmt::Display for Token32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
