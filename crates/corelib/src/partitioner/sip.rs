//! SipHash partitioner over the 64-bit space.

use crate::partitioner::traits::Partitioner;
use crate::token::Token64;
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// SipHash-1-3 partitioner with fixed keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipPartitioner {
    key0: u64,
    key1: u64,
}

impl SipPartitioner {
    /// Creates a partitioner with explicit SipHash keys.
    ///
    /// Every ring that must agree on placement has to use the same keys.
    pub fn with_keys(key0: u64, key1: u64) -> Self {
        Self { key0, key1 }
    }
}

impl Partitioner for SipPartitioner {
    type TokenType = Token64;

    fn partition(&self, key: &[u8]) -> Self::TokenType {
        let mut hasher = SipHasher13::new_with_keys(self.key0, self.key1);
        hasher.write(key);
        Token64(hasher.finish())
    }

    fn name(&self) -> &'static str {
        "SipPartitioner"
    }
}
