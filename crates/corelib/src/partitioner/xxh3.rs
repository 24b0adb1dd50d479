//! XXH3 partitioner over the 64-bit space.

use crate::partitioner::traits::Partitioner;
use crate::token::Token64;
use xxhash_rust::xxh3::xxh3_64;

/// XXH3-64 partitioner.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3Partitioner;

impl Partitioner for Xxh3Partitioner {
    type TokenType = Token64;

    fn partition(&self, key: &[u8]) -> Self::TokenType {
        Token64(xxh3_64(key))
    }

    fn name(&self) -> &'static str {
        "Xxh3Partitioner"
    }
}
