//! CRC-32 partitioner, the ring default.

use crate::partitioner::traits::Partitioner;
use crate::token::Token32;

/// CRC-32 (IEEE polynomial) partitioner producing 32-bit tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32Partitioner;

impl Partitioner for Crc32Partitioner {
    type TokenType = Token32;

    fn partition(&self, key: &[u8]) -> Self::TokenType {
        Token32(crc32fast::hash(key))
    }

    fn name(&self) -> &'static str {
        "Crc32Partitioner"
    }
}
