//! Closure-backed partitioner.

use crate::partitioner::traits::Partitioner;
use crate::token::Token32;
use std::fmt;

/// Wraps any `Fn(&[u8]) -> u32` as a 32-bit partitioner.
///
/// Lets callers swap in their own hash without writing a new type.
pub struct FnPartitioner<F> {
    hash: F,
    name: &'static str,
}

impl<F> FnPartitioner<F>
where
    F: Fn(&[u8]) -> u32 + Send + Sync + 'static,
{
    pub fn new(name: &'static str, hash: F) -> Self {
        Self { hash, name }
    }
}

impl<F> Partitioner for FnPartitioner<F>
where
    F: Fn(&[u8]) -> u32 + Send + Sync + 'static,
{
    type TokenType = Token32;

    fn partition(&self, key: &[u8]) -> Self::TokenType {
        Token32((self.hash)(key))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<F> fmt::Debug for FnPartitioner<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPartitioner")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
