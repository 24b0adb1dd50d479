//! A single occupied position on the ring.

use crate::token::Token;
use crate::vnode::VirtualNode;

/// A `(position, owner)` pair stored in the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingEntry<T: Token> {
    pub position: T,
    pub owner: VirtualNode,
}

impl<T: Token> RingEntry<T> {
    pub fn new(position: T, owner: VirtualNode) -> Self {
        Self { position, owner }
    }
}
