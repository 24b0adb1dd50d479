//! Core library for consistent hashing implementation.
//!
//! This crate provides the fundamental abstractions for consistent hashing:
//! - Token types (32-bit and 64-bit ring positions)
//! - Partitioners (the pluggable hash function)
//! - Node names and virtual node abstractions
//! - The sorted ring with successor lookup
//! - `RingManager`, the thread-safe façade, and its builder

pub mod builder;
pub mod config;
pub mod error;
pub mod manager;
pub mod node;
pub mod partitioner;
mod random;
pub mod ring;
pub mod token;
pub mod vnode;

pub use builder::RingBuilder;
pub use config::RingConfig;
pub use error::{Error, Result};
pub use manager::RingManager;
pub use node::NodeName;
pub use partitioner::{
    Crc32Partitioner, FnPartitioner, Partitioner, SipPartitioner, Xxh3Partitioner,
};
pub use ring::{Ring, RingEntry};
pub use token::{Token, Token32, Token64};
pub use vnode::VirtualNode;
