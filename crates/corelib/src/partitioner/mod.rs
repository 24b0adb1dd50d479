//! Partitioner abstraction for consistent hashing.
//!
//! Partitioners are the ring's hash function: they turn arbitrary bytes
//! (virtual node identities, lookup keys) into tokens. A partitioner is
//! handed to each `RingManager` at construction, so two rings in the same
//! process can hash differently.

pub mod crc32;
pub mod func;
pub mod sip;
pub mod traits;
pub mod xxh3;

pub use crc32::Crc32Partitioner;
pub use func::FnPartitioner;
pub use sip::SipPartitioner;
pub use traits::Partitioner;
pub use xxh3::Xxh3Partitioner;
