//! Consistent hash ring implementation.
//!
//! The ring manages token positions and provides efficient lookup
//! operations for finding nodes responsible for keys. `Ring` itself is a
//! plain single-threaded structure; `RingManager` wraps it for shared use.

pub mod entry;
pub mod ring;

pub use entry::RingEntry;
pub use ring::Ring;
