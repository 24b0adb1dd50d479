//! Token abstraction module for consistent hashing.
//!
//! Tokens are positions on the hash ring. The default position space is
//! 32 bits wide; a 64-bit space is available for rings large enough that
//! 32-bit collisions start to matter.

pub mod token32;
pub mod token64;
pub mod traits;

pub use token32::Token32;
pub use token64::Token64;
pub use traits::Token;
