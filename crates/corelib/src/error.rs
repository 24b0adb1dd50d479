//! Error types for the core library.
//!
//! Ring operations themselves never fail: an empty ring yields `None`, a
//! hash collision is dropped, removing an unknown node is a no-op. The only
//! fallible surface is building a ring from an invalid configuration.

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid ring configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
