//! Ring configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Virtual nodes per physical node when nothing else is configured.
pub const DEFAULT_VIRTUAL_NODES: usize = 200;

/// Length in bytes of the key drawn for a random lookup.
pub const DEFAULT_RANDOM_KEY_LEN: usize = 32;

/// Settings fixed for the lifetime of a `RingManager`.
///
/// Neither value can change once a manager is built. Removal recomputes
/// positions from `virtual_nodes`, so changing it with nodes present would
/// orphan entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Virtual nodes created per physical node (`V`).
    pub virtual_nodes: usize,
    /// Bytes of randomness hashed by `random_lookup`.
    pub random_key_len: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            virtual_nodes: DEFAULT_VIRTUAL_NODES,
            random_key_len: DEFAULT_RANDOM_KEY_LEN,
        }
    }
}

impl RingConfig {
    pub fn new(virtual_nodes: usize) -> Self {
        Self {
            virtual_nodes,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.virtual_nodes == 0 {
            return Err(Error::InvalidConfig(
                "virtual_nodes must be at least 1".to_string(),
            ));
        }
        if self.random_key_len == 0 {
            return Err(Error::InvalidConfig(
                "random_key_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
