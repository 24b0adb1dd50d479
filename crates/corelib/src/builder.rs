//! Fluent construction of a `RingManager`.

use crate::config::RingConfig;
use crate::error::Result;
use crate::manager::RingManager;
use crate::node::NodeName;
use crate::partitioner::{Crc32Partitioner, Partitioner};

/// Builder for a ring with its initial membership.
///
/// ```rust
/// use hashring_core::RingBuilder;
///
/// let ring = RingBuilder::new()
///     .with_vnodes(8)
///     .add_node("node1")
///     .add_node("node2")
///     .build()
///     .unwrap();
/// assert_eq!(ring.len(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuilder<P: Partitioner = Crc32Partitioner> {
    config: RingConfig,
    partitioner: P,
    nodes: Vec<NodeName>,
}

impl Default for RingBuilder<Crc32Partitioner> {
    fn default() -> Self {
        Self::new()
    }
}

impl RingBuilder<Crc32Partitioner> {
    pub fn new() -> Self {
        Self {
            config: RingConfig::default(),
            partitioner: Crc32Partitioner,
            nodes: Vec::new(),
        }
    }
}

impl<P: Partitioner> RingBuilder<P> {
    pub fn with_vnodes(mut self, virtual_nodes: usize) -> Self {
        self.config.virtual_nodes = virtual_nodes;
        self
    }

    pub fn with_random_key_len(mut self, len: usize) -> Self {
        self.config.random_key_len = len;
        self
    }

    pub fn with_config(mut self, config: RingConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the hash function. Nodes queued so far are kept.
    pub fn with_partitioner<Q: Partitioner>(self, partitioner: Q) -> RingBuilder<Q> {
        RingBuilder {
            config: self.config,
            partitioner,
            nodes: self.nodes,
        }
    }

    pub fn add_node(mut self, name: impl Into<NodeName>) -> Self {
        self.nodes.push(name.into());
        self
    }

    pub fn add_nodes<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeName>,
    {
        self.nodes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validate the configuration and place every queued node.
    pub fn build(self) -> Result<RingManager<P>> {
        let manager = RingManager::from_config(self.config, self.partitioner)?;
        for name in self.nodes {
            manager.add_node(name);
        }
        Ok(manager)
    }
}
