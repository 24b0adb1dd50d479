//! Thread-safe façade over the ring.
//!
//! `RingManager` owns a `Ring`, the partitioner that places virtual nodes on
//! it, and the fixed virtual-node count. All ring access goes through a
//! single `parking_lot::Mutex`, so every operation is atomic with respect to
//! every other: lookups never see a half-added node, and two membership
//! changes never interleave. Hashing and random key generation are pure and
//! happen before the lock is taken.
//!
//! # Removal
//!
//! Removing a node recomputes its `V` virtual node identities and their
//! positions; no reverse index is kept. A position is only deleted when the
//! entry stored there belongs to that exact virtual node, so a position a
//! different node won in a collision survives the loser's removal.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::RingConfig;
use crate::error::Result;
use crate::node::NodeName;
use crate::partitioner::{Crc32Partitioner, Partitioner};
use crate::random;
use crate::ring::{Ring, RingEntry};
use crate::token::Token;
use crate::vnode::VirtualNode;

/// Consistent hash ring safe for concurrent use.
///
/// # Example
///
/// ```rust
/// use hashring_core::RingManager;
///
/// let ring = RingManager::new(100).unwrap();
/// ring.add_node("node1");
/// ring.add_node("node2");
///
/// let owner = ring.lookup(b"user:42").unwrap();
/// assert!(owner == "node1" || owner == "node2");
/// ```
pub struct RingManager<P: Partitioner = Crc32Partitioner> {
    ring: Mutex<Ring<P::TokenType>>,
    partitioner: P,
    config: RingConfig,
}

impl RingManager<Crc32Partitioner> {
    /// Create a CRC-32 ring with `virtual_nodes` replicas per node.
    pub fn new(virtual_nodes: usize) -> Result<Self> {
        Self::with_partitioner(virtual_nodes, Crc32Partitioner)
    }
}

impl<P: Partitioner> RingManager<P> {
    /// Create a ring that places and looks up keys with `partitioner`.
    pub fn with_partitioner(virtual_nodes: usize, partitioner: P) -> Result<Self> {
        Self::from_config(RingConfig::new(virtual_nodes), partitioner)
    }

    pub fn from_config(config: RingConfig, partitioner: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ring: Mutex::new(Ring::new()),
            partitioner,
            config,
        })
    }

    fn placements(&self, name: &NodeName) -> Vec<(P::TokenType, VirtualNode)> {
        (0..self.config.virtual_nodes)
            .map(|index| {
                let vnode = VirtualNode::new(name.clone(), index);
                let position = self.partitioner.partition(vnode.identity().as_bytes());
                (position, vnode)
            })
            .collect()
    }

    /// Place the `V` virtual nodes of `name` on the ring.
    ///
    /// Returns how many entries were inserted. Positions already held by the
    /// same virtual node are skipped, which makes re-adding a node a no-op.
    /// Positions held by a different virtual node are a collision: the new
    /// virtual node is dropped, so the node's effective replication may end
    /// up below `V`.
    pub fn add_node(&self, name: impl Into<NodeName>) -> usize {
        let name = name.into();
        let placements = self.placements(&name);

        let mut inserted = 0;
        let mut collisions = 0usize;
        {
            let mut ring = self.ring.lock();
            for (position, vnode) in placements {
                match ring.get(position) {
                    None => {
                        ring.insert(position, vnode);
                        inserted += 1;
                    }
                    Some(existing) if *existing == vnode => {}
                    Some(existing) => {
                        trace!(%position, dropped = %vnode, holder = %existing, "position collision");
                        collisions += 1;
                    }
                }
            }
        }

        if collisions > 0 {
            metrics::counter!("hashring_collisions_total").increment(collisions as u64);
        }
        debug!(node = %name, inserted, collisions, "added node to ring");
        inserted
    }

    /// Remove every virtual node of `name` from the ring.
    ///
    /// Returns how many entries were removed; zero for a node that was never
    /// added or is already gone.
    pub fn remove_node(&self, name: impl Into<NodeName>) -> usize {
        let name = name.into();
        let placements = self.placements(&name);

        let mut removed = 0;
        {
            let mut ring = self.ring.lock();
            for (position, vnode) in placements {
                if ring.get(position) == Some(&vnode) {
                    ring.delete(position);
                    removed += 1;
                }
            }
        }

        debug!(node = %name, removed, "removed node from ring");
        removed
    }

    /// Node responsible for `key`, or `None` if the ring is empty.
    pub fn lookup(&self, key: &[u8]) -> Option<NodeName> {
        let position = self.partitioner.partition(key);
        self.lookup_token(position)
    }

    /// Node owning the first position at or after `position`, wrapping
    /// around the ring.
    pub fn lookup_token(&self, position: P::TokenType) -> Option<NodeName> {
        metrics::counter!("hashring_lookups_total").increment(1);
        self.ring
            .lock()
            .successor(position)
            .map(|vnode| vnode.node_name().clone())
    }

    /// Look up a freshly drawn random key.
    ///
    /// Each node is picked with probability equal to its share of the ring.
    pub fn random_lookup(&self) -> Option<NodeName> {
        let key = random::random_key(self.config.random_key_len);
        self.lookup(&key)
    }

    /// Configured virtual nodes per physical node.
    pub fn virtual_nodes(&self) -> usize {
        self.config.virtual_nodes
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn partitioner_name(&self) -> &'static str {
        self.partitioner.name()
    }

    /// Number of occupied ring positions.
    pub fn len(&self) -> usize {
        self.ring.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.lock().is_empty()
    }

    /// Distinct physical nodes with at least one position, sorted by name.
    pub fn nodes(&self) -> Vec<NodeName> {
        let ring = self.ring.lock();
        let names: BTreeSet<NodeName> = ring
            .iter()
            .map(|entry| entry.owner.node_name().clone())
            .collect();
        names.into_iter().collect()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.ring
            .lock()
            .iter()
            .any(|entry| entry.owner.node_name() == name)
    }

    /// Snapshot of every entry in ascending position order.
    pub fn entries(&self) -> Vec<RingEntry<P::TokenType>> {
        self.ring.lock().iter().cloned().collect()
    }

    /// Fraction of the position space owned by each node.
    ///
    /// The fractions sum to 1.0 for a non-empty ring.
    pub fn ownership(&self) -> BTreeMap<NodeName, f64> {
        let space = <P::TokenType as Token>::space() as f64;
        let ring = self.ring.lock();

        let mut shares = BTreeMap::new();
        for (entry, arc) in ring.arcs() {
            *shares.entry(entry.owner.node_name().clone()).or_insert(0.0) += arc as f64 / space;
        }
        shares
    }
}

impl<P: Partitioner> fmt::Debug for RingManager<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingManager")
            .field("partitioner", &self.partitioner.name())
            .field("config", &self.config)
            .field("entries", &self.len())
            .finish()
    }
}
