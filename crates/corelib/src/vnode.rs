//! Virtual node abstractions.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Instead of each physical node having a single position on the ring, each
//! node is expanded into `V` virtual nodes `(name, 0)..(name, V - 1)`, each
//! hashed to its own position. More positions per node means a smoother
//! split of the key space:
//!
//! 1. **Better Load Distribution**: each node's share approaches `1/K`
//! 2. **Gradual Rebalancing**: a joining node takes small slices from everyone
//!
//! # Identity
//!
//! A virtual node's canonical identity is `"<name>-<index>"`. That string is
//! the partitioner input, and it is the only thing removal relies on: the
//! ring keeps no reverse index from node names to positions.
//!
//! # Collisions
//!
//! If two virtual nodes hash to the same position only the first one
//! inserted is kept, so a node's effective replication may be below `V`.

use crate::node::NodeName;
use std::fmt;

/// A virtual node on the hash ring.
///
/// Immutable once created. Two virtual nodes are equal iff both the owning
/// node name and the replica index match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualNode {
    node: NodeName,
    index: usize,
}

impl VirtualNode {
    /// Create the `index`-th virtual node of `node`.
    #[inline]
    pub fn new(node: impl Into<NodeName>, index: usize) -> Self {
        Self {
            node: node.into(),
            index,
        }
    }

    /// Canonical identity, `"<name>-<index>"`. This is what gets hashed.
    pub fn identity(&self) -> String {
        format!("{}-{}", self.node, self.index)
    }

    /// The physical node that owns this virtual node.
    #[inline]
    pub fn node_name(&self) -> &NodeName {
        &self.node
    }

    /// Replica index within `[0, V)`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for VirtualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.node, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnode_creation() {
        let vnode = VirtualNode::new("node1", 7);
        assert_eq!(vnode.node_name(), &NodeName::from("node1"));
        assert_eq!(vnode.index(), 7);
    }

    #[test]
    fn test_vnode_identity() {
        let vnode = VirtualNode::new("node1", 0);
        assert_eq!(vnode.identity(), "node1-0");
        assert_eq!(vnode.to_string(), vnode.identity());
    }

    #[test]
    fn test_vnode_equality() {
        assert_eq!(VirtualNode::new("a", 1), VirtualNode::new("a", 1));
        assert_ne!(VirtualNode::new("a", 1), VirtualNode::new("a", 2));
        assert_ne!(VirtualNode::new("a", 1), VirtualNode::new("b", 1));
    }

    #[test]
    fn test_name_with_dash_keeps_full_identity() {
        let vnode = VirtualNode::new("rack-1", 3);
        assert_eq!(vnode.identity(), "rack-1-3");
        assert_eq!(vnode.node_name().as_str(), "rack-1");
    }
}
