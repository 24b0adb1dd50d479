//! Comprehensive tests for the hash ring implementation.
//!
//! # Test Strategy
//!
//! 1. **Basic functionality**: Empty ring, add/lookup, remove
//! 2. **Multiple nodes**: Distribution, consistency
//! 3. **Edge cases**: Idempotent add, unknown removal, wide position spaces
//! 4. **Membership churn**: Nodes joining and leaving during lookups

use std::collections::HashMap;

use hashring_core::{
    NodeName, RingBuilder, RingConfig, RingManager, SipPartitioner, Token32, Xxh3Partitioner,
};

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_ring_lookup() {
    let ring = RingManager::new(100).unwrap();
    assert_eq!(ring.lookup(b"key1"), None);
    assert_eq!(ring.lookup_token(Token32(0)), None);
    assert_eq!(ring.random_lookup(), None);
    assert_eq!(ring.len(), 0);
    assert!(ring.nodes().is_empty());
}

#[test]
fn test_add_node_and_lookup() {
    let ring = RingManager::new(4).unwrap();

    assert_eq!(ring.add_node("node1"), 4);
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.nodes(), vec![NodeName::from("node1")]);

    let result = ring.lookup(b"test-key");
    assert_eq!(result.unwrap(), "node1", "Should return the added node");
}

#[test]
fn test_remove_node() {
    let ring = RingManager::new(4).unwrap();
    ring.add_node("node1");
    ring.add_node("node2");
    assert_eq!(ring.len(), 8);

    assert_eq!(ring.remove_node("node1"), 4);
    assert_eq!(ring.len(), 4);
    assert!(!ring.contains_node("node1"));

    let result = ring.lookup(b"some-key");
    assert_eq!(result.unwrap(), "node2", "Should return remaining node");

    assert_eq!(ring.remove_node("node999"), 0, "Unknown node removes nothing");
}

// ============================================================================
// Multiple Nodes Tests
// ============================================================================

#[test]
fn test_every_entry_is_a_virtual_node_of_an_added_node() {
    let ring = RingManager::new(100).unwrap();
    for name in ["node1", "node2", "node3", "node4"] {
        ring.add_node(name);
    }
    assert_eq!(ring.len(), 400);

    let mut per_node: HashMap<String, Vec<usize>> = HashMap::new();
    for entry in ring.entries() {
        per_node
            .entry(entry.owner.node_name().to_string())
            .or_default()
            .push(entry.owner.index());
    }
    for (name, mut indexes) in per_node {
        indexes.sort_unstable();
        assert_eq!(indexes, (0..100).collect::<Vec<_>>(), "{name} replicas");
    }
}

#[test]
fn test_consistent_lookup() {
    let ring = RingManager::new(16).unwrap();
    ring.add_node("node1");
    ring.add_node("node2");

    let key = b"consistent-key";
    let first = ring.lookup(key);
    for _ in 0..10 {
        assert_eq!(ring.lookup(key), first, "Same key should map to same node");
    }
}

#[test]
fn test_removal_only_moves_keys_of_removed_node() {
    let ring = RingManager::new(100).unwrap();
    for name in ["node1", "node2", "node3", "node4"] {
        ring.add_node(name);
    }

    let keys: Vec<String> = (0..2_000).map(|i| format!("key-{i}")).collect();
    let before: Vec<NodeName> = keys
        .iter()
        .map(|k| ring.lookup(k.as_bytes()).unwrap())
        .collect();

    ring.remove_node("node3");

    for (key, owner) in keys.iter().zip(&before) {
        let now = ring.lookup(key.as_bytes()).unwrap();
        if owner != "node3" {
            assert_eq!(&now, owner, "{key} should not move");
        } else {
            assert_ne!(now, "node3");
        }
    }
}

#[test]
fn test_random_lookup_distribution() {
    const K: usize = 4;
    const LOOKUPS: usize = 100_000;

    let ring = RingManager::new(100).unwrap();
    for i in 1..=K {
        ring.add_node(format!("node{i}"));
    }
    let ownership = ring.ownership();

    let mut hits: HashMap<NodeName, usize> = HashMap::new();
    for _ in 0..LOOKUPS {
        *hits.entry(ring.random_lookup().unwrap()).or_default() += 1;
    }

    assert_eq!(hits.len(), K);
    for (name, count) in &hits {
        let observed = *count as f64 / LOOKUPS as f64;
        // Coarse bound only: CRC-32 arcs are uneven at V=100. The comparison
        // against ownership() below is the actual distribution check.
        assert!(
            (observed - 1.0 / K as f64).abs() < 0.15,
            "{name} got {observed:.3} of lookups"
        );
        assert!(
            (observed - ownership[name]).abs() < 0.01,
            "{name} got {observed:.3}, owns {:.3}",
            ownership[name]
        );
    }
}

// ============================================================================
// Ring Builder Tests
// ============================================================================

#[test]
fn test_ring_builder_custom_vnodes() {
    let ring = RingBuilder::new()
        .with_vnodes(8)
        .add_node("node1")
        .add_node("node2")
        .build()
        .unwrap();

    assert!(ring.lookup(b"key").is_some());
    assert_eq!(ring.nodes().len(), 2);
    assert_eq!(ring.len(), 16);
}

#[test]
fn test_ring_from_config() {
    let config: RingConfig = serde_json::from_str(r#"{"virtual_nodes": 12}"#).unwrap();
    let ring = RingManager::from_config(config, SipPartitioner::default()).unwrap();
    ring.add_node("node1");
    assert_eq!(ring.len(), 12);
    assert_eq!(ring.config().random_key_len, 32);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_single_node() {
    let ring = RingManager::new(4).unwrap();
    ring.add_node("node1");

    for key in ["key1", "key2", "key3", "very-long-key-name"] {
        assert_eq!(ring.lookup(key.as_bytes()).unwrap(), "node1");
    }
}

#[test]
fn test_add_remove_add() {
    let ring = RingManager::new(4).unwrap();

    ring.add_node("node1");
    let first = ring.entries();
    ring.remove_node("node1");
    assert!(ring.is_empty());

    ring.add_node("node1");
    assert_eq!(ring.entries(), first, "Re-adding lands on the same positions");
}

#[test]
fn test_idempotent_add() {
    let ring = RingManager::new(4).unwrap();

    ring.add_node("node1");
    assert_eq!(ring.len(), 4);

    assert_eq!(ring.add_node("node1"), 0);
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.nodes().len(), 1);
}

#[test]
fn test_wide_position_space() {
    let ring = RingManager::with_partitioner(64, Xxh3Partitioner).unwrap();
    for name in ["a", "b", "c"] {
        assert_eq!(ring.add_node(name), 64);
    }
    assert!(ring.random_lookup().is_some());
    let total: f64 = ring.ownership().values().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

// ============================================================================
// Membership Churn
// ============================================================================

#[test]
fn test_membership_changes_during_random_lookups() {
    let ring = RingManager::new(100).unwrap();
    for name in ["node1", "node2", "node3", "node4"] {
        ring.add_node(name);
    }
    assert_eq!(ring.len(), 400);

    let mut calls: HashMap<NodeName, Vec<usize>> = HashMap::new();
    for call in 0..10_000 {
        if call == 10 {
            assert_eq!(ring.remove_node("node3"), 100);
        }
        if call == 984 {
            assert_eq!(ring.add_node("node5"), 100);
        }
        let node = ring.random_lookup().expect("ring is never empty");
        calls.entry(node).or_default().push(call);
    }

    let total: usize = calls.values().map(Vec::len).sum();
    assert_eq!(total, 10_000);

    let node3 = calls.get("node3").cloned().unwrap_or_default();
    assert!(node3.iter().all(|call| *call < 10), "node3 hit after removal");

    let node5 = &calls["node5"];
    assert!(node5.iter().all(|call| *call >= 984), "node5 hit before add");

    // after node5 joins, hits follow the final ring's ownership
    let ownership = ring.ownership();
    let window = (10_000 - 984) as f64;
    for name in ["node1", "node2", "node4", "node5"] {
        let late = calls[name].iter().filter(|call| **call >= 984).count() as f64;
        assert!(
            (late / window - ownership[name]).abs() < 0.03,
            "{name}: {late} hits vs share {:.3}",
            ownership[name]
        );
    }
}
