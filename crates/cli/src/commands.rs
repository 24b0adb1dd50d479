//! Subcommands of the `hashring` driver.
//!
//! Every command builds a fresh in-memory ring from its flags; nothing is
//! persisted between invocations.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::str::FromStr;

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use hashring_core::{
    Crc32Partitioner, NodeName, Partitioner, RingBuilder, RingManager, SipPartitioner,
    Xxh3Partitioner,
};
use tracing::info;

/// Outcome of running a command.
pub type CommandResult = anyhow::Result<()>;

const BAR_WIDTH: usize = 40;

/// Hash function used to place nodes and keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashKind {
    /// CRC-32 over a 32-bit ring
    Crc32,
    /// SipHash-1-3 over a 64-bit ring
    Sip,
    /// XXH3 over a 64-bit ring
    Xxh3,
}

/// Flags shared by every command that builds a ring.
#[derive(Debug, Clone, Args)]
pub struct RingArgs {
    /// Virtual nodes per physical node.
    #[arg(long, default_value_t = 100)]
    pub vnodes: usize,

    #[arg(long, value_enum, default_value_t = HashKind::Crc32)]
    pub hash: HashKind,

    /// Initial nodes, comma separated.
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["node1", "node2", "node3", "node4"]
    )]
    pub nodes: Vec<String>,
}

/// A node joining or leaving before a given lookup call, written `NAME@CALL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipEvent {
    pub name: String,
    pub at: usize,
}

impl FromStr for MembershipEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, at) = s
            .rsplit_once('@')
            .ok_or_else(|| format!("expected NAME@CALL, got {s:?}"))?;
        if name.is_empty() {
            return Err(format!("missing node name in {s:?}"));
        }
        let at = at
            .parse()
            .map_err(|err| format!("invalid call index in {s:?}: {err}"))?;
        Ok(Self {
            name: name.to_string(),
            at,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run random lookups while nodes join and leave, then print a histogram.
    Simulate {
        #[command(flatten)]
        ring: RingArgs,

        /// Number of random lookups.
        #[arg(long, default_value_t = 10_000)]
        lookups: usize,

        /// Remove a node before the given call, e.g. node3@10. Repeatable.
        #[arg(long = "remove", value_name = "NAME@CALL", default_values = ["node3@10"])]
        removals: Vec<MembershipEvent>,

        /// Add a node before the given call, e.g. node5@984. Repeatable.
        #[arg(long = "add", value_name = "NAME@CALL", default_values = ["node5@984"])]
        additions: Vec<MembershipEvent>,

        /// Ignore --add/--remove and keep membership fixed.
        #[arg(long)]
        no_churn: bool,
    },
    /// Print the node owning each key.
    Locate {
        #[command(flatten)]
        ring: RingArgs,

        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print each node's share of the ring.
    Ownership {
        #[command(flatten)]
        ring: RingArgs,
    },
}

impl Command {
    fn ring_args(&self) -> &RingArgs {
        match self {
            Command::Simulate { ring, .. }
            | Command::Locate { ring, .. }
            | Command::Ownership { ring } => ring,
        }
    }

    pub fn execute(self) -> CommandResult {
        let hash = self.ring_args().hash;
        match hash {
            HashKind::Crc32 => self.execute_with(Crc32Partitioner),
            HashKind::Sip => self.execute_with(SipPartitioner::default()),
            HashKind::Xxh3 => self.execute_with(Xxh3Partitioner),
        }
    }

    fn execute_with<P: Partitioner>(self, partitioner: P) -> CommandResult {
        let ring = build_ring(self.ring_args(), partitioner)?;
        match self {
            Command::Simulate {
                lookups,
                removals,
                additions,
                no_churn,
                ..
            } => {
                let (removals, additions) = if no_churn {
                    (Vec::new(), Vec::new())
                } else {
                    (removals, additions)
                };
                let report = simulate(&ring, lookups, &removals, &additions);
                print!("{}", report.render());
            }
            Command::Locate { keys, .. } => {
                for key in keys {
                    match ring.lookup(key.as_bytes()) {
                        Some(node) => println!("{key}\t{node}"),
                        None => println!("{key}\t-"),
                    }
                }
            }
            Command::Ownership { .. } => {
                print!("{}", render_ownership(&ring));
            }
        }
        Ok(())
    }
}

fn build_ring<P: Partitioner>(args: &RingArgs, partitioner: P) -> anyhow::Result<RingManager<P>> {
    let ring = RingBuilder::new()
        .with_vnodes(args.vnodes)
        .with_partitioner(partitioner)
        .add_nodes(args.nodes.iter())
        .build()
        .context("invalid ring configuration")?;
    info!(
        partitioner = ring.partitioner_name(),
        nodes = args.nodes.len(),
        entries = ring.len(),
        "ring ready"
    );
    Ok(ring)
}

/// Lookup counts from a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub lookups: usize,
    /// Hits per node, including nodes that joined but were never hit.
    pub hits: BTreeMap<NodeName, usize>,
    /// Lookups that found an empty ring.
    pub misses: usize,
}

impl SimulationReport {
    pub fn render(&self) -> String {
        let width = self.hits.keys().map(|n| n.len()).max().unwrap_or(0);
        let mut out = String::from("nodes visit result:\n");
        for (node, count) in &self.hits {
            let share = match self.lookups {
                0 => 0.0,
                total => *count as f64 / total as f64,
            };
            let bar = "#".repeat((share * BAR_WIDTH as f64).round() as usize);
            let _ = writeln!(
                out,
                "{node:<width$} {count:>8} {pct:>6.2}% {bar}",
                pct = share * 100.0
            );
        }
        if self.misses > 0 {
            let _ = writeln!(out, "{:<width$} {:>8}", "(empty)", self.misses);
        }
        out
    }
}

/// Run `lookups` random lookups, applying membership events before the
/// lookup whose call index they name.
pub fn simulate<P: Partitioner>(
    ring: &RingManager<P>,
    lookups: usize,
    removals: &[MembershipEvent],
    additions: &[MembershipEvent],
) -> SimulationReport {
    let mut hits: BTreeMap<NodeName, usize> = ring.nodes().into_iter().map(|n| (n, 0)).collect();
    let mut misses = 0;

    for call in 0..lookups {
        for event in removals.iter().filter(|e| e.at == call) {
            let removed = ring.remove_node(event.name.as_str());
            info!(node = %event.name, call, removed, "node left");
        }
        for event in additions.iter().filter(|e| e.at == call) {
            let inserted = ring.add_node(event.name.as_str());
            hits.entry(NodeName::from(event.name.as_str())).or_insert(0);
            info!(node = %event.name, call, inserted, "node joined");
        }

        match ring.random_lookup() {
            Some(node) => *hits.entry(node).or_insert(0) += 1,
            None => misses += 1,
        }
    }

    SimulationReport {
        lookups,
        hits,
        misses,
    }
}

fn render_ownership<P: Partitioner>(ring: &RingManager<P>) -> String {
    let mut entries: BTreeMap<NodeName, usize> = BTreeMap::new();
    for entry in ring.entries() {
        *entries.entry(entry.owner.node_name().clone()).or_insert(0) += 1;
    }

    let shares = ring.ownership();
    let width = shares.keys().map(|n| n.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (node, share) in &shares {
        let vnodes = entries.get(node).copied().unwrap_or(0);
        let _ = writeln!(
            out,
            "{node:<width$} {vnodes:>6} vnodes {pct:>6.2}%",
            pct = share * 100.0
        );
    }
    out
}
