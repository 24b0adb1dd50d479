//! CLI tool for exercising consistent hash rings.
//!
//! Provides commands for:
//! - Simulating random lookups while nodes join and leave
//! - Locating the owner of specific keys
//! - Inspecting how the ring's position space is split between nodes

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
