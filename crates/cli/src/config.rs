//! Top-level arguments and logging setup.

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::commands::{Command, CommandResult};

/// Drive a consistent hash ring from the command line.
#[derive(Debug, Parser)]
#[command(name = "hashring", version, about)]
pub struct CliConfig {
    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn run(self) -> CommandResult {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();

        self.command.execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let config = CliConfig::try_parse_from(["hashring", "-vv", "ownership"]).unwrap();
        assert_eq!(config.log_level(), Level::DEBUG);

        let config = CliConfig::try_parse_from(["hashring", "ownership", "-q"]).unwrap();
        assert_eq!(config.log_level(), Level::ERROR);

        let config = CliConfig::try_parse_from(["hashring", "ownership"]).unwrap();
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(CliConfig::try_parse_from(["hashring", "-v", "-q", "ownership"]).is_err());
    }
}
