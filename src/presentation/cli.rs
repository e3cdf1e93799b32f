//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Address lists are comma separated; order matters for `--kafka`
//! - `--kafka` and `--zookeeper` are required, everything else is optional

use std::path::PathBuf;

use clap::Parser;

/// kafka-compose - generate docker-compose files for a Kafka cluster
#[derive(Parser, Debug)]
#[command(name = "kafka-compose")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
The host of each address is a docker host; the port (if given) is the port
exposed for that service. Broker ids follow the order of --kafka. When adding
brokers, append them to the original list so existing ids are kept.")]
pub struct Cli {
    /// Broker addresses (host[:port], default port 9092)
    #[arg(long, value_delimiter = ',', required = true, value_name = "ADDRS")]
    pub kafka: Vec<String>,

    /// Zookeeper addresses (host[:port], default port 2181)
    #[arg(long, value_delimiter = ',', required = true, value_name = "ADDRS")]
    pub zookeeper: Vec<String>,

    /// Kafka manager addresses (host[:port], default port 9000)
    #[arg(long, value_delimiter = ',', value_name = "ADDRS")]
    pub manager: Vec<String>,

    /// Fixed APPLICATION_SECRET for kafka manager (random UUID otherwise)
    #[arg(long, value_name = "SECRET")]
    pub manager_secret: Option<String>,

    /// Configuration file (default: <config dir>/kafka-compose/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show what would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output directory
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}
