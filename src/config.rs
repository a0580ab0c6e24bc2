//! Command line and environment configuration.
//!
//! Every option can also be set through a `CIDR_INVERSE_*` environment
//! variable, which `main` loads from `.env` before parsing.

use crate::processing::{Merger, RangeMerger, SiblingMerger};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How inverted blocks are written to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per line.
    #[default]
    Text,
    /// JSON array of CIDR strings.
    Json,
}

/// Which [`Merger`] canonicalizes multi-block results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MergeStrategy {
    /// Coalesce address ranges and split them into aligned blocks.
    #[default]
    Range,
    /// Drop contained blocks and join sibling pairs.
    Sibling,
}

impl MergeStrategy {
    pub fn merger(&self) -> Box<dyn Merger> {
        match self {
            MergeStrategy::Range => Box::new(RangeMerger),
            MergeStrategy::Sibling => Box::new(SiblingMerger),
        }
    }
}

/// Print the IPv4 blocks that cover every address outside the given blocks.
#[derive(Debug, Parser)]
#[command(name = "cidr-inverse")]
#[command(version, about)]
pub struct Args {
    /// CIDR blocks to invert, e.g. 10.0.0.0/8
    #[arg(value_name = "CIDR")]
    pub cidrs: Vec<String>,

    /// Read more blocks from a file (whitespace or comma separated, # comments)
    #[arg(short, long, env = "CIDR_INVERSE_FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t, env = "CIDR_INVERSE_FORMAT")]
    pub format: OutputFormat,

    /// Reject blocks with host bits set instead of using their network
    #[arg(long, env = "CIDR_INVERSE_STRICT")]
    pub strict: bool,

    /// Merge strategy for multiple blocks
    #[arg(long, value_enum, default_value_t, env = "CIDR_INVERSE_MERGER")]
    pub merger: MergeStrategy,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml", env = "CIDR_INVERSE_LOG_CONFIG")]
    pub log_config: PathBuf,

    /// Log level used when the log4rs file is missing
    #[arg(long, default_value = "info", env = "CIDR_INVERSE_LOG_LEVEL")]
    pub log_level: log::LevelFilter,
}
