// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the prefixrank command-line interface.
//!
//! Three subcommands: `query` for a one-shot lookup, `stats` to see what an
//! index over a vocabulary costs, and `interactive` to type prefixes one per
//! line against an index built once.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "prefixrank",
    about = "Weighted prefix completion over a fixed vocabulary",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the top matches for one prefix
    Query {
        /// Vocabulary file (`weight<TAB>term` lines, or a .json array)
        file: String,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of matches to return
        #[arg(short, long, default_value = "10")]
        k: usize,

        /// Only return terms starting with the whole prefix, even past the
        /// indexed prefix length
        #[arg(long)]
        exact: bool,

        /// Cross-check the answer against a brute-force scan
        #[arg(long)]
        verify: bool,
    },

    /// Show term count, bucket count and estimated size of the index
    Stats {
        /// Vocabulary file
        file: String,
    },

    /// Read prefixes from stdin, one per line, and print matches for each
    Interactive {
        /// Vocabulary file
        file: String,

        /// Maximum number of matches per prefix
        #[arg(short, long, default_value = "10")]
        k: usize,
    },
}
