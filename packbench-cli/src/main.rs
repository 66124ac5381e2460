// SPDX-License-Identifier: Apache-2.0

//! Packbench CLI
//!
//! Command-line interface for the comparative compression benchmark harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod table;

/// Packbench - compare compression/serialization codecs on a JSON payload
#[derive(Parser)]
#[command(name = "packbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark over a payload and print the results table
    Run {
        /// Payload file (.json is parsed, anything else is wrapped as text);
        /// defaults to the built-in ~1 MB sample
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Directory to save the JSON run report into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip round-trip checksum verification
        #[arg(long)]
        no_verify: bool,
    },

    /// List the registered codecs
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Commands::Run {
            file,
            output,
            no_verify,
        } => commands::run::execute(file, output, no_verify),
        Commands::List => commands::list::execute(),
    }
}
