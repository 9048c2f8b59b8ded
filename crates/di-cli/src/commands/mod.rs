pub mod algorithms;
pub mod compute;
pub mod inspect;
pub mod triplet;
pub mod verify;

use anyhow::Result;
use clap::Subcommand;
use di_hash::BuiltinProvider;
use di_uri::{Config, DigestComputer};
use log::debug;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Compute digest URIs for files, stdin or literal strings
    Compute(compute::ComputeArgs),
    /// Decode a digest URI into its algorithm and digest forms
    Inspect(inspect::InspectArgs),
    /// Check content against a digest URI
    Verify(verify::VerifyArgs),
    /// Split a cipher:key:iv triplet into its fields
    Triplet(triplet::TripletArgs),
    /// List the supported digest algorithms
    Algorithms,
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Compute(args) => compute::run(args, &cli),
        Commands::Inspect(args) => inspect::run(args),
        Commands::Verify(args) => verify::run(args, &cli),
        Commands::Triplet(args) => triplet::run(args),
        Commands::Algorithms => algorithms::run(&cli),
    }
}

/// Build a computer from the environment and `-c` overrides.
pub fn computer(cli: &Cli) -> Result<DigestComputer> {
    let mut config = Config::from_env()?;
    config.apply_overrides(&cli.config)?;
    debug!(
        "default algorithm {}, buffer size {}",
        config.default_algorithm, config.buffer_size
    );
    Ok(DigestComputer::with_provider(BuiltinProvider, config))
}
