//! Audiograph CLI - inspect, encode and convert audio graph patches.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "audiograph")]
#[command(author, version, about = "Audiograph patch tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the host JSON for a factory patch or patch file
    Encode(commands::encode::EncodeArgs),

    /// Load a patch file and print graph statistics
    Check(commands::check::CheckArgs),

    /// Convert a patch between TOML and JSON
    Convert(commands::convert::ConvertArgs),

    /// List known parameter labels and their classification
    Params(commands::params::ParamsArgs),

    /// List node kinds and their host type tags
    Nodes,

    /// List factory patches
    Patches,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so encoded JSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => commands::encode::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Nodes => commands::catalog::run_nodes(),
        Commands::Patches => commands::catalog::run_patches(),
    }
}
