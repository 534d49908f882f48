//! Encode a patch into the JSON the host consumes.

use clap::Args;
use std::path::PathBuf;

use super::common::{load_patch, to_json_string, write_output};

/// Emit the host JSON for a patch.
#[derive(Args)]
pub struct EncodeArgs {
    /// Factory patch name or path to a patch file
    #[arg(value_name = "PATCH")]
    pub patch: String,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Run the encode command.
pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let patch = load_patch(&args.patch)?;
    tracing::debug!(name = %patch.name, roots = patch.len(), "encoding patch");

    let json = to_json_string(&patch.encode(), args.pretty)?;
    write_output(args.output.as_deref(), &json)
}
