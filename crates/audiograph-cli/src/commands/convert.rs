//! Convert a patch between file formats.

use audiograph_config::PatchFormat;
use clap::Args;
use std::path::PathBuf;

use super::common::load_patch;

/// Convert a patch between TOML and JSON.
#[derive(Args)]
pub struct ConvertArgs {
    /// Factory patch name or path to a patch file
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output path; `.json` writes JSON, anything else TOML
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Run the convert command.
pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let patch = load_patch(&args.input)?;
    patch
        .save(&args.output)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let format = match PatchFormat::from_path(&args.output) {
        PatchFormat::Json => "JSON",
        PatchFormat::Toml => "TOML",
    };
    println!(
        "Saved '{}' as {} to {}",
        patch.name,
        format,
        args.output.display()
    );
    Ok(())
}
