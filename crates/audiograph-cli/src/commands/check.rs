//! Load a patch and summarize its graph.

use audiograph_core::GraphStats;
use clap::Args;

use super::common::load_patch;

/// Load a patch and print graph statistics.
#[derive(Args)]
pub struct CheckArgs {
    /// Factory patch name or path to a patch file
    #[arg(value_name = "PATCH")]
    pub patch: String,
}

/// Run the check command.
///
/// Statistics only. Unresolved references and duplicate keys are left for
/// the host to deal with.
pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let patch = load_patch(&args.patch)?;
    let stats = GraphStats::collect(&patch.graph);

    println!("Patch:       {}", patch.name);
    if let Some(desc) = &patch.description {
        println!("Description: {desc}");
    }
    println!("Roots:       {}", stats.roots);
    println!("Nodes:       {}", stats.nodes);
    println!("Keyed:       {}", stats.keyed);
    println!(
        "References:  {} ({} to params)",
        stats.references, stats.param_references
    );
    println!(
        "Properties:  {} ({} node properties, {} audio params, {} scheduled updates)",
        stats.properties(),
        stats.node_properties,
        stats.audio_params,
        stats.scheduled_updates
    );
    println!();
    println!("Node kinds:");
    for (kind, count) in &stats.kinds {
        println!("  {kind:24} {count}");
    }

    Ok(())
}
