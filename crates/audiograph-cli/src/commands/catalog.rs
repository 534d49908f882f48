//! Node kind and factory patch listings.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use audiograph_config::factory_patches;
use audiograph_core::kinds::NODE_KINDS;

/// Run the nodes command.
pub fn run_nodes() -> anyhow::Result<()> {
    println!("Node Kinds");
    println!("==========");
    println!();
    println!("  {:20}  {:24}  {}", "Builder", "Type tag", "Description");
    println!("  {:20}  {:24}  {}", "-------", "--------", "-----------");

    for kind in NODE_KINDS {
        println!(
            "  {:20}  {:24}  {}",
            kind.builder, kind.type_tag, kind.description
        );
    }
    Ok(())
}

/// Run the patches command.
pub fn run_patches() -> anyhow::Result<()> {
    println!("Factory Patches:");
    println!("================");
    for patch in factory_patches() {
        let desc = patch.description.as_deref().unwrap_or("");
        println!("  {:20} - {}", patch.name, desc);
    }
    println!();
    println!("Use 'audiograph encode <name>' to print the host JSON.");
    Ok(())
}
