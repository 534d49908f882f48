//! Parameter label listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use audiograph_core::{PARAMS, ParamClass};
use clap::Args;

#[derive(Args)]
pub struct ParamsArgs {
    /// Show details for one label or helper name
    #[arg(value_name = "LABEL")]
    label: Option<String>,

    /// Only list audio params
    #[arg(long, conflicts_with = "node_properties")]
    audio_params: bool,

    /// Only list node properties
    #[arg(long)]
    node_properties: bool,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    if let Some(label) = &args.label {
        let spec = PARAMS
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label) || p.name.eq_ignore_ascii_case(label))
            .ok_or_else(|| anyhow::anyhow!("Unknown parameter: {}", label))?;

        println!("{}", spec.label);
        println!("{}", "=".repeat(spec.label.len()));
        println!();
        println!("{}", spec.description);
        println!();
        println!("Class:   {}", spec.class.name());
        println!("Value:   {}", spec.value_kind);
        println!("Helper:  params::{}", spec.name);
        if spec.class == ParamClass::AudioParam {
            println!();
            println!("Schedulable and connectable: reference it as \"<key>.{}\".", spec.label);
        }
        return Ok(());
    }

    let filter = match (args.audio_params, args.node_properties) {
        (true, _) => Some(ParamClass::AudioParam),
        (_, true) => Some(ParamClass::NodeProperty),
        _ => None,
    };

    println!("Parameters");
    println!("==========");
    println!();
    println!("  {:22}  {:12}  {:10}  {}", "Label", "Class", "Value", "Description");
    println!("  {:22}  {:12}  {:10}  {}", "-----", "-----", "-----", "-----------");

    for spec in PARAMS.iter().filter(|p| filter.is_none_or(|c| p.class == c)) {
        println!(
            "  {:22}  {:12}  {:10}  {}",
            spec.label,
            spec.class.name(),
            spec.value_kind.name(),
            spec.description
        );
    }

    println!();
    println!("Use 'audiograph params <label>' for details.");
    Ok(())
}
