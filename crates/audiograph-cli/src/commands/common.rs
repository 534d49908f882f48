//! Shared CLI helpers used across multiple commands.

use audiograph_config::{Patch, get_factory_patch};
use std::path::{Path, PathBuf};

/// Load a patch by factory name or path.
///
/// Factory patches win over files of the same name.
pub fn load_patch(name: &str) -> anyhow::Result<Patch> {
    if let Some(patch) = get_factory_patch(name) {
        return Ok(patch);
    }

    let path = PathBuf::from(name);
    if path.exists() {
        return Patch::load(&path).map_err(|e| anyhow::anyhow!("{}", e));
    }

    anyhow::bail!(
        "Patch '{}' not found. Use 'audiograph patches' to see factory patches.",
        name
    )
}

/// Serialize JSON, pretty or compact.
pub fn to_json_string(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .map_err(|e| anyhow::anyhow!("failed to write '{}': {}", path.display(), e))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{content}"),
    }
    Ok(())
}
