//! Patch file format and operations.

use audiograph_core::{Graph, Node, decode_graph, encode_graph};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::path::Path;

use crate::error::ConfigError;

/// On-disk encoding of a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchFormat {
    /// `{"name": ..., "graph": [...]}`, or a bare encoded graph array.
    Json,
    /// TOML document with `[[graph]]` tables.
    Toml,
}

impl PatchFormat {
    /// Picks the format from a file extension: `.json` is JSON, anything else TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => PatchFormat::Json,
            _ => PatchFormat::Toml,
        }
    }
}

/// A named graph persisted to disk.
///
/// The graph is stored in the same shape the host receives, so a patch file
/// doubles as a readable record of what will be sent.
///
/// # TOML Format
///
/// ```toml
/// name = "Sine"
/// description = "A quiet 440 Hz sine"
///
/// [[graph]]
/// key = "out"
/// type = "GainNode"
/// properties = [{ type = "AudioParam", label = "gain", value = 0.2 }]
/// connections = [{ type = "AudioDestinationNode", properties = [], connections = [] }]
///
/// [[graph]]
/// type = "OscillatorNode"
/// properties = [{ type = "AudioParam", label = "frequency", value = 440.0 }]
/// connections = [{ key = "out", type = "RefNode" }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patch {
    /// Name of the patch.
    pub name: String,

    /// Optional description of the patch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Root nodes, in order.
    #[serde(default)]
    pub graph: Graph,
}

impl Patch {
    /// Create a new empty patch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            graph: Vec::new(),
        }
    }

    /// Create a patch with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a root node.
    pub fn with_root(mut self, node: Node) -> Self {
        self.graph.push(node);
        self
    }

    /// Append several root nodes.
    pub fn with_roots(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.graph.extend(nodes);
        self
    }

    /// Load a patch, choosing the format from the file extension.
    ///
    /// A JSON file holding a bare graph array (what [`Patch::encode`]
    /// produces) loads as a patch named after the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading patch");

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        match PatchFormat::from_path(path) {
            PatchFormat::Json => {
                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("Untitled");
                Self::from_json_named(&content, stem)
            }
            PatchFormat::Toml => Self::from_toml(&content),
        }
    }

    /// Save the patch, choosing the format from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = match PatchFormat::from_path(path) {
            PatchFormat::Json => self.to_json()?,
            PatchFormat::Toml => self.to_toml()?,
        };
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;

        tracing::debug!(path = %path.display(), roots = self.graph.len(), "saved patch");
        Ok(())
    }

    /// Load a patch from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the patch to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a patch from a JSON string.
    ///
    /// Accepts a patch object or a bare graph array (named "Untitled").
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Self::from_json_named(json_str, "Untitled")
    }

    fn from_json_named(json_str: &str, fallback_name: &str) -> Result<Self, ConfigError> {
        let json: Json = serde_json::from_str(json_str)?;
        if json.is_array() {
            let graph = decode_graph(&json)?;
            return Ok(Self::new(fallback_name).with_roots(graph));
        }
        Ok(serde_json::from_value(json)?)
    }

    /// Convert the patch to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The host-facing encoding of the graph.
    pub fn encode(&self) -> Json {
        encode_graph(&self.graph)
    }

    /// Get the number of root nodes.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Check if the patch has no roots.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

impl Default for Patch {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
