//! Graphs: ordered forests of nodes, and their encoding.
//!
//! Each root of a [`Graph`] is an independent chain, typically ending in the
//! destination. Roots are tied together by keys and references, so the forest
//! can describe fan-in, modulation and feedback that a single tree cannot.

use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::node::Node;
use crate::property::Property;

/// An audio graph: independent roots, in order.
pub type Graph = Vec<Node>;

/// Encodes every root, preserving order.
///
/// This array is what the host receives.
pub fn encode_graph(graph: &[Node]) -> Json {
    #[cfg(feature = "tracing")]
    tracing::debug!(roots = graph.len(), "encode_graph");

    Json::Array(graph.iter().map(Node::encode).collect())
}

/// Structural counts over a graph.
///
/// Counting only: references are tallied, never resolved, and duplicate keys
/// are counted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Top-level entries.
    pub roots: usize,
    /// Nodes of every variant, at every depth.
    pub nodes: usize,
    /// Keyed nodes.
    pub keyed: usize,
    /// Reference nodes, including param references.
    pub references: usize,
    /// References of the `key.param` form.
    pub param_references: usize,
    /// NodeProperty entries.
    pub node_properties: usize,
    /// AudioParam entries.
    pub audio_params: usize,
    /// ScheduledUpdate entries.
    pub scheduled_updates: usize,
    /// Node count per type tag, references excluded.
    pub kinds: BTreeMap<String, usize>,
}

impl GraphStats {
    /// Walks `graph` depth first and counts.
    pub fn collect(graph: &[Node]) -> Self {
        let mut stats = GraphStats {
            roots: graph.len(),
            ..GraphStats::default()
        };
        for node in graph {
            stats.visit(node);
        }
        stats
    }

    fn visit(&mut self, node: &Node) {
        self.nodes += 1;
        match node {
            Node::Reference { .. } => {
                self.references += 1;
                if node.param_target().is_some() {
                    self.param_references += 1;
                }
                return;
            }
            Node::Keyed { .. } => self.keyed += 1,
            Node::Plain { .. } => {}
        }

        *self.kinds.entry(node.kind().to_string()).or_default() += 1;

        for property in node.properties() {
            match property {
                Property::NodeProperty { .. } => self.node_properties += 1,
                Property::AudioParam { .. } => self.audio_params += 1,
                Property::ScheduledUpdate { .. } => self.scheduled_updates += 1,
            }
        }
        for child in node.connections() {
            self.visit(child);
        }
    }

    /// Every property, of any variant.
    pub fn properties(&self) -> usize {
        self.node_properties + self.audio_params + self.scheduled_updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{dac, gain, oscillator};
    use crate::node::{key, param, reference};
    use crate::params::{frequency, gain as gain_param, type_};

    fn tremolo() -> Graph {
        vec![
            key("amp", gain(vec![gain_param(0.5)], vec![dac()])),
            oscillator(
                vec![type_("sine"), frequency(440.0)],
                vec![reference("amp")],
            ),
            oscillator(
                vec![frequency(4.0).set_value_at_time(1.0)],
                vec![param("amp", "gain")],
            ),
        ]
    }

    #[test]
    fn encode_graph_preserves_order_and_length() {
        let graph = tremolo();
        let encoded = encode_graph(&graph);
        let items = encoded.as_array().cloned().unwrap_or_default();
        assert_eq!(items.len(), graph.len());
        for (item, node) in items.iter().zip(&graph) {
            assert_eq!(item, &node.encode());
        }
    }

    #[test]
    fn empty_graph_encodes_to_empty_array() {
        assert_eq!(encode_graph(&[]), Json::Array(vec![]));
    }

    #[test]
    fn stats_count_every_variant() {
        let stats = GraphStats::collect(&tremolo());
        assert_eq!(stats.roots, 3);
        assert_eq!(stats.nodes, 6);
        assert_eq!(stats.keyed, 1);
        assert_eq!(stats.references, 2);
        assert_eq!(stats.param_references, 1);
        assert_eq!(stats.node_properties, 1);
        assert_eq!(stats.audio_params, 2);
        assert_eq!(stats.scheduled_updates, 1);
        assert_eq!(stats.properties(), 4);
        assert_eq!(stats.kinds.get("OscillatorNode"), Some(&2));
        assert_eq!(stats.kinds.get("AudioDestinationNode"), Some(&1));
        assert_eq!(stats.kinds.get("RefNode"), None);
    }

    #[test]
    fn stats_do_not_resolve_references() {
        let stats = GraphStats::collect(&[reference("missing"), reference("missing")]);
        assert_eq!(stats.references, 2);
        assert_eq!(stats.nodes, 2);
    }
}
