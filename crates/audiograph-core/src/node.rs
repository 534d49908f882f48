//! Audio graph nodes.
//!
//! A node is a processing stage described by its host type tag, its
//! properties, and the nodes it feeds (its connections). Nesting expresses
//! the common case of a chain flowing into a sink. Anything a tree cannot
//! express (fan-in, modulation of another node's parameter, feedback loops)
//! is expressed by giving a node a key and pointing at it from elsewhere
//! with a [`reference`].
//!
//! ```rust
//! use audiograph_core::{key, param, reference};
//! use audiograph_core::kinds::{dac, delay, gain, oscillator};
//! use audiograph_core::params::{delay_time, frequency};
//!
//! // A feedback delay: the delay feeds a gain that feeds back into the delay.
//! let echo = key(
//!     "echo",
//!     delay(
//!         vec![delay_time(0.25)],
//!         vec![dac(), gain(vec![], vec![reference("echo")])],
//!     ),
//! );
//! // An LFO driving the `frequency` param of the node keyed "carrier".
//! let lfo = oscillator(vec![frequency(5.0)], vec![param("carrier", "frequency")]);
//! # let _ = (echo, lfo);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as Json};

use crate::property::Property;

/// Wire type tag for [`Node::Reference`].
pub const REF_NODE_TYPE: &str = "RefNode";

/// Separator between a key and a parameter name in a param reference.
pub const PARAM_SEPARATOR: char = '.';

/// One node of an audio graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An anonymous node.
    Plain {
        /// Host node type (e.g. `"OscillatorNode"`).
        kind: String,
        /// Properties, in order.
        properties: Vec<Property>,
        /// Nodes this node's output feeds.
        connections: Vec<Node>,
    },
    /// A node other nodes can refer to by key.
    Keyed {
        /// Graph-wide identifier.
        key: String,
        /// Host node type.
        kind: String,
        /// Properties, in order.
        properties: Vec<Property>,
        /// Nodes this node's output feeds.
        connections: Vec<Node>,
    },
    /// Stands in for the keyed node with the same key.
    Reference {
        /// Key of the referenced node, or `key.param` for a param target.
        key: String,
    },
}

/// Builds an anonymous node of the given host type.
pub fn node(kind: impl Into<String>, properties: Vec<Property>, connections: Vec<Node>) -> Node {
    Node::Plain {
        kind: kind.into(),
        properties,
        connections,
    }
}

/// Builds a reference to the node keyed `key`.
pub fn reference(key: impl Into<String>) -> Node {
    Node::Reference { key: key.into() }
}

/// Gives `node` the key `new_key`, replacing any key it already has.
///
/// On a [`Node::Reference`] this renames the referenced key.
pub fn key(new_key: impl Into<String>, node: Node) -> Node {
    node.keyed(new_key)
}

/// Builds a reference to the audio param `param_name` of the node keyed `key`.
///
/// Connecting to it routes a signal into that parameter rather than into the
/// node's input. The result is `reference("key.param_name")`.
pub fn param(key: &str, param_name: &str) -> Node {
    reference(format!("{key}{PARAM_SEPARATOR}{param_name}"))
}

impl Node {
    /// Returns this node with its key set to `new_key`.
    pub fn keyed(self, new_key: impl Into<String>) -> Node {
        let key = new_key.into();
        match self {
            Node::Plain {
                kind,
                properties,
                connections,
            }
            | Node::Keyed {
                kind,
                properties,
                connections,
                ..
            } => Node::Keyed {
                key,
                kind,
                properties,
                connections,
            },
            Node::Reference { .. } => Node::Reference { key },
        }
    }

    /// The node's key, if it is keyed or a reference.
    pub fn key(&self) -> Option<&str> {
        match self {
            Node::Plain { .. } => None,
            Node::Keyed { key, .. } | Node::Reference { key } => Some(key),
        }
    }

    /// The wire type tag (`"RefNode"` for references).
    pub fn kind(&self) -> &str {
        match self {
            Node::Plain { kind, .. } | Node::Keyed { kind, .. } => kind,
            Node::Reference { .. } => REF_NODE_TYPE,
        }
    }

    /// Properties of the node; empty for references.
    pub fn properties(&self) -> &[Property] {
        match self {
            Node::Plain { properties, .. } | Node::Keyed { properties, .. } => properties,
            Node::Reference { .. } => &[],
        }
    }

    /// Downstream nodes; empty for references.
    pub fn connections(&self) -> &[Node] {
        match self {
            Node::Plain { connections, .. } | Node::Keyed { connections, .. } => connections,
            Node::Reference { .. } => &[],
        }
    }

    /// Whether this is a [`Node::Reference`].
    pub fn is_reference(&self) -> bool {
        matches!(self, Node::Reference { .. })
    }

    /// For a param reference (`key.param`), the key and parameter name.
    ///
    /// Splits on the first `.`; keys containing dots are ambiguous on the wire.
    pub fn param_target(&self) -> Option<(&str, &str)> {
        match self {
            Node::Reference { key } => key.split_once(PARAM_SEPARATOR),
            _ => None,
        }
    }

    /// Encodes the node and everything below it.
    ///
    /// - Plain: `{type, properties, connections}`
    /// - Keyed: `{key, type, properties, connections}`
    /// - Reference: `{key, type: "RefNode"}`
    pub fn encode(&self) -> Json {
        let mut obj = Map::new();
        match self {
            Node::Reference { key } => {
                obj.insert("key".into(), Json::String(key.clone()));
                obj.insert("type".into(), Json::String(REF_NODE_TYPE.into()));
            }
            Node::Plain {
                kind,
                properties,
                connections,
            }
            | Node::Keyed {
                kind,
                properties,
                connections,
                ..
            } => {
                if let Node::Keyed { key, .. } = self {
                    obj.insert("key".into(), Json::String(key.clone()));
                }
                obj.insert("type".into(), Json::String(kind.clone()));
                obj.insert(
                    "properties".into(),
                    Json::Array(properties.iter().map(Property::encode).collect()),
                );
                obj.insert(
                    "connections".into(),
                    Json::Array(connections.iter().map(Node::encode).collect()),
                );
            }
        }
        Json::Object(obj)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        crate::decode::decode_node(&json).map_err(serde::de::Error::custom)
    }
}
