//! Audiograph Core - declarative audio graphs for an external audio engine
//!
//! This crate describes audio-processing graphs as plain values and encodes
//! them into the JSON tree a host audio engine (oscillators, filters, gain
//! stages, a speaker sink) walks to build and wire its native nodes. Nothing
//! here renders audio.
//!
//! # Core Abstractions
//!
//! ## Graph Model
//!
//! - [`Node`] - plain, keyed, or reference node
//! - [`Graph`] - ordered list of root nodes
//! - [`node`], [`reference`], [`key`], [`param`] - constructors
//! - [`kinds`] - builders for each host node type ([`kinds::oscillator`], [`kinds::dac`], ...)
//! - [`encode_graph`] - the host-facing encoding
//!
//! ## Property Model
//!
//! - [`Value`] - bool, float, float list, int or string
//! - [`Property`] - node property, audio param, or scheduled update
//! - [`params`] - one helper per known host label ([`params::frequency`], [`params::loop_`], ...)
//! - [`set_value_at_time`], [`linear_ramp_to_value_at_time`],
//!   [`exponential_ramp_to_value_at_time`] - automation
//!
//! ## Wire Decoding
//!
//! - [`decode_graph`] and friends read the encoded form back, reporting a
//!   [`DecodeError`] with the path of the first malformed element
//!
//! # Example
//!
//! ```rust
//! use audiograph_core::{encode_graph, key, reference};
//! use audiograph_core::kinds::{dac, gain, oscillator};
//! use audiograph_core::params::{frequency, type_};
//! use serde_json::json;
//!
//! let graph = vec![
//!     key("out", gain(vec![audiograph_core::params::gain(0.2)], vec![dac()])),
//!     oscillator(vec![type_("sawtooth"), frequency(110.0)], vec![reference("out")]),
//! ];
//!
//! let encoded = encode_graph(&graph);
//! assert_eq!(encoded[1]["connections"][0], json!({"key": "out", "type": "RefNode"}));
//! ```
//!
//! # Design Principles
//!
//! - **Values, not handles**: every constructor returns a new immutable value
//! - **Total**: building, scheduling and encoding never fail
//! - **Permissive**: keys, references and labels are the host's business; the
//!   model does not validate them

pub mod decode;
pub mod error;
pub mod graph;
pub mod kinds;
pub mod node;
pub mod params;
pub mod property;
pub mod value;

pub use decode::{decode_graph, decode_node, decode_property, decode_value};
pub use error::{DecodeError, DecodeErrorKind};
pub use graph::{Graph, GraphStats, encode_graph};
pub use node::{Node, PARAM_SEPARATOR, REF_NODE_TYPE, key, node, param, reference};
pub use params::{PARAMS, ParamClass, ParamSpec};
pub use property::{
    Property, ScheduledUpdate, ScheduledUpdateMethod, audio_param,
    exponential_ramp_to_value_at_time, linear_ramp_to_value_at_time, node_property,
    set_value_at_time,
};
pub use value::{Value, ValueKind};
