//! Builders for the node kinds the host knows how to instantiate.
//!
//! Each builder is [`node`] with the host type tag filled in. The tags are the
//! host's native constructor names and must be sent verbatim; note that
//! [`CONSTANT_SOURCE`] has no `Node` suffix.

use crate::node::{Node, node};
use crate::property::Property;

/// `OscillatorNode` type tag.
pub const OSCILLATOR: &str = "OscillatorNode";
/// `GainNode` type tag.
pub const GAIN: &str = "GainNode";
/// `AudioDestinationNode` type tag (the speakers).
pub const AUDIO_DESTINATION: &str = "AudioDestinationNode";
/// `AudioBufferSourceNode` type tag.
pub const AUDIO_BUFFER_SOURCE: &str = "AudioBufferSourceNode";
/// `DelayNode` type tag.
pub const DELAY: &str = "DelayNode";
/// `ChannelMergerNode` type tag.
pub const CHANNEL_MERGER: &str = "ChannelMergerNode";
/// `ChannelSplitterNode` type tag.
pub const CHANNEL_SPLITTER: &str = "ChannelSplitterNode";
/// Constant source type tag. The host expects it without the `Node` suffix.
pub const CONSTANT_SOURCE: &str = "ConstantSource";
/// `BiquadFilterNode` type tag.
pub const BIQUAD_FILTER: &str = "BiquadFilterNode";
/// `ConvolverNode` type tag.
pub const CONVOLVER: &str = "ConvolverNode";
/// `DynamicsCompressorNode` type tag.
pub const DYNAMICS_COMPRESSOR: &str = "DynamicsCompressorNode";
/// `IIRFilterNode` type tag.
pub const IIR_FILTER: &str = "IIRFilterNode";
/// `PannerNode` type tag.
pub const PANNER: &str = "PannerNode";
/// `StereoPannerNode` type tag.
pub const STEREO_PANNER: &str = "StereoPannerNode";
/// `WaveShaperNode` type tag.
pub const WAVE_SHAPER: &str = "WaveShaperNode";

/// Catalog entry describing one node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeKindInfo {
    /// Builder function name in this module.
    pub builder: &'static str,
    /// Host type tag.
    pub type_tag: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Every node kind with a builder, in catalog order.
pub static NODE_KINDS: &[NodeKindInfo] = &[
    NodeKindInfo { builder: "oscillator", type_tag: OSCILLATOR, description: "Periodic waveform source" },
    NodeKindInfo { builder: "gain", type_tag: GAIN, description: "Volume control" },
    NodeKindInfo { builder: "dac", type_tag: AUDIO_DESTINATION, description: "Speaker output (the sink)" },
    NodeKindInfo { builder: "audio_buffer_source", type_tag: AUDIO_BUFFER_SOURCE, description: "Plays back an in-memory sample buffer" },
    NodeKindInfo { builder: "delay", type_tag: DELAY, description: "Variable delay line" },
    NodeKindInfo { builder: "channel_merger", type_tag: CHANNEL_MERGER, description: "Combines mono inputs into one multichannel output" },
    NodeKindInfo { builder: "channel_splitter", type_tag: CHANNEL_SPLITTER, description: "Splits a multichannel input into mono outputs" },
    NodeKindInfo { builder: "constant_source", type_tag: CONSTANT_SOURCE, description: "Constant signal, useful as a shared modulation offset" },
    NodeKindInfo { builder: "biquad_filter", type_tag: BIQUAD_FILTER, description: "Second-order filter (lowpass, highpass, peaking, ...)" },
    NodeKindInfo { builder: "convolver", type_tag: CONVOLVER, description: "Convolution with an impulse response" },
    NodeKindInfo { builder: "dynamics_compressor", type_tag: DYNAMICS_COMPRESSOR, description: "Dynamic range compressor" },
    NodeKindInfo { builder: "iir_filter", type_tag: IIR_FILTER, description: "General IIR filter from feedforward/feedback coefficients" },
    NodeKindInfo { builder: "panner", type_tag: PANNER, description: "3D spatial panner" },
    NodeKindInfo { builder: "stereo_panner", type_tag: STEREO_PANNER, description: "Equal-power stereo panner" },
    NodeKindInfo { builder: "wave_shaper", type_tag: WAVE_SHAPER, description: "Non-linear distortion from a transfer curve" },
];

/// Finds a catalog entry by builder name or type tag.
pub fn lookup(name: &str) -> Option<&'static NodeKindInfo> {
    NODE_KINDS
        .iter()
        .find(|k| k.builder.eq_ignore_ascii_case(name) || k.type_tag.eq_ignore_ascii_case(name))
}

/// Oscillator. Relevant params: `type_`, `frequency`, `detune`.
pub fn oscillator(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(OSCILLATOR, properties, connections)
}

/// Gain stage. Relevant params: `gain`.
pub fn gain(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(GAIN, properties, connections)
}

/// The audio destination: no properties, no connections.
pub fn dac() -> Node {
    node(AUDIO_DESTINATION, Vec::new(), Vec::new())
}

/// Alias for [`dac`].
pub fn audio_destination() -> Node {
    dac()
}

/// Buffer playback. Relevant params: `buffer`, `loop_`, `loop_start`, `loop_end`,
/// `playback_rate`, `detune`.
pub fn audio_buffer_source(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(AUDIO_BUFFER_SOURCE, properties, connections)
}

/// Delay line. Relevant params: `delay_time`.
pub fn delay(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(DELAY, properties, connections)
}

/// Channel merger.
pub fn channel_merger(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(CHANNEL_MERGER, properties, connections)
}

/// Channel splitter.
pub fn channel_splitter(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(CHANNEL_SPLITTER, properties, connections)
}

/// Constant source. Relevant params: `offset`.
pub fn constant_source(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(CONSTANT_SOURCE, properties, connections)
}

/// Biquad filter. Relevant params: `type_`, `frequency`, `detune`, `q`, `gain`.
pub fn biquad_filter(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(BIQUAD_FILTER, properties, connections)
}

/// Convolver. Relevant params: `buffer`, `normalize`.
pub fn convolver(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(CONVOLVER, properties, connections)
}

/// Compressor. Relevant params: `threshold`, `knee`, `ratio`, `attack`, `release`.
pub fn dynamics_compressor(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(DYNAMICS_COMPRESSOR, properties, connections)
}

/// IIR filter. Relevant params: `feedforward`, `feedback`.
pub fn iir_filter(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(IIR_FILTER, properties, connections)
}

/// 3D panner. Relevant params: `position_*`, `orientation_*`, `panning_model`,
/// `distance_model`, `ref_distance`, `max_distance`, `rolloff_factor`, `cone_*`.
pub fn panner(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(PANNER, properties, connections)
}

/// Stereo panner. Relevant params: `pan`.
pub fn stereo_panner(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(STEREO_PANNER, properties, connections)
}

/// Wave shaper. Relevant params: `curve`, `oversample`.
pub fn wave_shaper(properties: Vec<Property>, connections: Vec<Node>) -> Node {
    node(WAVE_SHAPER, properties, connections)
}
