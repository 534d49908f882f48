//! Factory patches bundled with the audiograph library.
//!
//! Built-in patches that are always available without external files. They
//! cover the graph shapes the model exists for: a plain chain, modulation of
//! another node's parameter, a feedback cycle, and scheduled automation.

use crate::Patch;

/// Array of factory patch names for external access.
pub static FACTORY_PATCH_NAMES: &[&str] = &["sine", "tremolo", "feedback_delay", "filter_sweep"];

/// TOML content for factory patches.
///
/// These are embedded at compile time and always available.
static FACTORY_PATCHES_TOML: &[(&str, &str)] = &[
    ("sine", SINE_PATCH),
    ("tremolo", TREMOLO_PATCH),
    ("feedback_delay", FEEDBACK_DELAY_PATCH),
    ("filter_sweep", FILTER_SWEEP_PATCH),
];

/// Sine patch - one oscillator through a master gain.
const SINE_PATCH: &str = r#"
name = "Sine"
description = "A quiet 440 Hz sine through a master gain"

[[graph]]
key = "master"
type = "GainNode"
properties = [{ type = "AudioParam", label = "gain", value = 0.2 }]
connections = [{ type = "AudioDestinationNode", properties = [], connections = [] }]

[[graph]]
type = "OscillatorNode"
properties = [
    { type = "NodeProperty", label = "type", value = "sine" },
    { type = "AudioParam", label = "frequency", value = 440.0 },
]
connections = [{ key = "master", type = "RefNode" }]
"#;

/// Tremolo patch - an LFO modulating a gain param.
const TREMOLO_PATCH: &str = r#"
name = "Tremolo"
description = "A 5 Hz LFO modulating the gain of the carrier's amplifier"

[[graph]]
key = "amp"
type = "GainNode"
properties = [{ type = "AudioParam", label = "gain", value = 0.5 }]
connections = [{ type = "AudioDestinationNode", properties = [], connections = [] }]

[[graph]]
key = "carrier"
type = "OscillatorNode"
properties = [
    { type = "NodeProperty", label = "type", value = "triangle" },
    { type = "AudioParam", label = "frequency", value = 220.0 },
]
connections = [{ key = "amp", type = "RefNode" }]

[[graph]]
key = "lfo"
type = "OscillatorNode"
properties = [{ type = "AudioParam", label = "frequency", value = 5.0 }]

[[graph.connections]]
key = "depth"
type = "GainNode"
properties = [{ type = "AudioParam", label = "gain", value = 0.3 }]
connections = [{ key = "amp.gain", type = "RefNode" }]
"#;

/// Feedback delay patch - a delay feeding back into itself.
const FEEDBACK_DELAY_PATCH: &str = r#"
name = "Feedback Delay"
description = "A decaying square pluck into a delay line with a feedback loop"

[[graph]]
type = "OscillatorNode"
properties = [
    { type = "NodeProperty", label = "type", value = "square" },
    { type = "AudioParam", label = "frequency", value = 110.0 },
]

[[graph.connections]]
key = "envelope"
type = "GainNode"
properties = [
    { type = "AudioParam", label = "gain", value = 0.8 },
    { type = "ScheduledUpdate", label = "gain", value = { method = "exponentialRampToValueAtTime", target = 0.001, time = 0.5 } },
]
connections = [
    { key = "echo", type = "RefNode" },
    { type = "AudioDestinationNode", properties = [], connections = [] },
]

[[graph]]
key = "echo"
type = "DelayNode"
properties = [{ type = "AudioParam", label = "delayTime", value = 0.3 }]

[[graph.connections]]
type = "AudioDestinationNode"
properties = []
connections = []

[[graph.connections]]
key = "feedback"
type = "GainNode"
properties = [{ type = "AudioParam", label = "gain", value = 0.45 }]
connections = [{ key = "echo", type = "RefNode" }]
"#;

/// Filter sweep patch - scheduled automation on a lowpass cutoff.
const FILTER_SWEEP_PATCH: &str = r#"
name = "Filter Sweep"
description = "A sawtooth drone under a lowpass filter sweeping open over four seconds"

[[graph]]
type = "OscillatorNode"
properties = [
    { type = "NodeProperty", label = "type", value = "sawtooth" },
    { type = "AudioParam", label = "frequency", value = 55.0 },
]

[[graph.connections]]
key = "filter"
type = "BiquadFilterNode"
properties = [
    { type = "NodeProperty", label = "type", value = "lowpass" },
    { type = "AudioParam", label = "Q", value = 8.0 },
    { type = "ScheduledUpdate", label = "frequency", value = { method = "linearRampToValueAtTime", target = 4000.0, time = 4.0 } },
]
connections = [{ type = "AudioDestinationNode", properties = [], connections = [] }]
"#;

/// Get all factory patches.
///
/// # Example
///
/// ```rust
/// use audiograph_config::factory_patches;
///
/// for patch in &factory_patches() {
///     println!("  - {}: {}", patch.name, patch.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_patches() -> Vec<Patch> {
    FACTORY_PATCHES_TOML
        .iter()
        .filter_map(|(_, toml)| Patch::from_toml(toml).ok())
        .collect()
}

/// Get a factory patch by name.
///
/// Matches the internal name (`feedback_delay`) or the display name
/// (`Feedback Delay`), case-insensitively.
pub fn get_factory_patch(name: &str) -> Option<Patch> {
    FACTORY_PATCHES_TOML
        .iter()
        .filter_map(|(id, toml)| Patch::from_toml(toml).ok().map(|p| (id, p)))
        .find(|(id, patch)| id.eq_ignore_ascii_case(name) || patch.name.eq_ignore_ascii_case(name))
        .map(|(_, patch)| patch)
}

/// Get the internal names of all factory patches.
pub fn factory_patch_names() -> Vec<&'static str> {
    FACTORY_PATCHES_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name refers to a factory patch.
///
/// ```rust
/// use audiograph_config::is_factory_patch;
///
/// assert!(is_factory_patch("tremolo"));
/// assert!(is_factory_patch("Filter Sweep"));
/// assert!(!is_factory_patch("my_patch"));
/// ```
pub fn is_factory_patch(name: &str) -> bool {
    get_factory_patch(name).is_some()
}
