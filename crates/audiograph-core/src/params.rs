//! Named parameter helpers and the label classification table.
//!
//! Whether a label is an [`AudioParam`](crate::Property::AudioParam) or a
//! static [`NodeProperty`](crate::Property::NodeProperty) is a fact about the
//! host API, not something derivable from the name. [`PARAMS`] records that
//! fact for every label this crate knows, and each helper function below
//! builds its property accordingly:
//!
//! ```rust
//! use audiograph_core::Property;
//! use audiograph_core::params::{frequency, loop_};
//!
//! assert!(matches!(frequency(440.0), Property::AudioParam { .. }));
//! assert!(matches!(loop_(true), Property::NodeProperty { .. }));
//! ```
//!
//! The table is informational. Nothing in the model rejects a label that is
//! missing from it or a value of the wrong kind.

use crate::property::{Property, audio_param, node_property};
use crate::value::{Value, ValueKind};

/// How the host treats a labelled property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamClass {
    /// Static configuration.
    NodeProperty,
    /// Modulatable, schedulable parameter.
    AudioParam,
}

impl ParamClass {
    /// Builds a property of this class.
    pub fn property(self, label: impl Into<String>, value: Value) -> Property {
        match self {
            ParamClass::NodeProperty => node_property(label, value),
            ParamClass::AudioParam => audio_param(label, value),
        }
    }

    /// Wire tag of properties of this class.
    pub fn name(self) -> &'static str {
        match self {
            ParamClass::NodeProperty => crate::property::NODE_PROPERTY_TYPE,
            ParamClass::AudioParam => crate::property::AUDIO_PARAM_TYPE,
        }
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Helper function name in this module.
    pub name: &'static str,
    /// Host label written to the wire.
    pub label: &'static str,
    /// NodeProperty or AudioParam.
    pub class: ParamClass,
    /// Value kind the helper produces.
    pub value_kind: ValueKind,
    /// One-line description.
    pub description: &'static str,
}

/// Finds a table row by host label.
pub fn lookup(label: &str) -> Option<&'static ParamSpec> {
    PARAMS.iter().find(|p| p.label == label)
}

// Generates one helper per row plus the PARAMS table, so the two cannot drift.
macro_rules! param_table {
    ($( $name:ident => $label:literal, $class:ident, $kind:ident($ty:ty), $desc:literal; )*) => {
        $(
            #[doc = concat!("`", $label, "`: ", $desc)]
            pub fn $name(value: $ty) -> Property {
                ParamClass::$class.property($label, Value::from(value))
            }
        )*

        /// Every known label with its classification, sorted by helper name.
        pub static PARAMS: &[ParamSpec] = &[
            $(
                ParamSpec {
                    name: stringify!($name),
                    label: $label,
                    class: ParamClass::$class,
                    value_kind: ValueKind::$kind,
                    description: $desc,
                },
            )*
        ];
    };
}

param_table! {
    attack => "attack", AudioParam, Float(f64), "compressor attack time in seconds";
    buffer => "buffer", NodeProperty, FloatList(Vec<f64>), "sample data for buffer sources and convolvers";
    cone_inner_angle => "coneInnerAngle", NodeProperty, Float(f64), "panner cone inner angle in degrees";
    cone_outer_angle => "coneOuterAngle", NodeProperty, Float(f64), "panner cone outer angle in degrees";
    cone_outer_gain => "coneOuterGain", NodeProperty, Float(f64), "panner gain outside the outer cone";
    curve => "curve", NodeProperty, FloatList(Vec<f64>), "waveshaper transfer curve";
    delay_time => "delayTime", AudioParam, Float(f64), "delay in seconds";
    detune => "detune", AudioParam, Float(f64), "detune in cents";
    distance_model => "distanceModel", NodeProperty, String(&str), "panner distance model (linear, inverse, exponential)";
    feedback => "feedback", NodeProperty, FloatList(Vec<f64>), "IIR filter feedback coefficients";
    feedforward => "feedforward", NodeProperty, FloatList(Vec<f64>), "IIR filter feedforward coefficients";
    fft_size => "fftSize", NodeProperty, Int(i64), "analyser FFT size";
    frequency => "frequency", AudioParam, Float(f64), "frequency in Hz";
    gain => "gain", AudioParam, Float(f64), "linear gain, or filter gain in dB";
    knee => "knee", AudioParam, Float(f64), "compressor knee width in dB";
    loop_ => "loop", NodeProperty, Bool(bool), "whether a buffer source loops";
    loop_end => "loopEnd", NodeProperty, Float(f64), "loop end in seconds";
    loop_start => "loopStart", NodeProperty, Float(f64), "loop start in seconds";
    max_decibels => "maxDecibels", NodeProperty, Float(f64), "analyser upper range in dB";
    max_distance => "maxDistance", NodeProperty, Float(f64), "panner maximum distance";
    min_decibels => "minDecibels", NodeProperty, Float(f64), "analyser lower range in dB";
    normalize => "normalize", NodeProperty, Bool(bool), "whether a convolver normalizes its impulse response";
    offset => "offset", AudioParam, Float(f64), "constant source output value";
    orientation_x => "orientationX", AudioParam, Float(f64), "panner orientation x";
    orientation_y => "orientationY", AudioParam, Float(f64), "panner orientation y";
    orientation_z => "orientationZ", AudioParam, Float(f64), "panner orientation z";
    oversample => "oversample", NodeProperty, String(&str), "waveshaper oversampling (none, 2x, 4x)";
    pan => "pan", AudioParam, Float(f64), "stereo position from -1 (left) to 1 (right)";
    panning_model => "panningModel", NodeProperty, String(&str), "panner spatialization (equalpower, HRTF)";
    playback_rate => "playbackRate", AudioParam, Float(f64), "buffer playback speed";
    position_x => "positionX", AudioParam, Float(f64), "panner position x";
    position_y => "positionY", AudioParam, Float(f64), "panner position y";
    position_z => "positionZ", AudioParam, Float(f64), "panner position z";
    q => "Q", AudioParam, Float(f64), "filter quality factor";
    ratio => "ratio", AudioParam, Float(f64), "compressor ratio";
    ref_distance => "refDistance", NodeProperty, Float(f64), "panner reference distance";
    release => "release", AudioParam, Float(f64), "compressor release time in seconds";
    rolloff_factor => "rolloffFactor", NodeProperty, Float(f64), "panner rolloff factor";
    smoothing_time_constant => "smoothingTimeConstant", NodeProperty, Float(f64), "analyser averaging constant";
    threshold => "threshold", AudioParam, Float(f64), "compressor threshold in dB";
    type_ => "type", NodeProperty, String(&str), "node variant (oscillator waveform, filter response)";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{float, string};

    #[test]
    fn table_has_unique_labels_and_names() {
        for (i, a) in PARAMS.iter().enumerate() {
            for b in &PARAMS[i + 1..] {
                assert_ne!(a.label, b.label);
                assert_ne!(a.name, b.name);
            }
        }
        assert_eq!(PARAMS.len(), 41);
    }

    #[test]
    fn helpers_match_their_table_rows() {
        let samples = [
            frequency(440.0),
            gain(0.5),
            detune(-10.0),
            delay_time(0.3),
            pan(0.0),
            threshold(-24.0),
            q(1.0),
            buffer(vec![0.0, 1.0]),
            loop_(true),
            curve(vec![-1.0, 1.0]),
            type_("sine"),
            fft_size(2048),
            feedforward(vec![0.5]),
            normalize(false),
        ];
        for prop in samples {
            let spec = lookup(prop.label()).expect("helper label should be in PARAMS");
            assert_eq!(prop.type_name(), spec.class.name(), "label {}", spec.label);
            assert_eq!(prop.value().kind(), spec.value_kind, "label {}", spec.label);
        }
    }

    #[test]
    fn known_classifications() {
        assert_eq!(frequency(440.0), audio_param("frequency", float(440.0)));
        assert_eq!(type_("lowpass"), node_property("type", string("lowpass")));
        assert_eq!(q(0.7).label(), "Q");
        assert_eq!(lookup("loop").map(|p| p.class), Some(ParamClass::NodeProperty));
        assert_eq!(lookup("playbackRate").map(|p| p.class), Some(ParamClass::AudioParam));
    }

    #[test]
    fn unknown_label_is_not_in_table() {
        assert!(lookup("wetness").is_none());
    }

    #[test]
    fn class_builds_matching_variant() {
        assert!(matches!(
            ParamClass::AudioParam.property("x", float(1.0)),
            Property::AudioParam { .. }
        ));
        assert!(matches!(
            ParamClass::NodeProperty.property("x", float(1.0)),
            Property::NodeProperty { .. }
        ));
    }
}
