//! Node properties, audio params, and scheduled automation.
//!
//! A [`Property`] is one of three states:
//!
//! - [`Property::NodeProperty`]: static node configuration (a filter's `type`).
//! - [`Property::AudioParam`]: a connectable, time-varying parameter (`frequency`).
//! - [`Property::ScheduledUpdate`]: an automation instruction produced by
//!   scheduling one of the above.
//!
//! # Scheduling transitions
//!
//! | From | `set_value_at_time` | linear / exponential ramp |
//! |------|---------------------|---------------------------|
//! | NodeProperty(l, v) | unchanged | ScheduledUpdate(l, ramp, v, t) |
//! | AudioParam(l, v) | ScheduledUpdate(l, set, v, t) | ScheduledUpdate(l, ramp, v, t) |
//! | ScheduledUpdate(l, _, v, _) | ScheduledUpdate(l, set, v, t) | ScheduledUpdate(l, ramp, v, t) |
//!
//! Repeated scheduling overwrites method and time; the target stays the value
//! the property held before it was first scheduled.
//!
//! Times are seconds on the host's audio clock (measured from the moment the
//! host's context started), not wall-clock time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Value as Json, json};

use crate::value::Value;

/// Automation curve used by a [`ScheduledUpdate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledUpdateMethod {
    /// Jump to the target at the given time.
    SetValueAtTime,
    /// Ramp linearly from the previous event to the target, arriving at the given time.
    LinearRampToValueAtTime,
    /// Ramp exponentially from the previous event to the target, arriving at the given time.
    ExponentialRampToValueAtTime,
}

impl ScheduledUpdateMethod {
    /// All methods, in declaration order.
    pub const ALL: [ScheduledUpdateMethod; 3] = [
        ScheduledUpdateMethod::SetValueAtTime,
        ScheduledUpdateMethod::LinearRampToValueAtTime,
        ScheduledUpdateMethod::ExponentialRampToValueAtTime,
    ];

    /// Host method name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduledUpdateMethod::SetValueAtTime => "setValueAtTime",
            ScheduledUpdateMethod::LinearRampToValueAtTime => "linearRampToValueAtTime",
            ScheduledUpdateMethod::ExponentialRampToValueAtTime => "exponentialRampToValueAtTime",
        }
    }

    /// Parses a wire method name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

impl core::fmt::Display for ScheduledUpdateMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Automation instruction: move to `target` using `method`, at `time` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledUpdate {
    /// Automation curve.
    pub method: ScheduledUpdateMethod,
    /// Value the parameter should reach.
    pub target: Value,
    /// Host clock time in seconds.
    pub time: f64,
}

impl ScheduledUpdate {
    /// Encodes the `{method, target, time}` object.
    pub fn encode(&self) -> Json {
        json!({
            "method": self.method.as_str(),
            "target": self.target.encode(),
            "time": self.time,
        })
    }
}

/// A labelled property on a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// Static configuration.
    NodeProperty {
        /// Host property name.
        label: String,
        /// Configured value.
        value: Value,
    },
    /// Modulatable, schedulable parameter.
    AudioParam {
        /// Host parameter name.
        label: String,
        /// Immediate value.
        value: Value,
    },
    /// Automation event for the labelled parameter.
    ScheduledUpdate {
        /// Host parameter name.
        label: String,
        /// Method, target and time.
        update: ScheduledUpdate,
    },
}

/// Wire tag for [`Property::NodeProperty`].
pub const NODE_PROPERTY_TYPE: &str = "NodeProperty";
/// Wire tag for [`Property::AudioParam`].
pub const AUDIO_PARAM_TYPE: &str = "AudioParam";
/// Wire tag for [`Property::ScheduledUpdate`].
pub const SCHEDULED_UPDATE_TYPE: &str = "ScheduledUpdate";

/// Builds a static node property.
pub fn node_property(label: impl Into<String>, value: Value) -> Property {
    Property::NodeProperty {
        label: label.into(),
        value,
    }
}

/// Builds an audio param.
pub fn audio_param(label: impl Into<String>, value: Value) -> Property {
    Property::AudioParam {
        label: label.into(),
        value,
    }
}

/// Schedules `property` to jump to its current value at `time`.
///
/// A [`Property::NodeProperty`] is returned unchanged.
pub fn set_value_at_time(property: Property, time: f64) -> Property {
    property.set_value_at_time(time)
}

/// Schedules a linear ramp to the property's current value, arriving at `time`.
pub fn linear_ramp_to_value_at_time(property: Property, time: f64) -> Property {
    property.linear_ramp_to_value_at_time(time)
}

/// Schedules an exponential ramp to the property's current value, arriving at `time`.
pub fn exponential_ramp_to_value_at_time(property: Property, time: f64) -> Property {
    property.exponential_ramp_to_value_at_time(time)
}

impl Property {
    /// The host-side name of the property.
    pub fn label(&self) -> &str {
        match self {
            Property::NodeProperty { label, .. }
            | Property::AudioParam { label, .. }
            | Property::ScheduledUpdate { label, .. } => label,
        }
    }

    /// Wire tag of this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Property::NodeProperty { .. } => NODE_PROPERTY_TYPE,
            Property::AudioParam { .. } => AUDIO_PARAM_TYPE,
            Property::ScheduledUpdate { .. } => SCHEDULED_UPDATE_TYPE,
        }
    }

    /// The immediate value, or the scheduled target.
    pub fn value(&self) -> &Value {
        match self {
            Property::NodeProperty { value, .. } | Property::AudioParam { value, .. } => value,
            Property::ScheduledUpdate { update, .. } => &update.target,
        }
    }

    /// Applies one scheduling transition. See the module docs for the table.
    pub fn schedule(self, method: ScheduledUpdateMethod, time: f64) -> Property {
        match self {
            Property::NodeProperty { .. } if method == ScheduledUpdateMethod::SetValueAtTime => {
                self
            }
            Property::NodeProperty { label, value } | Property::AudioParam { label, value } => {
                Property::ScheduledUpdate {
                    label,
                    update: ScheduledUpdate {
                        method,
                        target: value,
                        time,
                    },
                }
            }
            Property::ScheduledUpdate { label, update } => Property::ScheduledUpdate {
                label,
                update: ScheduledUpdate {
                    method,
                    target: update.target,
                    time,
                },
            },
        }
    }

    /// See [`set_value_at_time`].
    pub fn set_value_at_time(self, time: f64) -> Property {
        self.schedule(ScheduledUpdateMethod::SetValueAtTime, time)
    }

    /// See [`linear_ramp_to_value_at_time`].
    pub fn linear_ramp_to_value_at_time(self, time: f64) -> Property {
        self.schedule(ScheduledUpdateMethod::LinearRampToValueAtTime, time)
    }

    /// See [`exponential_ramp_to_value_at_time`].
    pub fn exponential_ramp_to_value_at_time(self, time: f64) -> Property {
        self.schedule(ScheduledUpdateMethod::ExponentialRampToValueAtTime, time)
    }

    /// Encodes the property as a `{type, label, value}` object.
    pub fn encode(&self) -> Json {
        let value = match self {
            Property::NodeProperty { value, .. } | Property::AudioParam { value, .. } => {
                value.encode()
            }
            Property::ScheduledUpdate { update, .. } => update.encode(),
        };
        json!({
            "type": self.type_name(),
            "label": self.label(),
            "value": value,
        })
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Property {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        crate::decode::decode_property(&json).map_err(serde::de::Error::custom)
    }
}
