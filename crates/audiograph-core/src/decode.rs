//! Decoding the wire format back into the model.
//!
//! The inverse of the `encode` functions. Decoding checks shape only:
//! required fields, JSON types, known property tags and method names. It
//! does not check key uniqueness, that references resolve, or that labels
//! suit their node type.
//!
//! JSON integers decode to [`Value::Int`] and other numbers to
//! [`Value::Float`], so a float that happens to be integral on the wire (as
//! some serializers write it) comes back as an int.

use serde_json::{Map, Value as Json};

use crate::error::{DecodeError, DecodeErrorKind};
use crate::graph::Graph;
use crate::node::{Node, REF_NODE_TYPE};
use crate::property::{
    AUDIO_PARAM_TYPE, NODE_PROPERTY_TYPE, Property, SCHEDULED_UPDATE_TYPE, ScheduledUpdate,
    ScheduledUpdateMethod,
};
use crate::value::Value;

/// Root path used in error messages.
const ROOT: &str = "$";

fn json_type(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

fn as_object<'a>(json: &'a Json, path: &str) -> Result<&'a Map<String, Json>, DecodeError> {
    json.as_object()
        .ok_or_else(|| DecodeError::wrong_type(path, "object", json_type(json)))
}

fn field<'a>(
    obj: &'a Map<String, Json>,
    name: &'static str,
    path: &str,
) -> Result<&'a Json, DecodeError> {
    obj.get(name)
        .ok_or_else(|| DecodeError::missing_field(path, name))
}

fn str_field<'a>(
    obj: &'a Map<String, Json>,
    name: &'static str,
    path: &str,
) -> Result<&'a str, DecodeError> {
    let json = field(obj, name, path)?;
    json.as_str()
        .ok_or_else(|| DecodeError::wrong_type(format!("{path}.{name}"), "string", json_type(json)))
}

fn array_field<'a>(
    obj: &'a Map<String, Json>,
    name: &'static str,
    path: &str,
) -> Result<&'a [Json], DecodeError> {
    let json = field(obj, name, path)?;
    json.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| DecodeError::wrong_type(format!("{path}.{name}"), "array", json_type(json)))
}

/// Decodes an encoded graph (a JSON array of nodes).
pub fn decode_graph(json: &Json) -> Result<Graph, DecodeError> {
    let roots = json
        .as_array()
        .ok_or_else(|| DecodeError::wrong_type(ROOT, "array", json_type(json)))?;
    let graph = roots
        .iter()
        .enumerate()
        .map(|(i, n)| node_at(n, &format!("{ROOT}[{i}]")))
        .collect::<Result<Graph, _>>()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(roots = graph.len(), "decode_graph");

    Ok(graph)
}

/// Decodes a single encoded node.
pub fn decode_node(json: &Json) -> Result<Node, DecodeError> {
    node_at(json, ROOT)
}

/// Decodes a single encoded property.
pub fn decode_property(json: &Json) -> Result<Property, DecodeError> {
    property_at(json, ROOT)
}

/// Decodes a property value.
pub fn decode_value(json: &Json) -> Result<Value, DecodeError> {
    value_at(json, ROOT)
}

fn node_at(json: &Json, path: &str) -> Result<Node, DecodeError> {
    let obj = as_object(json, path)?;
    let kind = str_field(obj, "type", path)?;

    if kind == REF_NODE_TYPE {
        let key = str_field(obj, "key", path)?;
        return Ok(Node::Reference {
            key: key.to_string(),
        });
    }

    let key = match obj.get("key") {
        None => None,
        Some(Json::String(k)) => Some(k.clone()),
        Some(other) => {
            return Err(DecodeError::wrong_type(
                format!("{path}.key"),
                "string",
                json_type(other),
            ));
        }
    };

    let properties = array_field(obj, "properties", path)?
        .iter()
        .enumerate()
        .map(|(i, p)| property_at(p, &format!("{path}.properties[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let connections = array_field(obj, "connections", path)?
        .iter()
        .enumerate()
        .map(|(i, c)| node_at(c, &format!("{path}.connections[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let kind = kind.to_string();
    Ok(match key {
        Some(key) => Node::Keyed {
            key,
            kind,
            properties,
            connections,
        },
        None => Node::Plain {
            kind,
            properties,
            connections,
        },
    })
}

fn property_at(json: &Json, path: &str) -> Result<Property, DecodeError> {
    let obj = as_object(json, path)?;
    let type_name = str_field(obj, "type", path)?;
    let label = str_field(obj, "label", path)?.to_string();
    let value = field(obj, "value", path)?;
    let value_path = format!("{path}.value");

    match type_name {
        NODE_PROPERTY_TYPE => Ok(Property::NodeProperty {
            label,
            value: value_at(value, &value_path)?,
        }),
        AUDIO_PARAM_TYPE => Ok(Property::AudioParam {
            label,
            value: value_at(value, &value_path)?,
        }),
        SCHEDULED_UPDATE_TYPE => Ok(Property::ScheduledUpdate {
            label,
            update: update_at(value, &value_path)?,
        }),
        other => Err(DecodeError::new(
            format!("{path}.type"),
            DecodeErrorKind::UnknownPropertyType(other.to_string()),
        )),
    }
}

fn update_at(json: &Json, path: &str) -> Result<ScheduledUpdate, DecodeError> {
    let obj = as_object(json, path)?;
    let method_name = str_field(obj, "method", path)?;
    let method = ScheduledUpdateMethod::from_name(method_name).ok_or_else(|| {
        DecodeError::new(
            format!("{path}.method"),
            DecodeErrorKind::UnknownMethod(method_name.to_string()),
        )
    })?;
    let target = value_at(field(obj, "target", path)?, &format!("{path}.target"))?;
    let time_json = field(obj, "time", path)?;
    let time = time_json.as_f64().ok_or_else(|| {
        DecodeError::wrong_type(format!("{path}.time"), "number", json_type(time_json))
    })?;

    Ok(ScheduledUpdate {
        method,
        target,
        time,
    })
}

fn value_at(json: &Json, path: &str) -> Result<Value, DecodeError> {
    match json {
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => Ok(match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::Int(i),
            (None, Some(f)) => Value::Float(f),
            (None, None) => {
                return Err(DecodeError::new(
                    path,
                    DecodeErrorKind::UnsupportedValue(n.to_string()),
                ));
            }
        }),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_f64().ok_or_else(|| {
                    DecodeError::wrong_type(format!("{path}[{i}]"), "number", json_type(item))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::FloatList),
        Json::Null | Json::Object(_) => Err(DecodeError::new(
            path,
            DecodeErrorKind::UnsupportedValue(json_type(json).to_string()),
        )),
    }
}
