// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON-shaped tree representation.
//!
//! Bridges `serde_json::Value` and the neutral [`Node`]. Conversions are
//! lossless except for non-finite floats (JSON cannot represent them) and
//! JSON numbers outside the i64/f64 range.

use serde_json::Value;

use super::{with_repr, TreeRepr};
use crate::codec::Codec;
use crate::core::{CodecError, Node, Result};

/// The JSON-shaped representation.
pub struct JsonRepr;

impl TreeRepr for JsonRepr {
    type Value = Value;

    fn from_node(node: &Node) -> Result<Value> {
        match node {
            Node::Null => Ok(Value::Null),
            Node::Bool(v) => Ok(Value::Bool(*v)),
            Node::Int(v) => Ok(Value::from(*v)),
            Node::Float(v) => serde_json::Number::from_f64(*v)
                .map(Value::Number)
                .ok_or_else(|| {
                    CodecError::malformed("JSON number", format!("{v} is not a finite float"))
                }),
            Node::String(s) => Ok(Value::String(s.clone())),
            Node::List(items) => items
                .iter()
                .map(Self::from_node)
                .collect::<Result<Vec<Value>>>()
                .map(Value::Array),
            Node::Map(entries) => entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), Self::from_node(value)?)))
                .collect::<Result<serde_json::Map<String, Value>>>()
                .map(Value::Object),
        }
    }

    fn to_node(value: &Value) -> Result<Node> {
        match value {
            Value::Null => Ok(Node::Null),
            Value::Bool(v) => Ok(Node::Bool(*v)),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Node::Int(v))
                } else if let Some(v) = n.as_f64() {
                    Ok(Node::Float(v))
                } else {
                    Err(CodecError::malformed(
                        "number",
                        format!("JSON number {n} is out of range"),
                    ))
                }
            }
            Value::String(s) => Ok(Node::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::to_node)
                .collect::<Result<Vec<Node>>>()
                .map(Node::List),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), Self::to_node(value)?)))
                .collect::<Result<crate::core::MapNode>>()
                .map(Node::Map),
        }
    }
}

/// Lift a JSON-flavored encode/decode pair into a generic codec.
///
/// The hand-written functions speak `serde_json::Value`; the returned codec
/// speaks neutral nodes and participates in the full algebra.
pub fn with_json<T>(
    encode: impl Fn(&T) -> Value + Send + Sync + 'static,
    decode: impl Fn(&Value) -> Result<T> + Send + Sync + 'static,
) -> Codec<T> {
    with_repr::<JsonRepr, T>(encode, decode)
}
