// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Leaf codecs for primitive values.
//!
//! Each constructor returns a fresh codec value; since codecs are immutable
//! and cheaply cloned, callers typically build them once at startup and share
//! them.

use uuid::Uuid;

use super::Codec;
use crate::core::{CodecError, Node, NodeKind};

/// Codec for boolean nodes.
pub fn boolean() -> Codec<bool> {
    Codec::new(
        |value: &bool| Ok(Node::Bool(*value)),
        |node: &Node| {
            node.as_bool()
                .ok_or_else(|| CodecError::shape_mismatch(NodeKind::Bool, node.kind()))
        },
    )
}

/// Codec for integer nodes.
///
/// Decode accepts `Int` directly and `Float` when the value is integral;
/// a fractional or out-of-range float is a malformed primitive, not a shape
/// mismatch.
pub fn int64() -> Codec<i64> {
    Codec::new(
        |value: &i64| Ok(Node::Int(*value)),
        |node: &Node| match node.as_i64() {
            Some(value) => Ok(value),
            None if node.is_number() => Err(CodecError::malformed(
                "integer",
                format!("{node} is not representable as i64"),
            )),
            None => Err(CodecError::shape_mismatch(NodeKind::Number, node.kind())),
        },
    )
}

/// Codec for floating-point nodes. Decode accepts any number node.
pub fn float64() -> Codec<f64> {
    Codec::new(
        |value: &f64| Ok(Node::Float(*value)),
        |node: &Node| {
            node.as_f64()
                .ok_or_else(|| CodecError::shape_mismatch(NodeKind::Number, node.kind()))
        },
    )
}

/// Codec for string nodes.
pub fn string() -> Codec<String> {
    Codec::new(
        |value: &String| Ok(Node::String(value.clone())),
        |node: &Node| match node {
            Node::String(s) => Ok(s.clone()),
            other => Err(CodecError::shape_mismatch(NodeKind::String, other.kind())),
        },
    )
}

/// Codec for UUIDs round-tripped through their canonical string form.
pub fn uuid_string() -> Codec<Uuid> {
    string().comap_flat_map(
        |s: String| {
            Uuid::parse_str(&s).map_err(|e| CodecError::malformed("UUID string", e.to_string()))
        },
        |id: &Uuid| id.to_string(),
    )
}
