// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Neutral tree value type.
//!
//! Provides the format-agnostic node representation that every codec encodes
//! into and decodes from. Concrete representations (JSON and friends) convert
//! to and from this type, so representation pairs never need to know about
//! each other. All variants are serde-serializable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type alias for a map-shaped node's entry set.
pub type MapNode = BTreeMap<String, Node>;

/// Format-agnostic tree value.
///
/// This enum is the common shape underlying JSON, binary tag formats, and
/// similar self-describing trees: null, boolean, number, string, list, and
/// ordered-key map nodes.
///
/// # Design Principles
///
/// - **Owned types**: Uses owned `String` and `Vec` for clarity and simplicity
/// - **Neutral**: Carries no format-specific metadata, only shape and value
/// - **Deterministic maps**: `BTreeMap` keeps encoded map output stable
///
/// `Int` and `Float` are both number-kinded; [`Node::as_i64`] and
/// [`Node::as_f64`] coerce between them where the conversion is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Null value
    Null,

    /// Boolean
    Bool(bool),

    /// Integer number
    Int(i64),

    /// Floating-point number
    Float(f64),

    /// String (UTF-8)
    String(String),

    /// Sequence of values
    List(Vec<Node>),

    /// Ordered-key mapping from field name to value
    Map(MapNode),
}

/// Shape of a [`Node`], used in mismatch error messages.
///
/// `Int` and `Float` both report as `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Null node
    Null,
    /// Boolean node
    Bool,
    /// Integer or floating-point node
    Number,
    /// String node
    String,
    /// Sequence node
    List,
    /// Map node
    Map,
}

impl Node {
    // ========================================================================
    // Shape Inspection
    // ========================================================================

    /// Get the shape of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Int(_) | Node::Float(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::List(_) => NodeKind::List,
            Node::Map(_) => NodeKind::Map,
        }
    }

    /// Check if this node is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Check if this node is a number (integer or float).
    pub fn is_number(&self) -> bool {
        matches!(self, Node::Int(_) | Node::Float(_))
    }

    /// Check if this node is a sequence.
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Check if this node is map-shaped.
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Try to get the inner boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert this node to i64.
    ///
    /// Accepts `Int` directly and `Float` when the value is integral and in
    /// range for i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Int(v) => Some(*v),
            Node::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Try to convert this node to f64 (for number nodes only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Int(v) => Some(*v as f64),
            Node::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner sequence.
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the inner map entries.
    pub fn as_map(&self) -> Option<&MapNode> {
        match self {
            Node::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to get a mutable reference to the inner map entries.
    pub fn as_map_mut(&mut self) -> Option<&mut MapNode> {
        match self {
            Node::Map(entries) => Some(entries),
            _ => None,
        }
    }

    // ========================================================================
    // Convenience Constructors
    // ========================================================================

    /// Create a string node.
    pub fn string(value: impl Into<String>) -> Self {
        Node::String(value.into())
    }

    /// Create a list node from an iterator of nodes.
    pub fn list(items: impl IntoIterator<Item = Node>) -> Self {
        Node::List(items.into_iter().collect())
    }

    /// Create a map node from an iterator of entries.
    pub fn map(entries: impl IntoIterator<Item = (String, Node)>) -> Self {
        Node::Map(entries.into_iter().collect())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(v) => write!(f, "{v}"),
            Node::Int(v) => write!(f, "{v}"),
            Node::Float(v) => write!(f, "{v}"),
            Node::String(v) => write!(f, "\"{v}\""),
            Node::List(v) => write!(f, "[{} elements]", v.len()),
            Node::Map(v) => write!(f, "{{{} fields}}", v.len()),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Null => write!(f, "null"),
            NodeKind::Bool => write!(f, "bool"),
            NodeKind::Number => write!(f, "number"),
            NodeKind::String => write!(f, "string"),
            NodeKind::List => write!(f, "list"),
            NodeKind::Map => write!(f, "map"),
        }
    }
}
