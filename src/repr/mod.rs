// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format-bridging adapters.
//!
//! Hand-written encode/decode logic is usually written against one concrete
//! tree representation (JSON-shaped, a binary tag format, ...). The
//! [`TreeRepr`] contract lifts such logic into the generic algebra: every
//! representation converts to and from the neutral [`Node`], so a function
//! written for representation A can decode input arriving as representation
//! B by rendering through the common node shape. Representation pairs never
//! need to know about each other.

pub mod json;

use crate::codec::Codec;
use crate::core::{CodecError, MapNode, Node, Result};

pub use json::{with_json, JsonRepr};

/// Tree representation contract.
///
/// A concrete representation supplies lossless-where-possible conversions
/// between its own value type and the neutral [`Node`]. Conversions are
/// fallible because some representations cannot express every node (for
/// example, JSON has no non-finite floats).
pub trait TreeRepr {
    /// The representation's own tree value type.
    type Value;

    /// Render a neutral node as this representation's value.
    fn from_node(node: &Node) -> Result<Self::Value>;

    /// Convert this representation's value into a neutral node.
    fn to_node(value: &Self::Value) -> Result<Node>;
}

/// Lift a representation-specific encode/decode pair into a generic codec.
///
/// `encode` and `decode` speak representation `R`; the returned codec speaks
/// neutral nodes and so composes with every other combinator. Decoding
/// renders the incoming node through `R`'s value type first, then applies
/// the `R`-flavored function.
pub fn with_repr<R, T>(
    encode: impl Fn(&T) -> R::Value + Send + Sync + 'static,
    decode: impl Fn(&R::Value) -> Result<T> + Send + Sync + 'static,
) -> Codec<T>
where
    R: TreeRepr + 'static,
{
    Codec::new(
        move |value: &T| R::to_node(&encode(value)),
        move |node: &Node| decode(&R::from_node(node)?),
    )
}

/// Lift a compound-node encode/decode pair into a generic codec.
///
/// Convenience for the record-merging pattern: encode receives a fresh
/// map-shaped build target to fill in, decode receives the backing entries
/// and produces the value. Decoding a node that is not map-shaped fails
/// with "expected compound node".
pub fn with_compound<T>(
    encode: impl Fn(&T, &mut MapNode) + Send + Sync + 'static,
    decode: impl Fn(&MapNode) -> Result<T> + Send + Sync + 'static,
) -> Codec<T> {
    Codec::new(
        move |value: &T| {
            let mut entries = MapNode::new();
            encode(value, &mut entries);
            Ok(Node::Map(entries))
        },
        move |node: &Node| match node {
            Node::Map(entries) => decode(entries),
            _ => Err(CodecError::message("expected compound node")),
        },
    )
}
