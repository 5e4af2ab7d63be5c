// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec base abstraction and combinators.
//!
//! A [`Codec`] bundles a pure `encode` and `decode` function pair between a
//! typed value and the neutral [`Node`] tree. Combinators compose codecs for
//! primitives into codecs for complex domain objects:
//!
//! - [`primitives`] - Leaf codecs (bool, i64, f64, string, UUID)
//! - [`either`] - Two-way union with trial decode
//! - [`variants`] - Closed value sets keyed by a derived key
//! - [`list`] - List normalization (bare value as one-element list)
//! - [`dispatch`] - Per-entry value codec selection by map key
//! - [`field`] - Record field codecs, including error propagation
//! - [`validate`] - Post-decode / pre-encode checks
//!
//! Codecs are immutable and cheap to clone; both halves are shared behind
//! [`Arc`], so a codec built once can be reused concurrently for the life of
//! the process.

pub mod dispatch;
pub mod either;
pub mod field;
pub mod list;
pub mod primitives;
pub mod validate;
pub mod variants;

use std::sync::Arc;

use crate::core::{Node, NodeKind, Result};
use crate::CodecError;

pub use dispatch::dispatch_by_map_key;
pub use either::Either;
pub use field::FieldCodec;
pub use list::{array_or_unit, list_or_unit, list_to_array};
pub use validate::{validate, validate_with};
pub use variants::{keyed_variants, string_variants};

type EncodeFn<T> = dyn Fn(&T) -> Result<Node> + Send + Sync;
type DecodeFn<T> = dyn Fn(&Node) -> Result<T> + Send + Sync;

/// Bidirectional converter between a typed value and a [`Node`] tree.
///
/// A codec is an immutable pair of pure functions with no shared state;
/// encode and decode depend only on their input. Cloning is cheap (two
/// `Arc` bumps) and a shared codec is safe to use from multiple threads
/// without synchronization.
pub struct Codec<T> {
    encode: Arc<EncodeFn<T>>,
    decode: Arc<DecodeFn<T>>,
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> Codec<T> {
    /// Create a codec from an encode/decode function pair.
    pub fn new(
        encode: impl Fn(&T) -> Result<Node> + Send + Sync + 'static,
        decode: impl Fn(&Node) -> Result<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    /// Encode a value into a node.
    pub fn encode(&self, value: &T) -> Result<Node> {
        (self.encode)(value)
    }

    /// Decode a value from a node.
    pub fn decode(&self, node: &Node) -> Result<T> {
        (self.decode)(node)
    }
}

impl<T: 'static> Codec<T> {
    /// Map this codec to another type with an infallible conversion pair.
    ///
    /// Failures can only originate from the underlying codec.
    pub fn xmap<U: 'static>(
        &self,
        to: impl Fn(T) -> U + Send + Sync + 'static,
        from: impl Fn(&U) -> T + Send + Sync + 'static,
    ) -> Codec<U> {
        let enc = self.clone();
        let dec = self.clone();
        Codec::new(
            move |value: &U| enc.encode(&from(value)),
            move |node: &Node| dec.decode(node).map(|value| to(value)),
        )
    }

    /// Map this codec to another type where either direction may fail.
    pub fn flat_xmap<U: 'static>(
        &self,
        to: impl Fn(T) -> Result<U> + Send + Sync + 'static,
        from: impl Fn(&U) -> Result<T> + Send + Sync + 'static,
    ) -> Codec<U> {
        let enc = self.clone();
        let dec = self.clone();
        Codec::new(
            move |value: &U| enc.encode(&from(value)?),
            move |node: &Node| to(dec.decode(node)?),
        )
    }

    /// Map this codec to another type where only the decode direction may
    /// fail.
    ///
    /// This is the shape used by parsed leaf values: the typed form always
    /// renders back, but not every raw value parses.
    pub fn comap_flat_map<U: 'static>(
        &self,
        to: impl Fn(T) -> Result<U> + Send + Sync + 'static,
        from: impl Fn(&U) -> T + Send + Sync + 'static,
    ) -> Codec<U> {
        let enc = self.clone();
        let dec = self.clone();
        Codec::new(
            move |value: &U| enc.encode(&from(value)),
            move |node: &Node| to(dec.decode(node)?),
        )
    }

    /// Build a codec for a homogeneous list of this codec's type.
    ///
    /// Decode requires a list node and decodes every element; the first
    /// element failure aborts the whole decode.
    pub fn list_of(&self) -> Codec<Vec<T>> {
        let enc = self.clone();
        let dec = self.clone();
        Codec::new(
            move |values: &Vec<T>| {
                let items = values
                    .iter()
                    .map(|value| enc.encode(value))
                    .collect::<Result<Vec<Node>>>()?;
                Ok(Node::List(items))
            },
            move |node: &Node| match node {
                Node::List(items) => items.iter().map(|item| dec.decode(item)).collect(),
                other => Err(CodecError::shape_mismatch(NodeKind::List, other.kind())),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::primitives;

    #[test]
    fn test_xmap_round_trip() {
        let codec = primitives::int64().xmap(|n| n * 2, |n: &i64| n / 2);
        let node = codec.encode(&10).unwrap();
        assert_eq!(node, Node::Int(5));
        assert_eq!(codec.decode(&node).unwrap(), 10);
    }

    #[test]
    fn test_flat_xmap_decode_failure() {
        let codec = primitives::string().flat_xmap(
            |s: String| {
                s.parse::<i64>()
                    .map_err(|e| CodecError::malformed("numeric string", e.to_string()))
            },
            |n: &i64| Ok(n.to_string()),
        );

        assert_eq!(codec.decode(&Node::string("42")).unwrap(), 42);
        let err = codec.decode(&Node::string("oops")).unwrap_err();
        assert!(matches!(err, CodecError::MalformedPrimitive { .. }));
    }

    #[test]
    fn test_flat_xmap_encode_failure() {
        let codec = primitives::int64().flat_xmap(
            |n| Ok(n),
            |n: &i64| {
                if *n >= 0 {
                    Ok(*n)
                } else {
                    Err(CodecError::message("negative"))
                }
            },
        );

        assert!(codec.encode(&1).is_ok());
        assert!(codec.encode(&-1).is_err());
    }

    #[test]
    fn test_list_of() {
        let codec = primitives::int64().list_of();
        let node = codec.encode(&vec![1, 2, 3]).unwrap();
        assert_eq!(
            node,
            Node::List(vec![Node::Int(1), Node::Int(2), Node::Int(3)])
        );
        assert_eq!(codec.decode(&node).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_of_rejects_scalar() {
        let codec = primitives::int64().list_of();
        let err = codec.decode(&Node::Int(5)).unwrap_err();
        assert_eq!(
            err,
            CodecError::shape_mismatch(NodeKind::List, NodeKind::Number)
        );
    }

    #[test]
    fn test_list_of_propagates_element_error() {
        let codec = primitives::int64().list_of();
        let node = Node::List(vec![Node::Int(1), Node::string("x")]);
        assert!(codec.decode(&node).is_err());
    }

    #[test]
    fn test_codec_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec<i64>>();
        assert_send_sync::<Codec<Vec<String>>>();
    }
}
