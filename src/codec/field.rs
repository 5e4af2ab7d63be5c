// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Record field codecs.
//!
//! A [`FieldCodec`] encodes and decodes a single value against the entry set
//! of a map-shaped node, so several field codecs can cooperate on one record.
//! The propagating optional field is the load-bearing piece: it distinguishes
//! an absent field (default) from a present-but-malformed field (hard error),
//! where an ordinary optional field conflates the two.

use std::sync::Arc;

use super::Codec;
use crate::core::{CodecError, MapNode, Node, NodeKind, Result};

type FieldEncodeFn<T> = dyn Fn(&T, &mut MapNode) -> Result<()> + Send + Sync;
type FieldDecodeFn<T> = dyn Fn(&MapNode) -> Result<T> + Send + Sync;

/// Codec for one record field, operating on a map node's entries.
pub struct FieldCodec<T> {
    encode: Arc<FieldEncodeFn<T>>,
    decode: Arc<FieldDecodeFn<T>>,
}

impl<T> Clone for FieldCodec<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> FieldCodec<T> {
    /// Create a field codec from an encode/decode function pair.
    pub fn new(
        encode: impl Fn(&T, &mut MapNode) -> Result<()> + Send + Sync + 'static,
        decode: impl Fn(&MapNode) -> Result<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    /// Write this field's entry into a record under construction.
    pub fn encode(&self, value: &T, entries: &mut MapNode) -> Result<()> {
        (self.encode)(value, entries)
    }

    /// Read this field from a record's entries.
    pub fn decode(&self, entries: &MapNode) -> Result<T> {
        (self.decode)(entries)
    }
}

impl<T: 'static> FieldCodec<T> {
    /// Map this field codec to another type with an infallible pair.
    pub fn xmap<U: 'static>(
        &self,
        to: impl Fn(T) -> U + Send + Sync + 'static,
        from: impl Fn(&U) -> T + Send + Sync + 'static,
    ) -> FieldCodec<U> {
        let enc = self.clone();
        let dec = self.clone();
        FieldCodec::new(
            move |value: &U, entries: &mut MapNode| enc.encode(&from(value), entries),
            move |entries: &MapNode| dec.decode(entries).map(|value| to(value)),
        )
    }

    /// Lift this field codec into a full codec over a map-shaped node.
    pub fn codec(&self) -> Codec<T> {
        let enc = self.clone();
        let dec = self.clone();
        Codec::new(
            move |value: &T| {
                let mut entries = MapNode::new();
                enc.encode(value, &mut entries)?;
                Ok(Node::Map(entries))
            },
            move |node: &Node| match node {
                Node::Map(entries) => dec.decode(entries),
                other => Err(CodecError::shape_mismatch(NodeKind::Map, other.kind())),
            },
        )
    }
}

impl<T: 'static> Codec<T> {
    /// Decode this codec as a required record field.
    ///
    /// An absent field is a missing-field error; a present field that fails
    /// to decode reports the failure wrapped with the field name.
    pub fn field_of(&self, name: impl Into<String>) -> FieldCodec<T> {
        let name = name.into();
        let enc_name = name.clone();
        let enc = self.clone();
        let dec = self.clone();
        FieldCodec::new(
            move |value: &T, entries: &mut MapNode| {
                entries.insert(enc_name.clone(), enc.encode(value)?);
                Ok(())
            },
            move |entries: &MapNode| match entries.get(&name) {
                Some(node) => dec
                    .decode(node)
                    .map_err(|e| CodecError::in_field(name.as_str(), e)),
                None => Err(CodecError::missing_field(name.as_str())),
            },
        )
    }
}

impl<T: Clone + Send + Sync + 'static> Codec<T> {
    /// Decode this codec as a plain optional record field.
    ///
    /// Both an absent field and a malformed present field yield the default.
    /// Use [`propagating_optional_field`] when malformed input must surface
    /// as an error instead of being swallowed.
    pub fn optional_field_of(&self, name: impl Into<String>, default: T) -> FieldCodec<T> {
        let name = name.into();
        let enc_name = name.clone();
        let enc = self.clone();
        let dec = self.clone();
        FieldCodec::new(
            move |value: &T, entries: &mut MapNode| {
                entries.insert(enc_name.clone(), enc.encode(value)?);
                Ok(())
            },
            move |entries: &MapNode| {
                Ok(entries
                    .get(&name)
                    .and_then(|node| dec.decode(node).ok())
                    .unwrap_or_else(|| default.clone()))
            },
        )
    }
}

/// Decode an optional record field that propagates malformed input.
///
/// If `name` is absent, the default is produced (evaluated lazily, only when
/// actually needed). If present, the field is decoded with `codec`; a decode
/// failure propagates as an error wrapped with the field name, never as the
/// default. Encode always writes the field.
pub fn propagating_optional_field<T: 'static>(
    codec: Codec<T>,
    name: impl Into<String>,
    default: impl Fn() -> T + Send + Sync + 'static,
) -> FieldCodec<T> {
    let name = name.into();
    let enc_name = name.clone();
    let enc = codec.clone();
    FieldCodec::new(
        move |value: &T, entries: &mut MapNode| {
            entries.insert(enc_name.clone(), enc.encode(value)?);
            Ok(())
        },
        move |entries: &MapNode| match entries.get(&name) {
            Some(node) => codec
                .decode(node)
                .map_err(|e| CodecError::in_field(name.as_str(), e)),
            None => Ok(default()),
        },
    )
}

/// [`propagating_optional_field`] with an eagerly supplied default value.
pub fn propagating_optional_field_with<T>(
    codec: Codec<T>,
    name: impl Into<String>,
    default: T,
) -> FieldCodec<T>
where
    T: Clone + Send + Sync + 'static,
{
    propagating_optional_field(codec, name, move || default.clone())
}
