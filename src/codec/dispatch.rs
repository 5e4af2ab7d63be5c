// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dispatch-by-key map combinator.
//!
//! Builds a codec for a mapping whose value codec is chosen per entry based
//! on that entry's key, so the value shape is schema-dependent on the key
//! rather than fixed.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use super::Codec;
use crate::core::{CodecError, MapNode, Node, NodeKind, Result};

/// Build a codec for a map whose value codec is selected per key.
///
/// Decode requires a map-shaped node; each entry's key is decoded with
/// `key_codec`, then the entry's value is decoded with the codec selected by
/// `value_codec_for`. Encode is symmetric. Keys must encode to string nodes,
/// since map nodes are keyed by strings. Entries are processed independently
/// and the decoded mapping's iteration order is unspecified.
pub fn dispatch_by_map_key<K, V>(
    key_codec: Codec<K>,
    value_codec_for: impl Fn(&K) -> Codec<V> + Send + Sync + 'static,
) -> Codec<HashMap<K, V>>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: 'static,
{
    let key_enc = key_codec.clone();
    let select_enc = Arc::new(value_codec_for);
    let select_dec = Arc::clone(&select_enc);

    Codec::new(
        move |entries: &HashMap<K, V>| {
            let mut map = MapNode::new();
            for (key, value) in entries {
                let key_node = key_enc.encode(key)?;
                let name = match key_node {
                    Node::String(name) => name,
                    other => {
                        return Err(CodecError::shape_mismatch(NodeKind::String, other.kind()))
                    }
                };
                let value_node = (*select_enc)(key)
                    .encode(value)
                    .map_err(|e| CodecError::in_field(name.as_str(), e))?;
                map.insert(name, value_node);
            }
            Ok(Node::Map(map))
        },
        move |node: &Node| -> Result<HashMap<K, V>> {
            let map = match node {
                Node::Map(map) => map,
                other => return Err(CodecError::shape_mismatch(NodeKind::Map, other.kind())),
            };
            let mut entries = HashMap::with_capacity(map.len());
            for (name, value_node) in map {
                let key = key_codec
                    .decode(&Node::String(name.clone()))
                    .map_err(|e| CodecError::in_field(name.as_str(), e))?;
                let value = (*select_dec)(&key)
                    .decode(value_node)
                    .map_err(|e| CodecError::in_field(name.as_str(), e))?;
                entries.insert(key, value);
            }
            Ok(entries)
        },
    )
}
