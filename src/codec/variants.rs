// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Keyed-variant combinator for closed, finite value sets.
//!
//! Builds a reverse lookup table from derived key to value once at codec
//! construction time; decode is an O(1) lookup afterward. Encode applies the
//! key derivation directly and never consults the table, so it is total as
//! long as the key function is defined for every value of the type.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{trace, warn};

use super::{primitives, Codec};
use crate::core::CodecError;

/// Build a codec for a closed set of values keyed by a derived key.
///
/// Decoding a key with no registered variant fails with an unknown-variant
/// error naming the key; no default is ever substituted. Duplicate keys in
/// the value set are a caller error; the last value registered wins.
pub fn keyed_variants<A, K>(
    values: impl IntoIterator<Item = A>,
    key_of: impl Fn(&A) -> K + Send + Sync + 'static,
    key_codec: Codec<K>,
) -> Codec<A>
where
    A: Clone + Send + Sync + 'static,
    K: Eq + Hash + Clone + fmt::Display + Send + Sync + 'static,
{
    let mut by_key: HashMap<K, A> = HashMap::new();
    for value in values {
        let key = key_of(&value);
        if by_key.insert(key.clone(), value).is_some() {
            warn!(key = %key, "duplicate variant key, last value wins");
        }
    }
    trace!(entries = by_key.len(), "built variant lookup table");

    key_codec.comap_flat_map(
        move |key: K| {
            by_key
                .get(&key)
                .cloned()
                .ok_or_else(|| CodecError::unknown_variant(&key))
        },
        key_of,
    )
}

/// Specialization of [`keyed_variants`] over the plain string codec.
pub fn string_variants<A>(
    values: impl IntoIterator<Item = A>,
    name_of: impl Fn(&A) -> String + Send + Sync + 'static,
) -> Codec<A>
where
    A: Clone + Send + Sync + 'static,
{
    keyed_variants(values, name_of, primitives::string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Node;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Channel {
        Alpha,
        Beta,
        Gamma,
    }

    impl Channel {
        fn name(&self) -> String {
            match self {
                Channel::Alpha => "a".to_string(),
                Channel::Beta => "b".to_string(),
                Channel::Gamma => "c".to_string(),
            }
        }

        fn all() -> [Channel; 3] {
            [Channel::Alpha, Channel::Beta, Channel::Gamma]
        }
    }

    #[test]
    fn test_decode_known_key() {
        let codec = string_variants(Channel::all(), |c| c.name());
        assert_eq!(codec.decode(&Node::string("b")).unwrap(), Channel::Beta);
    }

    #[test]
    fn test_decode_unknown_key_names_it() {
        let codec = string_variants(Channel::all(), |c| c.name());
        let err = codec.decode(&Node::string("unknown")).unwrap_err();
        assert!(matches!(err, CodecError::UnknownVariant { .. }));
        assert_eq!(err.to_string(), "no variant with key 'unknown'");
    }

    #[test]
    fn test_encode_applies_key_directly() {
        let codec = string_variants(Channel::all(), |c| c.name());
        assert_eq!(codec.encode(&Channel::Gamma).unwrap(), Node::string("c"));
    }

    #[test]
    fn test_round_trip_all_variants() {
        let codec = string_variants(Channel::all(), |c| c.name());
        for variant in Channel::all() {
            let node = codec.encode(&variant).unwrap();
            assert_eq!(codec.decode(&node).unwrap(), variant);
        }
    }

    #[test]
    fn test_integer_keyed_variants() {
        let codec = keyed_variants(
            Channel::all(),
            |c| match c {
                Channel::Alpha => 0i64,
                Channel::Beta => 1,
                Channel::Gamma => 2,
            },
            crate::codec::primitives::int64(),
        );

        assert_eq!(codec.encode(&Channel::Beta).unwrap(), Node::Int(1));
        assert_eq!(codec.decode(&Node::Int(2)).unwrap(), Channel::Gamma);
        let err = codec.decode(&Node::Int(9)).unwrap_err();
        assert_eq!(err.to_string(), "no variant with key '9'");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let codec = keyed_variants(
            [Channel::Alpha, Channel::Beta],
            |_| "same".to_string(),
            primitives::string(),
        );
        assert_eq!(codec.decode(&Node::string("same")).unwrap(), Channel::Beta);
    }
}
