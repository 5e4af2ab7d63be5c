// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Combinator algebra integration tests.
//!
//! Tests cover:
//! - Round-trip law across composed codec stacks
//! - Either decode order and combined failure reporting
//! - Variant lookup against unknown keys
//! - List normalization asymmetry
//! - Field propagation of malformed-but-present values
//! - Dispatch-by-key schema selection
//! - Validation symmetry between decode and encode

use std::collections::HashMap;

use treecodec::codec::primitives;
use treecodec::{
    dispatch_by_map_key, list_or_unit, propagating_optional_field_with, string_variants,
    validate_with, Codec, CodecError, Either, MapNode, Node,
};

// ============================================================================
// Domain Fixtures
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Rarity {
    Common,
    Rare,
    Epic,
}

impl Rarity {
    fn name(&self) -> String {
        match self {
            Rarity::Common => "common".to_string(),
            Rarity::Rare => "rare".to_string(),
            Rarity::Epic => "epic".to_string(),
        }
    }

    fn all() -> [Rarity; 3] {
        [Rarity::Common, Rarity::Rare, Rarity::Epic]
    }
}

fn rarity_codec() -> Codec<Rarity> {
    string_variants(Rarity::all(), |r| r.name())
}

/// An item reference that accepts either a full record or a bare identifier
/// shorthand, collapsing to the record form on encode.
#[derive(Debug, Clone, PartialEq)]
struct ItemRef {
    id: String,
    count: i64,
}

fn item_record_codec() -> Codec<ItemRef> {
    let id_field = primitives::string().field_of("id");
    let count_field = propagating_optional_field_with(primitives::int64(), "count", 1);

    Codec::new(
        move |item: &ItemRef| {
            let mut entries = MapNode::new();
            id_field.encode(&item.id, &mut entries)?;
            count_field.encode(&item.count, &mut entries)?;
            Ok(Node::Map(entries))
        },
        {
            let id_field = primitives::string().field_of("id");
            let count_field = propagating_optional_field_with(primitives::int64(), "count", 1);
            move |node: &Node| {
                let entries = node.as_map().ok_or_else(|| {
                    CodecError::shape_mismatch(treecodec::NodeKind::Map, node.kind())
                })?;
                Ok(ItemRef {
                    id: id_field.decode(entries)?,
                    count: count_field.decode(entries)?,
                })
            }
        },
    )
}

/// Record-or-shorthand: a bare string decodes as a single item with count 1,
/// and encode always emits the canonical record form.
fn item_ref_codec() -> Codec<ItemRef> {
    Codec::either(item_record_codec(), primitives::string()).xmap(
        |either| {
            either.map(
                |item| item,
                |id| ItemRef { id, count: 1 },
            )
        },
        |item: &ItemRef| Either::Left(item.clone()),
    )
}

// ============================================================================
// Round-Trip Law
// ============================================================================

#[test]
fn test_round_trip_variants() {
    let codec = rarity_codec();
    for rarity in Rarity::all() {
        let node = codec.encode(&rarity).unwrap();
        assert_eq!(codec.decode(&node).unwrap(), rarity);
    }
}

#[test]
fn test_round_trip_composed_record() {
    let codec = item_ref_codec();
    let item = ItemRef {
        id: "torch".to_string(),
        count: 4,
    };
    let node = codec.encode(&item).unwrap();
    assert_eq!(codec.decode(&node).unwrap(), item);
}

#[test]
fn test_round_trip_list_or_unit_is_stable() {
    // After one decode/encode cycle the output shape is canonical and stays
    // fixed under further cycles.
    let codec = list_or_unit(primitives::int64());
    let first = codec.decode(&Node::List(vec![Node::Int(5)])).unwrap();
    let canonical = codec.encode(&first).unwrap();
    assert_eq!(canonical, Node::Int(5));

    let second = codec.decode(&canonical).unwrap();
    assert_eq!(codec.encode(&second).unwrap(), canonical);
}

// ============================================================================
// Either Collapse
// ============================================================================

#[test]
fn test_shorthand_decodes_to_full_record() {
    let codec = item_ref_codec();
    let decoded = codec.decode(&Node::string("torch")).unwrap();
    assert_eq!(
        decoded,
        ItemRef {
            id: "torch".to_string(),
            count: 1,
        }
    );
}

#[test]
fn test_shorthand_reencodes_as_canonical_record() {
    let codec = item_ref_codec();
    let decoded = codec.decode(&Node::string("torch")).unwrap();
    let node = codec.encode(&decoded).unwrap();
    assert!(node.is_map(), "expected canonical record form, got {node}");
}

#[test]
fn test_both_alternatives_failing_reports_both() {
    let codec = item_ref_codec();
    let err = codec.decode(&Node::Int(3)).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("both alternatives failed"), "{text}");
}

// ============================================================================
// Variant Lookup
// ============================================================================

#[test]
fn test_unknown_variant_key_names_the_key() {
    let codec = rarity_codec();
    let err = codec.decode(&Node::string("legendary")).unwrap_err();
    assert_eq!(err, CodecError::unknown_variant("legendary"));
    assert_eq!(err.to_string(), "no variant with key 'legendary'");
}

#[test]
fn test_known_variant_key_decodes() {
    let codec = rarity_codec();
    assert_eq!(codec.decode(&Node::string("rare")).unwrap(), Rarity::Rare);
}

// ============================================================================
// List Normalization
// ============================================================================

#[test]
fn test_one_element_list_encodes_bare() {
    let codec = list_or_unit(primitives::int64());
    assert_eq!(codec.encode(&vec![5]).unwrap(), Node::Int(5));
}

#[test]
fn test_two_element_list_encodes_sequence() {
    let codec = list_or_unit(primitives::int64());
    assert_eq!(
        codec.encode(&vec![5, 6]).unwrap(),
        Node::List(vec![Node::Int(5), Node::Int(6)])
    );
}

#[test]
fn test_bare_scalar_decodes_to_singleton() {
    let codec = list_or_unit(primitives::int64());
    assert_eq!(codec.decode(&Node::Int(5)).unwrap(), vec![5]);
    assert_eq!(
        codec.decode(&Node::List(vec![Node::Int(5)])).unwrap(),
        vec![5]
    );
}

// ============================================================================
// Field Propagation
// ============================================================================

#[test]
fn test_absent_field_yields_default() {
    let codec = item_record_codec();
    let node = Node::map([("id".to_string(), Node::string("torch"))]);
    assert_eq!(codec.decode(&node).unwrap().count, 1);
}

#[test]
fn test_malformed_field_propagates_error() {
    let codec = item_record_codec();
    let node = Node::map([
        ("id".to_string(), Node::string("torch")),
        ("count".to_string(), Node::string("oops")),
    ]);

    let err = codec.decode(&node).unwrap_err();
    assert!(
        err.to_string().starts_with("in field 'count'"),
        "expected propagated field error, got: {err}"
    );
}

// ============================================================================
// Dispatch by Map Key
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Stat {
    Level,
    Title,
}

fn stat_map_codec() -> Codec<HashMap<Stat, Either<i64, String>>> {
    let key_codec = string_variants([Stat::Level, Stat::Title], |s| {
        match s {
            Stat::Level => "a".to_string(),
            Stat::Title => "b".to_string(),
        }
    });
    dispatch_by_map_key(key_codec, |key: &Stat| -> Codec<Either<i64, String>> {
        match key {
            Stat::Level => primitives::int64().xmap(Either::Left, |v| match v {
                Either::Left(n) => *n,
                Either::Right(_) => 0,
            }),
            Stat::Title => primitives::string().xmap(Either::Right, |v| match v {
                Either::Right(s) => s.clone(),
                Either::Left(_) => String::new(),
            }),
        }
    })
}

#[test]
fn test_dispatch_decodes_per_key_schema() {
    let codec = stat_map_codec();
    let node = Node::map([
        ("a".to_string(), Node::Int(1)),
        ("b".to_string(), Node::string("x")),
    ]);

    let decoded = codec.decode(&node).unwrap();
    assert_eq!(decoded[&Stat::Level], Either::Left(1));
    assert_eq!(decoded[&Stat::Title], Either::Right("x".to_string()));
}

#[test]
fn test_dispatch_shape_mismatch_for_key() {
    let codec = stat_map_codec();
    let node = Node::map([("a".to_string(), Node::string("x"))]);

    let err = codec.decode(&node).unwrap_err();
    match err {
        CodecError::FieldError { field, cause } => {
            assert_eq!(field, "a");
            assert!(matches!(*cause, CodecError::ShapeMismatch { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validation_decode_failure_message() {
    let codec = validate_with(primitives::int64(), |n| *n >= 0, "must be non-negative");
    let err = codec.decode(&Node::Int(-1)).unwrap_err();
    assert_eq!(err.to_string(), "must be non-negative");
}

#[test]
fn test_validation_round_trip() {
    let codec = validate_with(primitives::int64(), |n| *n >= 0, "must be non-negative");
    let node = Node::Int(3);
    let value = codec.decode(&node).unwrap();
    assert_eq!(value, 3);
    assert_eq!(codec.encode(&value).unwrap(), node);
}

#[test]
fn test_validation_composes_with_fields() {
    let checked = validate_with(primitives::int64(), |n| *n > 0, "count must be positive");
    let field = propagating_optional_field_with(checked, "count", 1);

    let entries: MapNode = [("count".to_string(), Node::Int(0))].into_iter().collect();
    let err = field.decode(&entries).unwrap_err();
    assert_eq!(
        err.to_string(),
        "in field 'count': count must be positive"
    );
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_shared_codec_across_threads() {
    let codec = item_ref_codec();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let codec = codec.clone();
            std::thread::spawn(move || {
                let item = ItemRef {
                    id: format!("item_{i}"),
                    count: i,
                };
                let node = codec.encode(&item).unwrap();
                assert_eq!(codec.decode(&node).unwrap(), item);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
