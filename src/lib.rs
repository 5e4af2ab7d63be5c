// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Treecodec
//!
//! Combinator library for bidirectional converters ("codecs") between
//! strongly-typed values and a generic, format-agnostic tree representation.
//!
//! This library provides a small composable algebra, organized by concern:
//! - **Core types** in [`core`] - the neutral [`Node`] tree and error taxonomy
//! - **Base abstraction** in [`codec`] - [`Codec`] with `xmap`/`flat_xmap`
//! - **Combinators** in [`codec`] submodules - either, keyed variants, list
//!   normalization, dispatch-by-key, field propagation, validation
//! - **Format bridging** in [`repr`] - lift representation-specific
//!   encode/decode pairs into the generic algebra
//!
//! ## Architecture
//!
//! Domain codecs are assembled by composing combinators; data flows from a
//! concrete tree node, through one or more combinator layers, into a typed
//! value (decode) or the reverse (encode). Every codec is an immutable,
//! reusable value that is safe to share across threads.
//!
//! ## Example: a closed enumeration keyed by name
//!
//! ```rust
//! use treecodec::codec::string_variants;
//! use treecodec::Node;
//!
//! # fn main() -> Result<(), treecodec::CodecError> {
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Quality {
//!     Low,
//!     High,
//! }
//!
//! let codec = string_variants([Quality::Low, Quality::High], |q| {
//!     match q {
//!         Quality::Low => "low".to_string(),
//!         Quality::High => "high".to_string(),
//!     }
//! });
//!
//! let node = codec.encode(&Quality::High)?;
//! assert_eq!(node, Node::string("high"));
//! assert_eq!(codec.decode(&node)?, Quality::High);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use self::core::{CodecError, MapNode, Node, NodeKind, Result};

// Codec base abstraction and combinators
pub mod codec;

pub use codec::{
    array_or_unit, dispatch_by_map_key, keyed_variants, list_or_unit, list_to_array,
    string_variants, validate, validate_with, Codec, Either, FieldCodec,
};
pub use codec::field::{propagating_optional_field, propagating_optional_field_with};

// Format-bridging adapters
pub mod repr;

pub use repr::{with_compound, with_json, with_repr, JsonRepr, TreeRepr};
