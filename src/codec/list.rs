// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! List-normalization combinator.
//!
//! Accepts both a sequence node and a bare value (as a one-element sequence)
//! on decode, and canonicalizes encode back to the bare form when the
//! sequence has exactly one element. The asymmetry keeps output minimal while
//! staying permissive on input.

use super::either::Either;
use super::Codec;

/// Build a codec for a sequence that also accepts a single bare value.
///
/// Decode attempts the sequence shape first, then falls back to decoding one
/// element and wrapping it. Encode emits the bare element for one-element
/// lists and a full sequence node otherwise, so re-encoding a decoded bare
/// value reproduces the bare form.
pub fn list_or_unit<T>(element: Codec<T>) -> Codec<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    Codec::either(element.list_of(), element).xmap(
        |either| either.map(|list| list, |unit| vec![unit]),
        |list: &Vec<T>| {
            if list.len() == 1 {
                Either::Right(list[0].clone())
            } else {
                Either::Left(list.clone())
            }
        },
    )
}

/// Convert a sequence codec into a boxed-slice codec.
///
/// The fixed-size-array carrier: the typed value is a `Box<[T]>` rather than
/// a growable `Vec<T>`.
pub fn list_to_array<T>(codec: Codec<Vec<T>>) -> Codec<Box<[T]>>
where
    T: Clone + Send + Sync + 'static,
{
    codec.xmap(Vec::into_boxed_slice, |array: &Box<[T]>| array.to_vec())
}

/// [`list_or_unit`] with a boxed-slice carrier.
pub fn array_or_unit<T>(element: Codec<T>) -> Codec<Box<[T]>>
where
    T: Clone + Send + Sync + 'static,
{
    list_to_array(list_or_unit(element))
}
