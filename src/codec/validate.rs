// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Validation combinator.
//!
//! Wraps a codec with a check applied symmetrically: after decode and before
//! encode. An invalid value already held in memory cannot re-serialize
//! without the same check firing.

use std::sync::Arc;

use super::Codec;
use crate::core::{CodecError, Result};

/// Wrap a codec with a result-producing check.
///
/// The check runs on every decoded value and on every value about to be
/// encoded; on success the value passes through unchanged.
pub fn validate<T>(
    codec: Codec<T>,
    check: impl Fn(T) -> Result<T> + Send + Sync + 'static,
) -> Codec<T>
where
    T: Clone + Send + Sync + 'static,
{
    let check = Arc::new(check);
    let decode_check = Arc::clone(&check);
    codec.flat_xmap(
        move |value| (*decode_check)(value),
        move |value: &T| (*check)(value.clone()),
    )
}

/// Wrap a codec with a predicate check failing with the given message.
pub fn validate_with<T>(
    codec: Codec<T>,
    predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    message: impl Into<String>,
) -> Codec<T>
where
    T: Clone + Send + Sync + 'static,
{
    let message = message.into();
    validate(codec, move |value| {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(CodecError::validation(message.clone()))
        }
    })
}
