// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Two-way union combinator.
//!
//! [`Codec::either`] builds a codec over [`Either`] from two codecs. Decode
//! tries the left alternative first and falls back to the right; if both fail
//! the error names both attempts. Encode dispatches on the variant the caller
//! supplies, never by guessing.

use tracing::trace;

use super::Codec;
use crate::core::{CodecError, Node, Result};

/// Two-case union: exactly one of the alternatives holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left (canonical) alternative
    Left(L),
    /// The right alternative
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Collapse both alternatives into a single value.
    pub fn map<T>(self, left: impl FnOnce(L) -> T, right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(value) => left(value),
            Either::Right(value) => right(value),
        }
    }

    /// Check if this is the left alternative.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Get the left value, if present.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    /// Get the right value, if present.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }
}

impl<L: 'static, R: 'static> Codec<Either<L, R>> {
    /// Build a codec for a two-way union from two codecs.
    ///
    /// Decode attempts `left` first; on failure attempts `right`; if both
    /// fail, the combined error references both attempts. The right branch
    /// is never invoked when the left succeeds.
    pub fn either(left: Codec<L>, right: Codec<R>) -> Self {
        let left_enc = left.clone();
        let right_enc = right.clone();
        Codec::new(
            move |value: &Either<L, R>| match value {
                Either::Left(l) => left_enc.encode(l),
                Either::Right(r) => right_enc.encode(r),
            },
            move |node: &Node| -> Result<Either<L, R>> {
                let left_err = match left.decode(node) {
                    Ok(value) => return Ok(Either::Left(value)),
                    Err(err) => err,
                };
                trace!(error = %left_err, "left alternative failed, trying right");
                match right.decode(node) {
                    Ok(value) => Ok(Either::Right(value)),
                    Err(right_err) => Err(CodecError::either(&left_err, &right_err)),
                }
            },
        )
    }
}
