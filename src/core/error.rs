// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for treecodec.
//!
//! Provides the error taxonomy shared by all codecs and combinators:
//! - Node shape mismatches
//! - Unknown variant keys
//! - Validation failures
//! - Malformed leaf values
//!
//! Every combinator surfaces the innermost failure unchanged or wraps it with
//! added context (for example a field name). Failures are always returned as
//! values, never raised as panics.

use std::fmt;

use super::node::NodeKind;

/// Errors that can occur while encoding or decoding through a codec.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Node is not the expected shape (e.g. expected map, got scalar)
    ShapeMismatch {
        /// Shape the codec required
        expected: NodeKind,
        /// Shape that was actually found
        actual: NodeKind,
    },

    /// Key lookup against a variant table found no match
    UnknownVariant {
        /// The key that failed to resolve
        key: String,
    },

    /// Post-decode / pre-encode check rejected the value
    ValidationFailure {
        /// Message supplied by the check
        message: String,
    },

    /// A leaf value could not parse into its typed form
    MalformedPrimitive {
        /// What the codec expected to parse
        expected: String,
        /// Why parsing failed
        message: String,
    },

    /// A record field was required but absent
    MissingField {
        /// Field name
        field: String,
    },

    /// Failure inside a named field or map entry, with the cause preserved
    FieldError {
        /// Field or entry name
        field: String,
        /// Underlying error
        cause: Box<CodecError>,
    },

    /// Both alternatives of an either codec failed
    EitherError {
        /// Failure message from the left alternative
        left: String,
        /// Failure message from the right alternative
        right: String,
    },

    /// Free-form failure from a caller-supplied encode/decode function
    Message(String),
}

impl CodecError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(expected: NodeKind, actual: NodeKind) -> Self {
        CodecError::ShapeMismatch { expected, actual }
    }

    /// Create an unknown variant error for the given key.
    pub fn unknown_variant(key: impl fmt::Display) -> Self {
        CodecError::UnknownVariant {
            key: key.to_string(),
        }
    }

    /// Create a validation failure with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        CodecError::ValidationFailure {
            message: message.into(),
        }
    }

    /// Create a malformed primitive error.
    pub fn malformed(expected: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::MalformedPrimitive {
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        CodecError::MissingField {
            field: field.into(),
        }
    }

    /// Wrap an error with the name of the field or entry it occurred in.
    pub fn in_field(field: impl Into<String>, cause: CodecError) -> Self {
        CodecError::FieldError {
            field: field.into(),
            cause: Box::new(cause),
        }
    }

    /// Create a combined error from two failed alternatives.
    pub fn either(left: &CodecError, right: &CodecError) -> Self {
        CodecError::EitherError {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Create a free-form error message.
    pub fn message(message: impl Into<String>) -> Self {
        CodecError::Message(message.into())
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} node, found {actual}")
            }
            CodecError::UnknownVariant { key } => {
                write!(f, "no variant with key '{key}'")
            }
            CodecError::ValidationFailure { message } => {
                write!(f, "{message}")
            }
            CodecError::MalformedPrimitive { expected, message } => {
                write!(f, "malformed {expected}: {message}")
            }
            CodecError::MissingField { field } => {
                write!(f, "missing required field '{field}'")
            }
            CodecError::FieldError { field, cause } => {
                write!(f, "in field '{field}': {cause}")
            }
            CodecError::EitherError { left, right } => {
                write!(f, "both alternatives failed: ({left}); ({right})")
            }
            CodecError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::FieldError { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// Result type for treecodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
