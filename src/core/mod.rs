// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout treecodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy for encode/decode failures
//! - [`Node`] - Neutral, format-agnostic tree value
//! - [`NodeKind`] - Node shape identifier for mismatch reporting

pub mod error;
pub mod node;

pub use error::{CodecError, Result};
pub use node::{MapNode, Node, NodeKind};
