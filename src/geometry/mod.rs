// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Vector math and the glob geometry engine

pub mod glob;
pub mod math;

pub use glob::{AnchorKind, GlobParams, GlobPoints, HandleKind, derive_glob_points};
