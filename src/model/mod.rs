// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Document data model

pub mod camera;
pub mod document;
pub mod entity_id;
pub mod glob;
pub mod node;

pub use camera::Camera;
pub use document::{Document, DocumentError, DocumentStore};
pub use entity_id::EntityId;
pub use glob::Glob;
pub use node::{Cap, Node};
