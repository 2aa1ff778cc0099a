// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Globs: smooth connectors between two nodes

use super::entity_id::EntityId;
use super::node::Node;
use crate::geometry::{GlobParams, GlobPoints, derive_glob_points};
use serde::{Deserialize, Serialize};

/// A connector between exactly two nodes
///
/// `points` is a cache of [`derive_glob_points`] over the two nodes and
/// `params`. It is only ever replaced wholesale by [`Glob::refreshed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glob {
    pub id: EntityId,
    pub name: String,
    pub nodes: [EntityId; 2],
    pub params: GlobParams,
    pub points: GlobPoints,
    pub z_index: usize,
}

impl Glob {
    /// Create a glob between `start` and `end` with derived points
    pub fn new(name: impl Into<String>, start: &Node, end: &Node, params: GlobParams) -> Self {
        Self {
            id: EntityId::next(),
            name: name.into(),
            nodes: [start.id, end.id],
            params,
            points: derive_glob_points(start.circle(), end.circle(), &params),
            z_index: 0,
        }
    }

    /// Whether `node` is one of the two ends of this glob
    pub fn touches(&self, node: EntityId) -> bool {
        self.nodes.contains(&node)
    }

    /// Return a copy with new parameters. The cached points are left as they
    /// were; call [`Glob::refreshed`] before the glob is observed.
    pub fn with_params(mut self, params: GlobParams) -> Self {
        self.params = params;
        self
    }

    /// Return a copy whose points are re-derived from its current ends
    pub fn refreshed(mut self, start: &Node, end: &Node) -> Self {
        self.points = derive_glob_points(start.circle(), end.circle(), &self.params);
        self
    }
}
