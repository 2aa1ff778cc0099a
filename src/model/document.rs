// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! The document: nodes and globs keyed by id, their draw order, and the
//! current selection.
//!
//! Editing code never holds references into a document across calls. It
//! goes through the [`DocumentStore`] trait with ids, reading a value,
//! building a new one and writing it back. [`Document`] is the in-memory
//! implementation used by the binary and the tests; an application with its
//! own state store implements the trait over that instead.

use super::camera::Camera;
use super::entity_id::EntityId;
use super::glob::Glob;
use super::node::Node;
use crate::editing::selection::Selection;
use crate::geometry::GlobParams;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by document mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("unknown node {0}")]
    UnknownNode(EntityId),

    #[error("a glob needs two distinct nodes, got {0} twice")]
    SelfGlob(EntityId),

    #[error("index {index} is out of range for {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("node {id} is not at index {index}")]
    OrderMismatch { id: EntityId, index: usize },
}

/// Id-based access to a document's nodes and globs
pub trait DocumentStore {
    fn node(&self, id: EntityId) -> Option<&Node>;
    fn glob(&self, id: EntityId) -> Option<&Glob>;

    /// Replace an existing node. Unknown ids are ignored.
    fn set_node(&mut self, id: EntityId, node: Node);

    /// Replace an existing glob. Unknown ids are ignored.
    fn set_glob(&mut self, id: EntityId, glob: Glob);

    fn selected_nodes(&self) -> &Selection;
    fn selected_globs(&self) -> &Selection;

    /// Ids of every glob with `node` as one of its ends
    fn globs_of_node(&self, node: EntityId) -> Vec<EntityId>;

    /// Node ids in list order
    fn node_order(&self) -> &[EntityId];

    /// Move `id` from `from` to `to` in the node order
    fn move_node_order(&mut self, id: EntityId, from: usize, to: usize)
    -> Result<(), DocumentError>;

    /// Re-derive the cached points of one glob from its current ends.
    ///
    /// Returns false (and changes nothing) when the glob or one of its
    /// nodes is missing.
    fn refresh_glob(&mut self, id: EntityId) -> bool {
        let Some(glob) = self.glob(id) else {
            tracing::warn!("Cannot refresh missing glob {id}");
            return false;
        };
        let [start, end] = glob.nodes;
        let (Some(start), Some(end)) = (self.node(start), self.node(end)) else {
            tracing::warn!("Glob {id} has a missing end node; points left as they were");
            return false;
        };
        let next = glob.clone().refreshed(start, end);
        self.set_glob(id, next);
        true
    }
}

/// In-memory document
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: HashMap<EntityId, Node>,
    globs: HashMap<EntityId, Glob>,
    node_ids: Vec<EntityId>,
    glob_ids: Vec<EntityId>,
    pub selected_nodes: Selection,
    pub selected_globs: Selection,
    pub camera: Camera,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the end of the node order
    pub fn add_node(&mut self, mut node: Node) -> EntityId {
        let id = node.id;
        node.z_index = self.node_ids.len();
        self.node_ids.push(id);
        self.nodes.insert(id, node);
        id
    }

    /// Add a glob between two existing nodes, deriving its points
    pub fn add_glob(
        &mut self,
        name: impl Into<String>,
        start: EntityId,
        end: EntityId,
        params: GlobParams,
    ) -> Result<EntityId, DocumentError> {
        if start == end {
            return Err(DocumentError::SelfGlob(start));
        }
        let start = self.nodes.get(&start).ok_or(DocumentError::UnknownNode(start))?;
        let end = self.nodes.get(&end).ok_or(DocumentError::UnknownNode(end))?;

        let mut glob = Glob::new(name, start, end, params);
        glob.z_index = self.glob_ids.len();
        let id = glob.id;
        self.glob_ids.push(id);
        self.globs.insert(id, glob);
        Ok(id)
    }

    pub fn node_ids(&self) -> &[EntityId] {
        &self.node_ids
    }

    pub fn glob_ids(&self) -> &[EntityId] {
        &self.glob_ids
    }

    /// Nodes in list order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_ids.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Globs in list order
    pub fn globs(&self) -> impl Iterator<Item = &Glob> {
        self.glob_ids.iter().filter_map(|id| self.globs.get(id))
    }

    pub fn select_node(&mut self, id: EntityId) {
        self.selected_nodes.insert(id);
    }

    pub fn select_glob(&mut self, id: EntityId) {
        self.selected_globs.insert(id);
    }

    /// Remove a node, every glob attached to it, and their selection
    pub fn remove_node(&mut self, id: EntityId) -> Option<Node> {
        let node = self.nodes.remove(&id)?;
        self.node_ids.retain(|n| *n != id);
        self.selected_nodes.remove(&id);

        for glob in self.globs_of_node(id) {
            self.globs.remove(&glob);
            self.glob_ids.retain(|g| *g != glob);
            self.selected_globs.remove(&glob);
        }
        self.renumber_nodes();
        Some(node)
    }

    /// Re-derive the points of every glob
    pub fn refresh_all_globs(&mut self) {
        for id in self.glob_ids.clone() {
            self.refresh_glob(id);
        }
    }

    fn renumber_nodes(&mut self) {
        for (index, id) in self.node_ids.iter().enumerate() {
            if let Some(node) = self.nodes.get_mut(id) {
                node.z_index = index;
            }
        }
    }
}

impl DocumentStore for Document {
    fn node(&self, id: EntityId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    fn glob(&self, id: EntityId) -> Option<&Glob> {
        self.globs.get(&id)
    }

    fn set_node(&mut self, id: EntityId, node: Node) {
        match self.nodes.get_mut(&id) {
            Some(slot) => *slot = node,
            None => tracing::warn!("Ignoring write to missing node {id}"),
        }
    }

    fn set_glob(&mut self, id: EntityId, glob: Glob) {
        match self.globs.get_mut(&id) {
            Some(slot) => *slot = glob,
            None => tracing::warn!("Ignoring write to missing glob {id}"),
        }
    }

    fn selected_nodes(&self) -> &Selection {
        &self.selected_nodes
    }

    fn selected_globs(&self) -> &Selection {
        &self.selected_globs
    }

    fn globs_of_node(&self, node: EntityId) -> Vec<EntityId> {
        self.glob_ids
            .iter()
            .filter(|id| self.globs.get(id).is_some_and(|g| g.touches(node)))
            .copied()
            .collect()
    }

    fn node_order(&self) -> &[EntityId] {
        &self.node_ids
    }

    fn move_node_order(
        &mut self,
        id: EntityId,
        from: usize,
        to: usize,
    ) -> Result<(), DocumentError> {
        let len = self.node_ids.len();
        if from >= len {
            return Err(DocumentError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(DocumentError::IndexOutOfRange { index: to, len });
        }
        if self.node_ids[from] != id {
            return Err(DocumentError::OrderMismatch { id, index: from });
        }

        let moved = self.node_ids.remove(from);
        self.node_ids.insert(to, moved);
        self.renumber_nodes();
        tracing::debug!("Moved node {id} from {from} to {to}");
        Ok(())
    }
}
