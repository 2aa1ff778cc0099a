// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection snapshots.
//!
//! A snapshot is taken once when a gesture starts. Every update of the
//! gesture computes absolute values from the snapshot plus the total pointer
//! delta, so pausing, reversing, or replaying the same pointer position
//! always lands on the same values.

use crate::geometry::GlobParams;
use crate::model::{DocumentStore, EntityId};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Captured state of one node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub point: Point,
    pub radius: f64,
}

/// Captured state of the selected nodes and globs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    nodes: BTreeMap<EntityId, NodeSnapshot>,
    globs: BTreeMap<EntityId, GlobParams>,
}

impl SelectionSnapshot {
    /// Copy the current values of the given nodes and globs out of `store`.
    ///
    /// Ids the store does not know are left out.
    pub fn capture<S, N, G>(store: &S, node_ids: N, glob_ids: G) -> Self
    where
        S: DocumentStore + ?Sized,
        N: IntoIterator<Item = EntityId>,
        G: IntoIterator<Item = EntityId>,
    {
        let mut nodes = BTreeMap::new();
        for id in node_ids {
            match store.node(id) {
                Some(node) => {
                    nodes.insert(
                        id,
                        NodeSnapshot {
                            point: node.point,
                            radius: node.radius(),
                        },
                    );
                }
                None => tracing::warn!("Selected node {id} is not in the document"),
            }
        }

        let mut globs = BTreeMap::new();
        for id in glob_ids {
            match store.glob(id) {
                Some(glob) => {
                    globs.insert(id, glob.params);
                }
                None => tracing::warn!("Selected glob {id} is not in the document"),
            }
        }

        Self { nodes, globs }
    }

    pub fn node(&self, id: EntityId) -> Option<&NodeSnapshot> {
        self.nodes.get(&id)
    }

    pub fn glob(&self, id: EntityId) -> Option<&GlobParams> {
        self.globs.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (EntityId, &NodeSnapshot)> {
        self.nodes.iter().map(|(id, snap)| (*id, snap))
    }

    pub fn globs(&self) -> impl Iterator<Item = (EntityId, &GlobParams)> {
        self.globs.iter().map(|(id, params)| (*id, params))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.globs.is_empty()
    }

    /// Every glob whose points depend on the captured entities: the captured
    /// globs themselves and every glob attached to a captured node.
    pub fn affected_globs<S: DocumentStore + ?Sized>(&self, store: &S) -> BTreeSet<EntityId> {
        let mut affected: BTreeSet<EntityId> = self.globs.keys().copied().collect();
        for id in self.nodes.keys() {
            affected.extend(store.globs_of_node(*id));
        }
        affected
    }

    /// Write every captured value back into `store` verbatim.
    ///
    /// Derived glob points are not refreshed here.
    pub fn restore<S: DocumentStore + ?Sized>(&self, store: &mut S) {
        for (id, snap) in &self.nodes {
            let Some(node) = store.node(*id) else {
                tracing::warn!("Cannot restore missing node {id}");
                continue;
            };
            let node = node.clone().with_point(snap.point).with_radius(snap.radius);
            store.set_node(*id, node);
        }

        for (id, params) in &self.globs {
            let Some(glob) = store.glob(*id) else {
                tracing::warn!("Cannot restore missing glob {id}");
                continue;
            };
            let glob = glob.clone().with_params(*params);
            store.set_glob(*id, glob);
        }
    }
}
