// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Transform variants and their update rules.
//!
//! Every rule maps a snapshot value and the total gesture delta to a new
//! absolute value. Nothing here reads the live value being replaced.

use super::snapshot::SelectionSnapshot;
use crate::geometry::math;
use crate::geometry::{AnchorKind, GlobParams, HandleKind};
use crate::model::{DocumentStore, EntityId};
use crate::settings;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Screen axis a translation can be locked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Modifier keys that change how a drag is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Held to drag anchors without snapping to the midpoint
    pub precise: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { precise: false };
    pub const PRECISE: Self = Self { precise: true };
}

/// What a gesture edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransformVariant {
    /// One anchor scalar of a glob (and of any other selected globs)
    Anchor { glob: EntityId, anchor: AnchorKind },
    /// One handle of a glob (and of any other selected globs)
    Handle {
        glob: EntityId,
        handle: HandleKind,
        axis: Option<Axis>,
    },
    /// Centers of the selected nodes and both handles of the selected globs
    Point { axis: Option<Axis> },
    /// Radii of the selected nodes
    Radius,
}

impl TransformVariant {
    /// Node and glob ids this variant writes, given the current selection
    pub fn targets<S: DocumentStore + ?Sized>(
        &self,
        store: &S,
    ) -> (BTreeSet<EntityId>, BTreeSet<EntityId>) {
        let selected_nodes = || store.selected_nodes().iter().copied().collect::<BTreeSet<_>>();
        let selected_globs = || store.selected_globs().iter().copied().collect::<BTreeSet<_>>();

        match self {
            TransformVariant::Point { .. } => (selected_nodes(), selected_globs()),
            TransformVariant::Radius => (selected_nodes(), BTreeSet::new()),
            TransformVariant::Anchor { glob, .. } | TransformVariant::Handle { glob, .. } => {
                let mut globs = selected_globs();
                globs.insert(*glob);
                (BTreeSet::new(), globs)
            }
        }
    }
}

/// Lock a delta to one axis.
///
/// Both locks are driven by horizontal pointer motion: `X` moves points
/// along x, and `Y` scrubs them along y by the horizontal travel. The other
/// coordinate of every translated point stays at its snapshot value.
pub fn constrain(delta: Vec2, axis: Option<Axis>) -> Vec2 {
    match axis {
        Some(Axis::X) => Vec2::new(delta.x, 0.0),
        Some(Axis::Y) => Vec2::new(0.0, delta.x),
        None => delta,
    }
}

pub fn translate(start: Point, delta: Vec2) -> Point {
    start + delta
}

/// New anchor value for a horizontal drag of `delta.x` world units
pub fn anchor_value(start: f64, delta: Vec2, modifiers: Modifiers) -> f64 {
    let mut next = start + delta.x * settings::anchor::DRAG_SCALE;
    if !modifiers.precise
        && (settings::anchor::SNAP_TARGET - next).abs() < settings::anchor::SNAP_RANGE
    {
        next = settings::anchor::SNAP_TARGET;
    }
    math::clamp(
        math::round_to(next, settings::anchor::DECIMALS),
        0.0,
        1.0,
    )
}

/// New radius for a horizontal drag of `delta.x` world units
pub fn radius_value(start: f64, delta: Vec2) -> f64 {
    math::clamp(start + delta.x, 0.0, f64::INFINITY)
}

/// Write `f(snapshot, delta)` for every captured entity into `store`.
///
/// Entities that have disappeared from the store are skipped. Derived glob
/// points are not refreshed here.
pub fn apply_transform<S: DocumentStore + ?Sized>(
    store: &mut S,
    variant: &TransformVariant,
    snapshot: &SelectionSnapshot,
    delta: Vec2,
    modifiers: Modifiers,
) {
    match *variant {
        TransformVariant::Point { axis } => {
            let delta = constrain(delta, axis);
            for (id, snap) in snapshot.nodes() {
                let Some(node) = store.node(id) else {
                    tracing::warn!("Skipping missing node {id}");
                    continue;
                };
                let node = node.clone().with_point(translate(snap.point, delta));
                store.set_node(id, node);
            }
            for (id, params) in snapshot.globs() {
                let mut next = *params;
                next.d = translate(params.d, delta);
                next.dp = translate(params.dp, delta);
                write_params(store, id, next);
            }
        }
        TransformVariant::Handle { handle, axis, .. } => {
            let delta = constrain(delta, axis);
            for (id, params) in snapshot.globs() {
                let next = params.with_handle(handle, translate(params.handle(handle), delta));
                write_params(store, id, next);
            }
        }
        TransformVariant::Anchor { anchor, .. } => {
            for (id, params) in snapshot.globs() {
                let value = anchor_value(params.anchor(anchor), delta, modifiers);
                write_params(store, id, params.with_anchor(anchor, value));
            }
        }
        TransformVariant::Radius => {
            for (id, snap) in snapshot.nodes() {
                let Some(node) = store.node(id) else {
                    tracing::warn!("Skipping missing node {id}");
                    continue;
                };
                let node = node.clone().with_radius(radius_value(snap.radius, delta));
                store.set_node(id, node);
            }
        }
    }
}

/// Re-derive the points of every glob in `ids`
pub fn refresh_globs<S, I>(store: &mut S, ids: I)
where
    S: DocumentStore + ?Sized,
    I: IntoIterator<Item = EntityId>,
{
    for id in ids {
        store.refresh_glob(id);
    }
}

fn write_params<S: DocumentStore + ?Sized>(
    store: &mut S,
    id: EntityId,
    params: GlobParams,
) {
    let Some(glob) = store.glob(id) else {
        tracing::warn!("Skipping missing glob {id}");
        return;
    };
    let glob = glob.clone().with_params(params);
    store.set_glob(id, glob);
}
