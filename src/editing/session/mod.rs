// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Transform session - live state of one drag gesture
//!
//! A session is created when a gesture starts, updated on every pointer
//! move, and consumed by either [`TransformSession::cancel`] or
//! [`TransformSession::complete`]. Both take `self` by value, so a finished
//! session cannot be touched again.

mod controller;

pub use controller::{SessionController, SessionError, SessionHandle};

use super::command::{Command, CommandSink};
use super::snapshot::SelectionSnapshot;
use super::transform::{self, Modifiers, TransformVariant};
use crate::model::{DocumentStore, EntityId};
use kurbo::{Point, Vec2};
use std::collections::BTreeSet;

/// State of a gesture in progress
///
/// The session only holds ids and captured values; the document is passed
/// into every call.
#[derive(Debug, Clone)]
pub struct TransformSession {
    /// World position of the pointer when the gesture started
    origin: Point,

    /// Pointer travel since `origin` at the last update
    delta: Vec2,

    /// Modifiers seen at the last update
    modifiers: Modifiers,

    /// What the gesture edits
    variant: TransformVariant,

    /// Values of every edited entity at gesture start
    snapshot: SelectionSnapshot,

    /// Globs whose points must be re-derived after each update
    affected_globs: BTreeSet<EntityId>,
}

impl TransformSession {
    /// Start a gesture at world position `origin`
    pub fn begin<S: DocumentStore + ?Sized>(
        store: &S,
        variant: TransformVariant,
        origin: Point,
    ) -> Self {
        let (nodes, globs) = variant.targets(store);
        let snapshot = SelectionSnapshot::capture(store, nodes, globs);
        let affected_globs = snapshot.affected_globs(store);

        tracing::debug!(
            "Began {:?} session at {:?} ({} nodes, {} affected globs)",
            variant,
            origin,
            snapshot.nodes().count(),
            affected_globs.len()
        );

        Self {
            origin,
            delta: Vec2::ZERO,
            modifiers: Modifiers::NONE,
            variant,
            snapshot,
            affected_globs,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn variant(&self) -> &TransformVariant {
        &self.variant
    }

    pub fn snapshot(&self) -> &SelectionSnapshot {
        &self.snapshot
    }

    pub fn affected_globs(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.affected_globs.iter().copied()
    }

    /// Move the gesture to world position `pointer`.
    ///
    /// Values are recomputed from the snapshot, so repeating a position
    /// always produces the same document. All affected glob points are
    /// current when this returns.
    pub fn update<S: DocumentStore + ?Sized>(
        &mut self,
        store: &mut S,
        pointer: Point,
        modifiers: Modifiers,
    ) {
        self.delta = pointer - self.origin;
        self.modifiers = modifiers;
        tracing::trace!("Session update: delta {:?}", self.delta);

        transform::apply_transform(
            store,
            &self.variant,
            &self.snapshot,
            self.delta,
            self.modifiers,
        );
        transform::refresh_globs(store, self.affected_globs.iter().copied());
    }

    /// Abandon the gesture, putting every captured value back
    pub fn cancel<S: DocumentStore + ?Sized>(self, store: &mut S) {
        self.snapshot.restore(store);
        transform::refresh_globs(store, self.affected_globs.iter().copied());
        tracing::debug!("Cancelled {:?} session", self.variant);
    }

    /// Finish the gesture. The document already holds the final values; this
    /// only emits the command describing the whole gesture.
    pub fn complete(self, sink: &mut dyn CommandSink) -> Command {
        let command = self.into_command();
        tracing::debug!("Completed session with {}", command.kind());
        sink.dispatch(command.clone());
        command
    }

    fn into_command(self) -> Command {
        Command::MoveSelection {
            transform: self.variant,
            delta: self.delta,
            modifiers: self.modifiers,
            snapshot: self.snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::transform::Axis;
    use crate::geometry::{AnchorKind, GlobParams, HandleKind};
    use crate::model::{Document, Node};

    struct Fixture {
        doc: Document,
        a: EntityId,
        b: EntityId,
        g: EntityId,
    }

    fn fixture() -> Fixture {
        let mut doc = Document::new();
        let a = doc.add_node(Node::new("a", Point::new(10.0, 10.0), 10.0));
        let b = doc.add_node(Node::new("b", Point::new(110.0, 10.0), 10.0));
        let params = GlobParams::new(Point::new(60.0, 30.0), Point::new(60.0, -10.0));
        let g = doc.add_glob("g", a, b, params).unwrap();
        Fixture { doc, a, b, g }
    }

    #[test]
    fn point_session_moves_then_cancel_restores() {
        let Fixture { mut doc, a, g, .. } = fixture();
        doc.select_node(a);
        let glob_before = doc.glob(g).unwrap().clone();

        let origin = Point::new(200.0, 200.0);
        let mut session =
            TransformSession::begin(&doc, TransformVariant::Point { axis: None }, origin);
        session.update(&mut doc, origin + Vec2::new(5.0, -3.0), Modifiers::NONE);

        assert_eq!(doc.node(a).unwrap().point, Point::new(15.0, 7.0));
        assert_eq!(doc.glob(g).unwrap().points.c0, Point::new(15.0, 7.0));

        session.cancel(&mut doc);
        assert_eq!(doc.node(a).unwrap().point, Point::new(10.0, 10.0));
        assert_eq!(doc.glob(g).unwrap(), &glob_before);
    }

    #[test]
    fn updates_are_absolute_not_incremental() {
        let Fixture { mut doc, a, .. } = fixture();
        doc.select_node(a);

        let mut session =
            TransformSession::begin(&doc, TransformVariant::Point { axis: None }, Point::ZERO);
        session.update(&mut doc, Point::new(30.0, 30.0), Modifiers::NONE);
        session.update(&mut doc, Point::new(-4.0, 2.0), Modifiers::NONE);
        session.update(&mut doc, Point::new(-4.0, 2.0), Modifiers::NONE);

        assert_eq!(doc.node(a).unwrap().point, Point::new(6.0, 12.0));
    }

    #[test]
    fn point_session_moves_selected_glob_handles() {
        let Fixture { mut doc, g, .. } = fixture();
        doc.select_glob(g);

        let mut session = TransformSession::begin(
            &doc,
            TransformVariant::Point { axis: Some(Axis::X) },
            Point::ZERO,
        );
        session.update(&mut doc, Point::new(7.0, 50.0), Modifiers::NONE);

        let params = doc.glob(g).unwrap().params;
        assert_eq!(params.d, Point::new(67.0, 30.0));
        assert_eq!(params.dp, Point::new(67.0, -10.0));
        assert_eq!(doc.glob(g).unwrap().points.d, Point::new(67.0, 30.0));
    }

    #[test]
    fn handle_session_moves_one_handle() {
        let Fixture { mut doc, g, .. } = fixture();

        let variant = TransformVariant::Handle {
            glob: g,
            handle: HandleKind::Dp,
            axis: Some(Axis::Y),
        };
        let mut session = TransformSession::begin(&doc, variant, Point::ZERO);
        session.update(&mut doc, Point::new(12.0, -8.0), Modifiers::NONE);

        let params = doc.glob(g).unwrap().params;
        assert_eq!(params.d, Point::new(60.0, 30.0));
        assert_eq!(params.dp, Point::new(60.0, 2.0));
    }

    #[test]
    fn y_locked_point_session_scrubs_with_horizontal_motion() {
        let mut doc = Document::new();
        let node = doc.add_node(Node::new("n", Point::new(10.0, 10.0), 4.0));
        doc.select_node(node);

        let variant = TransformVariant::Point {
            axis: Some(Axis::Y),
        };
        let mut session = TransformSession::begin(&doc, variant, Point::ZERO);
        session.update(&mut doc, Point::new(12.0, -8.0), Modifiers::NONE);
        assert_eq!(doc.node(node).unwrap().point, Point::new(10.0, 22.0));

        session.cancel(&mut doc);
        assert_eq!(doc.node(node).unwrap().point, Point::new(10.0, 10.0));
    }

    #[test]
    fn anchor_session_clamps_to_zero() {
        let Fixture { mut doc, g, .. } = fixture();
        let glob = doc.glob(g).unwrap().clone();
        let params = glob.params.with_anchor(AnchorKind::B, 0.52);
        doc.set_glob(g, glob.with_params(params));

        let variant = TransformVariant::Anchor {
            glob: g,
            anchor: AnchorKind::B,
        };
        let mut session = TransformSession::begin(&doc, variant, Point::new(300.0, 0.0));
        session.update(&mut doc, Point::new(150.0, 0.0), Modifiers::NONE);
        assert_eq!(doc.glob(g).unwrap().params.b, 0.0);

        session.cancel(&mut doc);
        assert_eq!(doc.glob(g).unwrap().params.b, 0.52);
    }

    #[test]
    fn radius_session_refreshes_incident_globs() {
        let Fixture { mut doc, b, g, .. } = fixture();
        doc.select_node(b);

        let mut session = TransformSession::begin(&doc, TransformVariant::Radius, Point::ZERO);
        session.update(&mut doc, Point::new(15.0, 99.0), Modifiers::NONE);
        assert_eq!(doc.node(b).unwrap().radius(), 25.0);
        assert_eq!(doc.glob(g).unwrap().points.r1, 25.0);

        session.update(&mut doc, Point::new(-100.0, 0.0), Modifiers::NONE);
        assert_eq!(doc.node(b).unwrap().radius(), 0.0);
    }

    #[test]
    fn missing_entity_is_skipped() {
        let Fixture { mut doc, a, b, .. } = fixture();
        doc.select_node(a);
        doc.select_node(b);

        let mut session =
            TransformSession::begin(&doc, TransformVariant::Point { axis: None }, Point::ZERO);
        doc.remove_node(b);
        session.update(&mut doc, Point::new(1.0, 1.0), Modifiers::NONE);

        assert_eq!(doc.node(a).unwrap().point, Point::new(11.0, 11.0));
        assert!(doc.node(b).is_none());
    }

    #[test]
    fn complete_emits_single_command_without_mutating() {
        let Fixture { mut doc, a, .. } = fixture();
        doc.select_node(a);

        let mut session =
            TransformSession::begin(&doc, TransformVariant::Point { axis: None }, Point::ZERO);
        session.update(&mut doc, Point::new(2.0, 3.0), Modifiers::NONE);
        let before = doc.node(a).unwrap().clone();

        let mut sink: Vec<Command> = Vec::new();
        let command = session.complete(&mut sink);

        assert_eq!(sink, vec![command.clone()]);
        assert_eq!(doc.node(a).unwrap(), &before);
        match command {
            Command::MoveSelection {
                delta, snapshot, ..
            } => {
                assert_eq!(delta, Vec2::new(2.0, 3.0));
                assert_eq!(snapshot.node(a).unwrap().point, Point::new(10.0, 10.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
