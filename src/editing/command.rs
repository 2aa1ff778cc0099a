// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Commands emitted when an interaction finishes.
//!
//! A finished gesture becomes exactly one [`Command`]. The undo/redo store
//! that keeps them lives outside this crate; it receives commands through
//! [`CommandSink`] and later calls [`Command::apply`] to redo or
//! [`Command::revert`] to undo.

use super::snapshot::SelectionSnapshot;
use super::transform::{self, Modifiers, TransformVariant};
use crate::model::{DocumentError, DocumentStore, EntityId};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Why the node order changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReorderReason {
    /// A row was dropped at a new position in the node list
    Drop,
}

/// A single undoable document change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// A finished transform gesture
    MoveSelection {
        transform: TransformVariant,
        delta: Vec2,
        modifiers: Modifiers,
        snapshot: SelectionSnapshot,
    },
    /// A node dragged to a new place in the node list
    MovedNodeOrder {
        id: EntityId,
        from: usize,
        to: usize,
        reason: ReorderReason,
    },
}

impl Command {
    /// Wire name of the command kind
    pub fn kind(&self) -> &'static str {
        match self {
            Command::MoveSelection { .. } => "MOVE_SELECTION",
            Command::MovedNodeOrder { .. } => "MOVED_NODE_ORDER",
        }
    }

    /// Perform the change on `store` (redo).
    ///
    /// A move is replayed from its snapshot, so applying it twice gives the
    /// same document as applying it once.
    pub fn apply<S: DocumentStore + ?Sized>(&self, store: &mut S) -> Result<(), DocumentError> {
        match self {
            Command::MoveSelection {
                transform: variant,
                delta,
                modifiers,
                snapshot,
            } => {
                transform::apply_transform(store, variant, snapshot, *delta, *modifiers);
                let affected = snapshot.affected_globs(store);
                transform::refresh_globs(store, affected);
                Ok(())
            }
            Command::MovedNodeOrder { id, from, to, .. } => store.move_node_order(*id, *from, *to),
        }
    }

    /// Undo the change on `store`
    pub fn revert<S: DocumentStore + ?Sized>(&self, store: &mut S) -> Result<(), DocumentError> {
        match self {
            Command::MoveSelection { snapshot, .. } => {
                snapshot.restore(store);
                let affected = snapshot.affected_globs(store);
                transform::refresh_globs(store, affected);
                Ok(())
            }
            Command::MovedNodeOrder { id, from, to, .. } => store.move_node_order(*id, *to, *from),
        }
    }
}

/// Receiver of finished commands, typically an undo stack
pub trait CommandSink {
    fn dispatch(&mut self, command: Command);
}

impl CommandSink for Vec<Command> {
    fn dispatch(&mut self, command: Command) {
        self.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GlobParams;
    use crate::model::{Document, Node};
    use kurbo::Point;

    fn document() -> (Document, EntityId, EntityId, EntityId) {
        let mut doc = Document::new();
        let a = doc.add_node(Node::new("a", Point::new(0.0, 0.0), 10.0));
        let b = doc.add_node(Node::new("b", Point::new(100.0, 0.0), 10.0));
        let params = GlobParams::new(Point::new(50.0, 20.0), Point::new(50.0, -20.0));
        let g = doc.add_glob("g", a, b, params).unwrap();
        (doc, a, b, g)
    }

    #[test]
    fn move_selection_redo_and_undo() {
        let (mut doc, a, _, g) = document();
        let before = doc.glob(g).unwrap().clone();
        let command = Command::MoveSelection {
            transform: TransformVariant::Point { axis: None },
            delta: Vec2::new(5.0, 5.0),
            modifiers: Modifiers::NONE,
            snapshot: SelectionSnapshot::capture(&doc, [a], []),
        };

        command.apply(&mut doc).unwrap();
        assert_eq!(doc.node(a).unwrap().point, Point::new(5.0, 5.0));
        assert_eq!(doc.glob(g).unwrap().points.c0, Point::new(5.0, 5.0));

        // Replaying is idempotent
        command.apply(&mut doc).unwrap();
        assert_eq!(doc.node(a).unwrap().point, Point::new(5.0, 5.0));

        command.revert(&mut doc).unwrap();
        assert_eq!(doc.node(a).unwrap().point, Point::new(0.0, 0.0));
        assert_eq!(doc.glob(g).unwrap(), &before);
    }

    #[test]
    fn node_order_redo_and_undo() {
        let (mut doc, a, b, _) = document();
        let command = Command::MovedNodeOrder {
            id: a,
            from: 0,
            to: 1,
            reason: ReorderReason::Drop,
        };
        command.apply(&mut doc).unwrap();
        assert_eq!(doc.node_ids(), &[b, a]);
        command.revert(&mut doc).unwrap();
        assert_eq!(doc.node_ids(), &[a, b]);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let command = Command::MovedNodeOrder {
            id: EntityId::next(),
            from: 1,
            to: 3,
            reason: ReorderReason::Drop,
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["kind"], "MOVED_NODE_ORDER");
        assert_eq!(json["reason"], "DROP");
        assert_eq!(command.kind(), "MOVED_NODE_ORDER");
    }

    #[test]
    fn vec_sink_collects_commands() {
        let mut sink: Vec<Command> = Vec::new();
        sink.dispatch(Command::MovedNodeOrder {
            id: EntityId::next(),
            from: 0,
            to: 0,
            reason: ReorderReason::Drop,
        });
        assert_eq!(sink.len(), 1);
    }
}
