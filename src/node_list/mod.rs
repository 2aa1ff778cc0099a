// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag-to-reorder for the node list.
//!
//! The interaction is a two-state machine:
//!
//! ```text
//!   Idle --start--> Dragging --stop--> Idle   (emits MOVED_NODE_ORDER)
//!                      |  ^
//!                      +--+ pointer_moved      (auto-scroll or new row)
//!                      |
//!                      +--cancel--> Idle      (no emission)
//! ```
//!
//! Events that do not apply to the current state are ignored, except
//! starting a second drag, which is an error.

pub mod scroll;

pub use scroll::{AutoScroll, ListMetrics, ScrollDirection, auto_scroll, row_at, scroll_into_view};

use crate::editing::command::{Command, CommandSink, ReorderReason};
use crate::model::EntityId;
use thiserror::Error;

/// Which way the dragged row is headed relative to where it started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    Up,
    Down,
}

/// A row drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDrag {
    pub id: EntityId,
    pub from_index: usize,
    pub next_index: usize,
    pub direction: DragDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderState {
    #[default]
    Idle,
    Dragging(RowDrag),
}

/// What the caller should do after a pointer move
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReorderEffect {
    /// Nothing changed
    None,
    /// Scroll the list container by this many pixels
    ScrollBy(f64),
    /// The drop position moved; redraw the indicator
    Moved {
        next_index: usize,
        direction: DragDirection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("node {0} is already being dragged")]
    AlreadyDragging(EntityId),
}

/// Whether the candidate row differs from the current one
pub fn index_changed(candidate: usize, current: usize) -> bool {
    candidate != current
}

/// Reorder state for one node list
#[derive(Debug, Clone, Default)]
pub struct NodeReorder {
    state: ReorderState,
}

impl NodeReorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReorderState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ReorderState::Dragging(_))
    }

    /// Drop indicator to draw: the candidate row and direction, when the
    /// row would actually move
    pub fn indicator(&self) -> Option<(usize, DragDirection)> {
        match self.state {
            ReorderState::Dragging(drag) if drag.next_index != drag.from_index => {
                Some((drag.next_index, drag.direction))
            }
            _ => None,
        }
    }

    /// Begin dragging the row `id` currently at `index`
    pub fn start(&mut self, id: EntityId, index: usize) -> Result<(), ReorderError> {
        if let ReorderState::Dragging(drag) = self.state {
            tracing::error!("Tried to drag {id} while {} is being dragged", drag.id);
            return Err(ReorderError::AlreadyDragging(drag.id));
        }

        self.state = ReorderState::Dragging(RowDrag {
            id,
            from_index: index,
            next_index: index,
            direction: DragDirection::Up,
        });
        tracing::debug!("Started dragging node {id} from row {index}");
        Ok(())
    }

    /// Track the pointer during a drag.
    ///
    /// Inside the scroll bands the list scrolls and the candidate row is
    /// left alone; elsewhere the candidate row follows the pointer.
    pub fn pointer_moved(
        &mut self,
        pointer_y: f64,
        metrics: &ListMetrics,
        item_count: usize,
    ) -> ReorderEffect {
        let ReorderState::Dragging(drag) = &mut self.state else {
            return ReorderEffect::None;
        };

        let scroll = auto_scroll(pointer_y, metrics);
        if scroll::is_scrolling(&scroll) {
            return ReorderEffect::ScrollBy(scroll.amount());
        }

        let candidate = row_at(pointer_y, metrics, item_count);
        if !index_changed(candidate, drag.next_index) {
            return ReorderEffect::None;
        }

        drag.next_index = candidate;
        drag.direction = if candidate < drag.from_index {
            DragDirection::Up
        } else {
            DragDirection::Down
        };
        tracing::trace!("Drop row for node {} is now {candidate}", drag.id);

        ReorderEffect::Moved {
            next_index: candidate,
            direction: drag.direction,
        }
    }

    /// Drop the dragged row, emitting the reorder command
    pub fn stop(&mut self, sink: &mut dyn CommandSink) -> Option<Command> {
        let ReorderState::Dragging(drag) = std::mem::take(&mut self.state) else {
            return None;
        };

        let command = Command::MovedNodeOrder {
            id: drag.id,
            from: drag.from_index,
            to: drag.next_index,
            reason: ReorderReason::Drop,
        };
        tracing::debug!(
            "Dropped node {} from row {} to row {}",
            drag.id,
            drag.from_index,
            drag.next_index
        );
        sink.dispatch(command.clone());
        Some(command)
    }

    /// Abandon the drag (Escape). Returns whether a drag was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = ReorderState::Idle;
        if was_dragging {
            tracing::debug!("Cancelled node drag");
        }
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::node_list::{HEADER_HEIGHT, ROW_HEIGHT};

    fn metrics() -> ListMetrics {
        ListMetrics {
            list_top: 0.0,
            container_height: 400.0,
            scroll_top: 0.0,
        }
    }

    fn row_center(index: usize) -> f64 {
        HEADER_HEIGHT + ROW_HEIGHT * (index as f64 + 0.5)
    }

    #[test]
    fn drag_row_one_to_row_three() {
        let mut reorder = NodeReorder::new();
        let mut sink: Vec<Command> = Vec::new();
        let id = EntityId::next();

        reorder.start(id, 1).unwrap();
        let effect = reorder.pointer_moved(row_center(3), &metrics(), 5);
        assert_eq!(
            effect,
            ReorderEffect::Moved {
                next_index: 3,
                direction: DragDirection::Down
            }
        );
        assert_eq!(reorder.indicator(), Some((3, DragDirection::Down)));

        let command = reorder.stop(&mut sink).unwrap();
        assert_eq!(
            command,
            Command::MovedNodeOrder {
                id,
                from: 1,
                to: 3,
                reason: ReorderReason::Drop
            }
        );
        assert_eq!(sink, vec![command]);
        assert_eq!(reorder.state(), ReorderState::Idle);
    }

    #[test]
    fn same_row_is_not_reported_twice() {
        let mut reorder = NodeReorder::new();
        reorder.start(EntityId::next(), 2).unwrap();
        assert_eq!(
            reorder.pointer_moved(row_center(2), &metrics(), 5),
            ReorderEffect::None
        );
        assert_eq!(reorder.indicator(), None);

        let up = reorder.pointer_moved(row_center(0), &metrics(), 5);
        assert_eq!(
            up,
            ReorderEffect::Moved {
                next_index: 0,
                direction: DragDirection::Up
            }
        );
        assert_eq!(
            reorder.pointer_moved(row_center(0) + 3.0, &metrics(), 5),
            ReorderEffect::None
        );
    }

    #[test]
    fn pointer_in_band_scrolls_instead() {
        let mut reorder = NodeReorder::new();
        reorder.start(EntityId::next(), 0).unwrap();

        let effect = reorder.pointer_moved(410.0, &metrics(), 50);
        match effect {
            ReorderEffect::ScrollBy(amount) => assert!(amount > 0.0),
            other => panic!("expected scroll, got {other:?}"),
        }
        // Candidate row unchanged
        assert_eq!(reorder.indicator(), None);
    }

    #[test]
    fn cancel_emits_nothing() {
        let mut reorder = NodeReorder::new();
        let mut sink: Vec<Command> = Vec::new();
        reorder.start(EntityId::next(), 1).unwrap();
        reorder.pointer_moved(row_center(4), &metrics(), 5);

        assert!(reorder.cancel());
        assert!(reorder.stop(&mut sink).is_none());
        assert!(sink.is_empty());
        assert!(!reorder.cancel());
    }

    #[test]
    fn second_drag_is_rejected() {
        let mut reorder = NodeReorder::new();
        let first = EntityId::next();
        reorder.start(first, 0).unwrap();
        assert_eq!(
            reorder.start(EntityId::next(), 1),
            Err(ReorderError::AlreadyDragging(first))
        );
    }

    #[test]
    fn idle_ignores_pointer_moves() {
        let mut reorder = NodeReorder::new();
        assert_eq!(
            reorder.pointer_moved(row_center(3), &metrics(), 5),
            ReorderEffect::None
        );
        assert!(!reorder.is_dragging());
    }
}
