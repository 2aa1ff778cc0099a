// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Node list geometry: auto-scroll near the edges, row lookup from a pointer
//! position, and keeping the selection visible.

use crate::editing::Selection;
use crate::geometry::math;
use crate::model::EntityId;
use crate::settings::node_list::{HEADER_HEIGHT, ROW_HEIGHT, SCROLL_BAND, SCROLL_SPEED};

/// Layout of the scrolling list container, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListMetrics {
    /// Offset of the list element from the top of the container
    pub list_top: f64,
    /// Visible height of the container
    pub container_height: f64,
    /// Current scroll offset of the container
    pub scroll_top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    None,
}

/// Auto-scroll request computed from a pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScroll {
    pub direction: ScrollDirection,
    /// 0 at the inner edge of the band, 1 at the container edge
    pub strength: f64,
}

impl AutoScroll {
    /// Signed scroll distance for this request
    pub fn amount(&self) -> f64 {
        match self.direction {
            ScrollDirection::Up => -SCROLL_SPEED * self.strength,
            ScrollDirection::Down => SCROLL_SPEED * self.strength,
            ScrollDirection::None => 0.0,
        }
    }
}

/// Whether the pointer at `pointer_y` is inside the top or bottom scroll band
pub fn auto_scroll(pointer_y: f64, metrics: &ListMetrics) -> AutoScroll {
    let y = pointer_y - HEADER_HEIGHT - metrics.list_top + ROW_HEIGHT;
    let height = metrics.container_height;

    if y < SCROLL_BAND {
        AutoScroll {
            direction: ScrollDirection::Up,
            strength: math::clamp(1.0 - y / SCROLL_BAND, 0.0, 1.0),
        }
    } else if y > height - SCROLL_BAND {
        AutoScroll {
            direction: ScrollDirection::Down,
            strength: math::clamp((y - height + SCROLL_BAND) / SCROLL_BAND, 0.0, 1.0),
        }
    } else {
        AutoScroll {
            direction: ScrollDirection::None,
            strength: 0.0,
        }
    }
}

pub fn is_scrolling(scroll: &AutoScroll) -> bool {
    scroll.direction != ScrollDirection::None
}

/// Row under the pointer, clamped to the rows that exist
pub fn row_at(pointer_y: f64, metrics: &ListMetrics, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    let row = ((pointer_y - metrics.list_top + metrics.scroll_top - HEADER_HEIGHT) / ROW_HEIGHT)
        .floor();
    math::clamp(row, 0.0, (item_count - 1) as f64) as usize
}

/// New scroll offset that brings the first selected row into view, or
/// `None` when it is already visible (or nothing is selected).
pub fn scroll_into_view(
    order: &[EntityId],
    selected: &Selection,
    metrics: &ListMetrics,
) -> Option<f64> {
    let index = order.iter().position(|id| selected.contains(id))?;
    let y = ROW_HEIGHT * index as f64;
    let top = metrics.scroll_top;
    let visible = metrics.container_height - ROW_HEIGHT * 2.0;

    if y < top {
        Some(y)
    } else if y > top + visible {
        Some(y - visible)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ListMetrics {
        ListMetrics {
            list_top: 0.0,
            container_height: 200.0,
            scroll_top: 0.0,
        }
    }

    #[test]
    fn no_scroll_in_the_middle() {
        let scroll = auto_scroll(100.0, &metrics());
        assert!(!is_scrolling(&scroll));
        assert_eq!(scroll.amount(), 0.0);
    }

    #[test]
    fn scroll_strength_grows_toward_edges() {
        // y = pointer - 40 + 28; band edge at y = 24
        let edge = auto_scroll(36.0, &metrics());
        assert_eq!(edge.direction, ScrollDirection::None);

        let half = auto_scroll(24.0, &metrics());
        assert_eq!(half.direction, ScrollDirection::Up);
        assert_eq!(half.strength, 0.5);
        assert_eq!(half.amount(), -5.0);

        let full = auto_scroll(-100.0, &metrics());
        assert_eq!(full.strength, 1.0);

        // Bottom band: y > 176
        let bottom = auto_scroll(200.0, &metrics());
        assert_eq!(bottom.direction, ScrollDirection::Down);
        assert_eq!(bottom.strength, 0.5);
        assert_eq!(bottom.amount(), 5.0);
    }

    #[test]
    fn row_lookup_clamps() {
        let m = metrics();
        assert_eq!(row_at(40.0, &m, 5), 0);
        assert_eq!(row_at(40.0 + 28.0 * 3.5, &m, 5), 3);
        assert_eq!(row_at(-50.0, &m, 5), 0);
        assert_eq!(row_at(10_000.0, &m, 5), 4);
        assert_eq!(row_at(100.0, &m, 0), 0);

        let scrolled = ListMetrics {
            scroll_top: 56.0,
            ..m
        };
        assert_eq!(row_at(40.0, &scrolled, 5), 2);
    }

    #[test]
    fn scroll_into_view_moves_only_when_needed() {
        let ids: Vec<EntityId> = (0..20).map(|_| EntityId::next()).collect();
        let m = metrics();

        let visible: Selection = [ids[2]].into_iter().collect();
        assert_eq!(scroll_into_view(&ids, &visible, &m), None);

        // Visible height is 200 - 56 = 144; row 10 starts at 280
        let below: Selection = [ids[10], ids[15]].into_iter().collect();
        assert_eq!(scroll_into_view(&ids, &below, &m), Some(280.0 - 144.0));

        let scrolled = ListMetrics {
            scroll_top: 300.0,
            ..m
        };
        let above: Selection = [ids[1]].into_iter().collect();
        assert_eq!(scroll_into_view(&ids, &above, &scrolled), Some(28.0));

        assert_eq!(scroll_into_view(&ids, &Selection::new(), &m), None);
    }
}
