// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds the tunable numbers used by the geometry engine, the
//! transform sessions and the node list. Nothing here depends on rendering.

// ============================================================================
// ANCHOR DRAG SETTINGS
// ============================================================================
/// World units of horizontal pointer travel per unit of anchor value
/// (100 units of drag move an anchor from 0 to 1)
const ANCHOR_DRAG_SCALE: f64 = 0.01;

/// Value anchors are pulled toward while dragging
const ANCHOR_SNAP_TARGET: f64 = 0.5;

/// Distance from the snap target inside which an anchor snaps
const ANCHOR_SNAP_RANGE: f64 = 0.025;

/// Decimal places anchor values are rounded to after every drag update
const ANCHOR_DECIMALS: i32 = 4;

// ============================================================================
// NODE LIST SETTINGS
// ============================================================================
/// Height of the list section header (pixels)
const NODE_LIST_HEADER_HEIGHT: f64 = 40.0;

/// Height of a single row in the node list (pixels)
const NODE_LIST_ROW_HEIGHT: f64 = 28.0;

/// Height of the auto-scroll band at the top and bottom of the list
const NODE_LIST_SCROLL_BAND: f64 = 24.0;

/// Scroll distance per pointer move at full strength (pixels)
const NODE_LIST_SCROLL_SPEED: f64 = 10.0;

// ============================================================================
// GEOMETRY SETTINGS
// ============================================================================
/// Lengths below this are treated as zero when normalizing directions
const GEOMETRY_EPSILON: f64 = 1e-9;

/// Accuracy used when flattening circle arcs into cubic segments
const OUTLINE_ARC_TOLERANCE: f64 = 0.1;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Anchor drag behaviour
pub mod anchor {
    /// Anchor value change per world unit of horizontal drag
    pub const DRAG_SCALE: f64 = super::ANCHOR_DRAG_SCALE;

    /// Snap target (the symmetric midpoint)
    pub const SNAP_TARGET: f64 = super::ANCHOR_SNAP_TARGET;

    /// Snap radius around the target
    pub const SNAP_RANGE: f64 = super::ANCHOR_SNAP_RANGE;

    /// Decimal places kept on dragged values
    pub const DECIMALS: i32 = super::ANCHOR_DECIMALS;
}

/// Node list layout and auto-scroll
pub mod node_list {
    pub const HEADER_HEIGHT: f64 = super::NODE_LIST_HEADER_HEIGHT;
    pub const ROW_HEIGHT: f64 = super::NODE_LIST_ROW_HEIGHT;
    pub const SCROLL_BAND: f64 = super::NODE_LIST_SCROLL_BAND;
    pub const SCROLL_SPEED: f64 = super::NODE_LIST_SCROLL_SPEED;
}

/// Geometry engine tolerances
pub mod geometry {
    /// Zero-length threshold
    pub const EPSILON: f64 = super::GEOMETRY_EPSILON;

    /// Arc flattening tolerance for glob outlines
    pub const ARC_TOLERANCE: f64 = super::OUTLINE_ARC_TOLERANCE;
}
