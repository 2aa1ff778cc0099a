// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Small vector helpers on top of `kurbo`.
//!
//! `kurbo::Point` and `kurbo::Vec2` already cover addition, subtraction,
//! distance and interpolation. The helpers here add the pieces the glob
//! engine and the sessions need: rounding, clamping, safe normalization and
//! circle tangents.

use crate::settings;
use kurbo::{Circle, Point, Vec2};

/// Which way to rotate from the center→control direction when picking a
/// tangent point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise (positive angle)
    Ccw,
    /// Clockwise (negative angle)
    Cw,
}

impl Turn {
    fn sign(self) -> f64 {
        match self {
            Turn::Ccw => 1.0,
            Turn::Cw => -1.0,
        }
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f64::clamp` this never panics; NaN resolves to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Normalize `v`, or return `fallback` when `v` is (nearly) zero length.
pub fn unit_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > settings::geometry::EPSILON && len.is_finite() {
        v / len
    } else {
        fallback
    }
}

/// Tangent point on `circle` of a line through `from`.
///
/// Returns the tangent point and the outward unit normal at it. When `from`
/// lies inside or on the circle there is no tangent; the point on the circle
/// facing `from` is returned instead. When `from` sits on the center,
/// `fallback` gives the direction.
pub fn tangent_point(circle: Circle, from: Point, turn: Turn, fallback: Vec2) -> (Point, Vec2) {
    let radius = circle.radius.max(0.0);
    let offset = from - circle.center;
    let dist = offset.hypot();
    let dir = unit_or(offset, fallback);

    let spread = if dist > radius && dist > settings::geometry::EPSILON {
        (radius / dist).acos()
    } else {
        0.0
    };

    let normal = Vec2::from_angle(dir.atan2() + turn.sign() * spread);
    (circle.center + normal * radius, normal)
}
