// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Glob geometry engine.
//!
//! A glob joins two circles with two smooth curves, one on each side. Each
//! curve is shaped by a free handle (`d` on the first side, `dp` on the
//! second) and two anchor scalars that place the cubic control points along
//! the tangents toward that handle:
//!
//! ```text
//!            f0 ---- d ---- f1
//!          /                  \
//!        e0                    e1
//!     ( c0 )                  ( c1 )
//!        e0p                   e1p
//!          \                  /
//!           f0p --- dp --- f1p
//! ```
//!
//! [`derive_glob_points`] is a pure function of the two circles and the
//! parameter set. It is re-run on every drag frame, so it must stay
//! deterministic and must never panic, whatever the input.

use super::math::{self, Turn};
use crate::settings;
use kurbo::{Arc, BezPath, Circle, Point, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// One of the four anchor scalars of a glob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    /// Start-side anchor of the `d` curve
    A,
    /// Start-side anchor of the `dp` curve
    Ap,
    /// End-side anchor of the `d` curve
    B,
    /// End-side anchor of the `dp` curve
    Bp,
}

/// One of the two free handles of a glob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleKind {
    D,
    Dp,
}

/// The editable parameters of a glob
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobParams {
    /// Handle shaping the first side
    pub d: Point,
    /// Handle shaping the second side
    pub dp: Point,
    pub a: f64,
    pub ap: f64,
    pub b: f64,
    pub bp: f64,
}

impl GlobParams {
    /// Create a parameter set with both anchors pairs at the midpoint
    pub fn new(d: Point, dp: Point) -> Self {
        Self {
            d,
            dp,
            a: 0.5,
            ap: 0.5,
            b: 0.5,
            bp: 0.5,
        }
    }

    /// Default handles for a glob between two circles: the midpoint of the
    /// centers pushed out by the larger radius on either side.
    pub fn between(c0: Circle, c1: Circle) -> Self {
        let mid = c0.center.midpoint(c1.center);
        let axis = math::unit_or(c1.center - c0.center, Vec2::new(1.0, 0.0));
        let offset = Vec2::new(-axis.y, axis.x) * c0.radius.max(c1.radius).max(0.0);
        Self::new(mid + offset, mid - offset)
    }

    pub fn anchor(&self, kind: AnchorKind) -> f64 {
        match kind {
            AnchorKind::A => self.a,
            AnchorKind::Ap => self.ap,
            AnchorKind::B => self.b,
            AnchorKind::Bp => self.bp,
        }
    }

    /// Return a copy with one anchor replaced; the value is clamped to `[0, 1]`
    pub fn with_anchor(mut self, kind: AnchorKind, value: f64) -> Self {
        let value = math::clamp(value, 0.0, 1.0);
        match kind {
            AnchorKind::A => self.a = value,
            AnchorKind::Ap => self.ap = value,
            AnchorKind::B => self.b = value,
            AnchorKind::Bp => self.bp = value,
        }
        self
    }

    pub fn handle(&self, kind: HandleKind) -> Point {
        match kind {
            HandleKind::D => self.d,
            HandleKind::Dp => self.dp,
        }
    }

    /// Return a copy with one handle moved
    pub fn with_handle(mut self, kind: HandleKind, point: Point) -> Self {
        match kind {
            HandleKind::D => self.d = point,
            HandleKind::Dp => self.dp = point,
        }
        self
    }
}

/// The full derived point set of a glob
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobPoints {
    pub c0: Point,
    pub r0: f64,
    pub c1: Point,
    pub r1: f64,
    pub d: Point,
    pub dp: Point,

    /// Tangent points of the `d` side
    pub e0: Point,
    pub e1: Point,
    /// Tangent points of the `dp` side
    pub e0p: Point,
    pub e1p: Point,

    /// Cubic control points, placed along the tangents by the anchors
    pub f0: Point,
    pub f1: Point,
    pub f0p: Point,
    pub f1p: Point,

    /// Outward unit normals at the tangent points
    pub n0: Vec2,
    pub n1: Vec2,
    pub n0p: Vec2,
    pub n1p: Vec2,

    /// Cubic equivalents of the quadratic through each handle
    pub d1: Point,
    pub d2: Point,
    pub dp1: Point,
    pub dp2: Point,
}

/// Derive the point set of a glob joining `c0` and `c1`.
///
/// Never fails: negative radii count as zero, and coincident circles or
/// handles inside a circle produce a degenerate but finite result.
pub fn derive_glob_points(c0: Circle, c1: Circle, params: &GlobParams) -> GlobPoints {
    let c0 = Circle::new(c0.center, c0.radius.max(0.0));
    let c1 = Circle::new(c1.center, c1.radius.max(0.0));
    let GlobParams {
        d,
        dp,
        a,
        ap,
        b,
        bp,
    } = *params;

    // Direction used when a handle sits exactly on a center
    let toward_c1 = math::unit_or(c1.center - c0.center, Vec2::new(1.0, 0.0));
    let toward_c0 = -toward_c1;

    let (e0, n0) = math::tangent_point(c0, d, Turn::Ccw, toward_c1);
    let (e1, n1) = math::tangent_point(c1, d, Turn::Cw, toward_c0);
    let (e0p, n0p) = math::tangent_point(c0, dp, Turn::Cw, toward_c1);
    let (e1p, n1p) = math::tangent_point(c1, dp, Turn::Ccw, toward_c0);

    let a = math::clamp(a, 0.0, 1.0);
    let ap = math::clamp(ap, 0.0, 1.0);
    let b = math::clamp(b, 0.0, 1.0);
    let bp = math::clamp(bp, 0.0, 1.0);

    const TWO_THIRDS: f64 = 2.0 / 3.0;

    GlobPoints {
        c0: c0.center,
        r0: c0.radius,
        c1: c1.center,
        r1: c1.radius,
        d,
        dp,
        e0,
        e1,
        e0p,
        e1p,
        f0: e0.lerp(d, a),
        f1: e1.lerp(d, b),
        f0p: e0p.lerp(dp, ap),
        f1p: e1p.lerp(dp, bp),
        n0,
        n1,
        n0p,
        n1p,
        d1: e0.lerp(d, TWO_THIRDS),
        d2: e1.lerp(d, TWO_THIRDS),
        dp1: e0p.lerp(dp, TWO_THIRDS),
        dp2: e1p.lerp(dp, TWO_THIRDS),
    }
}

impl GlobPoints {
    pub fn circle0(&self) -> Circle {
        Circle::new(self.c0, self.r0)
    }

    pub fn circle1(&self) -> Circle {
        Circle::new(self.c1, self.r1)
    }

    /// Closed outline of the glob: the `d` curve, around the far side of
    /// circle 1, the `dp` curve back, and around the far side of circle 0.
    pub fn outline(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.e0);
        path.curve_to(self.f0, self.f1, self.e1);
        append_far_arc(&mut path, self.circle1(), self.e1, self.e1p, self.c1 - self.c0);
        path.curve_to(self.f1p, self.f0p, self.e0p);
        append_far_arc(&mut path, self.circle0(), self.e0p, self.e0, self.c0 - self.c1);
        path.close_path();
        path
    }
}

/// Append an arc on `circle` from `from` to `to` that bulges along `away`.
fn append_far_arc(path: &mut BezPath, circle: Circle, from: Point, to: Point, away: Vec2) {
    if circle.radius <= settings::geometry::EPSILON {
        path.line_to(to);
        return;
    }

    let start = (from - circle.center).atan2();
    let end = (to - circle.center).atan2();

    // Shortest signed sweep in (-PI, PI]
    let mut sweep = (end - start).rem_euclid(TAU);
    if sweep > PI {
        sweep -= TAU;
    }

    // Take the long way round when the short sweep passes the near side
    let mid = Vec2::from_angle(start + sweep / 2.0);
    if away.hypot() > settings::geometry::EPSILON && mid.dot(away) < 0.0 {
        sweep -= TAU.copysign(sweep);
    }

    if sweep.abs() <= settings::geometry::EPSILON {
        path.line_to(to);
        return;
    }

    let arc = Arc {
        center: circle.center,
        radii: Vec2::new(circle.radius, circle.radius),
        start_angle: start,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(settings::geometry::ARC_TOLERANCE));
}
