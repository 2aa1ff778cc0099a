// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Screen to world conversion

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The view onto the document: a zoom factor and the world point shown at
/// the screen origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub zoom: f64,
    pub point: Point,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            point: Point::ZERO,
        }
    }
}

impl Camera {
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let zoom = if self.zoom > 0.0 { self.zoom } else { 1.0 };
        (screen.to_vec2() / zoom + self.point.to_vec2()).to_point()
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        ((world - self.point) * self.zoom).to_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_zoomed_camera() {
        let camera = Camera {
            zoom: 2.0,
            point: Point::new(10.0, -5.0),
        };
        let world = camera.screen_to_world(Point::new(40.0, 20.0));
        assert_eq!(world, Point::new(30.0, 5.0));
        assert_eq!(camera.world_to_screen(world), Point::new(40.0, 20.0));
    }
}
