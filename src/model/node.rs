// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Nodes: the circles globs are drawn between

use super::entity_id::EntityId;
use kurbo::{Circle, Point};
use serde::{Deserialize, Deserializer, Serialize};

/// How an unconnected node's outline ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cap {
    #[default]
    Round,
    Flat,
}

/// A circle in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: EntityId,
    pub name: String,
    pub point: Point,
    /// Always >= 0; use [`Node::with_radius`] to write it
    #[serde(deserialize_with = "deserialize_radius")]
    radius: f64,
    pub cap: Cap,
    pub locked: bool,
    pub z_index: usize,
}

impl Node {
    /// Create a node with a fresh id. Negative radii are clamped to zero.
    pub fn new(name: impl Into<String>, point: Point, radius: f64) -> Self {
        Self {
            id: EntityId::next(),
            name: name.into(),
            point,
            radius: clamp_radius(radius),
            cap: Cap::default(),
            locked: false,
            z_index: 0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.point, self.radius)
    }

    /// Return a copy moved to `point`
    pub fn with_point(mut self, point: Point) -> Self {
        self.point = point;
        self
    }

    /// Return a copy with a new radius, clamped to zero
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = clamp_radius(radius);
        self
    }
}

fn clamp_radius(radius: f64) -> f64 {
    if radius.is_nan() { 0.0 } else { radius.max(0.0) }
}

fn deserialize_radius<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_radius)
}
