// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Globs: geometry and interactive editing for circle-and-glob drawings.
//!
//! A drawing is made of nodes (circles) joined by globs (smooth tangent
//! curves). [`geometry`] derives every point a glob needs from its two
//! circles and six parameters; [`editing`] turns pointer gestures into live,
//! cancellable document updates and one undoable [`editing::Command`] each;
//! [`node_list`] handles drag-to-reorder in the node list.

pub mod editing;
pub mod geometry;
pub mod model;
pub mod node_list;
pub mod settings;

use anyhow::{Context, Result};
use editing::{Command, Modifiers, SessionController, TransformVariant};
use geometry::GlobParams;
use kurbo::Point;
use model::{Document, DocumentStore, Node};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "globs=info";

/// The filter from `RUST_LOG` wins over the default as a whole
fn log_filter(from_env: Option<EnvFilter>) -> EnvFilter {
    from_env.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Run a scripted drag against a small document and print the result.
///
/// Logging is controlled through `RUST_LOG`.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::try_from_default_env().ok()))
        .init();

    let mut document = Document::new();
    let start = document.add_node(Node::new("Start", Point::new(0.0, 0.0), 10.0));
    let end = document.add_node(Node::new("End", Point::new(100.0, 0.0), 20.0));
    let params = GlobParams::between(
        document.node(start).context("start node")?.circle(),
        document.node(end).context("end node")?.circle(),
    );
    let glob = document.add_glob("Glob", start, end, params)?;
    document.select_node(end);

    let mut sessions = SessionController::new();
    let mut history: Vec<Command> = Vec::new();

    let origin = document.camera.screen_to_world(Point::new(100.0, 0.0));
    let handle = sessions.begin(&document, TransformVariant::Point { axis: None }, origin)?;
    for step in 1..=4 {
        let pointer = document
            .camera
            .screen_to_world(Point::new(100.0 + 10.0 * step as f64, 5.0 * step as f64));
        sessions.update(handle, &mut document, pointer, Modifiers::NONE)?;
    }
    let command = sessions.complete(handle, &mut history)?;
    tracing::info!("Gesture finished with {}", command.kind());

    let glob = document.glob(glob).context("glob vanished")?;
    let output = serde_json::json!({
        "command": serde_json::to_value(&command)?,
        "points": serde_json::to_value(glob.points)?,
        "outline": glob.points.outline().to_svg(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
