// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod command;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod transform;

pub use command::{Command, CommandSink, ReorderReason};
pub use selection::Selection;
pub use session::{SessionController, SessionError, SessionHandle, TransformSession};
pub use snapshot::{NodeSnapshot, SelectionSnapshot};
pub use transform::{Axis, Modifiers, TransformVariant};
