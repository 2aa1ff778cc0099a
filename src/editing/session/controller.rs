// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle-based front end for transform sessions.
//!
//! The interaction layer only ever talks to one `SessionController`. It
//! hands out a [`SessionHandle`] per gesture and rejects calls that break
//! the one-gesture-at-a-time rule: beginning while a gesture is active,
//! or updating, cancelling or completing a gesture that is not active.

use super::TransformSession;
use crate::editing::command::{Command, CommandSink};
use crate::editing::transform::{Modifiers, TransformVariant};
use crate::model::DocumentStore;
use kurbo::Point;
use std::fmt;
use thiserror::Error;

/// Identifies one gesture handed out by a [`SessionController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(u64);

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session {}", self.0)
    }
}

/// Misuse of the session API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{0} is still active")]
    AlreadyActive(SessionHandle),

    #[error("no session is active")]
    NoActiveSession,

    #[error("{given} is not the active session ({active})")]
    StaleHandle {
        given: SessionHandle,
        active: SessionHandle,
    },
}

/// Owner of the single active transform session
#[derive(Debug, Default)]
pub struct SessionController {
    active: Option<(SessionHandle, TransformSession)>,
    next_handle: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The session currently in progress
    pub fn session(&self) -> Option<&TransformSession> {
        self.active.as_ref().map(|(_, session)| session)
    }

    /// Start a gesture at world position `origin`
    pub fn begin<S: DocumentStore + ?Sized>(
        &mut self,
        store: &S,
        variant: TransformVariant,
        origin: Point,
    ) -> Result<SessionHandle, SessionError> {
        if let Some((active, _)) = &self.active {
            tracing::error!("Tried to begin a session while {active} is active");
            return Err(SessionError::AlreadyActive(*active));
        }

        self.next_handle += 1;
        let handle = SessionHandle(self.next_handle);
        let session = TransformSession::begin(store, variant, origin);
        self.active = Some((handle, session));
        Ok(handle)
    }

    pub fn update<S: DocumentStore + ?Sized>(
        &mut self,
        handle: SessionHandle,
        store: &mut S,
        pointer: Point,
        modifiers: Modifiers,
    ) -> Result<(), SessionError> {
        self.check(handle)?;
        if let Some((_, session)) = self.active.as_mut() {
            session.update(store, pointer, modifiers);
        }
        Ok(())
    }

    pub fn cancel<S: DocumentStore + ?Sized>(
        &mut self,
        handle: SessionHandle,
        store: &mut S,
    ) -> Result<(), SessionError> {
        let session = self.take(handle)?;
        session.cancel(store);
        Ok(())
    }

    pub fn complete(
        &mut self,
        handle: SessionHandle,
        sink: &mut dyn CommandSink,
    ) -> Result<Command, SessionError> {
        let session = self.take(handle)?;
        Ok(session.complete(sink))
    }

    fn check(&self, handle: SessionHandle) -> Result<(), SessionError> {
        match &self.active {
            None => {
                tracing::error!("{handle} used but no session is active");
                Err(SessionError::NoActiveSession)
            }
            Some((active, _)) if *active != handle => {
                tracing::error!("{handle} used while {active} is active");
                Err(SessionError::StaleHandle {
                    given: handle,
                    active: *active,
                })
            }
            Some(_) => Ok(()),
        }
    }

    fn take(&mut self, handle: SessionHandle) -> Result<TransformSession, SessionError> {
        self.check(handle)?;
        self.active
            .take()
            .map(|(_, session)| session)
            .ok_or(SessionError::NoActiveSession)
    }
}
