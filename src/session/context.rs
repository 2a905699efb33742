//! Shared, explicitly injected session state.
//!
//! The API client reads the auth header from here on every request, so a
//! login or logout takes effect for all subsequent calls without rebuilding
//! the client.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::UserProfile;

use super::auth::{build_auth_header, AuthHeader};
use super::credentials::SecureString;

/// An authenticated identity: the token and the profile it belongs to.
///
/// Both halves always travel together, so a session with a token but no
/// user (or the reverse) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: SecureString,
    pub user: UserProfile,
}

/// Thread-safe session holder with a change generation.
///
/// Every adopt or clear bumps the generation. Async operations capture it
/// before awaiting a response and drop the result if it moved in between.
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionInner>>,
}

#[derive(Default)]
struct SessionInner {
    session: Option<Session>,
    generation: u64,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.inner.read().session.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().session.is_some()
    }

    /// Current change generation.
    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    /// True if nothing was adopted or cleared since `generation` was taken.
    pub fn is_current(&self, generation: u64) -> bool {
        self.inner.read().generation == generation
    }

    /// Header to attach to outbound requests; `None` when logged out.
    pub fn auth_header(&self) -> Option<AuthHeader> {
        self.inner
            .read()
            .session
            .as_ref()
            .and_then(|s| build_auth_header(&s.token))
    }

    /// Replace the session atomically. Returns the new generation.
    pub fn adopt(&self, session: Session) -> u64 {
        let mut inner = self.inner.write();
        inner.session = Some(session);
        inner.generation += 1;
        inner.generation
    }

    /// Drop the session. Returns whether one was present.
    ///
    /// Clearing an empty context leaves the generation untouched.
    pub fn clear(&self) -> bool {
        let mut inner = self.inner.write();
        let was_present = inner.session.take().is_some();
        if was_present {
            inner.generation += 1;
        }
        was_present
    }
}
