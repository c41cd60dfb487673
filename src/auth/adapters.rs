//! Adapter implementations of the session directory port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::{Session, SessionToken};
use crate::auth::ports::{SessionDirectory, SessionDirectoryError, SessionDirectoryResult};

/// Thread-safe in-memory session directory for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionDirectory {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl InMemorySessionDirectory {
    /// Creates an empty session directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session under the given token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError::Provider`] when the directory lock
    /// is poisoned.
    pub fn issue(&self, token: SessionToken, session: Session) -> SessionDirectoryResult<()> {
        let mut sessions = self.sessions.write().map_err(|err| {
            SessionDirectoryError::provider(std::io::Error::other(err.to_string()))
        })?;
        sessions.insert(token, session);
        Ok(())
    }

    /// Removes the session registered under the given token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError::Provider`] when the directory lock
    /// is poisoned.
    pub fn revoke(&self, token: &SessionToken) -> SessionDirectoryResult<()> {
        let mut sessions = self.sessions.write().map_err(|err| {
            SessionDirectoryError::provider(std::io::Error::other(err.to_string()))
        })?;
        sessions.remove(token);
        Ok(())
    }
}

#[async_trait]
impl SessionDirectory for InMemorySessionDirectory {
    async fn resolve(&self, token: &SessionToken) -> SessionDirectoryResult<Option<Session>> {
        let sessions = self.sessions.read().map_err(|err| {
            SessionDirectoryError::provider(std::io::Error::other(err.to_string()))
        })?;
        Ok(sessions.get(token).cloned())
    }
}
