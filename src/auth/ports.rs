//! Port contracts for session resolution.

use crate::auth::domain::{Session, SessionToken};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session directory operations.
pub type SessionDirectoryResult<T> = Result<T, SessionDirectoryError>;

/// Contract for resolving bearer tokens to sessions.
///
/// The real authentication provider is an external collaborator; adapters
/// bridge to it. Absence of a session is expressed as `Ok(None)`, never as
/// an error.
#[async_trait]
pub trait SessionDirectory: Send + Sync {
    /// Resolves a token to its session.
    ///
    /// Returns `None` when the token is unknown or expired.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError`] when the underlying provider cannot
    /// be reached.
    async fn resolve(&self, token: &SessionToken) -> SessionDirectoryResult<Option<Session>>;
}

/// Errors returned by session directory implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionDirectoryError {
    /// Provider-layer failure.
    #[error("session provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionDirectoryError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
